/// Pairing checks shared by the engine tests. Expects `pairing`,
/// `checked_pairing`, `multi_miller_loop` and `final_exponentiation` in scope.
#[macro_export]
macro_rules! test_pairing {
    () => {
        use $crate::bls12381::{G1, G2};
        use $crate::ff_ext::Field;

        fn off_subgroup_g1() -> G1 {
            let mut bytes = [0u8; 48];
            bytes[0] = 0xa0;
            G1::from_compressed_unchecked(&bytes).unwrap()
        }

        fn off_subgroup_g2() -> G2 {
            let mut bytes = [0u8; 96];
            bytes[0] = 0x80;
            bytes[95] = 2;
            G2::from_compressed_unchecked(&bytes).unwrap()
        }

        #[test]
        fn test_pairing_identity() {
            let g = G1::generator();
            let h = G2::generator();
            assert!(pairing(&G1::identity(), &h).is_zero());
            assert!(pairing(&g, &G2::identity()).is_zero());
            assert_eq!(checked_pairing(&G1::identity(), &h), Ok(Fq12::zero()));
            assert_eq!(checked_pairing(&g, &G2::identity()), Ok(Fq12::zero()));
            assert!(final_exponentiation(&Fq12::one()).is_one());
        }

        #[test]
        fn test_pairing_invalid_points() {
            let g = G1::generator();
            let h = G2::generator();
            assert!(pairing(&off_subgroup_g1(), &h).is_zero());
            assert!(pairing(&g, &off_subgroup_g2()).is_zero());
            assert_eq!(
                checked_pairing(&off_subgroup_g1(), &h),
                Err(Error::InvalidSubgroup)
            );
            assert_eq!(
                checked_pairing(&g, &off_subgroup_g2()),
                Err(Error::InvalidSubgroup)
            );
        }

        #[test]
        fn test_non_degeneracy() {
            let g = G1::generator();
            let h = G2::generator();
            let f = checked_pairing(&g, &h).unwrap();
            assert_eq!(f, pairing(&g, &h));
            assert_eq!(f, miller_loop(&g, &h));

            let e = final_exponentiation(&f);
            assert!(!e.is_one());
            assert!(!e.is_zero());
            // the result lives in the order-r subgroup of Fq12*
            assert!(e.pow(&ORDER).is_one());
        }

        #[test]
        fn test_inverse() {
            let g = G1::generator();
            let h = G2::generator();

            let f = pairing(&g, &h) * pairing(&-g.clone(), &h);
            assert!(final_exponentiation(&f).is_one());

            let f = multi_miller_loop(&[(g.clone(), h.clone()), (g, -h)]);
            assert!(final_exponentiation(&f).is_one());
        }

        #[test]
        fn test_bilinearity() {
            let g = G1::generator();
            let h = G2::generator();

            let u0 = final_exponentiation(&pairing(&g.scalar_mul(5u64), &h.scalar_mul(7u64)));
            let u1 = final_exponentiation(&pairing(&g, &h.scalar_mul(35u64)));
            let u2 = final_exponentiation(&pairing(&g.scalar_mul(35u64), &h));
            assert_eq!(u0, u1);
            assert_eq!(u1, u2);

            let e = final_exponentiation(&pairing(&g, &h));
            assert_eq!(u0, e.pow(&num_bigint::BigUint::from(35u64)));
        }

        #[test]
        fn test_multi_miller_loop() {
            let g = G1::generator();
            let h = G2::generator();
            assert!(multi_miller_loop(&[]).is_one());

            let terms = [(g.clone(), h.clone()), (g.double(), h.clone())];
            assert_eq!(
                multi_miller_loop(&terms),
                pairing(&g, &h) * pairing(&g.double(), &h)
            );
        }

        #[test]
        fn test_line_functions() {
            let g = G1::generator();
            let h = G2::generator();

            // adding a point to itself uses the tangent
            assert_eq!(add_eval(&h, &h, &g), double_eval(&h, &g));

            // the line through h and -h is the vertical x = h.x
            let wide = h.untwist();
            let vertical = Fq12::from_fq(g.x().clone()) - &wide.x().clone();
            assert_eq!(add_eval(&h, &-h.clone(), &g), vertical);

            // lines are not evaluated at the point at infinity
            assert!(double_eval(&h, &G1::identity()).is_one());
            assert!(add_eval(&h, &h.double(), &G1::identity()).is_one());
        }
    };
}

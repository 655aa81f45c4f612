use super::fq::Fq;
use super::fq2::Fq2;
use super::fq6::Fq6;
use crate::ff_ext::quadratic::{QuadExtField, QuadExtFieldArith};
use crate::Error;

crate::impl_binops_additive!(Fq12, Fq12);
crate::impl_binops_multiplicative!(Fq12, Fq12);
crate::impl_binops_calls!(Fq12);
crate::impl_sum_prod!(Fq12);

/// Fq6[w] / (w² - v), the target field of the pairing.
pub type Fq12 = QuadExtField<Fq6>;

impl QuadExtFieldArith for Fq12 {
    type Base = Fq6;

    fn try_mul_by_nonresidue(_: &Fq12) -> Result<Fq12, Error> {
        Err(Error::UndefinedOperation(
            "Fq12 is the top of the tower and has no non-residue",
        ))
    }
}

impl Fq12 {
    /// Embeds a base field element as a constant.
    pub fn from_fq(v: Fq) -> Self {
        Fq12::from_base(Fq6::from_base(Fq2::from_base(v)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ff_ext::Field;
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    crate::field_testing_suite!(Fq12, "field_arithmetic");
    crate::field_testing_suite!(Fq12, "pow");

    #[test]
    fn test_w_squared() {
        let w = Fq12::new(Fq6::zero(), Fq6::one());
        let v = Fq12::from_base(Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()));
        assert_eq!(w.square(), v);
    }

    #[test]
    fn test_fq12_mul_by_nonresidue_is_undefined() {
        let mut rng = XorShiftRng::from_seed(crate::tests::SEED);
        let a = Fq12::random(&mut rng);
        assert!(matches!(
            a.try_mul_by_nonresidue(),
            Err(Error::UndefinedOperation(_))
        ));
    }

    #[test]
    fn test_from_fq() {
        let a = Fq12::from_fq(Fq::from_u64(3));
        let b = Fq12::from_fq(Fq::from_u64(5));
        assert_eq!(a * b, Fq12::from_u64(15));
        assert!(Fq12::from_fq(Fq::one()).is_one());
    }
}

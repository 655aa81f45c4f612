use lazy_static::lazy_static;

use super::fq::Fq;
use super::fq12::Fq12;
use super::fq2::Fq2;
use super::fq6::Fq6;
use crate::ec::{CurveField, Point};
use crate::ff_ext::{ExtField, Field};
use crate::{Error, Result};

crate::impl_binops_additive!(G2, G2);
crate::impl_binops_calls!(G2);
crate::impl_binops_additive!(G12, G12);
crate::impl_binops_calls!(G12);

/// A point of the sextic twist E'(Fq2): y² = x³ + 4(u + 1).
pub type G2 = Point<Fq2>;

/// A point of E(Fq12): y² = x³ + 4, where G1 and untwisted G2 points meet.
pub type G12 = Point<Fq12>;

const GENERATOR_X_C0: [u64; 6] = [
    0xd480_56c8_c121_bdb8,
    0x0bac_0326_a805_bbef,
    0xb451_0b64_7ae3_d177,
    0xc6e4_7ad4_fa40_3b02,
    0x2608_0527_2dc5_1051,
    0x024a_a2b2_f08f_0a91,
];

const GENERATOR_X_C1: [u64; 6] = [
    0xe5ac_7d05_5d04_2b7e,
    0x334c_f112_1394_5d57,
    0xb5da_61bb_dc7f_5049,
    0x596b_d0d0_9920_b61a,
    0x7dac_d3a0_8827_4f65,
    0x13e0_2b60_5271_9f60,
];

const GENERATOR_Y_C0: [u64; 6] = [
    0xe193_5486_08b8_2801,
    0x923a_c9cc_3bac_a289,
    0x6d42_9a69_5160_d12c,
    0xadfd_9baa_8cbd_d3a7,
    0x8cc9_cdc6_da2e_351a,
    0x0ce5_d527_727d_6e11,
];

const GENERATOR_Y_C1: [u64; 6] = [
    0xaaa9_075f_f05f_79be,
    0x3f37_0d27_5cec_1da1,
    0x2674_92ab_572e_99ab,
    0xcb3e_287e_85a7_63af,
    0x32ac_d2b0_2bc2_8b99,
    0x0606_c4a0_2ea7_34cc,
];

lazy_static! {
    static ref GENERATOR: G2 = G2::new_unchecked(
        Fq2::new(Fq::from_raw(GENERATOR_X_C0), Fq::from_raw(GENERATOR_X_C1)),
        Fq2::new(Fq::from_raw(GENERATOR_Y_C0), Fq::from_raw(GENERATOR_Y_C1)),
    );

    // w² = v and w³ = v·w
    static ref W2_INV: Fq12 = Fq12::new(Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()), Fq6::zero())
        .invert()
        .expect("w² is a unit");
    static ref W3_INV: Fq12 = Fq12::new(Fq6::zero(), Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero()))
        .invert()
        .expect("w³ is a unit");
}

impl CurveField for Fq2 {
    fn b() -> Self {
        Fq2::from_u64(4).mul_by_nonresidue()
    }
}

impl CurveField for Fq12 {
    fn b() -> Self {
        Fq12::from_fq(Fq::from_u64(4))
    }
}

impl G2 {
    /// The fixed generator of the order-r subgroup of the twist.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Maps a twist point onto E(Fq12) with (x, y) -> (x / w², y / w³).
    pub fn untwist(&self) -> G12 {
        if self.infinity {
            return G12::identity();
        }
        let lift = |c: &Fq2| Fq12::from_base(Fq6::from_base(c.clone()));
        G12::new_unchecked(lift(&self.x) * &*W2_INV, lift(&self.y) * &*W3_INV)
    }

    /// Serializes this element into compressed form: x.c1 then x.c0, both
    /// big-endian, with the flags in the three most significant bits.
    pub fn to_compressed(&self) -> Result<[u8; 96]> {
        if !self.is_valid() {
            return Err(Error::InvalidSubgroup);
        }

        let mut res = [0u8; 96];
        if !self.infinity {
            res[0..48].copy_from_slice(&self.x.c1.to_bytes()[..]);
            res[48..96].copy_from_slice(&self.x.c0.to_bytes()[..]);
        }

        // This point is in compressed form, so we set the most significant bit.
        res[0] |= 1u8 << 7;

        if self.infinity {
            // Is this point at infinity? If so, set the second-most significant bit.
            res[0] |= 1u8 << 6;
        } else if self.y.lexicographically_largest() {
            // Is the y-coordinate the lexicographically largest of the two associated with the
            // x-coordinate? If so, set the third-most significant bit.
            res[0] |= 1u8 << 5;
        }

        Ok(res)
    }

    /// Attempts to deserialize a compressed element, checking that it lies in
    /// the prime-order subgroup.
    pub fn from_compressed(bytes: &[u8; 96]) -> Result<Self> {
        let p = Self::from_compressed_unchecked(bytes)?;
        if p.is_in_subgroup() {
            Ok(p)
        } else {
            Err(Error::InvalidSubgroup)
        }
    }

    /// Attempts to deserialize a compressed element, not checking if the
    /// element is in the correct subgroup.
    pub fn from_compressed_unchecked(bytes: &[u8; 96]) -> Result<Self> {
        // Obtain the three flags from the start of the byte sequence
        let compression_flag_set = (bytes[0] >> 7) & 1 == 1;
        let infinity_flag_set = (bytes[0] >> 6) & 1 == 1;
        let sort_flag_set = (bytes[0] >> 5) & 1 == 1;

        if !compression_flag_set {
            return Err(Error::MalformedEncoding("compression flag is not set"));
        }

        let mut xc1 = [0u8; 48];
        let mut xc0 = [0u8; 48];
        xc1.copy_from_slice(&bytes[0..48]);
        xc0.copy_from_slice(&bytes[48..96]);
        // Mask away the flag bits
        xc1[0] &= 0b0001_1111;

        if infinity_flag_set {
            return if !sort_flag_set && xc1.iter().chain(xc0.iter()).all(|b| *b == 0) {
                Ok(Self::identity())
            } else {
                Err(Error::MalformedEncoding("non-canonical point at infinity"))
            };
        }

        let out_of_range = Error::MalformedEncoding("x-coordinate is not smaller than the modulus");
        let x = Fq2::new(
            Fq::from_bytes(&xc0).ok_or_else(|| out_of_range.clone())?,
            Fq::from_bytes(&xc1).ok_or(out_of_range)?,
        );

        // Recover a y-coordinate given x by y = sqrt(x^3 + 4(u + 1))
        let y = (x.square() * &x + &Fq2::b())
            .sqrt()
            .ok_or(Error::NoSquareRoot)?;

        // Switch to the correct y-coordinate if necessary.
        let y = if y.lexicographically_largest() != sort_flag_set {
            -y
        } else {
            y
        };

        Ok(Self::new_unchecked(x, y))
    }

    /// Lowercase hex of [`G2::to_compressed`], 192 characters.
    pub fn to_compressed_hex(&self) -> Result<String> {
        self.to_compressed().map(hex::encode)
    }

    /// Parses 192 hex characters, optionally prefixed with `0x`.
    pub fn from_compressed_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 96];
        super::decode_hex(s, &mut bytes)?;
        Self::from_compressed(&bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::SeedableRng;
    use rand_xorshift::XorShiftRng;

    crate::curve_testing_suite!(G2);

    const GENERATOR_HEX: &str = "93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8";

    #[test]
    fn test_generator_encoding() {
        let h = G2::generator();
        assert!(h.is_on_curve());
        assert_eq!(h.to_compressed_hex().unwrap(), GENERATOR_HEX);
        assert_eq!(G2::from_compressed_hex(GENERATOR_HEX).unwrap(), h);
        assert_eq!(
            G2::from_compressed_hex(&format!("0x{}", GENERATOR_HEX)).unwrap(),
            h
        );
        assert!(!h.y.lexicographically_largest());

        let neg = (-h.clone()).to_compressed_hex().unwrap();
        assert_eq!(&neg[..2], "b3");
        assert_eq!(&neg[2..], &GENERATOR_HEX[2..]);
        assert_eq!(G2::from_compressed_hex(&neg).unwrap(), -h);
    }

    #[test]
    fn test_double_generator_encoding() {
        assert_eq!(
            G2::generator().double().to_compressed_hex().unwrap(),
            "aa4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c335771638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053"
        );
    }

    #[test]
    fn test_identity_encoding() {
        let encoded = G2::identity().to_compressed_hex().unwrap();
        assert_eq!(encoded, format!("c0{}", "0".repeat(190)));
        assert!(G2::from_compressed_hex(&encoded).unwrap().is_identity());

        let bad = format!("c0{}1", "0".repeat(189));
        assert!(matches!(
            G2::from_compressed_hex(&bad),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_malformed_encodings() {
        assert!(matches!(
            G2::from_compressed_hex(&GENERATOR_HEX[..96]),
            Err(Error::MalformedEncoding(_))
        ));
        assert!(matches!(
            G2::from_compressed_hex(&format!("13{}", &GENERATOR_HEX[2..])),
            Err(Error::MalformedEncoding(_))
        ));
        assert!(matches!(
            G2::from_compressed_hex(&format!("{}g", &GENERATOR_HEX[..191])),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_off_curve_and_off_subgroup() {
        // x = 0: 4(u + 1) is not a square
        let hex = format!("80{}", "0".repeat(190));
        assert_eq!(G2::from_compressed_hex(&hex), Err(Error::NoSquareRoot));

        // x = 2 lies on the twist but outside the subgroup
        let hex = format!("80{}02", "0".repeat(188));
        assert_eq!(G2::from_compressed_hex(&hex), Err(Error::InvalidSubgroup));

        let mut bytes = [0u8; 96];
        hex::decode_to_slice(&hex, &mut bytes).unwrap();
        let p = G2::from_compressed_unchecked(&bytes).unwrap();
        assert!(p.is_on_curve());
        assert!(!p.is_valid());
        assert_eq!(p.to_compressed(), Err(Error::InvalidSubgroup));
    }

    #[test]
    fn test_untwist() {
        assert!(G2::identity().untwist().is_identity());

        let h = G2::generator();
        let wide = h.untwist();
        assert!(wide.is_on_curve());
        assert_eq!(h.double().untwist(), wide.double());
        assert_eq!(h.scalar_mul(3u64).untwist(), wide.clone() + &wide.double());
        assert_eq!((-h).untwist(), -wide);

        let mut rng = XorShiftRng::from_seed(crate::tests::SEED);
        let p = crate::tests::curve::random_point(&G2::generator(), &mut rng);
        assert!(p.untwist().is_on_curve());
    }
}

use lazy_static::lazy_static;

use super::fq::Fq;
use crate::ec::{CurveField, Point};
use crate::ff_ext::Field;
use crate::{Error, Result};

crate::impl_binops_additive!(G1, G1);
crate::impl_binops_calls!(G1);

/// A point of E(Fq): y² = x³ + 4.
pub type G1 = Point<Fq>;

const GENERATOR_X: [u64; 6] = [
    0xfb3a_f00a_db22_c6bb,
    0x6c55_e83f_f97a_1aef,
    0xa14e_3a3f_171b_ac58,
    0xc368_8c4f_9774_b905,
    0x2695_638c_4fa9_ac0f,
    0x17f1_d3a7_3197_d794,
];

const GENERATOR_Y: [u64; 6] = [
    0x0caa_2329_46c5_e7e1,
    0xd03c_c744_a288_8ae4,
    0x00db_18cb_2c04_b3ed,
    0xfcf5_e095_d5d0_0af6,
    0xa09e_30ed_741d_8ae4,
    0x08b3_f481_e3aa_a0f1,
];

lazy_static! {
    static ref GENERATOR: G1 =
        G1::new_unchecked(Fq::from_raw(GENERATOR_X), Fq::from_raw(GENERATOR_Y));
}

impl CurveField for Fq {
    fn b() -> Self {
        Fq::from_u64(4)
    }
}

impl G1 {
    /// The fixed generator of the order-r subgroup.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Serializes this element into compressed form: the big-endian
    /// x-coordinate with the compression, infinity and sort flags in the
    /// three most significant bits.
    pub fn to_compressed(&self) -> Result<[u8; 48]> {
        if !self.is_valid() {
            return Err(Error::InvalidSubgroup);
        }

        let mut res = if self.infinity {
            [0u8; 48]
        } else {
            self.x.to_bytes()
        };

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
    pub fn from_compressed(bytes: &[u8; 48]) -> Result<Self> {
        // We already know the point is on the curve because this is established
        // by the y-coordinate recovery procedure in from_compressed_unchecked().
        let p = Self::from_compressed_unchecked(bytes)?;
        if p.is_in_subgroup() {
            Ok(p)
        } else {
            Err(Error::InvalidSubgroup)
        }
    }

    /// Attempts to deserialize a compressed element, not checking if the
    /// element is in the correct subgroup.
    pub fn from_compressed_unchecked(bytes: &[u8; 48]) -> Result<Self> {
        // Obtain the three flags from the start of the byte sequence
        let compression_flag_set = (bytes[0] >> 7) & 1 == 1;
        let infinity_flag_set = (bytes[0] >> 6) & 1 == 1;
        let sort_flag_set = (bytes[0] >> 5) & 1 == 1;

        if !compression_flag_set {
            return Err(Error::MalformedEncoding("compression flag is not set"));
        }

        let mut tmp = *bytes;
        // Mask away the flag bits
        tmp[0] &= 0b0001_1111;

        if infinity_flag_set {
            // The x-coordinate should be zero and the sort bit not set.
            return if !sort_flag_set && tmp.iter().all(|b| *b == 0) {
                Ok(Self::identity())
            } else {
                Err(Error::MalformedEncoding("non-canonical point at infinity"))
            };
        }

        let x = Fq::from_bytes(&tmp).ok_or(Error::MalformedEncoding(
            "x-coordinate is not smaller than the modulus",
        ))?;

        // Recover a y-coordinate given x by y = sqrt(x^3 + 4)
        let y = (x.square() * &x + &Fq::b())
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

    /// Lowercase hex of [`G1::to_compressed`], 96 characters.
    pub fn to_compressed_hex(&self) -> Result<String> {
        self.to_compressed().map(hex::encode)
    }

    /// Parses 96 hex characters, optionally prefixed with `0x`.
    pub fn from_compressed_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 48];
        super::decode_hex(s, &mut bytes)?;
        Self::from_compressed(&bytes)
    }
}

mod engine;
mod fq;
mod fq12;
mod fq2;
mod fq6;
mod g1;
mod g2;

pub use engine::*;
pub use fq::*;
pub use fq12::*;
pub use fq2::*;
pub use fq6::*;
pub use g1::*;
pub use g2::*;

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// |x|, the absolute value of the BLS parameter driving the Miller loop.
pub const BLS_X: u64 = 0xd201_0000_0001_0000;

/// p, little-endian 64-bit limbs.
const MODULUS_LIMBS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// r, little-endian 64-bit limbs.
const ORDER_LIMBS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

lazy_static! {
    /// The 381-bit base field modulus.
    pub static ref MODULUS: BigUint = from_limbs(&MODULUS_LIMBS);
    /// The 255-bit order of the G1 and G2 subgroups.
    pub static ref ORDER: BigUint = from_limbs(&ORDER_LIMBS);
}

pub(crate) fn from_limbs(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| (acc << 64usize) + BigUint::from(*limb))
}

/// Decodes exactly `out.len()` bytes of hex, with an optional `0x` prefix.
pub(crate) fn decode_hex(s: &str, out: &mut [u8]) -> Result<()> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.len() != 2 * out.len() {
        return Err(Error::MalformedEncoding("unexpected encoding length"));
    }
    hex::decode_to_slice(s, out).map_err(|_| Error::MalformedEncoding("invalid hex character"))
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::Num;

    #[test]
    fn test_constants() {
        assert_eq!(
            *MODULUS,
            BigUint::from_str_radix(
                "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
                16
            )
            .unwrap()
        );
        assert_eq!(
            *ORDER,
            BigUint::from_str_radix(
                "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
                16
            )
            .unwrap()
        );
        assert_eq!(MODULUS.bits(), 381);
        assert_eq!(ORDER.bits(), 255);
        assert_eq!(64 - BLS_X.leading_zeros(), 64);
    }
}

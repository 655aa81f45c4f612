//! BLS12-381 over arbitrary-precision integers: the Fq/Fq2/Fq6/Fq12 tower,
//! the G1 and G2 groups, a Tate pairing computed with Miller's algorithm,
//! point compression and BLS signatures.

#[macro_use]
mod macros;
mod error;

pub mod bls12381;
pub mod ec;
pub mod ff_ext;
pub mod multicore;
pub mod signature;

#[cfg(feature = "derive_serde")]
pub mod serde;

#[cfg(test)]
pub mod tests;

pub use bls12381::{Fq, Fq12, Fq2, Fq6, G1, G12, G2};
pub use error::{Error, Result};
pub use signature::{
    aggregate_elements, aggregate_public_keys, aggregate_signatures, derive_public_key, sign,
    verify, verify_batch, verify_distinct, GroupElement,
};

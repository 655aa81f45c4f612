pub mod cubic;
pub mod quadratic;

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use rand_core::RngCore;

use crate::Error;

/// Arithmetic shared by every level of the tower.
///
/// Generic code only relies on the `Self op &Self` forms; the concrete types
/// get the remaining operator combinations from the crate macros.
pub trait Field:
    Sized
    + Clone
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    fn from_u64(v: u64) -> Self;

    /// Samples a uniformly distributed element.
    fn random(rng: impl RngCore) -> Self;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Multiplication by the non-residue used to build the next extension on
    /// top of this field. Fails at the top of the tower.
    fn try_mul_by_nonresidue(&self) -> Result<Self, Error>;

    fn square(&self) -> Self {
        self.clone() * self
    }

    fn double(&self) -> Self {
        self.clone() + self
    }

    /// Square-and-multiply, scanning `exp` from the least significant bit.
    fn pow(&self, exp: &BigUint) -> Self {
        let bits = exp.bits();
        let limbs = exp.to_u64_digits();
        let mut acc = Self::one();
        let mut base = self.clone();
        for i in 0..bits {
            if (limbs[(i / 64) as usize] >> (i % 64)) & 1 == 1 {
                acc = acc * &base;
            }
            if i + 1 < bits {
                base = base.square();
            }
        }
        acc
    }
}

/// A field that sits below another level of the tower.
pub trait ExtField: Field {
    fn mul_by_nonresidue(&self) -> Self;
}

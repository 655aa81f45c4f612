use lazy_static::lazy_static;
use num_bigint::BigUint;

use super::fq::Fq;
use super::MODULUS;
use crate::ff_ext::quadratic::{sqrt_algo9, QuadExtField, QuadExtFieldArith};
use crate::ff_ext::{ExtField, Field};
use crate::Error;

crate::impl_binops_additive!(Fq2, Fq2);
crate::impl_binops_multiplicative!(Fq2, Fq2);
crate::impl_binops_calls!(Fq2);
crate::impl_sum_prod!(Fq2);

/// Fq[u] / (u² + 1)
pub type Fq2 = QuadExtField<Fq>;

lazy_static! {
    static ref Q_MINUS_3_OVER_4: BigUint = (&*MODULUS - 3u32) >> 2usize;
    static ref Q_MINUS_1_OVER_2: BigUint = (&*MODULUS - 1u32) >> 1usize;
}

impl QuadExtFieldArith for Fq2 {
    type Base = Fq;

    fn try_mul_by_nonresidue(el: &Fq2) -> Result<Fq2, Error> {
        Ok(el.mul_by_nonresidue())
    }
}

/// Multiplication by u + 1, the cubic non-residue Fq6 is built with.
impl ExtField for Fq2 {
    fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c0.clone() - &self.c1,
            c1: self.c0.clone() + &self.c1,
        }
    }
}

impl Fq2 {
    pub fn sqrt(&self) -> Option<Self> {
        sqrt_algo9(self, &Q_MINUS_3_OVER_4, &Q_MINUS_1_OVER_2)
    }

    /// Sign of the element as used by point compression: the imaginary part
    /// decides unless it is zero.
    pub fn lexicographically_largest(&self) -> bool {
        if self.c1.is_zero() {
            self.c0.lexicographically_largest()
        } else {
            self.c1.lexicographically_largest()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    crate::field_testing_suite!(Fq2, "field_arithmetic");
    crate::field_testing_suite!(Fq2, "pow");
    crate::field_testing_suite!(Fq2, "sqrt");
    crate::field_testing_suite!(Fq2, "nonresidue", Fq2::new(Fq::one(), Fq::one()));

    #[test]
    fn test_fq2_basics() {
        let u = Fq2::new(Fq::zero(), Fq::one());
        assert_eq!(u.square(), -Fq2::one());
        assert_eq!(
            Fq2::new(Fq::from_u64(3), Fq::from_u64(4)).norm(),
            Fq::from_u64(25)
        );
        assert_eq!(
            Fq2::new(Fq::from_u64(3), Fq::from_u64(4)).conjugate(),
            Fq2::new(Fq::from_u64(3), -Fq::from_u64(4))
        );
        assert!(Fq2::zero().invert().is_none());
    }

    #[test]
    fn test_fq2_sqrt_edge_cases() {
        assert_eq!(Fq2::zero().sqrt(), Some(Fq2::zero()));

        // -1 is a square in Fq2 even though it is not one in Fq
        let root = (-Fq2::one()).sqrt().unwrap();
        assert_eq!(root.square(), -Fq2::one());

        // the non-residue defining Fq6 has no root
        assert_eq!(Fq2::new(Fq::one(), Fq::one()).sqrt(), None);
        // nor does the G2 curve constant 4(u + 1)
        assert_eq!(Fq2::new(Fq::from_u64(4), Fq::from_u64(4)).sqrt(), None);
    }

    #[test]
    fn test_fq2_lexicographically_largest() {
        let big = -Fq::one();
        assert!(Fq2::new(big.clone(), Fq::zero()).lexicographically_largest());
        assert!(!Fq2::new(big.clone(), Fq::one()).lexicographically_largest());
        assert!(Fq2::new(Fq::zero(), big).lexicographically_largest());
        assert!(!Fq2::zero().lexicographically_largest());
    }
}

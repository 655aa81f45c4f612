use core::ops::{Add, Mul, Neg, Sub};

use super::{ExtField, Field};
use crate::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CubicExtField<F> {
    pub(crate) c0: F,
    pub(crate) c1: F,
    pub(crate) c2: F,
}

impl<F: Field> CubicExtField<F> {
    #[inline]
    pub const fn new(c0: F, c1: F, c2: F) -> Self {
        Self { c0, c1, c2 }
    }

    /// Embeds a base field element as the constant coefficient.
    #[inline]
    pub fn from_base(c0: F) -> Self {
        Self {
            c0,
            c1: F::zero(),
            c2: F::zero(),
        }
    }

    #[inline]
    pub fn c0(&self) -> &F {
        &self.c0
    }

    #[inline]
    pub fn c1(&self) -> &F {
        &self.c1
    }

    #[inline]
    pub fn c2(&self) -> &F {
        &self.c2
    }
}

impl<'b, F: Field> Add<&'b CubicExtField<F>> for CubicExtField<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &'b Self) -> Self {
        Self {
            c0: self.c0 + &rhs.c0,
            c1: self.c1 + &rhs.c1,
            c2: self.c2 + &rhs.c2,
        }
    }
}

impl<'b, F: Field> Sub<&'b CubicExtField<F>> for CubicExtField<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &'b Self) -> Self {
        Self {
            c0: self.c0 - &rhs.c0,
            c1: self.c1 - &rhs.c1,
            c2: self.c2 - &rhs.c2,
        }
    }
}

impl<F: Field> Neg for CubicExtField<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl<'b, F: ExtField> Mul<&'b CubicExtField<F>> for CubicExtField<F> {
    type Output = Self;

    fn mul(self, rhs: &'b Self) -> Self {
        let a_a = self.c0.clone() * &rhs.c0;
        let b_b = self.c1.clone() * &rhs.c1;
        let c_c = self.c2.clone() * &rhs.c2;

        let t1 = (rhs.c1.clone() + &rhs.c2) * &(self.c1.clone() + &self.c2)
            - &(c_c.clone() + &b_b);
        let t1 = a_a.clone() + &t1.mul_by_nonresidue();

        let t3 = (rhs.c0.clone() + &rhs.c2) * &(self.c0.clone() + &self.c2)
            - &(a_a.clone() - &b_b + &c_c);

        let t2 = (rhs.c0.clone() + &rhs.c1) * &(self.c0 + &self.c1) - &(a_a + &b_b);
        let t2 = t2 + &c_c.mul_by_nonresidue();

        Self {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }
}

/// Multiplication by `v`, the root adjoined by this extension.
impl<F: ExtField> ExtField for CubicExtField<F> {
    fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0.clone(),
            c2: self.c1.clone(),
        }
    }
}

impl<F: ExtField> Field for CubicExtField<F> {
    fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    fn one() -> Self {
        Self::new(F::one(), F::zero(), F::zero())
    }

    fn from_u64(v: u64) -> Self {
        Self::from_base(F::from_u64(v))
    }

    fn random(mut rng: impl rand_core::RngCore) -> Self {
        Self::new(
            F::random(&mut rng),
            F::random(&mut rng),
            F::random(&mut rng),
        )
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn invert(&self) -> Option<Self> {
        let t0 = self.c0.square() - &(self.c1.clone() * &self.c2).mul_by_nonresidue();
        let t1 = self.c2.square().mul_by_nonresidue() - &(self.c0.clone() * &self.c1);
        let t2 = self.c1.square() - &(self.c0.clone() * &self.c2);

        let norm = self.c0.clone() * &t0
            + &(self.c2.clone() * &t1 + &(self.c1.clone() * &t2)).mul_by_nonresidue();

        norm.invert().map(|t| Self {
            c0: t0 * &t,
            c1: t1 * &t,
            c2: t2 * &t,
        })
    }

    fn try_mul_by_nonresidue(&self) -> Result<Self, Error> {
        Ok(self.mul_by_nonresidue())
    }

    fn square(&self) -> Self {
        let s0 = self.c0.square();
        let s1 = (self.c0.clone() * &self.c1).double();
        let s2 = (self.c0.clone() - &self.c1 + &self.c2).square();
        let s3 = (self.c1.clone() * &self.c2).double();
        let s4 = self.c2.square();

        Self {
            c0: s3.mul_by_nonresidue() + &s0,
            c1: s4.mul_by_nonresidue() + &s1,
            c2: s1 + &s2 + &s3 - &s0 - &s4,
        }
    }
}

use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;

use super::{ExtField, Field};
use crate::Error;

/// Per-instance behaviour of a quadratic extension that the generic code can
/// not derive from its base field.
pub trait QuadExtFieldArith {
    type Base: ExtField;

    fn try_mul_by_nonresidue(
        el: &QuadExtField<Self::Base>,
    ) -> Result<QuadExtField<Self::Base>, Error>;
}

// Algorithm 9 of https://eprint.iacr.org/2012/685.pdf
//
// The Frobenius map of a quadratic extension over a prime field is the
// conjugation, which is what `a0` is computed with below.
pub fn sqrt_algo9<F: ExtField>(
    e: &QuadExtField<F>,
    q_minus_3_over_4: &BigUint,
    q_minus_1_over_2: &BigUint,
) -> Option<QuadExtField<F>>
where
    QuadExtField<F>: Field,
{
    if e.is_zero() {
        return Some(QuadExtField::zero());
    }

    let a1 = e.pow(q_minus_3_over_4);
    let alpha = a1.square() * e;
    let a0 = alpha.conjugate() * &alpha;

    let neg1 = -QuadExtField::<F>::one();
    if a0 == neg1 {
        return None;
    }

    let x0 = a1 * e;
    let root = if alpha == neg1 {
        x0 * &QuadExtField::new(F::zero(), F::one())
    } else {
        (alpha + &QuadExtField::<F>::one()).pow(q_minus_1_over_2) * &x0
    };

    (root.square() == *e).then_some(root)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuadExtField<F> {
    pub(crate) c0: F,
    pub(crate) c1: F,
}

impl<F: Field> QuadExtField<F> {
    #[inline]
    pub const fn new(c0: F, c1: F) -> Self {
        Self { c0, c1 }
    }

    /// Embeds a base field element as the constant coefficient.
    #[inline]
    pub fn from_base(c0: F) -> Self {
        Self { c0, c1: F::zero() }
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
    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0.clone(),
            c1: -self.c1.clone(),
        }
    }
}

impl<F: ExtField> QuadExtField<F> {
    pub fn norm(&self) -> F {
        self.c0.square() - &self.c1.square().mul_by_nonresidue()
    }
}

impl<'b, F: Field> Add<&'b QuadExtField<F>> for QuadExtField<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &'b Self) -> Self {
        Self {
            c0: self.c0 + &rhs.c0,
            c1: self.c1 + &rhs.c1,
        }
    }
}

impl<'b, F: Field> Sub<&'b QuadExtField<F>> for QuadExtField<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &'b Self) -> Self {
        Self {
            c0: self.c0 - &rhs.c0,
            c1: self.c1 - &rhs.c1,
        }
    }
}

impl<F: Field> Neg for QuadExtField<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
        }
    }
}

impl<'b, F: ExtField> Mul<&'b QuadExtField<F>> for QuadExtField<F> {
    type Output = Self;

    // Karatsuba: (a0 + a1·X)(b0 + b1·X) with X² the base non-residue.
    fn mul(self, rhs: &'b Self) -> Self {
        let v0 = self.c0.clone() * &rhs.c0;
        let v1 = self.c1.clone() * &rhs.c1;
        let c1 = (self.c0 + &self.c1) * &(rhs.c0.clone() + &rhs.c1) - &(v0.clone() + &v1);
        Self {
            c0: v0 + &v1.mul_by_nonresidue(),
            c1,
        }
    }
}

impl<F: ExtField> Field for QuadExtField<F>
where
    QuadExtField<F>: QuadExtFieldArith<Base = F>,
{
    fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    fn one() -> Self {
        Self::new(F::one(), F::zero())
    }

    fn from_u64(v: u64) -> Self {
        Self::from_base(F::from_u64(v))
    }

    fn random(mut rng: impl rand_core::RngCore) -> Self {
        Self::new(F::random(&mut rng), F::random(&mut rng))
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn invert(&self) -> Option<Self> {
        self.norm().invert().map(|t| Self {
            c0: self.c0.clone() * &t,
            c1: -(self.c1.clone() * &t),
        })
    }

    fn try_mul_by_nonresidue(&self) -> Result<Self, Error> {
        <Self as QuadExtFieldArith>::try_mul_by_nonresidue(self)
    }

    fn square(&self) -> Self {
        let ab = self.c0.clone() * &self.c1;
        let c0 = (self.c1.mul_by_nonresidue() + &self.c0) * &(self.c0.clone() + &self.c1)
            - &ab
            - &ab.mul_by_nonresidue();
        Self { c0, c1: ab.double() }
    }
}

//! Affine short Weierstrass points `y² = x³ + b` over any level of the tower.

use core::iter::Sum;
use core::ops::{Add, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::bls12381::ORDER;
use crate::ff_ext::Field;

/// A field that carries a copy of the curve.
pub trait CurveField: Field {
    /// The constant term of the curve equation over this field.
    fn b() -> Self;
}

#[derive(Clone, Debug)]
pub struct Point<F> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) infinity: bool,
}

impl<F: CurveField> Point<F> {
    /// The point at infinity.
    pub fn identity() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
            infinity: true,
        }
    }

    /// Builds a point without checking the curve equation.
    pub fn new_unchecked(x: F, y: F) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Builds a point, `None` if `(x, y)` is not on the curve.
    pub fn from_xy(x: F, y: F) -> Option<Self> {
        let p = Self::new_unchecked(x, y);
        p.is_on_curve().then_some(p)
    }

    pub fn x(&self) -> &F {
        &self.x
    }

    pub fn y(&self) -> &F {
        &self.y
    }

    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// The point at infinity is not considered to be on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return false;
        }
        self.y.square() == self.x.square() * &self.x + &F::b()
    }

    /// Whether `r·P` is the point at infinity.
    pub fn is_in_subgroup(&self) -> bool {
        self.scalar_mul(BigInt::from(ORDER.clone())).is_identity()
    }

    /// The point at infinity, or a point of the curve in the prime-order subgroup.
    pub fn is_valid(&self) -> bool {
        self.infinity || (self.is_on_curve() && self.is_in_subgroup())
    }

    pub fn double(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        // the tangent at a point of order two is vertical
        let Some(inv) = self.y.double().invert() else {
            return Self::identity();
        };
        let slope = self.x.square() * &F::from_u64(3) * &inv;
        let x3 = slope.square() - &self.x.double();
        let y3 = (self.x.clone() - &x3) * &slope - &self.y;
        Self::new_unchecked(x3, y3)
    }

    /// Double-and-add over the binary expansion of `scalar`, least
    /// significant bit first. Negative scalars act on the negated point.
    pub fn scalar_mul<S: Into<BigInt>>(&self, scalar: S) -> Self {
        let scalar: BigInt = scalar.into();
        let (sign, mut k) = scalar.into_parts();
        let mut base = if sign == Sign::Minus {
            -self.clone()
        } else {
            self.clone()
        };
        let mut acc = Self::identity();
        while !k.is_zero() {
            if k.is_odd() {
                acc = acc + &base;
            }
            k >>= 1usize;
            if !k.is_zero() {
                base = base.double();
            }
        }
        acc
    }
}

impl<F: CurveField> PartialEq for Point<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<F: CurveField> Eq for Point<F> {}

impl<F: CurveField> Neg for Point<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<'b, F: CurveField> Add<&'b Point<F>> for Point<F> {
    type Output = Self;

    fn add(self, rhs: &'b Self) -> Self {
        if self.infinity {
            return rhs.clone();
        }
        if rhs.infinity {
            return self;
        }
        if self.x == rhs.x {
            return if self.y == rhs.y {
                self.double()
            } else {
                Self::identity()
            };
        }

        let Some(inv) = (rhs.x.clone() - &self.x).invert() else {
            return Self::identity();
        };
        let slope = (rhs.y.clone() - &self.y) * &inv;
        let x3 = slope.square() - &self.x - &rhs.x;
        let y3 = (self.x - &x3) * &slope - &self.y;
        Self::new_unchecked(x3, y3)
    }
}

impl<'b, F: CurveField> Sub<&'b Point<F>> for Point<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &'b Self) -> Self {
        self + &(-rhs.clone())
    }
}

impl<'a, F: CurveField> Sum<&'a Point<F>> for Point<F> {
    fn sum<I: Iterator<Item = &'a Point<F>>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + p)
    }
}

impl<F: CurveField> Sum<Point<F>> for Point<F> {
    fn sum<I: Iterator<Item = Point<F>>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + &p)
    }
}

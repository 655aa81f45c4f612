use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::RngCore;

use super::{from_limbs, MODULUS};
use crate::ff_ext::{ExtField, Field};
use crate::Error;

crate::impl_binops_additive!(Fq, Fq);
crate::impl_binops_multiplicative!(Fq, Fq);
crate::impl_binops_calls!(Fq);
crate::impl_sum_prod!(Fq);

/// An element of the base field, always reduced into `[0, p)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fq(pub(crate) BigUint);

impl Fq {
    /// Reduces an arbitrary integer modulo p.
    pub fn from_biguint(v: BigUint) -> Self {
        Fq(v % &*MODULUS)
    }

    /// Builds an element from little-endian 64-bit limbs, reducing modulo p.
    pub fn from_raw(limbs: [u64; 6]) -> Self {
        Self::from_biguint(from_limbs(&limbs))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Parses a decimal string, rejecting values that are not below p.
    pub fn from_str_vartime(s: &str) -> Option<Self> {
        BigUint::parse_bytes(s.as_bytes(), 10)
            .filter(|v| v < &*MODULUS)
            .map(Fq)
    }

    /// Big-endian encoding, `None` if the value is not canonical.
    pub fn from_bytes(bytes: &[u8; 48]) -> Option<Self> {
        let v = BigUint::from_bytes_be(bytes);
        (v < *MODULUS).then_some(Fq(v))
    }

    /// Big-endian encoding padded to 48 bytes.
    pub fn to_bytes(&self) -> [u8; 48] {
        let bytes = self.0.to_bytes_be();
        let mut res = [0u8; 48];
        res[48 - bytes.len()..].copy_from_slice(&bytes);
        res
    }

    /// Returns whether or not this element is strictly lexicographically
    /// larger than its negation, i.e. `2·self > p`.
    pub fn lexicographically_largest(&self) -> bool {
        (&self.0 << 1usize) > *MODULUS
    }

    /// Euler's criterion: 1 for non-zero squares, -1 for non-squares, 0 for zero.
    pub fn legendre(&self) -> i8 {
        if self.0.is_zero() {
            return 0;
        }
        let exp = (&*MODULUS - 1u32) >> 1usize;
        if self.0.modpow(&exp, &MODULUS).is_one() {
            1
        } else {
            -1
        }
    }

    pub fn sqrt(&self) -> Option<Self> {
        tonelli_shanks(&self.0, &MODULUS).map(Fq)
    }
}

/// Square root of `n` modulo the odd prime `p`, `None` for non-residues.
pub fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    let n = n % p;
    if n.is_zero() {
        return Some(n);
    }

    let one = BigUint::one();
    let p_minus_one = p - &one;
    let euler_exp = &p_minus_one >> 1usize;
    if !n.modpow(&euler_exp, p).is_one() {
        return None;
    }

    // p - 1 = q·2^s with q odd
    let mut q = p_minus_one.clone();
    let mut s = 0usize;
    while q.is_even() {
        q >>= 1usize;
        s += 1;
    }

    if s == 1 {
        return Some(n.modpow(&((p + &one) >> 2usize), p));
    }

    let mut z = BigUint::from(2u32);
    while z.modpow(&euler_exp, p) != p_minus_one {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + &one) >> 1usize), p);

    while !t.is_one() {
        // least i such that t^(2^i) = 1
        let mut i = 0usize;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = &t2i * &t2i % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    Some(r)
}

impl<'b> Add<&'b Fq> for Fq {
    type Output = Fq;

    #[inline]
    fn add(self, rhs: &'b Fq) -> Fq {
        let sum = self.0 + &rhs.0;
        if sum >= *MODULUS {
            Fq(sum - &*MODULUS)
        } else {
            Fq(sum)
        }
    }
}

impl<'b> Sub<&'b Fq> for Fq {
    type Output = Fq;

    #[inline]
    fn sub(self, rhs: &'b Fq) -> Fq {
        if self.0 >= rhs.0 {
            Fq(self.0 - &rhs.0)
        } else {
            Fq(&*MODULUS - &rhs.0 + self.0)
        }
    }
}

impl<'b> Mul<&'b Fq> for Fq {
    type Output = Fq;

    #[inline]
    fn mul(self, rhs: &'b Fq) -> Fq {
        Fq(self.0 * &rhs.0 % &*MODULUS)
    }
}

impl Neg for Fq {
    type Output = Fq;

    #[inline]
    fn neg(self) -> Fq {
        if self.0.is_zero() {
            self
        } else {
            Fq(&*MODULUS - self.0)
        }
    }
}

impl ExtField for Fq {
    /// Fq2 is built with u² = -1.
    fn mul_by_nonresidue(&self) -> Self {
        -self.clone()
    }
}

impl Field for Fq {
    fn zero() -> Self {
        Fq(BigUint::zero())
    }

    fn one() -> Self {
        Fq(BigUint::one())
    }

    fn from_u64(v: u64) -> Self {
        Self::from_biguint(BigUint::from(v))
    }

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Self::from_biguint(BigUint::from_bytes_le(&bytes))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Binary extended Euclidean algorithm. Keeps `x1·a ≡ u` and `x2·a ≡ v`
    /// modulo p while halving and subtracting until one side reaches 1.
    fn invert(&self) -> Option<Self> {
        if self.0.is_zero() {
            return None;
        }

        let p = BigInt::from(MODULUS.clone());
        let mut u = BigInt::from(self.0.clone());
        let mut v = p.clone();
        let mut x1 = BigInt::one();
        let mut x2 = BigInt::zero();

        while !u.is_one() && !v.is_one() {
            while u.is_even() {
                u >>= 1usize;
                if x1.is_odd() {
                    x1 += &p;
                }
                x1 >>= 1usize;
            }
            while v.is_even() {
                v >>= 1usize;
                if x2.is_odd() {
                    x2 += &p;
                }
                x2 >>= 1usize;
            }
            if u >= v {
                u -= &v;
                x1 -= &x2;
            } else {
                v -= &u;
                x2 -= &x1;
            }
        }

        let inv = if u.is_one() { x1 } else { x2 };
        let (_, magnitude) = inv.mod_floor(&p).into_parts();
        Some(Fq(magnitude))
    }

    fn try_mul_by_nonresidue(&self) -> Result<Self, Error> {
        Ok(self.mul_by_nonresidue())
    }

    fn square(&self) -> Self {
        Fq(&self.0 * &self.0 % &*MODULUS)
    }
}

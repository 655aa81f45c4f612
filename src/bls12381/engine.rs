//! Tate pairing on BLS12-381 evaluated with Miller's algorithm.
//!
//! See <https://crypto.stanford.edu/pbc/thesis.pdf>, section 3.9.2, algorithm 3.

use ark_std::{end_timer, start_timer};
use lazy_static::lazy_static;
use num_bigint::BigUint;

use super::{Fq12, G1, G2, BLS_X, MODULUS, ORDER};
use crate::ff_ext::Field;
#[cfg(feature = "multicore")]
use crate::multicore::{IntoParallelRefIterator, ParallelIterator};
use crate::{Error, Result};

lazy_static! {
    /// (p¹² - 1) / r
    static ref FINAL_EXPONENT: BigUint = (MODULUS.pow(12u32) - 1u32) / &*ORDER;
}

/// Evaluates at `p` the tangent line at `r`, divided by the vertical line at
/// `2r`, after moving `r` to E(Fq12).
pub fn double_eval(r: &G2, p: &G1) -> Fq12 {
    if r.is_identity() || p.is_identity() {
        return Fq12::one();
    }
    let wide = r.untwist();
    let px = Fq12::from_fq(p.x.clone());
    let py = Fq12::from_fq(p.y.clone());

    // the tangent at a point of order two is vertical
    let Some(inv) = wide.y.double().invert() else {
        return px - &wide.x;
    };
    let slope = wide.x.square() * &Fq12::from_u64(3) * &inv;
    let v = wide.y.clone() - &(slope.clone() * &wide.x);

    py - &(px * &slope) - &v
}

/// Evaluates at `p` the line through `r` and `q`, divided by the vertical
/// line at `r + q`, after moving both to E(Fq12).
pub fn add_eval(r: &G2, q: &G2, p: &G1) -> Fq12 {
    if r == q {
        return double_eval(r, p);
    }
    if r.is_identity() || q.is_identity() || p.is_identity() {
        return Fq12::one();
    }
    let wide_r = r.untwist();
    let wide_q = q.untwist();
    let px = Fq12::from_fq(p.x.clone());
    let py = Fq12::from_fq(p.y.clone());

    // r = -q: the line is vertical
    if wide_r.x == wide_q.x && wide_r.y == -wide_q.y.clone() {
        return px - &wide_r.x;
    }

    let Some(inv) = (wide_q.x.clone() - &wide_r.x).invert() else {
        return px - &wide_r.x;
    };
    let slope = (wide_q.y.clone() - &wide_r.y) * &inv;
    // (yq·xr - yr·xq) / (xr - xq)
    let v = (wide_q.y.clone() * &wide_r.x - &(wide_r.y.clone() * &wide_q.x)) * &(-inv);

    py - &(px * &slope) - &v
}

/// Miller loop over the bits of |x| below the leading one, most significant
/// first.
pub fn miller_loop(p: &G1, q: &G2) -> Fq12 {
    let timer = start_timer!(|| "miller loop");

    let mut f = Fq12::one();
    let mut r = q.clone();
    for i in (0..63).rev() {
        f = f.square() * &double_eval(&r, p);
        r = r.double();

        if (BLS_X >> i) & 1 == 1 {
            f = f * &add_eval(&r, q, p);
            r = r + q;
        }
    }

    end_timer!(timer);
    f
}

/// Raises a Miller loop output to (p¹² - 1) / r.
pub fn final_exponentiation(f: &Fq12) -> Fq12 {
    let timer = start_timer!(|| "final exponentiation");
    let res = f.pow(&FINAL_EXPONENT);
    end_timer!(timer);
    res
}

/// The Miller loop of `p` and `q`, before final exponentiation.
///
/// Returns zero in Fq12 when either point is the point at infinity, or is off
/// its curve or outside the order-r subgroup. Use [`checked_pairing`] to tell
/// the two cases apart.
pub fn pairing(p: &G1, q: &G2) -> Fq12 {
    if p.is_identity() || q.is_identity() {
        return Fq12::zero();
    }
    if p.is_valid() && q.is_valid() {
        miller_loop(p, q)
    } else {
        Fq12::zero()
    }
}

/// Like [`pairing`], but reports points outside their subgroup.
pub fn checked_pairing(p: &G1, q: &G2) -> Result<Fq12> {
    if p.is_identity() || q.is_identity() {
        return Ok(Fq12::zero());
    }
    if !p.is_valid() || !q.is_valid() {
        return Err(Error::InvalidSubgroup);
    }
    Ok(miller_loop(p, q))
}

/// Product of the pairings of every term, not yet exponentiated.
pub fn multi_miller_loop(terms: &[(G1, G2)]) -> Fq12 {
    let timer = start_timer!(|| format!("multi miller loop of {} terms", terms.len()));

    #[cfg(feature = "multicore")]
    let loops: Vec<Fq12> = terms.par_iter().map(|(p, q)| pairing(p, q)).collect();
    #[cfg(not(feature = "multicore"))]
    let loops: Vec<Fq12> = terms.iter().map(|(p, q)| pairing(p, q)).collect();

    let res = loops.iter().product();
    end_timer!(timer);
    res
}

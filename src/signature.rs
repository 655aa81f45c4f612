//! BLS signatures with public keys in G1 and signatures in G2.
//!
//! Messages are expected to be already hashed to a point of G2.

use ark_std::{end_timer, start_timer};
use num_bigint::BigUint;

use crate::bls12381::{final_exponentiation, multi_miller_loop, pairing, G1, G2, ORDER};
use crate::ec::{CurveField, Point};
use crate::ff_ext::Field;
use crate::{Error, Result};

/// pk = sk·G
pub fn derive_public_key(sk: &BigUint) -> G1 {
    G1::generator().scalar_mul(sk % &*ORDER)
}

/// σ = sk·H
pub fn sign(sk: &BigUint, hash: &G2) -> G2 {
    hash.scalar_mul(sk % &*ORDER)
}

/// Checks e(-pk, H)·e(G, σ) = 1.
///
/// Points at infinity and points outside their subgroup never verify.
pub fn verify(pk: &G1, signature: &G2, hash: &G2) -> bool {
    let timer = start_timer!(|| "verify");
    let f = pairing(&-pk.clone(), hash) * pairing(&G1::generator(), signature);
    let res = final_exponentiation(&f).is_one();
    end_timer!(timer);
    res
}

fn aggregate<F: CurveField>(points: &[Point<F>]) -> Result<Point<F>> {
    if points.is_empty() {
        return Err(Error::EmptyAggregateInput);
    }
    Ok(points.iter().sum())
}

pub fn aggregate_public_keys(pks: &[G1]) -> Result<G1> {
    aggregate(pks)
}

pub fn aggregate_signatures(signatures: &[G2]) -> Result<G2> {
    aggregate(signatures)
}

/// Verifies signatures of several signers over the same message by
/// checking the aggregate signature against the aggregate key.
pub fn verify_batch(pks: &[G1], signatures: &[G2], hash: &G2) -> Result<bool> {
    let timer = start_timer!(|| format!("verify batch of {} signers", pks.len()));
    let pk = aggregate_public_keys(pks)?;
    let signature = aggregate_signatures(signatures)?;
    let res = verify(&pk, &signature, hash);
    end_timer!(timer);
    Ok(res)
}

/// Verifies an aggregate signature of signers that each signed their own
/// message: Π e(-pk_i, H_i)·e(G, σ) = 1.
pub fn verify_distinct(pks: &[G1], hashes: &[G2], aggregate_signature: &G2) -> Result<bool> {
    if pks.len() != hashes.len() {
        return Err(Error::LengthMismatch {
            expected: pks.len(),
            found: hashes.len(),
        });
    }
    if pks.is_empty() {
        return Err(Error::EmptyAggregateInput);
    }

    let timer = start_timer!(|| format!(
        "verify {} distinct messages on {} threads",
        pks.len(),
        crate::multicore::current_num_threads()
    ));
    let terms: Vec<(G1, G2)> = pks
        .iter()
        .zip(hashes)
        .map(|(pk, hash)| (-pk.clone(), hash.clone()))
        .chain(core::iter::once((
            G1::generator(),
            aggregate_signature.clone(),
        )))
        .collect();
    let res = final_exponentiation(&multi_miller_loop(&terms)).is_one();
    end_timer!(timer);
    Ok(res)
}

/// A point of either input group, for callers that handle keys and
/// signatures without knowing their type up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupElement {
    G1(G1),
    G2(G2),
}

impl GroupElement {
    /// Decodes a compressed point, choosing the group by encoding length.
    pub fn from_compressed_hex(s: &str) -> Result<Self> {
        match s.strip_prefix("0x").unwrap_or(s).len() {
            96 => G1::from_compressed_hex(s).map(GroupElement::G1),
            192 => G2::from_compressed_hex(s).map(GroupElement::G2),
            _ => Err(Error::MalformedEncoding("unexpected encoding length")),
        }
    }

    pub fn to_compressed_hex(&self) -> Result<String> {
        match self {
            GroupElement::G1(p) => p.to_compressed_hex(),
            GroupElement::G2(p) => p.to_compressed_hex(),
        }
    }
}

/// Sums elements that must all belong to the same group.
pub fn aggregate_elements(elements: &[GroupElement]) -> Result<GroupElement> {
    match elements.first() {
        None => Err(Error::EmptyAggregateInput),
        Some(GroupElement::G1(_)) => elements
            .iter()
            .map(|e| match e {
                GroupElement::G1(p) => Ok(p.clone()),
                GroupElement::G2(_) => Err(Error::InconsistentAggregateTypes),
            })
            .collect::<Result<Vec<_>>>()
            .and_then(|pks| aggregate_public_keys(&pks))
            .map(GroupElement::G1),
        Some(GroupElement::G2(_)) => elements
            .iter()
            .map(|e| match e {
                GroupElement::G2(p) => Ok(p.clone()),
                GroupElement::G1(_) => Err(Error::InconsistentAggregateTypes),
            })
            .collect::<Result<Vec<_>>>()
            .and_then(|sigs| aggregate_signatures(&sigs))
            .map(GroupElement::G2),
    }
}

use thiserror::Error;

/// Failures surfaced by decoding, aggregation and the strict pairing entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("point is not in the prime-order subgroup")]
    InvalidSubgroup,
    #[error("malformed point encoding: {0}")]
    MalformedEncoding(&'static str),
    #[error("x-coordinate does not lie on the curve: no square root exists")]
    NoSquareRoot,
    #[error("aggregate input mixes G1 and G2 elements")]
    InconsistentAggregateTypes,
    #[error("cannot aggregate an empty list")]
    EmptyAggregateInput,
    #[error("undefined operation: {0}")]
    UndefinedOperation(&'static str),
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

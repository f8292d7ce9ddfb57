//! Error types shared by the field, curve, encoding and ElGamal modules.
//!
//! Only fatal conditions live here. A character outside the supported alphabet, or a
//! point with no table entry, is not an error: those are reported inline as
//! `None` / [`UNKNOWN_SYMBOL`](crate::encoding::UNKNOWN_SYMBOL).

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `gcd(value, modulus) > 1`, so `value` has no multiplicative inverse.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: i64, modulus: i64 },

    /// The curve has too few points to encode the whole alphabet.
    #[error("lacking valid points: found {found}, need {required}; try a bigger p or a different curve")]
    InsufficientPoints { found: usize, required: usize },

    /// The curve parameters or the base point are unusable.
    #[error("invalid curve configuration: {0}")]
    InvalidCurve(String),

    /// A scalar outside `[1, p - 1]` was supplied where one inside is required.
    #[error("scalar {scalar} is outside [1, p - 1] for p = {modulus}")]
    InvalidScalar { scalar: i64, modulus: i64 },

    /// A coordinate pair that does not satisfy the curve equation.
    #[error("point ({x}, {y}) is not on the curve")]
    PointNotOnCurve { x: i64, y: i64 },
}

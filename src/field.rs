//! Arithmetic in the prime field `F_p`.
//!
//! Field elements are plain `i64` values. For a positive modulus `p`, every helper here
//! returns a value normalized into `[0, p)`, whatever the sign of the other inputs.
//! Products and sums are widened to `i128` before reduction, so any modulus that fits
//! in an `i64` is safe from overflow. The modulus itself is validated once, by
//! [`Curve::new`](crate::curve::Curve::new); only [`mod_inverse`] re-checks it.

use num_integer::Integer;

use crate::error::{Error, Result};

/// Reduce `a` modulo `p` into `[0, p)`.
///
/// Unlike the `%` operator, a negative `a` is corrected into the positive range.
/// `p` must be positive; `p = 0` panics like any integer division by zero.
pub fn reduce(a: i64, p: i64) -> i64 {
    a.mod_floor(&p)
}

fn reduce_wide(a: i128, p: i64) -> i64 {
    // The result lies in [0, p), so it always fits back into an i64.
    a.mod_floor(&(p as i128)) as i64
}

/// Modular addition.
pub fn mod_add(a: i64, b: i64, p: i64) -> i64 {
    reduce_wide(a as i128 + b as i128, p)
}

/// Modular subtraction.
pub fn mod_sub(a: i64, b: i64, p: i64) -> i64 {
    reduce_wide(a as i128 - b as i128, p)
}

/// Modular multiplication.
pub fn mod_mul(a: i64, b: i64, p: i64) -> i64 {
    reduce_wide(a as i128 * b as i128, p)
}

/// Compute the multiplicative inverse of `a` modulo `p` using the extended Euclidean
/// algorithm.
///
/// # Errors
/// Returns [`Error::NoInverse`] when `gcd(a, p) > 1`, or when `p < 2` and no field
/// exists at all. For a prime `p` the first case happens only for multiples of `p`,
/// which is exactly the case of a vertical chord or tangent. The caller must handle it;
/// no substitute value is ever produced.
pub fn mod_inverse(a: i64, p: i64) -> Result<i64> {
    if p < 2 {
        return Err(Error::NoInverse {
            value: a,
            modulus: p,
        });
    }
    let a = reduce(a, p);
    let egcd = a.extended_gcd(&p);
    if egcd.gcd != 1 {
        return Err(Error::NoInverse {
            value: a,
            modulus: p,
        });
    }
    // a*x + p*y = 1, so x is the inverse up to normalization
    Ok(reduce(egcd.x, p))
}

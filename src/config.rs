//! Named constants for the demonstration curve and the context struct built from them.
//!
//! Swapping the curve or the key only means changing an [`ElGamalConfig`]; none of the
//! field or curve code depends on these values.

use crate::curve::{Curve, CurveParams, Point};
use crate::error::Result;

/// Coefficient a of `y^2 = x^3 + a*x + b`.
pub const CURVE_A: i64 = 2;
/// Coefficient b of `y^2 = x^3 + a*x + b`.
pub const CURVE_B: i64 = 3;
/// The field modulus.
pub const MODULUS: i64 = 521;
/// x coordinate of the base point G.
pub const BASE_X: i64 = 3;
/// y coordinate of the base point G.
pub const BASE_Y: i64 = 6;
/// The private decryption scalar d.
pub const PRIVATE_SCALAR: i64 = 15;

/// Everything needed to set up an ElGamal instance: curve, base point and private key.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalConfig {
    pub a: i64,
    pub b: i64,
    pub p: i64,
    pub gx: i64,
    pub gy: i64,
    pub private_scalar: i64,
}

impl Default for ElGamalConfig {
    fn default() -> Self {
        ElGamalConfig {
            a: CURVE_A,
            b: CURVE_B,
            p: MODULUS,
            gx: BASE_X,
            gy: BASE_Y,
            private_scalar: PRIVATE_SCALAR,
        }
    }
}

impl ElGamalConfig {
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            a: self.a,
            b: self.b,
            p: self.p,
        }
    }

    /// Validate the curve part of the configuration.
    pub fn curve(&self) -> Result<Curve> {
        Curve::new(self.curve_params())
    }

    pub fn base_point(&self) -> Point {
        Point::new(self.gx, self.gy)
    }
}

/// Optional RNG seed for reproducible key generation in toy examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGenConfig {
    pub seed: Option<u64>,
}

/// Optional RNG seed for the ephemeral scalar `k`.
/// Typically you want a fresh random `k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncryptConfig {
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ElGamalConfig::default();
        let curve = config.curve().unwrap();
        assert_eq!(curve.params(), CurveParams { a: 2, b: 3, p: 521 });
        assert!(curve.contains(&config.base_point()));
        assert_eq!(config.private_scalar, 15);
    }

    #[test]
    fn test_bad_modulus_rejected() {
        let config = ElGamalConfig {
            p: 1000,
            ..ElGamalConfig::default()
        };
        assert!(config.curve().is_err());
    }
}

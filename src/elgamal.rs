//! DISCLAIMER: This module is a toy example of elliptic-curve ElGamal encryption.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive operations.
//! It is not audited, not vetted, and very likely insecure in practice.
//!
//! With base point `G`, private scalar `d` and public key `Q = d*G`, a plaintext point
//! `M` and an ephemeral scalar `k` give the ciphertext
//!
//! ```text
//! C1 = k*G
//! C2 = M + k*Q
//! ```
//!
//! and decryption recovers `M = C2 - d*C1`.

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{ElGamalConfig, EncryptConfig, KeyGenConfig};
use crate::curve::{Curve, Point};
use crate::error::{Error, Result};

/// Private scalar `d` and public point `Q = d*G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalKeyPair {
    pub private: i64,
    pub public: Point,
}

/// An ElGamal ciphertext `(C1, C2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    pub c1: Point,
    pub c2: Point,
}

/// A curve, base point and key pair bundled together.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamal {
    curve: Curve,
    generator: Point,
    order: u64,
    keys: ElGamalKeyPair,
}

fn check_scalar(scalar: i64, modulus: i64) -> Result<()> {
    if (1..modulus).contains(&scalar) {
        Ok(())
    } else {
        Err(Error::InvalidScalar { scalar, modulus })
    }
}

fn base_point_order(curve: &Curve, generator: &Point) -> Result<u64> {
    if generator.is_infinity() {
        return Err(Error::InvalidCurve(
            "the base point cannot be the point at infinity".to_string(),
        ));
    }
    // also rejects an off-curve G with PointNotOnCurve
    curve.point_order(generator)
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

impl ElGamal {
    /// Set up an instance from a configuration, validating the curve, the base point
    /// and the private scalar.
    pub fn new(config: &ElGamalConfig) -> Result<Self> {
        let curve = config.curve()?;
        Self::with_private_scalar(curve, config.base_point(), config.private_scalar)
    }

    /// Set up an instance with an explicit private scalar in `[1, p - 1]`.
    ///
    /// # Errors
    /// - [`Error::PointNotOnCurve`] or [`Error::InvalidCurve`] for a bad base point.
    /// - [`Error::InvalidScalar`] if `private` is outside `[1, p - 1]` or a multiple of
    ///   the order of `G`, which would make the public key the identity and leave every
    ///   plaintext unmasked.
    pub fn with_private_scalar(curve: Curve, generator: Point, private: i64) -> Result<Self> {
        let order = base_point_order(&curve, &generator)?;
        check_scalar(private, curve.modulus())?;
        if private as u64 % order == 0 {
            return Err(Error::InvalidScalar {
                scalar: private,
                modulus: curve.modulus(),
            });
        }

        let public = curve.scalar_multiply(&generator, private)?;
        debug!(
            "public key d*G = {} for G = {} of order {}",
            public, generator, order
        );

        Ok(ElGamal {
            curve,
            generator,
            order,
            keys: ElGamalKeyPair { private, public },
        })
    }

    /// Set up an instance with a random private scalar in `[1, p - 1]`, skipping
    /// multiples of the order of `G`.
    ///
    /// # Warnings
    /// - This is a toy function. The scalar is drawn from `[1, p - 1]`, not from the
    ///   order of `G`, and no other checks against weak keys are made.
    /// - DO NOT USE FOR REAL CRYPTOGRAPHY.
    pub fn generate_keypair(
        curve: Curve,
        generator: Point,
        config: &KeyGenConfig,
    ) -> Result<Self> {
        let order = base_point_order(&curve, &generator)?;
        let mut rng = rng_from_seed(config.seed);
        // redraw multiples of ord(G); G has order >= 2, so this terminates
        let private = loop {
            let candidate = rng.gen_range(1..curve.modulus());
            if candidate as u64 % order != 0 {
                break candidate;
            }
        };
        Self::with_private_scalar(curve, generator, private)
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn generator(&self) -> Point {
        self.generator
    }

    /// Order of the base point `G`.
    pub fn generator_order(&self) -> u64 {
        self.order
    }

    pub fn keypair(&self) -> ElGamalKeyPair {
        self.keys
    }

    pub fn public_key(&self) -> Point {
        self.keys.public
    }

    /// Draw an ephemeral scalar `k` uniformly from `[1, p - 1]`.
    pub fn random_ephemeral(&self, config: &EncryptConfig) -> i64 {
        let mut rng = rng_from_seed(config.seed);
        rng.gen_range(1..self.curve.modulus())
    }

    /// The ciphertext half `C1 = k*G`, which depends only on the ephemeral scalar.
    pub fn commitment(&self, k: i64) -> Result<Point> {
        check_scalar(k, self.curve.modulus())?;
        self.curve.scalar_multiply(&self.generator, k)
    }

    /// The mask `k*Q` added to every plaintext encrypted under `k`.
    pub fn shared_mask(&self, k: i64) -> Result<Point> {
        check_scalar(k, self.curve.modulus())?;
        self.curve.scalar_multiply(&self.keys.public, k)
    }

    /// Encrypt the point `message` with ephemeral scalar `k`.
    ///
    /// # Errors
    /// - [`Error::InvalidScalar`] if `k` is outside `[1, p - 1]`.
    /// - [`Error::PointNotOnCurve`] if `message` is not a curve point.
    /// - [`Error::NoInverse`] from the underlying point arithmetic.
    pub fn encrypt(&self, message: &Point, k: i64) -> Result<ElGamalCiphertext> {
        if let Point::Coord { x, y } = *message {
            if !self.curve.contains(message) {
                return Err(Error::PointNotOnCurve { x, y });
            }
        }

        let c1 = self.commitment(k)?;
        let c2 = self.curve.add(message, &self.shared_mask(k)?)?;
        Ok(ElGamalCiphertext { c1, c2 })
    }

    /// Decrypt `(C1, C2)` to `C2 - d*C1`.
    ///
    /// Corrupted ciphertexts are not rejected; they simply decrypt to some other point.
    pub fn decrypt(&self, ciphertext: &ElGamalCiphertext) -> Result<Point> {
        let shared = self
            .curve
            .scalar_multiply(&ciphertext.c1, self.keys.private)?;
        self.curve.add(&ciphertext.c2, &self.curve.negate(&shared))
    }
}

//! Toy ElGamal encryption over a short-Weierstrass elliptic curve.
//!
//! DISCLAIMER: the field is tiny and nothing here is constant time. This crate is for
//! demonstration and education only; never use it to protect real data.
//!
//! ```
//! use ecc_elgamal::{ElGamal, ElGamalConfig, PointTable};
//!
//! let elgamal = ElGamal::new(&ElGamalConfig::default())?;
//! let table = PointTable::build(elgamal.curve())?;
//!
//! let plain = table.char_to_point('A').expect("letters always map");
//! let ciphertext = elgamal.encrypt(&plain, 7)?;
//! let recovered = elgamal.decrypt(&ciphertext)?;
//! assert_eq!(table.point_to_char(&recovered), 'A');
//! # Ok::<(), ecc_elgamal::Error>(())
//! ```

pub mod config;
pub mod curve;
pub mod elgamal;
pub mod encoding;
pub mod error;
pub mod field;
pub mod message;

pub use config::{ElGamalConfig, EncryptConfig, KeyGenConfig};
pub use curve::{Curve, CurveParams, Point};
pub use elgamal::{ElGamal, ElGamalCiphertext, ElGamalKeyPair};
pub use encoding::{ExhaustiveSearch, PointSource, PointTable, ALPHABET_SIZE, UNKNOWN_SYMBOL};
pub use error::{Error, Result};
pub use field::{mod_inverse, reduce};
pub use message::{EncryptedMessage, EncryptedSymbol, MessageCipher};

#[cfg(test)]
mod tests;

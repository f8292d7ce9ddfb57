//! Whole-message encryption on top of [`ElGamal`] and [`PointTable`].
//!
//! One ephemeral scalar is used for the entire run, so every character shares the same
//! `C1` and only `C2` differs. Characters outside the alphabet are kept in place as
//! [`EncryptedSymbol::Unmapped`] and never touch the curve arithmetic; any arithmetic
//! failure aborts the whole message.

use log::{debug, warn};

use crate::curve::Point;
use crate::elgamal::{ElGamal, ElGamalCiphertext};
use crate::encoding::{PointTable, UNKNOWN_SYMBOL};
use crate::error::Result;

/// One position of an encrypted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptedSymbol {
    /// The `C2` half of the ciphertext for a mapped letter.
    Encrypted(Point),
    /// A character with no point, carried through unencrypted.
    Unmapped(char),
}

/// A message encrypted under a single ephemeral scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    pub c1: Point,
    pub symbols: Vec<EncryptedSymbol>,
}

impl EncryptedMessage {
    /// The `C2` points in message order, skipping unmapped characters.
    pub fn c2_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.symbols.iter().filter_map(|symbol| match symbol {
            EncryptedSymbol::Encrypted(c2) => Some(*c2),
            EncryptedSymbol::Unmapped(_) => None,
        })
    }
}

/// Pairs a key with a letter table to encrypt and decrypt text.
#[derive(Debug, Clone, Copy)]
pub struct MessageCipher<'a> {
    elgamal: &'a ElGamal,
    table: &'a PointTable,
}

impl<'a> MessageCipher<'a> {
    pub fn new(elgamal: &'a ElGamal, table: &'a PointTable) -> Self {
        MessageCipher { elgamal, table }
    }

    /// Each character with its point, or `None` when it is outside the alphabet.
    pub fn mapped_points(&self, text: &str) -> Vec<(char, Option<Point>)> {
        text.chars()
            .map(|c| (c, self.table.char_to_point(c)))
            .collect()
    }

    /// Encrypt `text` with ephemeral scalar `k`.
    ///
    /// `C1 = k*G` and the mask `k*Q` are computed once; each letter then costs a
    /// single point addition.
    pub fn encrypt_message(&self, text: &str, k: i64) -> Result<EncryptedMessage> {
        let c1 = self.elgamal.commitment(k)?;
        let mask = self.elgamal.shared_mask(k)?;
        let curve = self.elgamal.curve();
        let mut symbols = Vec::with_capacity(text.len());

        for c in text.chars() {
            match self.table.char_to_point(c) {
                // table points are on the curve by construction
                Some(point) => {
                    let c2 = curve.add(&point, &mask)?;
                    symbols.push(EncryptedSymbol::Encrypted(c2));
                }
                None => {
                    warn!("character {:?} is not valid, leaving it unencrypted", c);
                    symbols.push(EncryptedSymbol::Unmapped(c));
                }
            }
        }
        debug!("encrypted {} symbols under C1 = {}", symbols.len(), c1);

        Ok(EncryptedMessage { c1, symbols })
    }

    /// Decrypt a message. Unmapped characters and points with no table entry come back
    /// as [`UNKNOWN_SYMBOL`].
    pub fn decrypt_message(&self, message: &EncryptedMessage) -> Result<String> {
        message
            .symbols
            .iter()
            .map(|symbol| -> Result<char> {
                match *symbol {
                    EncryptedSymbol::Encrypted(c2) => {
                        let plain = self.elgamal.decrypt(&ElGamalCiphertext {
                            c1: message.c1,
                            c2,
                        })?;
                        Ok(self.table.point_to_char(&plain))
                    }
                    EncryptedSymbol::Unmapped(_) => Ok(UNKNOWN_SYMBOL),
                }
            })
            .collect()
    }
}

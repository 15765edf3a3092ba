//! Error types for the Kolovrat library.

use std::str::Utf8Error;

use thiserror::Error;

/// Errors produced by the Kolovrat library.
///
/// The cipher transforms themselves are total over any string input and
/// never fail: a character either belongs to a known alphabet or is copied
/// through verbatim. Errors can only arise at two boundaries — building a
/// custom [`Alphabet`](crate::Alphabet), and handing raw bytes to
/// [`SealedText`](crate::SealedText).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KolovratError {
    /// The value offered for storage is not textual (not valid UTF-8).
    #[error("plaintext must be textual: {0}")]
    InvalidInputType(#[from] Utf8Error),
    /// An alphabet was built with the same character listed twice, which
    /// would make index-based mirroring ambiguous.
    #[error("character {ch:?} appears more than once in alphabet {alphabet:?}")]
    DuplicateChar {
        /// Label of the offending alphabet.
        alphabet: String,
        /// The repeated character.
        ch: char,
    },
}

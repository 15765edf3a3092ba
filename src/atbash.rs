//! Atbash: the reflecting substitution cipher.
//!
//! Replaces each character with the one at the symmetric position from the
//! end of its alphabet. The transform is an involution, so encryption and
//! decryption are the same operation and it carries no parameters.

use tracing::trace;

use crate::alphabet::AlphabetSet;
use crate::codec::SubstitutionCodec;

/// The mirroring (Atbash) cipher.
///
/// # Examples
///
/// ```
/// use kolovrat::{Atbash, SubstitutionCodec};
///
/// let atbash = Atbash::new();
/// assert_eq!(atbash.encrypt("abz"), "zya");
/// assert_eq!(atbash.encrypt("zya"), "abz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atbash {
    alphabets: AlphabetSet,
}

impl Atbash {
    /// Creates an Atbash cipher over the standard alphabets.
    pub fn new() -> Self {
        Self::with_alphabets(AlphabetSet::standard())
    }

    /// Creates an Atbash cipher over a custom alphabet set.
    pub fn with_alphabets(alphabets: AlphabetSet) -> Self {
        Atbash { alphabets }
    }

    /// Returns the alphabet set this cipher classifies against.
    pub fn alphabets(&self) -> &AlphabetSet {
        &self.alphabets
    }

    /// Reflects every recognized character of `text` to the symmetric
    /// position from its alphabet's end.
    fn mirror(&self, text: &str) -> String {
        trace!(chars = text.chars().count(), "atbash transform");
        self.alphabets.substitute(text, |pos, len| len - 1 - pos)
    }
}

impl SubstitutionCodec for Atbash {
    fn encrypt(&self, text: &str) -> String {
        self.mirror(text)
    }

    fn decrypt(&self, text: &str) -> String {
        self.mirror(text)
    }
}

impl Default for Atbash {
    fn default() -> Self {
        Self::new()
    }
}

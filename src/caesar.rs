//! Caesar: the shifting substitution cipher.
//!
//! Rotates each character's position by a fixed signed step within whichever
//! alphabet contains it, wrapping around at the ends. Alphabets differ in
//! length (33 Cyrillic vs 26 Latin vs 43 symbols), so the same nominal step
//! gives a different effective rotation per alphabet.

use tracing::trace;

use crate::alphabet::AlphabetSet;
use crate::codec::SubstitutionCodec;

/// Default shift step.
pub const DEFAULT_STEP: i64 = 5;

/// The shifting (Caesar) cipher.
///
/// The step is an arbitrary signed integer: negative steps, zero, and steps
/// far larger than any alphabet are all valid and normalized per alphabet
/// with Euclidean modulo.
///
/// # Examples
///
/// ```
/// use kolovrat::{Caesar, SubstitutionCodec};
///
/// let caesar = Caesar::with_step(5);
/// let ciphertext = caesar.encrypt("hello");
/// assert_eq!(ciphertext, "mjqqt");
/// assert_eq!(caesar.decrypt(&ciphertext), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caesar {
    alphabets: AlphabetSet,
    step: i64,
}

impl Caesar {
    /// Creates a Caesar cipher over the standard alphabets with the default
    /// step of 5.
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    /// Creates a Caesar cipher over the standard alphabets with a custom step.
    ///
    /// # Parameters
    /// - `step`: Signed rotation amount. Any value is valid; it is reduced
    ///   modulo each alphabet's length during transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use kolovrat::{Caesar, SubstitutionCodec};
    ///
    /// // a negative step rotates the other way
    /// assert_eq!(Caesar::with_step(-1).encrypt("a"), "z");
    /// ```
    pub fn with_step(step: i64) -> Self {
        Self::with_alphabets(AlphabetSet::standard(), step)
    }

    /// Creates a Caesar cipher over a custom alphabet set.
    ///
    /// # Parameters
    /// - `alphabets`: The alphabet set to classify against, scanned in its
    ///   declaration order.
    /// - `step`: Signed rotation amount.
    pub fn with_alphabets(alphabets: AlphabetSet, step: i64) -> Self {
        Caesar { alphabets, step }
    }

    /// Returns the configured step.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns the alphabet set this cipher classifies against.
    pub fn alphabets(&self) -> &AlphabetSet {
        &self.alphabets
    }

    /// Shifts every recognized character of `text` by `step` positions
    /// within its own alphabet, wrapping around.
    fn shift(&self, text: &str, step: i128) -> String {
        self.alphabets.substitute(text, |pos, len| {
            let offset = step.rem_euclid(len as i128) as usize;
            (pos + offset) % len
        })
    }
}

impl SubstitutionCodec for Caesar {
    fn encrypt(&self, text: &str) -> String {
        trace!(step = self.step, chars = text.chars().count(), "caesar encrypt");
        self.shift(text, self.step as i128)
    }

    fn decrypt(&self, text: &str) -> String {
        trace!(step = self.step, chars = text.chars().count(), "caesar decrypt");
        // widened to i128 so negating i64::MIN cannot overflow
        self.shift(text, -(self.step as i128))
    }
}

impl Default for Caesar {
    fn default() -> Self {
        Self::new()
    }
}

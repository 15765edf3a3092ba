//! Encrypt-on-write / decrypt-on-read storage wrapper.
//!
//! [`SealedText`] holds a value in encrypted form: writing a plaintext
//! stores its ciphertext, reading decrypts on the fly. This replaces the
//! original attribute-descriptor convenience with an explicit wrapper type
//! delegating to the pure codec functions.

use crate::codec::SubstitutionCodec;
use crate::error::KolovratError;

/// A text slot stored encrypted at rest.
///
/// The slot starts empty: [`ciphertext`](Self::ciphertext) and
/// [`plaintext`](Self::plaintext) both return the empty string until the
/// first write.
///
/// # Examples
///
/// ```
/// use kolovrat::{Caesar, SealedText};
///
/// let mut sealed = SealedText::new(Caesar::new());
/// assert_eq!(sealed.ciphertext(), "");
///
/// sealed.set_plaintext("Hi!");
/// assert_ne!(sealed.ciphertext(), "Hi!");
/// assert_eq!(sealed.plaintext(), "Hi!");
/// ```
#[derive(Debug, Clone)]
pub struct SealedText<C> {
    codec: C,
    ciphertext: String,
}

impl<C: SubstitutionCodec> SealedText<C> {
    /// Creates an empty sealed slot using `codec` for both directions.
    pub fn new(codec: C) -> Self {
        SealedText {
            codec,
            ciphertext: String::new(),
        }
    }

    /// Encrypts `value` and stores the ciphertext, replacing any previous
    /// content.
    pub fn set_plaintext(&mut self, value: &str) {
        self.ciphertext = self.codec.encrypt(value);
    }

    /// Validates that `value` is textual, then stores it like
    /// [`set_plaintext`](Self::set_plaintext).
    ///
    /// This is the boundary where non-textual input is still representable;
    /// the codec itself only ever sees validated text.
    ///
    /// # Errors
    /// Returns [`KolovratError::InvalidInputType`] if `value` is not valid
    /// UTF-8. The stored ciphertext is left untouched in that case.
    pub fn set_plaintext_bytes(&mut self, value: &[u8]) -> Result<(), KolovratError> {
        let text = std::str::from_utf8(value)?;
        self.set_plaintext(text);
        Ok(())
    }

    /// Decrypts and returns the stored value.
    pub fn plaintext(&self) -> String {
        self.codec.decrypt(&self.ciphertext)
    }

    /// Returns the stored encrypted form directly.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }
}

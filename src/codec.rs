//! The shared contract implemented by both substitution ciphers.

/// A substitution cipher over strings.
///
/// Implementations are pure and stateless: the output depends only on the
/// input text and the codec's immutable configuration, and the output always
/// has the same character count as the input, each character transformed (or
/// passed through) at its original position. Codecs are `Send + Sync`, so a
/// caller may split a text into disjoint substrings and transform them on
/// separate threads, reassembling results in order.
pub trait SubstitutionCodec {
    /// Encrypts `text`, transforming each recognized character within its
    /// alphabet and copying unrecognized characters unchanged.
    fn encrypt(&self, text: &str) -> String;

    /// Decrypts `text` produced by [`encrypt`](Self::encrypt) of the same
    /// codec. `decrypt(encrypt(t)) == t` holds for every `t`.
    fn decrypt(&self, text: &str) -> String;
}

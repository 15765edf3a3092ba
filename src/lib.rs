//! Kolovrat classical substitution cipher engine.
//!
//! Kolovrat implements two classical substitution ciphers — a shifting
//! (Caesar) cipher and a reflecting (Atbash) cipher — over a composite
//! character domain covering Cyrillic letters, Latin letters, and a fixed
//! set of extra symbols (space, digits, ASCII punctuation), each split by
//! case. These are pedagogical ciphers with zero cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! AlphabetSet (ordered character domains — classifies a char)
//!     ↕ substitute: classify, then remap the position within its domain
//! Caesar      (rotates the position by a signed step, wrapping per domain)
//! Atbash      (reflects the position from the domain's end — self-inverse)
//!     ↕ both implement the SubstitutionCodec contract
//! SealedText  (encrypt-on-write / decrypt-on-read storage wrapper)
//! ```
//!
//! Both ciphers route every character through the same classification step,
//! so they can never disagree about which domain a character belongs to.
//! Characters foreign to every domain pass through unchanged, which makes
//! both transforms total over any string input.
//!
//! # Examples
//!
//! Encrypt and decrypt a mixed-alphabet string:
//!
//! ```
//! use kolovrat::{Caesar, SubstitutionCodec};
//!
//! let caesar = Caesar::new(); // standard alphabets, step 5
//! let ciphertext = caesar.encrypt("Привет, world 42!");
//! assert_ne!(ciphertext, "Привет, world 42!");
//! assert_eq!(caesar.decrypt(&ciphertext), "Привет, world 42!");
//! ```
//!
//! Atbash is its own inverse:
//!
//! ```
//! use kolovrat::{Atbash, SubstitutionCodec};
//!
//! let atbash = Atbash::new();
//! let once = atbash.encrypt("абв xyz");
//! assert_eq!(atbash.encrypt(&once), "абв xyz");
//! ```
//!
//! Store a value that is encrypted at rest:
//!
//! ```
//! use kolovrat::{Caesar, SealedText};
//!
//! let mut sealed = SealedText::new(Caesar::new());
//! sealed.set_plaintext("Hi!");
//! assert_ne!(sealed.ciphertext(), "Hi!");
//! assert_eq!(sealed.plaintext(), "Hi!");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod atbash;
mod caesar;
mod codec;
mod sealed;

pub use alphabet::{Alphabet, AlphabetSet};
pub use atbash::Atbash;
pub use caesar::{Caesar, DEFAULT_STEP};
pub use codec::SubstitutionCodec;
pub use sealed::SealedText;

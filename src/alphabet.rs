//! Alphabet domains and the character-classification dispatcher.
//!
//! An [`Alphabet`] is an ordered sequence of distinct characters (one case of
//! one script, or the symbol set). An [`AlphabetSet`] is an ordered,
//! immutable collection of alphabets that classifies characters by scanning
//! its domains in declaration order and taking the first match.
//!
//! Both ciphers differ only in how they remap a position within a domain, so
//! the whole "classify, then transform within the domain, else pass through"
//! shape lives here as [`AlphabetSet::substitute`], parameterized by a
//! position-remapping closure. Routing both ciphers through one function
//! guarantees they can never diverge in character classification.

use crate::error::KolovratError;

/// The 33 Cyrillic lowercase letters, alphabet order, ё after е.
const CYRILLIC_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// The 33 Cyrillic uppercase letters, same order as the lowercase domain.
const CYRILLIC_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// The 26 Latin lowercase letters.
const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// The 26 Latin uppercase letters.
const LATIN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Space, the ten decimal digits, then the 32 ASCII punctuation marks in
/// ASCII-table order. Mirroring depends on this exact ordering.
const SYMBOLS: &str = " 0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One ordered character domain, e.g. "Cyrillic lowercase".
///
/// Characters within an alphabet are distinct; [`Alphabet::new`] enforces
/// this because index-based mirroring is ambiguous over repeated characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    label: String,
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from a label and an ordered character sequence.
    ///
    /// # Parameters
    /// - `label`: Human-readable role of the domain, e.g. `"latin-lower"`.
    /// - `chars`: The domain's characters, in the order that defines their
    ///   positions.
    ///
    /// # Errors
    /// Returns [`KolovratError::DuplicateChar`] if any character appears
    /// more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use kolovrat::Alphabet;
    ///
    /// let vowels = Alphabet::new("vowels", "aeiou").unwrap();
    /// assert_eq!(vowels.len(), 5);
    /// assert!(Alphabet::new("bad", "aba").is_err());
    /// ```
    pub fn new(label: &str, chars: &str) -> Result<Self, KolovratError> {
        let chars: Vec<char> = chars.chars().collect();
        for (i, &ch) in chars.iter().enumerate() {
            if chars[..i].contains(&ch) {
                return Err(KolovratError::DuplicateChar {
                    alphabet: label.to_owned(),
                    ch,
                });
            }
        }
        Ok(Alphabet {
            label: label.to_owned(),
            chars,
        })
    }

    /// Internal constructor for the canonical constants, which are known to
    /// contain no duplicates.
    fn canonical(label: &str, chars: &str) -> Self {
        Alphabet {
            label: label.to_owned(),
            chars: chars.chars().collect(),
        }
    }

    /// Returns the alphabet's role label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the alphabet contains no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the position of `ch` within this alphabet, if present.
    pub fn position(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }

    /// Returns the character at `index`. Callers keep `index` within range
    /// by reducing modulo [`len`](Self::len).
    pub(crate) fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }
}

/// An ordered, immutable collection of [`Alphabet`] domains.
///
/// Built once at startup and never mutated. Classification scans the
/// domains in declaration order and returns the first match; in the
/// [`standard`](Self::standard) configuration the domains are pairwise
/// disjoint, so order is only observable with overlapping custom sets,
/// where first match winning is the committed behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetSet {
    domains: Vec<Alphabet>,
}

impl AlphabetSet {
    /// Creates the canonical alphabet set, in fixed order: Cyrillic
    /// lowercase, Cyrillic uppercase, Latin lowercase, Latin uppercase,
    /// then symbols (space, digits, ASCII punctuation).
    ///
    /// # Examples
    ///
    /// ```
    /// use kolovrat::AlphabetSet;
    ///
    /// let set = AlphabetSet::standard();
    /// assert_eq!(set.find('ё'), Some((0, 6)));
    /// assert_eq!(set.find('a'), Some((2, 0)));
    /// assert_eq!(set.find(' '), Some((4, 0)));
    /// assert_eq!(set.find('中'), None);
    /// ```
    pub fn standard() -> Self {
        AlphabetSet {
            domains: vec![
                Alphabet::canonical("cyrillic-lower", CYRILLIC_LOWER),
                Alphabet::canonical("cyrillic-upper", CYRILLIC_UPPER),
                Alphabet::canonical("latin-lower", LATIN_LOWER),
                Alphabet::canonical("latin-upper", LATIN_UPPER),
                Alphabet::canonical("symbols", SYMBOLS),
            ],
        }
    }

    /// Creates a set from custom domains, scanned in the given order.
    ///
    /// Domains may overlap; a character present in several domains is
    /// classified by the first one that contains it.
    pub fn from_domains(domains: Vec<Alphabet>) -> Self {
        AlphabetSet { domains }
    }

    /// Returns the domains in classification order.
    pub fn domains(&self) -> &[Alphabet] {
        &self.domains
    }

    /// Classifies a character, returning `(domain index, position)` for the
    /// first domain containing it.
    ///
    /// Absence of a match is a normal outcome (the character is foreign to
    /// every domain), not an error.
    pub fn find(&self, ch: char) -> Option<(usize, usize)> {
        self.domains
            .iter()
            .enumerate()
            .find_map(|(d, alphabet)| alphabet.position(ch).map(|i| (d, i)))
    }

    /// Applies a substitution over `text`, character by character.
    ///
    /// Each character is classified via [`find`](Self::find); a match at
    /// position `i` in a domain of length `l` is replaced by the character
    /// at `map(i, l)` in the same domain, and a foreign character is copied
    /// unchanged. The output always has the same character count as the
    /// input.
    ///
    /// `map` must return a position below the domain length it is given.
    pub(crate) fn substitute<F>(&self, text: &str, map: F) -> String
    where
        F: Fn(usize, usize) -> usize,
    {
        text.chars()
            .map(|ch| match self.find(ch) {
                Some((domain, pos)) => {
                    let alphabet = &self.domains[domain];
                    alphabet.char_at(map(pos, alphabet.len()))
                }
                None => ch,
            })
            .collect()
    }
}

impl Default for AlphabetSet {
    fn default() -> Self {
        Self::standard()
    }
}

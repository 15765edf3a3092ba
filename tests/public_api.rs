//! End-to-end tests of the public API.
//!
//! Exercises both ciphers over the standard alphabet set, the custom-set
//! constructors, and the sealed-storage wrapper, including the frozen
//! worked examples. Expected ciphertexts are fixed vectors: any change in
//! output indicates a behavioral regression.
//!
//! Coverage:
//! - `AlphabetSet` / `Alphabet` (classification, overlap policy)
//! - `Caesar` (shift arithmetic, step extremes)
//! - `Atbash` (involution)
//! - `SealedText` (encrypt-on-write / decrypt-on-read, byte boundary)

use kolovrat::error::KolovratError;
use kolovrat::{Alphabet, AlphabetSet, Atbash, Caesar, SealedText, SubstitutionCodec};

// ═══════════════════════════════════════════════════════════════════════
// Caesar — frozen vectors and shift arithmetic
// ═══════════════════════════════════════════════════════════════════════

/// The classic Latin-only worked example: space is foreign there and
/// passes through, x/y/z wrap around to c/d/e.
#[test]
fn caesar_latin_only_worked_example() {
    let latin = AlphabetSet::from_domains(vec![Alphabet::new(
        "latin-lower",
        "abcdefghijklmnopqrstuvwxyz",
    )
    .unwrap()]);
    let caesar = Caesar::with_alphabets(latin, 5);

    assert_eq!(caesar.encrypt("abc xyz"), "fgh cde");
    assert_eq!(caesar.decrypt("fgh cde"), "abc xyz");
}

/// Over the standard set the space lives in the symbols alphabet and
/// shifts like any other symbol.
#[test]
fn caesar_standard_set_shifts_space() {
    let caesar = Caesar::new();
    // symbols order is " 0123456789!..."; space(0) + 5 = '4'
    assert_eq!(caesar.encrypt(" "), "4");
    assert_eq!(caesar.decrypt("4"), " ");
}

/// Frozen mixed-alphabet vector with the default step.
#[test]
fn caesar_mixed_text_frozen_vector() {
    let caesar = Caesar::new();
    let plain = "Привет, world 42!";
    let ciphertext = caesar.encrypt(plain);
    assert_eq!(ciphertext, "Фхнжйч;4btwqi497&");
    assert_eq!(caesar.decrypt(&ciphertext), plain);
}

/// Output character count always equals input character count.
#[test]
fn caesar_length_preserved_in_chars() {
    let caesar = Caesar::new();
    let plain = "ёж 中文 deadline-42";
    let out = caesar.encrypt(plain);
    assert_eq!(out.chars().count(), plain.chars().count());
}

/// Same nominal step, different effective rotation per alphabet.
#[test]
fn caesar_rotation_is_per_alphabet() {
    let caesar = Caesar::with_step(26);
    // full turn for Latin, partial for Cyrillic
    assert_eq!(caesar.encrypt("abc"), "abc");
    assert_ne!(caesar.encrypt("абв"), "абв");
    assert_eq!(caesar.decrypt(&caesar.encrypt("абв")), "абв");
}

/// Steps at the i64 extremes still round-trip exactly.
#[test]
fn caesar_step_extremes_round_trip() {
    for step in [i64::MIN, -7_777_777_777, 0, 7_777_777_777, i64::MAX] {
        let caesar = Caesar::with_step(step);
        let plain = "Я z9~ ё中";
        assert_eq!(
            caesar.decrypt(&caesar.encrypt(plain)),
            plain,
            "round trip broke at step {}",
            step
        );
    }
}

/// Lowercase never crosses into uppercase and vice versa — lower and
/// upper are separate alphabets.
#[test]
fn caesar_case_isolation_full_scan() {
    let caesar = Caesar::new();
    let lower: String = ('a'..='z').collect();
    let upper: String = ('A'..='Z').collect();
    assert!(caesar.encrypt(&lower).chars().all(|c| c.is_ascii_lowercase()));
    assert!(caesar.encrypt(&upper).chars().all(|c| c.is_ascii_uppercase()));

    let cyr_lower = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
    let encrypted = caesar.encrypt(cyr_lower);
    assert!(encrypted.chars().all(|c| cyr_lower.contains(c)));
}

// ═══════════════════════════════════════════════════════════════════════
// Atbash — involution and frozen vectors
// ═══════════════════════════════════════════════════════════════════════

/// The classic worked example, and its immediate reversal.
#[test]
fn atbash_worked_example() {
    let atbash = Atbash::new();
    assert_eq!(atbash.encrypt("abz"), "zya");
    assert_eq!(atbash.encrypt("zya"), "abz");
}

/// encrypt and decrypt are the same operation.
#[test]
fn atbash_encrypt_equals_decrypt() {
    let atbash = Atbash::new();
    let text = "Зеркало mirror 123";
    assert_eq!(atbash.encrypt(text), atbash.decrypt(text));
}

/// Double application is the identity over every standard alphabet at once.
#[test]
fn atbash_double_application_is_identity() {
    let atbash = Atbash::new();
    let text = "АБВ abc XYZ эюя 0123456789 !\"#~ 中立";
    assert_eq!(atbash.encrypt(&atbash.encrypt(text)), text);
}

/// Frozen edge vectors: first and last positions of each alphabet swap.
#[test]
fn atbash_alphabet_edges() {
    let atbash = Atbash::new();
    assert_eq!(atbash.encrypt("аяАЯazAZ ~"), "яаЯАzaZA~ ");
}

// ═══════════════════════════════════════════════════════════════════════
// Alphabet classification — overlap policy and foreign characters
// ═══════════════════════════════════════════════════════════════════════

/// Overlapping custom domains are legal; the first domain in declaration
/// order claims the shared character, for both ciphers identically.
#[test]
fn overlapping_domains_resolve_by_first_match() {
    let overlapping = || {
        AlphabetSet::from_domains(vec![
            Alphabet::new("first", "abcd").unwrap(),
            Alphabet::new("second", "cdef").unwrap(),
        ])
    };

    // 'c' belongs to "first" (position 2 of 4); step 1 gives 'd', not 'e'
    let caesar = Caesar::with_alphabets(overlapping(), 1);
    assert_eq!(caesar.encrypt("c"), "d");

    // mirror of 'c' within "first" is 'b', not within "second"
    let atbash = Atbash::with_alphabets(overlapping());
    assert_eq!(atbash.encrypt("c"), "b");
}

/// Characters outside every domain are copied unchanged at their position.
#[test]
fn foreign_characters_pass_through_in_place() {
    let caesar = Caesar::new();
    let atbash = Atbash::new();
    let text = "a中b\tc\nß€";
    for codec in [&caesar as &dyn SubstitutionCodec, &atbash] {
        let out = codec.encrypt(text);
        for (i, (p, c)) in text.chars().zip(out.chars()).enumerate() {
            if "中\t\nß€".contains(p) {
                assert_eq!(p, c, "foreign char moved or changed at position {}", i);
            }
        }
    }
}

/// Building an alphabet with a repeated character is rejected.
#[test]
fn duplicate_character_rejected_at_construction() {
    let err = Alphabet::new("dup", "xyzx").unwrap_err();
    assert_eq!(
        err,
        KolovratError::DuplicateChar {
            alphabet: "dup".to_owned(),
            ch: 'x',
        }
    );
}

/// Empty input is legal for both ciphers.
#[test]
fn empty_string_round_trips() {
    let caesar = Caesar::new();
    let atbash = Atbash::new();
    assert_eq!(caesar.encrypt(""), "");
    assert_eq!(caesar.decrypt(""), "");
    assert_eq!(atbash.encrypt(""), "");
}

// ═══════════════════════════════════════════════════════════════════════
// SealedText — encrypt-on-write / decrypt-on-read
// ═══════════════════════════════════════════════════════════════════════

/// The worked storage example: write "Hi!", observe a different
/// ciphertext, read the original back.
#[test]
fn sealed_text_worked_example() {
    let mut sealed = SealedText::new(Caesar::new());
    sealed.set_plaintext("Hi!");

    let ciphertext = sealed.ciphertext().to_owned();
    assert_ne!(ciphertext, "Hi!");
    assert_eq!(sealed.plaintext(), "Hi!");
    // reading ciphertext first must not disturb the plaintext read
    assert_eq!(sealed.ciphertext(), ciphertext);
}

/// A never-written slot reads as the empty string.
#[test]
fn sealed_text_defaults_to_empty() {
    let sealed = SealedText::new(Atbash::new());
    assert_eq!(sealed.ciphertext(), "");
    assert_eq!(sealed.plaintext(), "");
}

/// The wrapper works identically over either codec.
#[test]
fn sealed_text_over_atbash() {
    let mut sealed = SealedText::new(Atbash::new());
    sealed.set_plaintext("Зазеркалье 7");
    assert_ne!(sealed.ciphertext(), "Зазеркалье 7");
    assert_eq!(sealed.plaintext(), "Зазеркалье 7");
}

/// The byte boundary is where non-textual input is rejected; the codec
/// itself never sees it.
#[test]
fn sealed_text_rejects_non_textual_bytes() {
    let mut sealed = SealedText::new(Caesar::new());
    sealed.set_plaintext("untouched");

    let err = sealed.set_plaintext_bytes(&[0xC3, 0x28]).unwrap_err();
    assert!(matches!(err, KolovratError::InvalidInputType(_)));
    assert_eq!(sealed.plaintext(), "untouched");

    // valid UTF-8 bytes are accepted
    sealed.set_plaintext_bytes("ещё".as_bytes()).unwrap();
    assert_eq!(sealed.plaintext(), "ещё");
}

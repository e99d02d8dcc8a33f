//! Cross-compatibility vectors frozen from the original Java implementation.
//!
//! The Java combined raw character codes (`plainChar + keyChar`) before
//! reducing modulo 26; because `2 * 'A'` is a multiple of 26 this coincides
//! with the textbook 0-based tabula recta on uppercase input. These vectors
//! pin both readings at once: any change in output breaks compatibility
//! with the Java ciphertexts and with standard Vigenère tables.

use vigenere::VigenereCipher;

/// Keyword and message used by the Java self-test driver.
const KEYWORD: &str = "HOUGHTON";
const MESSAGE: &str = "MICHIGANTECHNOLOGICALUNIVERSITY";

/// Frozen key for the Java self-test scenario.
const EXPECTED_KEY: &str = "HOUGHTONHOUGHTONHOUGHTONHOUGHTO";

/// Frozen ciphertext for the Java self-test scenario.
const EXPECTED_CIPHER: &str = "TWWNPZOAASWNUHZBNWWGSNBVCSLYPMM";

/// Key derivation must match the Java output exactly.
#[test]
fn houghton_key_frozen() {
    let cipher = VigenereCipher::new();
    let key = cipher.generate_key(KEYWORD, MESSAGE.len() as i32).unwrap();
    assert_eq!(key, EXPECTED_KEY);
}

/// Encryption must match the Java ciphertext character-for-character.
#[test]
fn houghton_ciphertext_frozen() {
    let cipher = VigenereCipher::new();
    let key = cipher.generate_key(KEYWORD, MESSAGE.len() as i32).unwrap();
    assert_eq!(cipher.encrypt(&key, MESSAGE).unwrap(), EXPECTED_CIPHER);
}

/// Decrypting the frozen ciphertext restores the original message.
#[test]
fn houghton_roundtrip() {
    let cipher = VigenereCipher::new();
    let key = cipher.generate_key(KEYWORD, MESSAGE.len() as i32).unwrap();
    assert_eq!(cipher.decrypt(&key, EXPECTED_CIPHER).unwrap(), MESSAGE);
}

/// The keyword itself also cycles correctly without pre-derivation: a key
/// shorter than the message is tolerated and wraps.
#[test]
fn houghton_keyword_used_directly() {
    let cipher = VigenereCipher::new();
    let from_keyword = cipher.encrypt(KEYWORD, MESSAGE).unwrap();
    assert_eq!(from_keyword, EXPECTED_CIPHER);
}

/// Textbook vector (Wikipedia): confirms the arithmetic convention matches
/// the standard tabula recta, not just the Java port.
#[test]
fn textbook_lemon_vector() {
    let cipher = VigenereCipher::new();
    assert_eq!(
        cipher.encrypt("LEMON", "ATTACKATDAWN").unwrap(),
        "LXFOPVEFRNHR"
    );
    assert_eq!(
        cipher.decrypt("LEMON", "LXFOPVEFRNHR").unwrap(),
        "ATTACKATDAWN"
    );
}

/// Single-letter frozen snapshots covering wrap-around at the alphabet end.
#[test]
fn single_letter_vectors() {
    let cipher = VigenereCipher::new();
    assert_eq!(cipher.encrypt("B", "A").unwrap(), "B");
    assert_eq!(cipher.encrypt("Z", "Z").unwrap(), "Y"); // (25 + 25) mod 26 == 24
    assert_eq!(cipher.encrypt("B", "Z").unwrap(), "A"); // wraps past Z
    assert_eq!(cipher.decrypt("B", "A").unwrap(), "Z"); // wraps below A
}

//! VigenereCipher: the cipher engine.
//!
//! Owns the keyword-to-key derivation and the encrypt/decrypt transforms.
//! Stateless: every method is a pure function of its arguments, so one
//! engine instance can be shared freely across threads.
//!
//! Output-compatible character-for-character with the Java `VigenereCipher`.
//! The Java combined raw character codes (`plainChar + keyChar`) before
//! reducing modulo 26; this port uses 0-based alphabet indices instead. The
//! two agree on every uppercase input because `2 * 'A' = 130` is a multiple
//! of 26, so the index math is also the textbook tabula recta convention.

use crate::alphabet::{letter, to_indices, NUM_CHARS};
use crate::error::VigenereError;
use crate::table::VigenereTable;

/// Vigenère cipher engine over the 26-letter uppercase Latin alphabet.
///
/// Inputs to [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt) are
/// uppercased internally; characters outside A-Z are rejected rather than
/// passed through. This cipher is historically broken and offers no real
/// confidentiality.
///
/// # Examples
///
/// Derive a key from a keyword, encrypt, and decrypt:
///
/// ```
/// use vigenere::VigenereCipher;
///
/// let cipher = VigenereCipher::new();
/// let message = "ATTACKATDAWN";
///
/// let key = cipher.generate_key("LEMON", message.len() as i32).unwrap();
/// assert_eq!(key, "LEMONLEMONLE");
///
/// let encrypted = cipher.encrypt(&key, message).unwrap();
/// assert_eq!(encrypted, "LXFOPVEFRNHR");
///
/// let decrypted = cipher.decrypt(&key, &encrypted).unwrap();
/// assert_eq!(decrypted, message);
/// ```
///
/// A short key cycles over a longer message:
///
/// ```
/// use vigenere::VigenereCipher;
///
/// let cipher = VigenereCipher::new();
/// assert_eq!(cipher.encrypt("AB", "AAAA").unwrap(), "ABAB");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VigenereCipher;

impl VigenereCipher {
    /// Creates a new cipher engine.
    pub fn new() -> Self {
        VigenereCipher
    }

    /// Builds a key of exactly `key_length` characters by repeating
    /// `keyword`, truncating the final repetition to fit.
    ///
    /// The result preserves the keyword's case; `encrypt` and `decrypt`
    /// uppercase their inputs themselves.
    ///
    /// # Parameters
    /// - `keyword`: Non-empty sequence of letters (either case).
    /// - `key_length`: Target key length, typically the message length.
    ///   Kept as `i32` to match the Java `int` parameter; negative values
    ///   are an error here where the Java only printed a warning.
    ///
    /// # Returns
    /// A key of exactly `key_length` characters.
    ///
    /// # Errors
    /// - [`VigenereError::NegativeKeyLength`] if `key_length < 0`.
    /// - [`VigenereError::EmptyKeyword`] if `keyword` is empty.
    /// - [`VigenereError::NonAlphabetic`] if `keyword` contains a non-letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::VigenereCipher;
    ///
    /// let cipher = VigenereCipher::new();
    /// assert_eq!(cipher.generate_key("AB", 5).unwrap(), "ABABA");
    /// assert_eq!(cipher.generate_key("X", 0).unwrap(), "");
    /// assert!(cipher.generate_key("X", -1).is_err());
    /// ```
    pub fn generate_key(&self, keyword: &str, key_length: i32) -> Result<String, VigenereError> {
        if key_length < 0 {
            return Err(VigenereError::NegativeKeyLength);
        }
        if keyword.is_empty() {
            return Err(VigenereError::EmptyKeyword);
        }
        for (position, character) in keyword.chars().enumerate() {
            if !character.is_ascii_alphabetic() {
                return Err(VigenereError::NonAlphabetic {
                    position,
                    character,
                });
            }
        }

        let chars: Vec<char> = keyword.chars().collect();
        let mut key = String::with_capacity(key_length as usize);
        for i in 0..key_length as usize {
            key.push(chars[i % chars.len()]);
        }
        Ok(key)
    }

    /// Encrypts `plain_text` under `key`.
    ///
    /// Both arguments are uppercased internally. Each plaintext letter is
    /// shifted by the key letter at the same position, the key cycling with
    /// `i mod len(key)`; the key does not have to match the message length.
    ///
    /// # Parameters
    /// - `key`: Non-empty sequence of letters.
    /// - `plain_text`: Message to encrypt; letters only.
    ///
    /// # Returns
    /// Uppercase ciphertext of the same length as `plain_text`.
    ///
    /// # Errors
    /// - [`VigenereError::EmptyKey`] if `key` is empty.
    /// - [`VigenereError::NonAlphabetic`] if either input contains a
    ///   non-letter character.
    pub fn encrypt(&self, key: &str, plain_text: &str) -> Result<String, VigenereError> {
        let key_indices = Self::key_indices(key)?;
        let text_indices = to_indices(plain_text)?;

        let mut cipher_text = String::with_capacity(text_indices.len());
        for (i, &p) in text_indices.iter().enumerate() {
            let k = key_indices[i % key_indices.len()];
            cipher_text.push(letter(p as usize + k as usize) as char);
        }
        Ok(cipher_text)
    }

    /// Decrypts `cipher_text` under `key`.
    ///
    /// Exact inverse of [`encrypt`](Self::encrypt): each ciphertext letter
    /// is shifted back by the key letter at the same position, with the
    /// same key cycling and normalization rules.
    ///
    /// # Parameters
    /// - `key`: Non-empty sequence of letters.
    /// - `cipher_text`: Message to decrypt; letters only.
    ///
    /// # Returns
    /// Uppercase plaintext of the same length as `cipher_text`.
    ///
    /// # Errors
    /// - [`VigenereError::EmptyKey`] if `key` is empty.
    /// - [`VigenereError::NonAlphabetic`] if either input contains a
    ///   non-letter character.
    pub fn decrypt(&self, key: &str, cipher_text: &str) -> Result<String, VigenereError> {
        let key_indices = Self::key_indices(key)?;
        let text_indices = to_indices(cipher_text)?;

        let mut plain_text = String::with_capacity(text_indices.len());
        for (i, &c) in text_indices.iter().enumerate() {
            let k = key_indices[i % key_indices.len()];
            plain_text.push(letter(c as usize + NUM_CHARS - k as usize) as char);
        }
        Ok(plain_text)
    }

    /// Returns the shared 26×26 Vigenère table.
    ///
    /// The table is a cached view of the same shift function the transforms
    /// compute arithmetically; it is never consulted by `encrypt`/`decrypt`.
    pub fn table(&self) -> &'static VigenereTable {
        VigenereTable::shared()
    }

    /// Validates the key and converts it to alphabet indices.
    fn key_indices(key: &str) -> Result<Vec<u8>, VigenereError> {
        if key.is_empty() {
            return Err(VigenereError::EmptyKey);
        }
        to_indices(key)
    }
}

//! Vigenère polyalphabetic substitution cipher over the 26-letter alphabet.
//!
//! Derives a full-length key by repeating a keyword, then shifts each
//! plaintext letter by the corresponding key letter modulo 26. Decryption
//! applies the inverse shift. All input is normalized to uppercase; only
//! the letters A-Z are accepted.
//!
//! This crate is a port of a classroom Java implementation, compatible
//! character-for-character with its output. It is a study of a classical
//! cipher, not a security tool: the Vigenère cipher has been broken since
//! the 19th century and provides no confidentiality against frequency
//! analysis.
//!
//! # Architecture
//!
//! ```text
//! alphabet       (A-Z constants, uppercasing, letter <-> index mapping)
//!     ↑ shared by
//! VigenereTable  (26×26 tabula recta — cached view of (i + j) mod 26)
//! VigenereCipher (engine — generate_key, encrypt, decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use vigenere::VigenereCipher;
//!
//! let cipher = VigenereCipher::new();
//!
//! let message = "MICHIGANTECHNOLOGICALUNIVERSITY";
//! let key = cipher.generate_key("HOUGHTON", message.len() as i32).unwrap();
//! assert_eq!(key, "HOUGHTONHOUGHTONHOUGHTONHOUGHTO");
//!
//! let encrypted = cipher.encrypt(&key, message).unwrap();
//! let decrypted = cipher.decrypt(&key, &encrypted).unwrap();
//! assert_eq!(decrypted, message);
//! ```
//!
//! Invalid input is rejected rather than silently mangled:
//!
//! ```
//! use vigenere::{VigenereCipher, VigenereError};
//!
//! let cipher = VigenereCipher::new();
//! assert_eq!(cipher.generate_key("", 5), Err(VigenereError::EmptyKeyword));
//! assert!(cipher.encrypt("KEY", "NO SPACES").is_err());
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod table;
mod vigenere;

pub use error::VigenereError;
pub use table::VigenereTable;
pub use vigenere::VigenereCipher;

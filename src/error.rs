//! Error types for the Vigenère cipher library.

use std::fmt;

/// Errors produced by the Vigenère cipher library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// Requested key length is negative.
    NegativeKeyLength,
    /// Keyword is empty; repeating it would never reach the target length.
    EmptyKeyword,
    /// Key is empty; the per-character key index would divide by zero.
    EmptyKey,
    /// Input contains a character outside A-Z after uppercasing.
    NonAlphabetic {
        /// 0-based position of the offending character.
        position: usize,
        /// The offending character as supplied (before uppercasing).
        character: char,
    },
}

impl fmt::Display for VigenereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VigenereError::NegativeKeyLength => {
                write!(f, "Key length must be a non-negative number")
            }
            VigenereError::EmptyKeyword => {
                write!(f, "Keyword must be at least 1 character long")
            }
            VigenereError::EmptyKey => {
                write!(f, "Key must be at least 1 character long")
            }
            VigenereError::NonAlphabetic {
                position,
                character,
            } => {
                write!(
                    f,
                    "Character '{}' at position {} is outside the A-Z alphabet",
                    character, position
                )
            }
        }
    }
}

impl std::error::Error for VigenereError {}

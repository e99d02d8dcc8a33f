//! The fixed 26-letter alphabet and input normalization helpers.
//!
//! Everything in the cipher reduces to arithmetic modulo [`NUM_CHARS`] over
//! 0-based alphabet indices. Replicates the `chars` array and `NUMBER_CHARS`
//! constant from the Java `VigenereCipher`, with the index math factored out
//! so the table and the transforms share one definition.

use crate::error::VigenereError;

/// Number of letters in the English alphabet; the modulus for all arithmetic.
pub(crate) const NUM_CHARS: usize = 26;

/// The 26 uppercase Latin letters in order. Index `i` holds `b'A' + i`.
pub(crate) const ALPHABET: [u8; NUM_CHARS] = [
    b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O',
    b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z',
];

/// Uppercases `text` and converts each letter to its 0-based alphabet index.
///
/// # Parameters
/// - `text`: Input text; letters may be either case.
///
/// # Returns
/// One index in `0..26` per input character, in order.
///
/// # Errors
/// Returns [`VigenereError::NonAlphabetic`] for the first character that is
/// not a letter, reporting its position and the character as supplied.
pub(crate) fn to_indices(text: &str) -> Result<Vec<u8>, VigenereError> {
    let mut indices = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let upper = character.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(VigenereError::NonAlphabetic {
                position,
                character,
            });
        }
        indices.push(upper as u8 - b'A');
    }
    Ok(indices)
}

/// Returns the uppercase letter at 0-based alphabet index `i mod 26`.
pub(crate) fn letter(index: usize) -> u8 {
    ALPHABET[index % NUM_CHARS]
}

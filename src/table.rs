//! The 26×26 Vigenère table (tabula recta).
//!
//! Row `i`, column `j` holds the letter at alphabet index `(i + j) mod 26`,
//! replicating the Java `generateVigenereTable()`. The table is a pure
//! derived artifact: [`encrypt`](crate::VigenereCipher::encrypt) and
//! [`decrypt`](crate::VigenereCipher::decrypt) compute the same function
//! arithmetically and never read it. The Java kept it in a mutable static
//! field; here a fresh value comes from [`VigenereTable::new`] and a
//! process-wide read-only copy is memoized behind a `OnceLock`.

use std::fmt;
use std::sync::OnceLock;

use crate::alphabet::{letter, NUM_CHARS};

/// Process-wide memoized table. Write-once; identical regardless of which
/// thread populates it first.
static SHARED_TABLE: OnceLock<VigenereTable> = OnceLock::new();

/// The 26×26 Vigenère lookup table.
///
/// # Examples
///
/// ```
/// use vigenere::VigenereTable;
///
/// let table = VigenereTable::new();
/// assert_eq!(table.letter(0, 0), 'A');
/// assert_eq!(table.letter(1, 25), 'A'); // (1 + 25) mod 26 == 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereTable {
    rows: [[u8; NUM_CHARS]; NUM_CHARS],
}

impl VigenereTable {
    /// Generates a fresh table with `rows[i][j] = ALPHABET[(i + j) mod 26]`.
    pub fn new() -> Self {
        let mut rows = [[0u8; NUM_CHARS]; NUM_CHARS];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = letter(i + j);
            }
        }
        VigenereTable { rows }
    }

    /// Returns the process-wide memoized table.
    ///
    /// The first caller generates it; later callers (from any thread) get
    /// the same read-only instance. Safe to share without locking.
    pub fn shared() -> &'static VigenereTable {
        SHARED_TABLE.get_or_init(VigenereTable::new)
    }

    /// Returns the letter at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is 26 or greater.
    pub fn letter(&self, i: usize, j: usize) -> char {
        self.rows[i][j] as char
    }
}

impl Default for VigenereTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VigenereTable {
    /// Renders the table as 26 lines of space-separated letters, the format
    /// printed by the Java `printVigenereTable()`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &cell in row {
                write!(f, "{} ", cell as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

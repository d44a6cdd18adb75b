//! Playfair digraph cipher.
//!
//! The key is upper-cased with every `J` folded into `I`, then laid into a
//! 5×5 [`KeySquare`]: the key's distinct letters in first-occurrence order,
//! followed by the rest of the alphabet without `J`. Text is processed two
//! characters at a time:
//!
//! - same row: each letter moves one cell right (left when decrypting)
//! - same column: each letter moves one cell down (up when decrypting)
//! - otherwise: each letter takes the other letter's column
//!
//! A pair containing a non-alphabetic character is copied through unchanged.
//!
//! ## Encrypt/decrypt asymmetry
//!
//! Encryption folds `J` into `I` and pads odd-length text with a trailing
//! `X`. Decryption does neither: it only upper-cases. Cipher text produced by
//! [`PlayfairCipher::encrypt`] always has even length and no `J`, so the pair
//! round-trips, but external cipher text containing `J` fails with
//! `CipherError::CharacterNotFound` and a dangling final character of
//! odd-length input is copied through. The padding `X` is never stripped.
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::playfair::PlayfairCipher;
//!
//! let cipher = PlayfairCipher::new("delta").expect("alphabetic key");
//! let encrypted = cipher.encrypt("hello").expect("ASCII letters are in the square");
//! assert_eq!(encrypted, "cattmz");
//!
//! let decrypted = cipher.decrypt(&encrypted).expect("cipher text has no J");
//! assert_eq!(decrypted, "hellox");
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{CipherError, Result};

/// Side length of the key square.
pub const SQUARE_SIZE: usize = 5;

/// Letter folded into [`MERGED_INTO`] before keying and encryption.
pub const MERGED_LETTER: char = 'J';

/// Letter that stands in for [`MERGED_LETTER`] in the square.
pub const MERGED_INTO: char = 'I';

/// Filler appended to odd-length plain text.
pub const PAD_LETTER: char = 'X';

/// Key used by [`PlayfairCipher::default`].
pub const DEFAULT_PLAYFAIR_KEY: &str = "DELTA";

/// 5×5 grid of the 25 letters `A`-`Z` without `J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
}

impl KeySquare {
    /// Build the square for a key.
    ///
    /// The key is normalized the same way [`PlayfairCipher`] does, so keys
    /// differing only in case (or in `J` versus `I`) give identical squares.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key is empty or not entirely
    /// alphabetic.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self::build(&normalize_key(key)?))
    }

    /// Lay out an already-normalized key.
    fn build(key: &str) -> Self {
        let mut order: Vec<char> = Vec::with_capacity(SQUARE_SIZE * SQUARE_SIZE);
        for c in key.chars().chain('A'..='Z') {
            if c != MERGED_LETTER && !order.contains(&c) {
                order.push(c);
            }
        }

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, c) in order.into_iter().enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = c;
        }
        Self { cells }
    }

    /// Rows of the square, top to bottom.
    pub fn rows(&self) -> &[[char; SQUARE_SIZE]; SQUARE_SIZE] {
        &self.cells
    }

    /// Letter at `(row, col)`, both taken modulo the square size.
    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.cells[row % SQUARE_SIZE][col % SQUARE_SIZE]
    }

    /// `(row, col)` of an upper-case letter.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CharacterNotFound` for anything without a cell,
    /// which includes `J` and alphabetic characters outside `A`-`Z`.
    pub fn position(&self, c: char) -> Result<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(row, line)| line.iter().position(|&cell| cell == c).map(|col| (row, col)))
            .ok_or(CipherError::CharacterNotFound(c))
    }

    /// Substitute one all-letter digraph, moving `step` cells for the
    /// same-row and same-column rules.
    fn digraph(&self, a: char, b: char, step: usize) -> Result<(char, char)> {
        let (row_a, col_a) = self.position(a)?;
        let (row_b, col_b) = self.position(b)?;

        let pair = if row_a == row_b {
            (
                self.letter_at(row_a, col_a + step),
                self.letter_at(row_b, col_b + step),
            )
        } else if col_a == col_b {
            (
                self.letter_at(row_a + step, col_a),
                self.letter_at(row_b + step, col_b),
            )
        } else {
            (self.letter_at(row_a, col_b), self.letter_at(row_b, col_a))
        };
        Ok(pair)
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Playfair cipher with its derived key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    key: String,
    square: KeySquare,
}

impl PlayfairCipher {
    /// Create a new Playfair cipher.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key is empty or, after
    /// upper-casing and folding `J` into `I`, contains anything other than
    /// ASCII letters.
    pub fn new(key: &str) -> Result<Self> {
        let key = normalize_key(key)?;
        let square = KeySquare::build(&key);
        Ok(Self { key, square })
    }

    /// Current key, upper-cased with `J` folded into `I`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key square derived from the current key.
    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    /// Replace the key and regenerate the square.
    ///
    /// On error both the key and the square are left untouched.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        let key = normalize_key(key)?;
        let square = KeySquare::build(&key);
        debug!(key = %key, "playfair key changed, square regenerated");
        self.key = key;
        self.square = square;
        Ok(())
    }

    /// Encrypt text, padding odd lengths with `X`. Output is lowercase.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CharacterNotFound` if a digraph contains an
    /// alphabetic character outside `A`-`Z`.
    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        let mut chars: Vec<char> = plain_text
            .to_uppercase()
            .chars()
            .map(fold_merged)
            .collect();
        if chars.len() % 2 != 0 {
            chars.push(PAD_LETTER);
        }
        self.substitute(&chars, 1)
    }

    /// Decrypt text. Output is lowercase and keeps any padding `X`.
    ///
    /// Input is only upper-cased; see the module docs for why `J` is not
    /// folded here.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CharacterNotFound` if a digraph contains `J` or
    /// an alphabetic character outside `A`-`Z`.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String> {
        let chars: Vec<char> = cipher_text.to_uppercase().chars().collect();
        // Moving SQUARE_SIZE - 1 cells forward is one cell back
        self.substitute(&chars, SQUARE_SIZE - 1)
    }

    fn substitute(&self, chars: &[char], step: usize) -> Result<String> {
        trace!(len = chars.len(), step, "playfair pass");
        let mut out = String::with_capacity(chars.len());

        for pair in chars.chunks(2) {
            match *pair {
                [a, b] if a.is_alphabetic() && b.is_alphabetic() => {
                    let (x, y) = self.square.digraph(a, b, step)?;
                    out.push(x);
                    out.push(y);
                }
                _ => out.extend(pair),
            }
        }

        Ok(out.to_lowercase())
    }
}

impl Default for PlayfairCipher {
    fn default() -> Self {
        let key = DEFAULT_PLAYFAIR_KEY.to_string();
        let square = KeySquare::build(&key);
        Self { key, square }
    }
}

fn fold_merged(c: char) -> char {
    if c == MERGED_LETTER { MERGED_INTO } else { c }
}

fn normalize_key(key: &str) -> Result<String> {
    let key: String = key
        .to_uppercase()
        .chars()
        .map(fold_merged)
        .collect();

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(CipherError::InvalidKey(
            "playfair key must be a non-empty alphabetic string".to_string(),
        ));
    }
    Ok(key)
}

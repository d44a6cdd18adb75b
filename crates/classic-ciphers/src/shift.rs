//! Shift (simple substitution) cipher over raw code points.
//!
//! Every character of the input, including whitespace and control
//! characters, is moved `key` code points forward on encryption and back on
//! decryption. There is no alphabet and no wraparound, so a key larger than
//! 26 is meaningful and a shifted value may leave the printable range.
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::shift::ShiftCipher;
//!
//! let cipher = ShiftCipher::new(3).expect("3 is a valid shift key");
//! let encrypted = cipher.encrypt("abc xyz").expect("shift stays in range");
//! assert_eq!(encrypted, "def#{|}");
//!
//! let decrypted = cipher.decrypt(&encrypted).expect("shift stays in range");
//! assert_eq!(decrypted, "abc xyz");
//! ```

use tracing::debug;

use crate::error::{CipherError, Result};

/// Smallest key accepted by [`ShiftCipher`].
pub const MIN_SHIFT_KEY: i64 = 2;

/// Key used by [`ShiftCipher::default`].
pub const DEFAULT_SHIFT_KEY: i64 = 13;

/// Code-point shift cipher.
///
/// Encryption and decryption with the same key are exact inverses for any
/// string whose shifted code points remain valid `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftCipher {
    key: i64,
}

impl ShiftCipher {
    /// Create a new shift cipher.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if `key` is lower than 2.
    pub fn new(key: i64) -> Result<Self> {
        validate_key(key)?;
        Ok(Self { key })
    }

    /// Current key.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Replace the key. The previous key is kept if validation fails.
    pub fn set_key(&mut self, key: i64) -> Result<()> {
        validate_key(key)?;
        debug!(old = self.key, new = key, "shift key changed");
        self.key = key;
        Ok(())
    }

    /// Shift every character forward by the key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CodePointOutOfRange` when a shifted value lands
    /// on a surrogate or past `U+10FFFF`.
    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        shift_all(plain_text, self.key)
    }

    /// Shift every character back by the key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::CodePointOutOfRange` when a shifted value is
    /// negative or lands on a surrogate.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String> {
        shift_all(cipher_text, -self.key)
    }
}

impl Default for ShiftCipher {
    fn default() -> Self {
        Self {
            key: DEFAULT_SHIFT_KEY,
        }
    }
}

fn validate_key(key: i64) -> Result<()> {
    if key < MIN_SHIFT_KEY {
        return Err(CipherError::InvalidKey(format!(
            "shift key can't be lower than {MIN_SHIFT_KEY}, got {key}"
        )));
    }
    Ok(())
}

fn shift_all(text: &str, offset: i64) -> Result<String> {
    text.chars().map(|c| shift_char(c, offset)).collect()
}

fn shift_char(c: char, offset: i64) -> Result<char> {
    let code = i64::from(u32::from(c)).saturating_add(offset);
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(CipherError::CodePointOutOfRange(code))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_round_trip() {
        let cipher = ShiftCipher::new(13).expect("valid key");
        let plaintext = "Hello, World!\n\tTabs and newlines too.";

        let ciphertext = cipher.encrypt(plaintext).unwrap();
        assert_ne!(ciphertext, plaintext);

        let decrypted = cipher.decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_shift_known_vector() {
        let cipher = ShiftCipher::new(2).expect("valid key");
        assert_eq!(cipher.encrypt("abc").unwrap(), "cde");
        assert_eq!(cipher.encrypt("a z").unwrap(), "c\"|");
    }

    #[test]
    fn test_shift_does_not_wrap() {
        // 'z' + 3 is '}', not 'c'
        let cipher = ShiftCipher::new(3).expect("valid key");
        assert_eq!(cipher.encrypt("xyz").unwrap(), "{|}");
    }

    #[test]
    fn test_shift_large_key() {
        let cipher = ShiftCipher::new(1000).expect("valid key");
        let encrypted = cipher.encrypt("A").unwrap();
        assert_eq!(encrypted, "\u{0429}");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "A");
    }

    #[test]
    fn test_shift_empty_text() {
        let cipher = ShiftCipher::default();
        assert_eq!(cipher.encrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_shift_invalid_key() {
        assert!(matches!(ShiftCipher::new(1), Err(CipherError::InvalidKey(_))));
        assert!(matches!(ShiftCipher::new(0), Err(CipherError::InvalidKey(_))));
        assert!(matches!(
            ShiftCipher::new(-5),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(ShiftCipher::new(2).is_ok());
    }

    #[test]
    fn test_shift_set_key_keeps_previous_on_error() {
        let mut cipher = ShiftCipher::new(5).expect("valid key");
        assert!(cipher.set_key(1).is_err());
        assert_eq!(cipher.key(), 5);

        cipher.set_key(7).expect("valid key");
        assert_eq!(cipher.key(), 7);
    }

    #[test]
    fn test_shift_default_key() {
        assert_eq!(ShiftCipher::default().key(), DEFAULT_SHIFT_KEY);
    }

    #[test]
    fn test_shift_out_of_range() {
        let cipher = ShiftCipher::new(2).expect("valid key");

        // Decrypting below U+0000
        assert_eq!(
            cipher.decrypt("\u{1}"),
            Err(CipherError::CodePointOutOfRange(-1))
        );

        // Landing on a surrogate
        assert_eq!(
            cipher.encrypt("\u{D7FF}"),
            Err(CipherError::CodePointOutOfRange(0xD801))
        );

        // Past the last scalar value
        assert_eq!(
            cipher.encrypt("\u{10FFFF}"),
            Err(CipherError::CodePointOutOfRange(0x11_0001))
        );
    }
}

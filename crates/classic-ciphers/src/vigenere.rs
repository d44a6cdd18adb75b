//! Vigenère polyalphabetic cipher.
//!
//! Text is lowercased before processing, so case is not preserved. Letters
//! `a`-`z` are shifted by the matching letter of the extended key modulo 26.
//! Any other character passes through unchanged but still consumes a key
//! position: the key is extended once to the full length of the text and the
//! two are zipped position by position.

use tracing::{debug, trace};

use crate::error::{CipherError, Result};

const ALPHABET_LEN: u8 = 26;

/// Vigenère cipher keyed by a lowercase alphabetic string.
///
/// # Examples
///
/// ```rust
/// use classic_ciphers::vigenere::VigenereCipher;
///
/// let cipher = VigenereCipher::new("KEY").expect("alphabetic key");
/// assert_eq!(cipher.key(), "key");
/// assert_eq!(cipher.encrypt("hello"), "rijvs");
/// assert_eq!(cipher.decrypt("rijvs"), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    key: String,
}

impl VigenereCipher {
    /// Create a new Vigenère cipher.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if `key` is empty or contains
    /// anything other than ASCII letters.
    pub fn new(key: &str) -> Result<Self> {
        Ok(Self {
            key: normalize_key(key)?,
        })
    }

    /// Current key, lowercase.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the key. The previous key is kept if validation fails.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        let key = normalize_key(key)?;
        debug!(len = key.len(), "vigenere key changed");
        self.key = key;
        Ok(())
    }

    /// Repeat the key until it is `len` characters long.
    pub fn extend_key(&self, len: usize) -> Vec<u8> {
        self.key.bytes().cycle().take(len).collect()
    }

    /// Encrypt lowercase-folded text.
    pub fn encrypt(&self, plain_text: &str) -> String {
        self.transform(plain_text, |c, k| (c - b'a' + (k - b'a')) % ALPHABET_LEN)
    }

    /// Decrypt lowercase-folded text.
    pub fn decrypt(&self, cipher_text: &str) -> String {
        self.transform(cipher_text, |c, k| {
            (c - b'a' + ALPHABET_LEN - (k - b'a')) % ALPHABET_LEN
        })
    }

    /// Zip the folded text with the extended key and apply `op` to letters.
    ///
    /// `op` receives the text letter and key letter as ASCII bytes and returns
    /// the output letter's offset from `a`.
    fn transform(&self, text: &str, op: impl Fn(u8, u8) -> u8) -> String {
        let text = text.to_lowercase();
        let extended_key = self.extend_key(text.chars().count());
        trace!(len = extended_key.len(), "vigenere pass");

        text.chars()
            .zip(extended_key)
            .map(|(c, k)| {
                if c.is_ascii_lowercase() {
                    char::from(b'a' + op(c as u8, k))
                } else {
                    c
                }
            })
            .collect()
    }
}

fn normalize_key(key: &str) -> Result<String> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey(
            "vigenere key must contain only alphabetic characters".to_string(),
        ));
    }
    Ok(key.to_ascii_lowercase())
}

//! Common capability over the three ciphers.
//!
//! [`Cipher`] is the closed set of variants, each carrying its own key and
//! derived state. Front-ends that only know a cipher by name and a key
//! string go through [`CipherKind`] and [`Cipher::from_key`].

use std::fmt;
use std::str::FromStr;

use crate::error::{CipherError, Result};
use crate::playfair::PlayfairCipher;
use crate::shift::ShiftCipher;
use crate::vigenere::VigenereCipher;

/// Symmetric text transformation.
pub trait TextCipher {
    /// Encrypt plain text.
    fn encrypt(&self, plain_text: &str) -> Result<String>;

    /// Decrypt cipher text.
    fn decrypt(&self, cipher_text: &str) -> Result<String>;

    /// Run the transformation selected by `direction`.
    fn apply(&self, direction: Direction, text: &str) -> Result<String> {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}

impl TextCipher for ShiftCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        Self::encrypt(self, plain_text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        Self::decrypt(self, cipher_text)
    }
}

impl TextCipher for VigenereCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        Ok(Self::encrypt(self, plain_text))
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        Ok(Self::decrypt(self, cipher_text))
    }
}

impl TextCipher for PlayfairCipher {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        Self::encrypt(self, plain_text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        Self::decrypt(self, cipher_text)
    }
}

/// Which way to run a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plain text to cipher text
    Encrypt,
    /// Cipher text to plain text
    Decrypt,
}

/// Cipher identifier used by configuration and front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// [`ShiftCipher`]
    Shift,
    /// [`VigenereCipher`]
    Vigenere,
    /// [`PlayfairCipher`]
    Playfair,
}

impl CipherKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Shift, Self::Vigenere, Self::Playfair];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Vigenere => "vigenere",
            Self::Playfair => "playfair",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shift" | "caesar" | "substitution" => Ok(Self::Shift),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "playfair" => Ok(Self::Playfair),
            _ => Err(CipherError::UnknownCipher(s.to_string())),
        }
    }
}

/// A keyed cipher of any supported kind.
///
/// # Examples
///
/// ```rust
/// use classic_ciphers::{Cipher, CipherKind};
///
/// let mut cipher = Cipher::from_key(CipherKind::Vigenere, "key").expect("alphabetic key");
/// assert_eq!(cipher.encrypt("hello").expect("vigenere never fails"), "rijvs");
///
/// cipher.set_key("lemon").expect("alphabetic key");
/// assert_eq!(cipher.key(), "lemon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// Code-point shift
    Shift(ShiftCipher),
    /// Vigenère
    Vigenere(VigenereCipher),
    /// Playfair
    Playfair(PlayfairCipher),
}

impl Cipher {
    /// Build a cipher from a textual key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key does not parse or fails
    /// the cipher's validation.
    pub fn from_key(kind: CipherKind, key: &str) -> Result<Self> {
        Ok(match kind {
            CipherKind::Shift => Self::Shift(ShiftCipher::new(parse_shift_key(key)?)?),
            CipherKind::Vigenere => Self::Vigenere(VigenereCipher::new(key)?),
            CipherKind::Playfair => Self::Playfair(PlayfairCipher::new(key)?),
        })
    }

    /// Default-keyed cipher, for kinds that have a default key.
    pub fn default_for(kind: CipherKind) -> Option<Self> {
        match kind {
            CipherKind::Shift => Some(Self::Shift(ShiftCipher::default())),
            CipherKind::Vigenere => None,
            CipherKind::Playfair => Some(Self::Playfair(PlayfairCipher::default())),
        }
    }

    /// Kind of this cipher.
    pub const fn kind(&self) -> CipherKind {
        match self {
            Self::Shift(_) => CipherKind::Shift,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::Playfair(_) => CipherKind::Playfair,
        }
    }

    /// Current key in textual form.
    pub fn key(&self) -> String {
        match self {
            Self::Shift(c) => c.key().to_string(),
            Self::Vigenere(c) => c.key().to_string(),
            Self::Playfair(c) => c.key().to_string(),
        }
    }

    /// Parse and install a new key. The previous key is kept on error.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key is rejected.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        match self {
            Self::Shift(c) => c.set_key(parse_shift_key(key)?),
            Self::Vigenere(c) => c.set_key(key),
            Self::Playfair(c) => c.set_key(key),
        }
    }

    /// Encrypt plain text.
    ///
    /// # Errors
    ///
    /// Propagates the variant's failure: an out-of-range shifted code point
    /// or a character missing from the Playfair square.
    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        match self {
            Self::Shift(c) => c.encrypt(plain_text),
            Self::Vigenere(c) => Ok(c.encrypt(plain_text)),
            Self::Playfair(c) => c.encrypt(plain_text),
        }
    }

    /// Decrypt cipher text.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Cipher::encrypt`].
    pub fn decrypt(&self, cipher_text: &str) -> Result<String> {
        match self {
            Self::Shift(c) => c.decrypt(cipher_text),
            Self::Vigenere(c) => Ok(c.decrypt(cipher_text)),
            Self::Playfair(c) => c.decrypt(cipher_text),
        }
    }
}

impl TextCipher for Cipher {
    fn encrypt(&self, plain_text: &str) -> Result<String> {
        Self::encrypt(self, plain_text)
    }

    fn decrypt(&self, cipher_text: &str) -> Result<String> {
        Self::decrypt(self, cipher_text)
    }
}

impl From<ShiftCipher> for Cipher {
    fn from(cipher: ShiftCipher) -> Self {
        Self::Shift(cipher)
    }
}

impl From<VigenereCipher> for Cipher {
    fn from(cipher: VigenereCipher) -> Self {
        Self::Vigenere(cipher)
    }
}

impl From<PlayfairCipher> for Cipher {
    fn from(cipher: PlayfairCipher) -> Self {
        Self::Playfair(cipher)
    }
}

/// Transform each whitespace-separated word on its own and join the results
/// with single spaces.
///
/// With Playfair this pads every odd-length word rather than only the end of
/// the message, and keeps digraphs from straddling words.
///
/// ```rust
/// use classic_ciphers::{transform_words, Direction, PlayfairCipher};
///
/// let cipher = PlayfairCipher::new("delta").expect("alphabetic key");
/// let out = transform_words(&cipher, Direction::Encrypt, "meet me").expect("letters only");
/// assert_eq!(out, "klla kl");
/// ```
pub fn transform_words<C: TextCipher + ?Sized>(
    cipher: &C,
    direction: Direction,
    text: &str,
) -> Result<String> {
    let words = text
        .split_whitespace()
        .map(|word| cipher.apply(direction, word))
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}

fn parse_shift_key(key: &str) -> Result<i64> {
    key.trim()
        .parse()
        .map_err(|e| CipherError::InvalidKey(format!("shift key must be an integer: {e}")))
}

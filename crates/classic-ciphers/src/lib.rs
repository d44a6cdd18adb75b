//! Classical text ciphers
//!
//! This crate implements three pre-modern ciphers behind a common
//! encrypt/decrypt contract. None of them offers any real security; they are
//! kept for teaching and for compatibility with existing cipher texts.
//!
//! # Components
//!
//! - **Shift**: moves every character's code point by a fixed key, with no alphabet and no wraparound
//! - **Vigenère**: mod-26 substitution driven by a repeating alphabetic key
//! - **Playfair**: digraph substitution over a 5×5 key square with `I`/`J` merged
//!
//! Each cipher validates its key on construction and on [`set_key`](Cipher::set_key);
//! a rejected key leaves the previous one in place. [`Cipher`] wraps the three
//! as a closed set of variants and [`TextCipher`] is the capability they all
//! share.
//!
//! # Examples
//!
//! ## Direct use
//!
//! ```
//! use classic_ciphers::VigenereCipher;
//!
//! let cipher = VigenereCipher::new("key").expect("alphabetic key");
//! assert_eq!(cipher.encrypt("hello"), "rijvs");
//! ```
//!
//! ## Selecting a cipher by name
//!
//! ```
//! use classic_ciphers::{Cipher, CipherKind};
//!
//! let kind: CipherKind = "playfair".parse().expect("known cipher");
//! let cipher = Cipher::from_key(kind, "delta").expect("alphabetic key");
//!
//! let encrypted = cipher.encrypt("hello").expect("letters only");
//! assert_eq!(cipher.decrypt(&encrypted).expect("no J in cipher text"), "hellox");
//! ```

#![warn(missing_docs)]

pub mod cipher;
pub mod error;
pub mod playfair;
pub mod shift;
pub mod vigenere;

pub use error::{CipherError, Result};

// Re-export commonly used types
pub use cipher::{Cipher, CipherKind, Direction, TextCipher, transform_words};
pub use playfair::{KeySquare, PlayfairCipher};
pub use shift::ShiftCipher;
pub use vigenere::VigenereCipher;

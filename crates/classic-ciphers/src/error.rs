//! Error types for cipher operations

use thiserror::Error;

/// Errors that can occur while keying or running a cipher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key failed the cipher's validation rules
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Playfair lookup for a letter that has no cell in the key square
    #[error("Character '{0}' not found in the Playfair square")]
    CharacterNotFound(char),

    /// Shifted code point has no `char` representation
    #[error("Shifted code point {0} is not a valid character")]
    CodePointOutOfRange(i64),

    /// Cipher name did not match any known cipher
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CipherError>;

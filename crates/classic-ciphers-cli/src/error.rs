//! Error types for the command-line front-end.
//!
//! All errors use thiserror; the binary wraps them in `anyhow` at the top.

use std::path::PathBuf;

use classic_ciphers::{CipherError, CipherKind};
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cipher has no default key and none was given
    #[error("The {0} cipher has no default key; pass --key or set CLASSIC_CIPHERS_KEY")]
    MissingKey(CipherKind),

    /// Key given on the command line was rejected by the cipher
    #[error("Key rejected: {0}")]
    Key(#[from] CipherError),

    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Cipher failed on the given text
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Failed to read or write a file
    #[error("Failed to access {}: {source}", path.display())]
    File {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read stdin or write stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Command-line configuration.
//!
//! Configuration can be provided via:
//! - CLI arguments (`--cipher`, `--key`, `--log-level`)
//! - Environment variables (`CLASSIC_CIPHERS_CIPHER`, `CLASSIC_CIPHERS_KEY`)
//! - Default values (shift cipher, the cipher's own default key)
//!
//! `RUST_LOG`, when set, overrides `--log-level`.
//!
//! # Example
//!
//! ```no_run
//! use classic_ciphers_cli::CliConfig;
//!
//! let config = CliConfig::from_args();
//! config.validate().expect("Invalid configuration");
//!
//! let cipher = config.build_cipher().expect("Invalid key");
//! println!("Using {} with key {}", cipher.kind(), cipher.key());
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use classic_ciphers::{Cipher, CipherKind};
use tracing::Level;

use crate::error::ConfigError;

/// Top-level configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "classic-ciphers",
    about = "Encrypt and decrypt text with the shift, Vigenère and Playfair ciphers",
    version
)]
pub struct CliConfig {
    /// Cipher to use (shift, vigenere, playfair)
    #[arg(
        short,
        long,
        global = true,
        env = "CLASSIC_CIPHERS_CIPHER",
        default_value = "shift"
    )]
    pub cipher: CipherKind,

    /// Cipher key; shift and playfair fall back to a default when omitted
    #[arg(short, long, global = true, env = "CLASSIC_CIPHERS_KEY")]
    pub key: Option<String>,

    /// Logging level
    #[arg(short, long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encrypt plain text
    Encrypt(TransformArgs),

    /// Decrypt cipher text
    Decrypt(TransformArgs),

    /// Interactive encrypt / decrypt / change-key loop
    Session(SessionArgs),
}

/// Arguments shared by `encrypt` and `decrypt`.
#[derive(Debug, Clone, Default, Args)]
pub struct TransformArgs {
    /// Text to transform; read from --input or stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Transform each whitespace-separated word on its own
    #[arg(long)]
    pub per_word: bool,
}

/// Arguments for `session`.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Transform each whitespace-separated word on its own
    #[arg(long)]
    pub per_word: bool,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Key changes and per-call details
    Debug,
    /// Normal progress
    Info,
    /// Recoverable problems only
    Warn,
    /// Failures only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl CliConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - no key was given for a cipher without a default key
    /// - the input file doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_none() && Cipher::default_for(self.cipher).is_none() {
            return Err(ConfigError::MissingKey(self.cipher));
        }

        if let Command::Encrypt(args) | Command::Decrypt(args) = &self.command
            && let Some(input) = &args.input
            && !input.exists()
        {
            return Err(ConfigError::InputNotFound(input.clone()));
        }

        Ok(())
    }

    /// Construct the configured cipher.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Key` if the key is rejected, or
    /// `ConfigError::MissingKey` if no key is available.
    pub fn build_cipher(&self) -> Result<Cipher, ConfigError> {
        match &self.key {
            Some(key) => Ok(Cipher::from_key(self.cipher, key)?),
            None => Cipher::default_for(self.cipher).ok_or(ConfigError::MissingKey(self.cipher)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("classic-ciphers").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["encrypt", "hello"]);
        if std::env::var_os("CLASSIC_CIPHERS_CIPHER").is_none() {
            assert_eq!(config.cipher, CipherKind::Shift);
        }
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!matches!(config.command, Command::Session(_)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let config = parse(&["decrypt", "--cipher", "playfair", "--key", "delta", "cattmz"]);
        assert_eq!(config.cipher, CipherKind::Playfair);
        assert_eq!(config.key.as_deref(), Some("delta"));
        match config.command {
            Command::Decrypt(args) => assert_eq!(args.text.as_deref(), Some("cattmz")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_cipher_rejected() {
        let result = CliConfig::try_parse_from(["classic-ciphers", "--cipher", "enigma", "session"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = CliConfig::try_parse_from([
            "classic-ciphers",
            "encrypt",
            "--input",
            "plain.txt",
            "hello",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_vigenere_key() {
        let mut config = parse(&["--cipher", "vigenere", "session"]);
        config.key = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingKey(CipherKind::Vigenere))
        ));

        config.key = Some("lemon".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_input() {
        let config = parse(&["--key", "5", "encrypt", "--input", "/nonexistent/plain.txt"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_build_cipher() {
        let mut config = parse(&["--cipher", "playfair", "session"]);
        config.key = None;
        assert_eq!(config.build_cipher().unwrap().key(), "DELTA");

        config.key = Some("monarchy".to_string());
        assert_eq!(config.build_cipher().unwrap().key(), "MONARCHY");

        config.key = Some("not a key".to_string());
        assert!(matches!(config.build_cipher(), Err(ConfigError::Key(_))));
    }
}

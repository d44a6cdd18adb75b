//! Command-line front-end for the classic-ciphers engine.
//!
//! The engine does all the cipher work; this crate only moves text between
//! the user and a [`Cipher`](classic_ciphers::Cipher):
//! - `config`: CLI/environment configuration and validation
//! - `commands`: one-shot `encrypt` / `decrypt`
//! - `session`: interactive encrypt / decrypt / change-key loop
//! - `error`: front-end error types
//!
//! # Example
//!
//! ```no_run
//! use classic_ciphers_cli::{CliConfig, Command, commands};
//! use classic_ciphers::Direction;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CliConfig::from_args();
//!     config.validate()?;
//!     let cipher = config.build_cipher()?;
//!
//!     if let Command::Encrypt(args) = &config.command {
//!         commands::run_transform(&cipher, Direction::Encrypt, args, std::io::stdin(), std::io::stdout())?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

pub use config::{CliConfig, Command, LogLevel, SessionArgs, TransformArgs};
pub use error::{CliError, ConfigError};
pub use session::Session;

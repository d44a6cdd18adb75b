//! classic-ciphers binary entry point.
//!
//! This is a thin wrapper around the classic-ciphers-cli library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration and builds the cipher
//! 4. Runs the requested command

use std::io;

use anyhow::{Context, Result};
use classic_ciphers::Direction;
use classic_ciphers_cli::{CliConfig, Command, Session, commands};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let config = CliConfig::from_args();

    // Logs go to stderr so stdout carries only cipher output
    let level: Level = config.log_level.into();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
            }),
        )
        .with_writer(io::stderr)
        .init();

    config.validate()?;
    let cipher = config
        .build_cipher()
        .with_context(|| format!("Failed to set up the {} cipher", config.cipher))?;

    tracing::info!("Using {} cipher", cipher.kind());

    match &config.command {
        Command::Encrypt(args) => {
            commands::run_transform(
                &cipher,
                Direction::Encrypt,
                args,
                io::stdin().lock(),
                io::stdout().lock(),
            )
            .context("Encryption failed")?;
        }
        Command::Decrypt(args) => {
            commands::run_transform(
                &cipher,
                Direction::Decrypt,
                args,
                io::stdin().lock(),
                io::stdout().lock(),
            )
            .context("Decryption failed")?;
        }
        Command::Session(args) => {
            Session::new(cipher, io::stdin().lock(), io::stdout().lock())
                .per_word(args.per_word)
                .run()
                .context("Session ended with an I/O error")?;
        }
    }

    Ok(())
}

//! Interactive encrypt / decrypt / change-key loop.
//!
//! Each round prints the menu, reads a message and then an option number:
//!
//! ```text
//! 1. Encrypt
//! 2. Decrypt
//! 3. Change Key
//! Enter the message: hello
//! Enter option num or 0 for quit: 1
//! rijvs
//! ```
//!
//! Option 3 ignores the message and prompts for a new key. A rejected key is
//! reported and the previous key stays active. The loop ends on option 0 or
//! end of input.

use std::io::{BufRead, Write};

use classic_ciphers::{Cipher, Direction, TextCipher, transform_words};
use tracing::{debug, warn};

use crate::error::CliError;

const MENU: [&str; 3] = ["Encrypt", "Decrypt", "Change Key"];

/// Interactive session over any line-oriented input and output.
pub struct Session<R, W> {
    cipher: Cipher,
    input: R,
    output: W,
    per_word: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session around a keyed cipher.
    pub fn new(cipher: Cipher, input: R, output: W) -> Self {
        Self {
            cipher,
            input,
            output,
            per_word: false,
        }
    }

    /// Transform each whitespace-separated word of a message on its own.
    #[must_use]
    pub fn per_word(mut self, per_word: bool) -> Self {
        self.per_word = per_word;
        self
    }

    /// Run until the user quits or input ends, returning the cipher with
    /// whatever key was last accepted.
    pub fn run(mut self) -> Result<Cipher, CliError> {
        loop {
            for (i, option) in MENU.iter().enumerate() {
                writeln!(self.output, "{}. {option}", i + 1)?;
            }

            let Some(message) = self.prompt("Enter the message: ")? else {
                break;
            };
            let Some(option) = self.prompt("Enter option num or 0 for quit: ")? else {
                break;
            };

            match option.trim() {
                "0" => break,
                "1" => self.transform(Direction::Encrypt, &message)?,
                "2" => self.transform(Direction::Decrypt, &message)?,
                "3" => {
                    let Some(key) = self.prompt("Enter the secret key: ")? else {
                        break;
                    };
                    self.change_key(&key)?;
                }
                other => writeln!(self.output, "Unknown option: {other}")?,
            }
        }

        self.output.flush()?;
        Ok(self.cipher)
    }

    /// Print `text` and read one line, without its line ending.
    /// `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn transform(&mut self, direction: Direction, message: &str) -> Result<(), CliError> {
        let result = if self.per_word {
            transform_words(&self.cipher, direction, message)
        } else {
            self.cipher.apply(direction, message)
        };

        match result {
            Ok(text) => writeln!(self.output, "{text}")?,
            Err(e) => {
                warn!("{direction:?} failed: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }

    fn change_key(&mut self, key: &str) -> Result<(), CliError> {
        match self.cipher.set_key(key) {
            Ok(()) => debug!(cipher = %self.cipher.kind(), "key changed"),
            Err(e) => {
                warn!("Key change rejected: {e}");
                writeln!(self.output, "Error: {e}")?;
            }
        }
        Ok(())
    }
}

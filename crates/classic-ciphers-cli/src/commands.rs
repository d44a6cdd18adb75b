//! One-shot `encrypt` / `decrypt` handling.

use std::fs;
use std::io::{Read, Write};

use classic_ciphers::{Cipher, Direction, TextCipher, transform_words};
use tracing::{debug, info};

use crate::config::TransformArgs;
use crate::error::CliError;

/// Read the input text, run the cipher, and write the result.
///
/// Text passed as an argument is used verbatim. Text read from `--input` or
/// `stdin` has surrounding whitespace trimmed first. Results go to
/// `--output` as-is, or to `stdout` followed by a newline.
pub fn run_transform<R: Read, W: Write>(
    cipher: &Cipher,
    direction: Direction,
    args: &TransformArgs,
    mut stdin: R,
    mut stdout: W,
) -> Result<(), CliError> {
    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?
            .trim()
            .to_string(),
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf.trim().to_string()
        }
    };

    debug!(
        cipher = %cipher.kind(),
        ?direction,
        chars = text.chars().count(),
        per_word = args.per_word,
        "transforming text"
    );

    let result = if args.per_word {
        transform_words(cipher, direction, &text)?
    } else {
        cipher.apply(direction, &text)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &result).map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {} characters to {}", result.chars().count(), path.display());
        }
        None => {
            writeln!(stdout, "{result}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use classic_ciphers::CipherKind;

    fn run(cipher: &Cipher, direction: Direction, args: &TransformArgs, stdin: &str) -> String {
        let mut out = Vec::new();
        run_transform(cipher, direction, args, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_argument_used_verbatim() {
        let cipher = Cipher::from_key(CipherKind::Shift, "2").unwrap();
        let args = TransformArgs {
            text: Some(" ab ".to_string()),
            ..TransformArgs::default()
        };
        assert_eq!(run(&cipher, Direction::Encrypt, &args, ""), "\"cd\"\n");
    }

    #[test]
    fn test_stdin_is_trimmed() {
        let cipher = Cipher::from_key(CipherKind::Vigenere, "key").unwrap();
        let args = TransformArgs::default();
        assert_eq!(run(&cipher, Direction::Encrypt, &args, "hello\n"), "rijvs\n");
    }

    #[test]
    fn test_per_word() {
        let cipher = Cipher::default_for(CipherKind::Playfair).unwrap();
        let args = TransformArgs {
            text: Some("hello world".to_string()),
            per_word: true,
            ..TransformArgs::default()
        };
        assert_eq!(run(&cipher, Direction::Encrypt, &args, ""), "cattmz zkxflv\n");
    }

    #[test]
    fn test_cipher_error_propagates() {
        let cipher = Cipher::default_for(CipherKind::Playfair).unwrap();
        let args = TransformArgs {
            text: Some("ja".to_string()),
            ..TransformArgs::default()
        };
        let result = run_transform(&cipher, Direction::Decrypt, &args, "".as_bytes(), Vec::<u8>::new());
        assert!(matches!(result, Err(CliError::Cipher(_))));
    }
}

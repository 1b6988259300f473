/// Single-line interactive prompts over a swappable input source.
///
/// Both helpers take the reader and writer explicitly so tests (and embedders
/// with unusual stdio arrangements) can feed scripted input. Reading blocks
/// the whole process until a line arrives; there is no timeout.
use std::io::{self, BufRead, Write};

/// Ask for one line of input.
///
/// Shows `message`, with the default appended in brackets when non-empty.
/// The response is trimmed of surrounding whitespace; an empty response (or
/// end of input) falls back to the trimmed default. With `lowercase` the
/// result — default included — is lowercased.
///
/// # Errors
///
/// Propagates read/write failures on the underlying streams.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
    lowercase: bool,
) -> io::Result<String> {
    write_prompt(output, message, default)?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let mut response = line.trim().to_owned();
    if response.is_empty() {
        response = default.trim().to_owned();
    }
    if lowercase {
        response = response.to_lowercase();
    }
    Ok(response)
}

/// Ask a yes/no question, re-prompting until the answer is recognizable.
///
/// Accepts `y`/`yes`/`n`/`no` in any case; an empty line substitutes the
/// default string, which is interpreted the same way (an unmatchable default
/// such as `"Neither"` simply re-prompts).
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] if the input stream ends before a
/// recognizable answer, and propagates any other stream failure.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> io::Result<bool> {
    loop {
        write_prompt(output, message, default)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a yes/no answer",
            ));
        }

        let mut response = line.trim().to_owned();
        if response.is_empty() {
            response = default.trim().to_owned();
        }
        match response.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

fn write_prompt<W: Write>(output: &mut W, message: &str, default: &str) -> io::Result<()> {
    if default.is_empty() {
        write!(output, "{message}")?;
    } else {
        write!(output, "{message} [{default}]")?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_sequence() {
        let mut input = "Bill\nTed\n\n  Kate Williams      \n".as_bytes();
        let mut output = Vec::new();

        let one = prompt(&mut input, &mut output, "enter your name", "CATS", false).unwrap();
        let two = prompt(&mut input, &mut output, "enter your name", "CATS", true).unwrap();
        let three = prompt(&mut input, &mut output, "enter your name", "CATS", true).unwrap();
        let four = prompt(&mut input, &mut output, "enter your name", "CATS", false).unwrap();

        // Case preserved, lowercased, default (lowercased), trimmed.
        assert_eq!(one, "Bill");
        assert_eq!(two, "ted");
        assert_eq!(three, "cats");
        assert_eq!(four, "Kate Williams");

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("enter your name").count(), 4);
        assert_eq!(shown.matches("[CATS]").count(), 4);
    }

    #[test]
    fn test_prompt_default_on_eof() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        let got = prompt(&mut input, &mut output, "name?", "CATS", true).unwrap();
        assert_eq!(got, "cats");
    }

    #[test]
    fn test_confirm_yes_variants() {
        for yes in ["y", "Y", "yes", "YES", "yEs", "Yes"] {
            let transcript = format!("hey\nyou\n{yes}\n");
            let mut input = transcript.as_bytes();
            let mut output = Vec::new();
            let got = confirm(&mut input, &mut output, "Continue?", "Neither").unwrap();
            assert!(got, "{yes:?} should confirm");

            // Re-prompted once per unrecognizable line.
            let shown = String::from_utf8(output).unwrap();
            assert_eq!(shown.matches("Continue?").count(), 3);
            assert_eq!(shown.matches("[Neither]").count(), 3);
        }
    }

    #[test]
    fn test_confirm_no_variants() {
        for no in ["n", "N", "no", "NO", "No", "nO"] {
            let transcript = format!("NOPE\nNup!\n{no}\n");
            let mut input = transcript.as_bytes();
            let mut output = Vec::new();
            let got = confirm(&mut input, &mut output, "Continue?", "Neither").unwrap();
            assert!(!got, "{no:?} should decline");
        }
    }

    #[test]
    fn test_confirm_empty_line_uses_default() {
        for (default, expected) in [("N", false), ("No", false), ("Y", true), ("Yes", true)] {
            let mut input = "noway\nSure\n\n".as_bytes();
            let mut output = Vec::new();
            let got = confirm(&mut input, &mut output, "Continue?", default).unwrap();
            assert_eq!(got, expected, "default {default:?}");
        }
    }

    #[test]
    fn test_confirm_eof_is_an_error() {
        let mut input = "maybe\n".as_bytes();
        let mut output = Vec::new();
        let err = confirm(&mut input, &mut output, "Continue?", "Neither").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

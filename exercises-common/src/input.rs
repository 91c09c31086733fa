//! # Row-Count Input
//!
//! The pattern exercises all start the same way: print a prompt, read one
//! line, and turn it into a number of rows.
//!
//! ## Example
//!
//! ```
//! use exercises_common::input::read_count;
//!
//! let mut input = "5\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let rows = read_count("Enter the number of rows: ", &mut input, &mut output).unwrap();
//! assert_eq!(rows, 5);
//! assert_eq!(output, b"Enter the number of rows: ");
//! ```

use std::io::{self, BufRead, Write};

/// Errors produced while reading a row count.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// The stream ended before a line was read.
    #[error("no input provided")]
    Eof,
    /// The line was not an integer.
    #[error("invalid number of rows: {0:?}")]
    Parse(String),
}

/// Writes `prompt`, then reads one line from `input` and parses it as a count.
///
/// Negative numbers are clamped to zero, so callers simply draw nothing.
/// Counts that do not fit in a `usize` are reported as [`InputError::Parse`].
///
/// # Examples
/// ```
/// use exercises_common::input::{read_count, InputError};
///
/// let mut sink = Vec::new();
/// assert_eq!(read_count("", &mut " -3 \n".as_bytes(), &mut sink).unwrap(), 0);
/// assert!(matches!(
///     read_count("", &mut "five\n".as_bytes(), &mut sink),
///     Err(InputError::Parse(_))
/// ));
/// ```
pub fn read_count<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<usize, InputError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }

    let text = line.trim();
    let parse_error = || InputError::Parse(text.to_string());
    let value: i128 = text.parse().map_err(|_| parse_error())?;
    if value < 0 {
        return Ok(0);
    }
    usize::try_from(value).map_err(|_| parse_error())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<usize, InputError> {
        let mut sink = Vec::new();
        read_count("rows? ", &mut text.as_bytes(), &mut sink)
    }

    #[test]
    fn test_prompt_is_written_without_newline() {
        let mut sink = Vec::new();
        let rows = read_count("rows? ", &mut "3\n".as_bytes(), &mut sink).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(String::from_utf8(sink).unwrap(), "rows? ");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(read("  7  \r\n").unwrap(), 7);
        assert_eq!(read("4").unwrap(), 4);
    }

    #[test]
    fn test_negative_and_zero_clamp_to_zero() {
        assert_eq!(read("0\n").unwrap(), 0);
        assert_eq!(read("-12\n").unwrap(), 0);
    }

    #[test]
    fn test_parse_error_keeps_text() {
        match read("2.5\n") {
            Err(InputError::Parse(text)) => assert_eq!(text, "2.5"),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(matches!(read("\n"), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_count_too_large_for_usize() {
        let largest = usize::MAX.to_string();
        assert_eq!(read(&format!("{largest}\n")).unwrap(), usize::MAX);

        let too_large = (usize::MAX as u128 + 1).to_string();
        match read(&format!("{too_large}\n")) {
            Err(InputError::Parse(text)) => assert_eq!(text, too_large),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_eof() {
        assert!(matches!(read(""), Err(InputError::Eof)));
    }

    #[test]
    fn test_only_first_line_is_consumed() {
        let mut input = "2\n9\n".as_bytes();
        let mut sink = Vec::new();
        assert_eq!(read_count("", &mut input, &mut sink).unwrap(), 2);
        assert_eq!(read_count("", &mut input, &mut sink).unwrap(), 9);
    }
}

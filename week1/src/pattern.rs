//! Shared row construction and printing for the star patterns.
//!
//! Rows are produced lazily and written one at a time, so drawing a tall
//! pattern never holds more than a single [`Row`] in memory.

use std::fmt;
use std::io::{BufRead, Write};

use exercises_common::{InputError, read_count};

/// One indentation step. Two columns, so each star cell stays square.
const GAP: &str = "  ";
/// One star cell, star plus separator.
const STAR: &str = "* ";
/// Columns taken by a single cell.
const CELL_WIDTH: usize = 2;

/// Prompt shown by both pattern binaries.
pub const ROWS_PROMPT: &str = "Enter the number of rows: ";

/// Errors produced while drawing a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The row count could not be read.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The widest row would not fit in `usize` columns.
    #[error("{rows} rows is too many to draw")]
    TooManyRows { rows: usize },
    /// Writing the pattern failed.
    #[error("failed to write pattern: {0}")]
    Io(#[from] std::io::Error),
}

/// A single row: `indent` gap cells followed by `stars` star cells.
///
/// Displaying a row keeps the trailing separator; every cell is two columns
/// wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub indent: usize,
    pub stars: usize,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(GAP)?;
        }
        for _ in 0..self.stars {
            f.write_str(STAR)?;
        }
        Ok(())
    }
}

/// The shapes available to the pattern binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Centred pyramid, widening by two stars per row.
    Pyramid,
    /// Right-aligned triangle, losing one star per row.
    UpperTriangle,
}

impl Pattern {
    /// Returns the rows of the pattern, top to bottom.
    ///
    /// Fails with [`PatternError::TooManyRows`] when the widest row would
    /// overflow a `usize` column count.
    ///
    /// # Examples
    /// ```
    /// use exercises_week1::{Pattern, PatternError};
    ///
    /// let lines: Vec<String> = Pattern::UpperTriangle
    ///     .rows(2)
    ///     .unwrap()
    ///     .map(|row| row.to_string())
    ///     .collect();
    /// assert_eq!(lines, vec!["* * ", "  * "]);
    ///
    /// assert!(matches!(
    ///     Pattern::Pyramid.rows(usize::MAX),
    ///     Err(PatternError::TooManyRows { .. })
    /// ));
    /// ```
    pub fn rows(self, rows: usize) -> Result<Rows, PatternError> {
        let widest_cells = match self {
            Pattern::Pyramid => rows.checked_mul(2).map(|cells| cells.saturating_sub(1)),
            Pattern::UpperTriangle => Some(rows),
        };
        widest_cells
            .and_then(|cells| cells.checked_mul(CELL_WIDTH))
            .ok_or(PatternError::TooManyRows { rows })?;

        Ok(Rows {
            pattern: self,
            total: rows,
            line: 0,
        })
    }

    /// Writes each row of the pattern to `out`, newline-terminated.
    pub fn write_to<W: Write>(self, rows: usize, out: &mut W) -> Result<(), PatternError> {
        for row in self.rows(rows)? {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

/// Lazy iterator over the rows of a [`Pattern`].
#[derive(Debug, Clone)]
pub struct Rows {
    pattern: Pattern,
    total: usize,
    /// Rows already produced.
    line: usize,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.line == self.total {
            return None;
        }
        self.line += 1;

        // `line` is 1-based here; widths were bounds-checked in `Pattern::rows`.
        let row = match self.pattern {
            Pattern::Pyramid => Row {
                indent: self.total - self.line,
                stars: 2 * self.line - 1,
            },
            Pattern::UpperTriangle => Row {
                indent: self.line - 1,
                stars: self.total - self.line + 1,
            },
        };
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.line;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}

/// Prompts for a row count on `output`, reads it from `input` and draws
/// `pattern`.
///
/// This is the whole of what the pattern binaries do.
pub fn run<R, W>(pattern: Pattern, input: &mut R, output: &mut W) -> Result<(), PatternError>
where
    R: BufRead,
    W: Write,
{
    let rows = read_count(ROWS_PROMPT, input, output)?;
    pattern.write_to(rows, output)?;
    output.flush()?;
    Ok(())
}

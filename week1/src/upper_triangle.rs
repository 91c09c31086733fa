//! Upper Triangle Pattern
//!
//! Counts down from `n` stars to one, shifting one cell right per row.

use crate::pattern::{Pattern, PatternError, Rows};

/// Rows of an upper triangle with `rows` rows.
///
/// # Examples
/// ```
/// use exercises_week1::upper_triangle;
///
/// let lines: Vec<String> = upper_triangle(3).unwrap().map(|row| row.to_string()).collect();
/// assert_eq!(lines, vec!["* * * ", "  * * ", "    * "]);
/// ```
pub fn upper_triangle(rows: usize) -> Result<Rows, PatternError> {
    Pattern::UpperTriangle.rows(rows)
}

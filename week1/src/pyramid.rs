//! Pyramid Pattern
//!
//! Row `i` of `n` is indented by `n - i` cells and holds `2i - 1` stars,
//! which centres every row over the widest one at the base.

use crate::pattern::{Pattern, PatternError, Rows};

/// Rows of a centred pyramid with `rows` rows.
///
/// # Examples
/// ```
/// use exercises_week1::pyramid;
///
/// let lines: Vec<String> = pyramid(3).unwrap().map(|row| row.to_string()).collect();
/// assert_eq!(lines, vec!["    * ", "  * * * ", "* * * * * "]);
/// ```
pub fn pyramid(rows: usize) -> Result<Rows, PatternError> {
    Pattern::Pyramid.rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: usize) -> Vec<String> {
        pyramid(rows).unwrap().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(lines(0).is_empty());
    }

    #[test]
    fn test_single_row() {
        assert_eq!(lines(1), vec!["* "]);
    }

    #[test]
    fn test_rows_are_centred() {
        let rows = 6;
        let lines = lines(rows);
        assert_eq!(lines.len(), rows);

        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.matches('*').count(), 2 * i + 1);
            // The middle star of every row sits in the same column.
            let first_star = line.find('*').unwrap();
            assert_eq!(first_star + 2 * i, 2 * (rows - 1));
        }
    }
}

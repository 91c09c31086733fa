//! Week 1: Printing Patterns with Loops
//!
//! Two warm-up exercises built from nested repetition:
//! - A centred pyramid of stars
//! - An upper triangle of stars, shrinking towards the right edge
//!
//! Patterns are lazy sequences of [`Row`]s, written out one line at a time.

pub mod pattern;
pub mod pyramid;
pub mod upper_triangle;

// Re-export commonly used items.
pub use pattern::{Pattern, PatternError, ROWS_PROMPT, Row, Rows, run};
pub use pyramid::pyramid;
pub use upper_triangle::upper_triangle;

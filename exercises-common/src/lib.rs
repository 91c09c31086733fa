//! # Exercise Common Utilities
//!
//! Shared helpers for the weekly exercise crates.
//!
//! ## Modules
//!
//! - [`input`]: Prompting for and parsing a row count from an input stream
//!
//! ## Design Principles
//!
//! 1. **Stream-agnostic**: helpers take `BufRead`/`Write` instead of touching
//!    stdin/stdout directly, so binaries and tests share one code path
//! 2. **Typed errors**: failures are [`InputError`] values, never panics

pub mod input;

// Re-export main items for convenience
pub use input::{InputError, read_count};

//! Week 1 exercise: print a pyramid of stars.
//!
//! Run with: cargo run --bin pyramid_pattern

use std::error::Error;
use std::io;

use exercises_week1::{Pattern, run};

fn main() -> Result<(), Box<dyn Error>> {
    run(Pattern::Pyramid, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

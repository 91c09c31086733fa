//! Week 1 exercise: print an upper triangle of stars.
//!
//! Run with: cargo run --bin upper_triangle

use std::error::Error;
use std::io;

use exercises_week1::{Pattern, run};

fn main() -> Result<(), Box<dyn Error>> {
    run(Pattern::UpperTriangle, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

//! Week 2 demo: deleting nodes from a singly-linked list.
//!
//! Run with: cargo run --bin linked_list_demo

use std::io::{self, Write};

use exercises_week2::run_demo;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    out.flush()
}

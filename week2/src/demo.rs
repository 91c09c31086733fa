//! The Week 2 walkthrough: build a five-node list, then delete from the
//! middle, past the end, the head, and finally the tail.

use std::io::{self, Write};

use crate::SinglyLinkedList;

/// Writes the walkthrough transcript to `out`.
///
/// Failed deletions are reported inline rather than aborting the run.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let mut list = SinglyLinkedList::new();
    for value in [10, 20, 30, 40, 50] {
        list.append(value);
    }

    writeln!(out, "Original List:")?;
    list.print_list(out)?;

    let steps = [
        ("Deleting the 3rd node:", 3),
        ("Trying to delete the 10th node (out of range):", 10),
        ("Deleting the 1st node:", 1),
        ("Deleting the last node:", 3),
    ];
    for (heading, position) in steps {
        writeln!(out, "\n{heading}")?;
        match list.delete_at(position) {
            Ok(_) => list.print_list(out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `budget` bytes, then refuses every write.
    struct FullWriter {
        budget: usize,
    }

    impl Write for FullWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "writer is full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_stops_the_demo() {
        for budget in [0, 20, 60] {
            let err = run_demo(&mut FullWriter { budget }).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        }
    }
}

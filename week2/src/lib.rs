//! Week 2: Linked Lists
//!
//! A singly-linked list built from owned boxes:
//! - Each node owns its successor, the list owns the head
//! - Appending walks to the tail
//! - Deletion by 1-based position relinks around the removed node
//!
//! The [`demo`] module replays the classroom walkthrough against any writer.

pub mod demo;
pub mod linked_list;

// Re-export commonly used items.
pub use demo::run_demo;
pub use linked_list::{Iter, ListError, SinglyLinkedList};

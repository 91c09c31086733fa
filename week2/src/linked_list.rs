//! Singly-Linked List
//!
//! Ownership forms a simple chain: the list owns the head node and every
//! node owns the next one through `Option<Box<Node<T>>>`. There are no back
//! references, so a cycle can never be formed.
//!
//! ## Example
//!
//! ```
//! use exercises_week2::{ListError, SinglyLinkedList};
//!
//! let mut list: SinglyLinkedList<i32> = [10, 20, 30].into_iter().collect();
//! assert_eq!(list.to_string(), "10 -> 20 -> 30 -> None");
//!
//! assert_eq!(list.delete_at(2), Ok(20));
//! assert_eq!(list.delete_at(5), Err(ListError::OutOfRange { index: 5, len: 2 }));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```

use std::fmt;
use std::io::{self, Write};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Errors returned by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The requested 1-based position does not name an existing node.
    #[error("{}", out_of_range_message(.index, .len))]
    OutOfRange {
        /// The position that was asked for.
        index: usize,
        /// The length of the list when the request was made.
        len: usize,
    },
}

impl ListError {
    /// The offending position.
    pub fn index(&self) -> usize {
        match self {
            ListError::OutOfRange { index, .. } => *index,
        }
    }
}

fn out_of_range_message(index: &usize, len: &usize) -> String {
    if *len == 0 {
        "Cannot delete from an empty list.".to_string()
    } else {
        format!("Index {index} is out of range.")
    }
}

/// An ordered sequence of owned nodes.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Appends `value` after the current tail.
    ///
    /// # Examples
    /// ```
    /// use exercises_week2::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append("a");
    /// list.append("b");
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&"a", &"b"]);
    /// ```
    pub fn append(&mut self, value: T) {
        let tail = self.tail_link();
        *tail = Some(Box::new(Node { value, next: None }));
    }

    /// Iterates over the payloads from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Removes the node at 1-based position `n` and returns its payload.
    ///
    /// Fails with [`ListError::OutOfRange`] when the list is empty, when `n`
    /// is zero, or when `n` is past the last node. On failure the list is
    /// left untouched.
    ///
    /// # Examples
    /// ```
    /// use exercises_week2::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<_> = (1..=3).collect();
    /// assert_eq!(list.delete_at(3), Ok(3));
    /// assert_eq!(list.to_string(), "1 -> 2 -> None");
    /// assert!(list.delete_at(3).is_err());
    /// ```
    pub fn delete_at(&mut self, n: usize) -> Result<T, ListError> {
        if n == 0 {
            return Err(self.out_of_range(n));
        }

        // `link` ends up as the slot holding node `n`: the head for n == 1,
        // otherwise the `next` field of node `n - 1`.
        let mut link = &mut self.head;
        let mut position = 1;
        while position < n {
            let Some(node) = link else { break };
            link = &mut node.next;
            position += 1;
        }

        match link.take() {
            Some(node) => {
                *link = node.next;
                Ok(node.value)
            }
            None => Err(self.out_of_range(n)),
        }
    }

    /// Writes the rendered list followed by a newline.
    pub fn print_list<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        writeln!(out, "{self}")
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            index,
            len: self.len(),
        }
    }

    /// The empty slot after the last node.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long lists don't recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("List is empty.");
        }
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("None")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_link();
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

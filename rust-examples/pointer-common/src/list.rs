//! # Singly Linked List
//!
//! A minimal owned singly linked list: each [`ListNode`] holds a value and an
//! exclusive [`Link`] to the next node. The empty list is `None`.
//!
//! ## Philosophy
//!
//! A pointer-based list is usually written with nullable pointers and a lot of
//! care around the terminal node. In idiomatic Rust:
//!
//! - `Option<Box<ListNode<T>>>` is the nullable owning pointer
//! - Ownership of a whole chain moves with its head
//! - Shared walks use `as_deref()`; mutable walks use a `&mut Link<T>` cursor
//!
//! ## Example
//!
//! ```
//! use pointer_common::list::{display, length, list_from_slice, to_vec};
//!
//! let list = list_from_slice(&[1, 2, 3]);
//!
//! assert_eq!(length(&list), 3);
//! assert_eq!(to_vec(&list), vec![1, 2, 3]);
//! assert_eq!(display(&list).to_string(), "1 -> 2 -> 3 -> nil");
//! ```

use std::fmt;

/// An owning link to the next node, or `None` at the end of the list.
pub type Link<T> = Option<Box<ListNode<T>>>;

/// A single node of a singly linked list.
///
/// Dropping, cloning, comparing and debug-printing walk the chain in a loop,
/// so stack depth does not grow with the length of the list. Because the node
/// implements `Drop`, its fields can be read and replaced but not moved out.
pub struct ListNode<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    /// Creates a terminal node holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            next: list_from_iter(iter(&self.next).cloned()),
        }
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && iter(&self.next).eq(iter(&other.next))
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entry(&self.value)
            .entries(iter(&self.next))
            .finish()
    }
}

/// Builds a list from any sequence of values, keeping their order.
///
/// # Example
/// ```
/// use pointer_common::list::{list_from_iter, to_vec};
/// let list = list_from_iter(1..=4);
/// assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
/// ```
pub fn list_from_iter<T, I>(values: I) -> Link<T>
where
    I: IntoIterator<Item = T>,
{
    let mut head: Link<T> = None;
    let mut tail = &mut head;
    for value in values {
        tail = &mut tail.insert(Box::new(ListNode::new(value))).next;
    }
    head
}

/// Builds a list holding clones of the slice elements.
///
/// # Example
/// ```
/// use pointer_common::list::list_from_slice;
/// let list = list_from_slice(&['a', 'b']);
/// assert_eq!(list.as_ref().map(|node| node.value), Some('a'));
/// assert!(list_from_slice::<i32>(&[]).is_none());
/// ```
pub fn list_from_slice<T: Clone>(values: &[T]) -> Link<T> {
    list_from_iter(values.iter().cloned())
}

/// Returns a borrowing iterator over the values of a list.
pub fn iter<T>(list: &Link<T>) -> ListIter<'_, T> {
    ListIter {
        next: list.as_deref(),
    }
}

/// Collects the values of a list into a vector.
pub fn to_vec<T: Clone>(list: &Link<T>) -> Vec<T> {
    iter(list).cloned().collect()
}

/// Counts the nodes of a list.
#[inline]
pub fn length<T>(list: &Link<T>) -> usize {
    iter(list).count()
}

/// Borrowing iterator returned by [`iter`].
#[derive(Debug)]
pub struct ListIter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Wraps a list so it renders as `a -> b -> nil`.
///
/// # Example
/// ```
/// use pointer_common::list::{display, list_from_slice};
/// assert_eq!(display(&list_from_slice(&[1, 2])).to_string(), "1 -> 2 -> nil");
/// assert_eq!(display::<i32>(&None).to_string(), "nil");
/// ```
pub fn display<T>(list: &Link<T>) -> ListDisplay<'_, T> {
    ListDisplay(list)
}

/// Display adapter returned by [`display`].
#[derive(Debug)]
pub struct ListDisplay<'a, T>(&'a Link<T>);

impl<T: fmt::Display> fmt::Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in iter(self.0) {
            write!(f, "{value} -> ")?;
        }
        f.write_str("nil")
    }
}

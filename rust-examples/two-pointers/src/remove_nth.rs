//! Removing the n-th node from the end of a singly linked list
//!
//! The classic version keeps a lead pointer `n` nodes ahead of a trail pointer
//! and walks both until the lead falls off the end. With owned links the two
//! walks cannot hold the chain at the same time, so they run one after the
//! other: the lead walks on a shared borrow and measures how far the trail
//! must go, then the trail walks on a mutable borrow and splices.
//!
//! The sentinel is the caller's head slot itself (a `&mut Link<T>`), so
//! removing the first node is the same splice as removing any other.

use pointer_common::list::{Link, ListNode};
use tracing::{debug, instrument, trace};

use crate::error::TrimError;

/// Removes the `n`-th node from the end (1-indexed) and returns the new head.
///
/// Ownership of the chain moves in and back out. An empty list, `n <= 0`, and
/// `n` larger than the list are all no-ops that hand the list back unchanged.
/// Use [`pop_nth_from_end`] to have those cases reported instead.
///
/// # Example
/// ```
/// use pointer_common::list::{list_from_slice, to_vec};
/// use two_pointers::remove_nth::remove_nth_from_end;
///
/// let list = remove_nth_from_end(list_from_slice(&[1, 2, 3, 4, 5]), 2);
/// assert_eq!(to_vec(&list), vec![1, 2, 3, 5]);
///
/// let head_removed = remove_nth_from_end(list, 4);
/// assert_eq!(to_vec(&head_removed), vec![2, 3, 5]);
/// ```
#[instrument(level = "trace", skip(head))]
pub fn remove_nth_from_end<T>(head: Link<T>, n: i32) -> Link<T> {
    if head.is_none() {
        return head;
    }
    let Ok(position) = usize::try_from(n) else {
        debug!(n, "negative position, list returned unchanged");
        return head;
    };

    let mut sentinel = head;
    match pop_nth_from_end(&mut sentinel, position) {
        Ok(_) => trace!(n, "node removed"),
        Err(err) => debug!(n, %err, "list returned unchanged"),
    }
    sentinel
}

/// Unlinks the `n`-th node from the end (1-indexed) in place and returns it.
///
/// The returned node is detached: its `next` is `None`. The list is left
/// untouched when an error is returned.
///
/// # Errors
///
/// - [`TrimError::ZeroPosition`] if `n` is zero
/// - [`TrimError::PastHead`] if the list has fewer than `n` nodes
///
/// # Example
/// ```
/// use pointer_common::list::{list_from_slice, to_vec};
/// use two_pointers::{pop_nth_from_end, TrimError};
///
/// let mut list = list_from_slice(&['a', 'b', 'c']);
/// assert_eq!(pop_nth_from_end(&mut list, 1).map(|node| node.value), Ok('c'));
/// assert_eq!(
///     pop_nth_from_end(&mut list, 3).map(|node| node.value),
///     Err(TrimError::PastHead { n: 3, len: 2 })
/// );
/// assert_eq!(to_vec(&list), vec!['a', 'b']);
/// ```
pub fn pop_nth_from_end<T>(
    head: &mut Link<T>,
    n: usize,
) -> Result<Box<ListNode<T>>, TrimError> {
    if n == 0 {
        return Err(TrimError::ZeroPosition);
    }

    // Lead: n links past the sentinel, or the list is too short.
    let mut lead = head.as_deref();
    for walked in 0..n {
        match lead {
            Some(node) => lead = node.next.as_deref(),
            None => return Err(TrimError::PastHead { n, len: walked }),
        }
    }

    // Whatever the lead can still walk is the trail's distance from the sentinel.
    let gap = std::iter::successors(lead, |node| node.next.as_deref()).count();
    // The lead walk proved there are n + gap >= gap + 1 nodes, so neither
    // lookup below can come up empty; the error only keeps this panic-free.
    let past_head = TrimError::PastHead { n, len: n + gap };

    let slot = advance(head, gap).ok_or(past_head)?;
    let mut removed = slot.take().ok_or(past_head)?;
    *slot = removed.next.take();
    Ok(removed)
}

/// Moves a mutable cursor `steps` links down the chain.
fn advance<T>(mut cursor: &mut Link<T>, steps: usize) -> Option<&mut Link<T>> {
    for _ in 0..steps {
        cursor = &mut cursor.as_mut()?.next;
    }
    Some(cursor)
}

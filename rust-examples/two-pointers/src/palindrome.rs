//! Palindrome detection
//!
//! Compare the two ends and step inward until the indices meet.
//! Elements are compared as they are: no case folding, no whitespace
//! stripping. Normalize before calling if that is wanted.

/// Returns `true` if `items` reads the same forwards and backwards.
///
/// The empty slice is a palindrome. O(n) time, O(1) extra space.
///
/// # Example
/// ```
/// use two_pointers::palindrome::is_palindrome;
/// assert!(is_palindrome(&['r', 'a', 'c', 'e', 'c', 'a', 'r']));
/// assert!(!is_palindrome(&[1, 2, 1, 2]));
/// assert!(is_palindrome::<u8>(&[]));
/// ```
pub fn is_palindrome<T: PartialEq>(items: &[T]) -> bool {
    if items.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0, items.len() - 1);
    while left < right {
        if items[left] != items[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// String form of [`is_palindrome`], comparing Unicode scalar values.
///
/// `str` is not indexable by character, so the two ends are the front and
/// back of a double-ended `chars()` iterator.
///
/// # Example
/// ```
/// use two_pointers::palindrome::is_palindrome_str;
/// assert!(is_palindrome_str("racecar"));
/// assert!(!is_palindrome_str("abab"));
/// assert!(is_palindrome_str(""));
/// ```
pub fn is_palindrome_str(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

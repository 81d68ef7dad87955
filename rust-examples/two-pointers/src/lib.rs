//! Two-pointer algorithms
//!
//! Each module walks a sequence from two positions at once:
//! - Zero-sum triplets over a sorted copy (`three_sum`)
//! - Removing the n-th node from the end of a linked list (`remove_nth`)
//! - Palindrome detection from both ends (`palindrome`)

pub mod error;
pub mod palindrome;
pub mod remove_nth;
pub mod three_sum;

// Re-export commonly used items.
pub use error::TrimError;
pub use palindrome::{is_palindrome, is_palindrome_str};
pub use remove_nth::{pop_nth_from_end, remove_nth_from_end};
pub use three_sum::{count_zero_sum_triplets, find_zero_sum_triplets};

//! Error types for the strict linked-list operations.

use thiserror::Error;

/// Reasons a position counted from the end of a list cannot be removed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimError {
    /// Positions from the end are 1-indexed; zero names no node
    #[error("Invalid position: positions from the end start at 1")]
    ZeroPosition,

    /// The list has fewer than `n` nodes
    #[error("Position {n} from the end is past the head of a {len}-node list")]
    PastHead { n: usize, len: usize },
}

//! # Pointer Common Utilities
//!
//! Shared data structures for the two-pointer examples.
//!
//! ## Modules
//!
//! - [`list`]: An owned singly linked list built from `Option<Box<_>>` links
//!
//! ## Design Principles
//!
//! 1. **Exclusive ownership**: every node owns the next one, so a chain can
//!    never contain a cycle or a dangling link
//! 2. **Ownership transfer**: operations that reshape a list take the head by
//!    value and hand a head back
//! 3. **Iterator-centric**: reading a list goes through a borrowing iterator
//! 4. **No `Rc<RefCell<T>>`**: no runtime borrow checking

pub mod list;

// Re-export main types for convenience
pub use list::{Link, ListIter, ListNode};

//! Binomial heap over integer keys
//!
//! This crate provides a mergeable min-priority queue built as a forest of
//! binomial trees, at most one per rank. The ranks present mirror the binary
//! representation of the element count: inserting is a binary-counter
//! increment and melding is binary addition with carries.
//!
//! # Features
//!
//! - **Insert**: O(1) amortized, O(log n) worst case
//! - **Find-min**: O(1)
//! - **Delete-min**: O(log n)
//! - **Meld**: O(log n), consuming the other heap
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::binomial::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! heap.array_to_heap(&[5, 3, 2, 0, 4]);
//! heap.insert(1);
//!
//! let mut other: BinomialHeap = vec![9, -1].into_iter().collect();
//! other.insert(7);
//! heap.meld(other);
//!
//! assert_eq!(heap.len(), 9);
//! assert_eq!(heap.find_min(), Some(-1));
//! assert!(heap.is_valid());
//! ```

pub mod binomial;
pub mod rank;
pub mod rank_list;
pub mod stdlib_compat;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{Heap, HeapError, Key};

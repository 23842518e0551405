//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap<Reverse<Key>>`, so
//! the standard binary heap can stand in as a baseline in benchmarks and as
//! a reference model in tests.
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::Heap;
//! use binomial_heap::stdlib_compat::StdBinaryHeap;
//!
//! // BinaryHeap's inherent methods shadow the trait's, so call through `Heap`
//! let mut heap: StdBinaryHeap = Heap::new();
//! Heap::push(&mut heap, 5);
//! Heap::push(&mut heap, 3);
//! Heap::push(&mut heap, 7);
//! assert_eq!(Heap::peek(&heap), Some(3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(Heap::pop(&mut heap), Some(3));
//! ```

use crate::traits::{Heap, Key};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// `BinaryHeap` ordered as a min-heap over [`Key`]s
pub type StdBinaryHeap = BinaryHeap<Reverse<Key>>;

impl Heap for StdBinaryHeap {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, key: Key) {
        BinaryHeap::push(self, Reverse(key))
    }

    fn peek(&self) -> Option<Key> {
        BinaryHeap::peek(self).map(|Reverse(key)| *key)
    }

    fn pop(&mut self) -> Option<Key> {
        BinaryHeap::pop(self).map(|Reverse(key)| key)
    }

    /// O(n + m) via `BinaryHeap::append`
    fn merge(&mut self, mut other: Self) {
        self.append(&mut other)
    }
}

//! Common trait and error type for the heaps in this crate
//!
//! - [`Heap`]: a mergeable min-priority-queue over integer [`Key`]s
//! - [`HeapError`]: structural invariant violations reported by
//!   [`BinomialHeap::validate`](crate::binomial::BinomialHeap::validate)
//!
//! Normal heap operations never fail: an empty heap is a valid state, and
//! operations on it return `None` or do nothing.

use crate::rank::Rank;
use std::fmt;

/// The key type stored in the heaps. Keys are ordered naturally.
pub type Key = i32;

/// Which cached rank of a heap an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankCache {
    /// The rank of the lowest-rank root
    MinTree,
    /// The rank of the root holding the minimum key
    MinValueTree,
}

impl fmt::Display for RankCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankCache::MinTree => write!(f, "min tree rank"),
            RankCache::MinValueTree => write!(f, "min value tree rank"),
        }
    }
}

/// Error type describing a broken heap invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A root stored in the root list at `slot` reports a different rank
    RankMismatch { slot: usize, rank: Rank },
    /// A node's child at `position` has rank `found` instead of `expected`,
    /// or a node's child count differs from its rank
    ShapeMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },
    /// A child holds a smaller key than its parent
    HeapOrder { parent: Key, child: Key },
    /// The element count disagrees with the trees actually held
    SizeMismatch { expected: usize, found: usize },
    /// A cached rank does not point at the root it describes
    StaleCache { cache: RankCache },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::RankMismatch { slot, rank } => {
                write!(f, "root in slot {} has rank {}", slot, rank)
            }
            HeapError::ShapeMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "child at position {} has rank {}, expected {}",
                position, found, expected
            ),
            HeapError::HeapOrder { parent, child } => {
                write!(f, "child key {} is smaller than parent key {}", child, parent)
            }
            HeapError::SizeMismatch { expected, found } => write!(
                f,
                "heap reports {} elements but its trees hold {}",
                expected, found
            ),
            HeapError::StaleCache { cache } => write!(f, "{} is stale", cache),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for mergeable min-heaps over integer keys
///
/// The API mirrors Rust's `BinaryHeap` (`push`, `peek`, `pop`), except that
/// these heaps are min-heaps and support melding two heaps into one.
///
/// # Example
///
/// ```rust
/// use binomial_heap::Heap;
/// use binomial_heap::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(1) amortized for [`BinomialHeap`](crate::binomial::BinomialHeap),
    /// O(log n) for a binary heap.
    fn push(&mut self, key: Key);

    /// Returns the minimum key without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<Key>;

    /// Removes and returns the minimum key
    ///
    /// # Time Complexity
    /// O(log n) for all implementations.
    fn pop(&mut self) -> Option<Key>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(log n) for a binomial heap, O(n log n) for a binary heap.
    fn merge(&mut self, other: Self);
}

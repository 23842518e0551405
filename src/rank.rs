//! Rank type and utilities for binomial tree orders.
//!
//! # Why u8?
//!
//! The rank of a binomial tree is its number of children, and a tree of
//! rank `k` holds `2ᵏ` keys. A heap of `n` keys therefore never holds a
//! tree of rank above `log₂(n)`, and its root list never needs more than
//! `log₂(n) + 1` slots.
//!
//! For practical purposes:
//! - 2⁶⁴ keys → max rank 63
//! - 2²⁵⁵ keys → max rank 255
//!
//! `u8` covers every heap that fits in memory and keeps [`BinomialTree`]
//! nodes small.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the theoretical limit is exceeded, which
//! would indicate a bug, since it's impossible with valid heap operations.
//!
//! [`BinomialTree`]: crate::tree::BinomialTree

/// Type alias for a tree rank (its order, and its slot in a root list).
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use binomial_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since max rank is log₂(n) \
         and u8::MAX (255) supports heaps with up to 2²⁵⁵ elements",
    )
}

/// Returns the rank of the lowest-order tree a heap of `len` keys holds.
///
/// This is the index of the lowest set bit of `len`, or `None` for an
/// empty heap.
///
/// ```rust
/// use binomial_heap::rank::lowest_set_bit;
///
/// assert_eq!(lowest_set_bit(0), None);
/// assert_eq!(lowest_set_bit(10), Some(1));
/// assert_eq!(lowest_set_bit(9), Some(0));
/// ```
#[inline]
pub fn lowest_set_bit(len: usize) -> Option<Rank> {
    if len == 0 {
        None
    } else {
        Rank::try_from(len.trailing_zeros()).ok()
    }
}

//! Sparse, rank-indexed storage for binomial trees
//!
//! A [`RankList`] maps each rank to at most one tree. Slot `i` only ever
//! holds a tree of rank `i`, so the occupancy pattern of a heap's root list
//! is the binary representation of its element count.
//!
//! Backing storage is a `Vec<Option<BinomialTree>>` whose length is the
//! current capacity. It grows by doubling and never shrinks; only the
//! tracked [`length`](RankList::length) moves down when trailing slots are
//! emptied.

use crate::rank::Rank;
use crate::tree::BinomialTree;

/// Number of slots allocated by the first insertion
pub const INITIAL_CAPACITY: usize = 16;

/// Factor by which storage grows once it runs short
pub const GROWTH_FACTOR: usize = 2;

/// Rank-indexed slots holding at most one tree per rank
#[derive(Debug, Clone, Default)]
pub struct RankList {
    slots: Vec<Option<BinomialTree>>,
    /// One past the highest occupied slot
    length: usize,
}

impl RankList {
    /// Creates an empty list without allocating
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            length: 0,
        }
    }

    /// Stores `tree` in the slot matching its rank
    ///
    /// **Time Complexity**: O(1) amortized, O(log n) when storage grows
    ///
    /// # Panics
    ///
    /// Panics if a tree already occupies that rank. Callers must link the
    /// occupant with the incoming tree instead.
    pub fn add(&mut self, tree: BinomialTree) {
        let index = usize::from(tree.rank());

        if self.slots.len() <= index || self.slots.len() < GROWTH_FACTOR * self.length {
            self.grow(index);
        }

        let slot = &mut self.slots[index];
        assert!(slot.is_none(), "rank {} is already occupied", index);
        *slot = Some(tree);

        if self.length <= index {
            self.length = index + 1;
        }
    }

    /// Empties the slot at `rank`, returning its tree if there was one
    ///
    /// When the last occupied slot is emptied, `length` drops past every
    /// trailing empty slot.
    pub fn remove(&mut self, rank: Rank) -> Option<BinomialTree> {
        let index = usize::from(rank);
        let tree = self.slots.get_mut(index)?.take()?;

        if index + 1 == self.length {
            while self.length > 0 && self.slots[self.length - 1].is_none() {
                self.length -= 1;
            }
        }

        Some(tree)
    }

    /// Returns the tree at `rank`, or `None` if the slot is empty or out of bounds
    pub fn get(&self, rank: Rank) -> Option<&BinomialTree> {
        self.slots.get(usize::from(rank))?.as_ref()
    }

    /// One past the highest occupied rank, or 0 when empty
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns true if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the occupied slots in increasing rank order
    pub fn iter(&self) -> impl Iterator<Item = &BinomialTree> + '_ {
        self.slots[..self.length].iter().flatten()
    }

    /// Drops every tree and releases the storage
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.length = 0;
    }

    fn grow(&mut self, index: usize) {
        let mut capacity = if self.slots.is_empty() {
            INITIAL_CAPACITY
        } else {
            self.slots.len() * GROWTH_FACTOR
        };
        while capacity <= index {
            capacity *= GROWTH_FACTOR;
        }
        self.slots.resize_with(capacity, || None);
    }
}

impl IntoIterator for RankList {
    type Item = BinomialTree;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<BinomialTree>>>;

    /// Consumes the list, yielding its trees in increasing rank order
    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

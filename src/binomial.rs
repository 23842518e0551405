//! Binomial Heap implementation
//!
//! A binomial heap is a forest of heap-ordered binomial trees with:
//! - O(1) amortized insert (O(log n) worst case)
//! - O(1) find_min
//! - O(log n) delete_min and meld
//!
//! # Algorithm Overview
//!
//! The heap keeps its trees in a [`RankList`], at most one tree per rank.
//! A tree of rank `k` holds `2ᵏ` keys, so the occupied slots spell out the
//! binary representation of the element count.
//!
//! **Carry-merge**: to add a tree of rank `r`, look at slot `r`. If it is
//! empty, the tree rests there. Otherwise link the two trees into one of rank
//! `r + 1`, clear slot `r`, and repeat one slot higher. This is exactly
//! adding a bit into a binary counter.
//!
//! **Key Operations**:
//! - **Insert**: carry-merge a rank-0 tree; O(1) amortized by the
//!   binary-counter argument
//! - **Delete-min**: remove the root holding the minimum and carry-merge
//!   each of its children back in
//! - **Meld**: carry-merge every root of the other heap (binary addition)
//!
//! **Cached ranks**: the heap remembers the lowest occupied rank and the rank
//! of the root holding the minimum key. Insert updates both in O(1) from
//! where its carry chain stopped; delete_min and meld rescan the roots in
//! O(log n).

use crate::rank::{lowest_set_bit, Rank};
use crate::rank_list::RankList;
use crate::traits::{Heap, HeapError, Key, RankCache};
use crate::tree::BinomialTree;
use std::fmt;

/// Binomial min-heap over integer keys
///
/// # Example
///
/// ```rust
/// use binomial_heap::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// for value in 0..10 {
///     heap.insert(value);
/// }
///
/// assert_eq!(heap.len(), 10);
/// assert_eq!(heap.find_min(), Some(0));
/// // 10 = 0b1010
/// assert_eq!(heap.binary_rep(), vec![false, true, false, true]);
///
/// heap.delete_min();
/// assert_eq!(heap.find_min(), Some(1));
/// assert_eq!(heap.binary_rep(), vec![true, false, false, true]);
/// ```
#[derive(Clone, Default)]
pub struct BinomialHeap {
    /// Root trees indexed by rank
    roots: RankList,
    /// Number of keys in the heap
    size: usize,
    /// Rank of the lowest-rank root
    min_tree_rank: Option<Rank>,
    /// Rank of the root holding the minimum key
    min_value_tree_rank: Option<Rank>,
    /// Number of tree links performed over the heap's lifetime
    links: u64,
}

impl BinomialHeap {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            roots: RankList::new(),
            size: 0,
            min_tree_rank: None,
            min_value_tree_rank: None,
            links: 0,
        }
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.size
    }

    /// Inserts a key
    ///
    /// **Time Complexity**: O(1) amortized, O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Wrap the key in a rank-0 tree
    /// 2. Carry-merge it into the root list starting at rank 0
    /// 3. Update the cached ranks from `r`, the rank where the carry stopped:
    ///    - every rank below `r` was just emptied, so `r` is the lowest rank
    ///    - if `r` passed the old minimum's rank, the old minimum was absorbed
    ///      into the tree at `r`, so `r` holds the minimum
    ///    - otherwise compare the root at `r` with the old minimum
    ///
    /// Step 3 is O(1), which is what keeps insert O(1) amortized.
    pub fn insert(&mut self, value: Key) {
        let rank = self.carry_merge(BinomialTree::singleton(value));

        self.min_tree_rank = Some(rank);
        self.min_value_tree_rank = match self.min_value_tree_rank {
            Some(old) if rank <= old && self.root_value(rank) > self.root_value(old) => {
                Some(old)
            }
            _ => Some(rank),
        };

        self.size += 1;
    }

    /// Returns the minimum key, or `None` if the heap is empty
    ///
    /// **Time Complexity**: O(1)
    pub fn find_min(&self) -> Option<Key> {
        self.min_value_tree_rank.and_then(|rank| self.root_value(rank))
    }

    /// Removes the minimum key and returns it
    ///
    /// Does nothing and returns `None` on an empty heap.
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Take the root at the cached minimum rank out of the root list
    /// 2. Carry-merge each of its children, ranks `0..k`, back into the roots
    /// 3. Rescan the roots to refresh both cached ranks
    ///
    /// A rank-`k` root has children of ranks `0, 1, ..., k-1`, each a valid
    /// binomial tree on its own, so step 2 is binary addition of `2ᵏ - 1`.
    pub fn delete_min(&mut self) -> Option<Key> {
        let rank = self.min_value_tree_rank?;
        let min = self.roots.remove(rank)?;
        self.size -= 1;

        let (value, children) = min.into_parts();
        for child in children {
            self.carry_merge(child);
        }

        self.refresh_cached_ranks();
        Some(value)
    }

    /// Melds another heap into this one, consuming it
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// Every root of `other` is carry-merged in increasing rank order, which
    /// adds the two binary representations with carry propagation. Both
    /// cached ranks are rescanned afterward.
    pub fn meld(&mut self, other: BinomialHeap) {
        let BinomialHeap {
            roots, size, links, ..
        } = other;

        for tree in roots {
            self.carry_merge(tree);
        }

        self.size += size;
        self.links += links;
        self.refresh_cached_ranks();
    }

    /// Melds a deep copy of `other` into this heap, leaving `other` untouched
    ///
    /// **Time Complexity**: O(m + log n) where m is `other.len()`
    pub fn meld_cloned(&mut self, other: &BinomialHeap) {
        self.meld(other.clone());
    }

    /// Rank of the lowest-rank tree, or `None` when empty
    ///
    /// This is the index of the lowest set bit of [`len`](Self::len).
    ///
    /// **Time Complexity**: O(1)
    pub fn min_tree_rank(&self) -> Option<Rank> {
        self.min_tree_rank
    }

    /// Root occupancy by rank
    ///
    /// Position `i` is true iff a tree of rank `i` is in the heap. Read as
    /// bits with index 0 least significant, this is [`len`](Self::len) in
    /// binary. Empty for an empty heap.
    ///
    /// **Time Complexity**: O(log n)
    pub fn binary_rep(&self) -> Vec<bool> {
        (0..self.roots.length())
            .map(|index| {
                Rank::try_from(index)
                    .ok()
                    .and_then(|rank| self.roots.get(rank))
                    .is_some()
            })
            .collect()
    }

    /// Replaces the heap's contents with `values`
    ///
    /// Equivalent to [`clear`](Self::clear) followed by one
    /// [`insert`](Self::insert) per value, in order.
    ///
    /// **Time Complexity**: O(n)
    pub fn array_to_heap(&mut self, values: &[Key]) {
        self.clear();
        for &value in values {
            self.insert(value);
        }
    }

    /// Removes every key
    ///
    /// The link counter keeps counting across clears.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.size = 0;
        self.min_tree_rank = None;
        self.min_value_tree_rank = None;
    }

    /// Total number of tree links performed by this heap, including links
    /// performed by heaps melded into it
    pub fn link_count(&self) -> u64 {
        self.links
    }

    /// The root trees, in increasing rank order
    pub fn roots(&self) -> impl Iterator<Item = &BinomialTree> + '_ {
        self.roots.iter()
    }

    /// Returns true iff every structural invariant holds
    ///
    /// **Time Complexity**: O(n)
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks every structural invariant and reports the first violation
    ///
    /// Checks, in order:
    /// - each root sits in the slot matching its rank
    /// - each tree is heap-ordered and binomially shaped
    /// - the trees hold exactly `len()` keys
    /// - both cached ranks point at the right roots
    ///
    /// **Time Complexity**: O(n)
    pub fn validate(&self) -> Result<(), HeapError> {
        let mut held = 0usize;

        for slot in 0..self.roots.length() {
            let Some(tree) = Rank::try_from(slot).ok().and_then(|r| self.roots.get(r)) else {
                continue;
            };
            if usize::from(tree.rank()) != slot {
                return Err(HeapError::RankMismatch {
                    slot,
                    rank: tree.rank(),
                });
            }
            tree.validate()?;
            held += tree.node_count();
        }

        if held != self.size {
            return Err(HeapError::SizeMismatch {
                expected: self.size,
                found: held,
            });
        }

        let lowest = self.roots.iter().next().map(BinomialTree::rank);
        if self.min_tree_rank != lowest || lowest != lowest_set_bit(self.size) {
            return Err(HeapError::StaleCache {
                cache: RankCache::MinTree,
            });
        }

        let min_value = self.roots.iter().map(BinomialTree::value).min();
        if self.find_min() != min_value {
            return Err(HeapError::StaleCache {
                cache: RankCache::MinValueTree,
            });
        }

        Ok(())
    }

    /// Consumes the heap, returning its keys in non-decreasing order
    ///
    /// **Time Complexity**: O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<Key> {
        let mut sorted = Vec::with_capacity(self.size);
        while let Some(value) = self.delete_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Carry-merges `tree` into the root list, returning the rank it rests at
    ///
    /// Starting at the tree's own rank: while the slot is occupied, link the
    /// occupant with the carry and move one rank up. Every link joins two
    /// trees of the same rank, since the carry always has the rank of the
    /// slot being examined.
    fn carry_merge(&mut self, tree: BinomialTree) -> Rank {
        let mut carry = tree;

        while let Some(occupant) = self.roots.remove(carry.rank()) {
            carry = BinomialTree::link(carry, occupant);
            self.links += 1;
        }

        let rank = carry.rank();
        self.roots.add(carry);
        rank
    }

    /// Recomputes both cached ranks by scanning the roots
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// On equal keys the lowest rank wins.
    fn refresh_cached_ranks(&mut self) {
        let mut roots = self.roots.iter();
        let Some(first) = roots.next() else {
            self.min_tree_rank = None;
            self.min_value_tree_rank = None;
            return;
        };

        let mut min = first;
        for root in roots {
            if root.value() < min.value() {
                min = root;
            }
        }

        self.min_tree_rank = Some(first.rank());
        self.min_value_tree_rank = Some(min.rank());
    }

    fn root_value(&self, rank: Rank) -> Option<Key> {
        self.roots.get(rank).map(BinomialTree::value)
    }
}

impl Heap for BinomialHeap {
    fn new() -> Self {
        BinomialHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn push(&mut self, key: Key) {
        self.insert(key)
    }

    fn peek(&self) -> Option<Key> {
        self.find_min()
    }

    fn pop(&mut self) -> Option<Key> {
        self.delete_min()
    }

    fn merge(&mut self, other: Self) {
        self.meld(other)
    }
}

impl fmt::Debug for BinomialHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self
            .binary_rep()
            .iter()
            .rev()
            .map(|&occupied| if occupied { '1' } else { '0' })
            .collect();

        f.debug_struct("BinomialHeap")
            .field("len", &self.size)
            .field("binary_rep", &bits)
            .field("min", &self.find_min())
            .field("min_tree_rank", &self.min_tree_rank)
            .field("min_value_tree_rank", &self.min_value_tree_rank)
            .finish()
    }
}

impl FromIterator<Key> for BinomialHeap {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl Extend<Key> for BinomialHeap {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

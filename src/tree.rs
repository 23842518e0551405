//! Binomial trees
//!
//! A binomial tree of rank `k` is a root with exactly `k` children whose
//! ranks are `0, 1, ..., k-1`, in that order. Built only by linking two
//! trees of equal rank, a rank-`k` tree holds exactly `2ᵏ` keys.
//!
//! Children are owned by their parent. No node ever points back up the
//! tree, so a plain `Vec` of subtrees is enough.

use crate::rank::{checked_increment, Rank};
use crate::traits::{HeapError, Key};

/// A heap-ordered binomial tree
///
/// Invariants:
/// - `rank == children.len()`
/// - `children[i].rank == i`
/// - every child's key is `>=` its parent's key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinomialTree {
    rank: Rank,
    value: Key,
    children: Vec<BinomialTree>,
}

impl BinomialTree {
    /// Creates a rank-0 tree holding a single key
    pub fn singleton(value: Key) -> Self {
        Self {
            rank: 0,
            value,
            children: Vec::new(),
        }
    }

    /// The rank (child count) of this tree
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The key at the root, which is the smallest key in the tree
    pub fn value(&self) -> Key {
        self.value
    }

    /// The subtrees of the root, in increasing rank order
    pub fn children(&self) -> &[BinomialTree] {
        &self.children
    }

    /// Number of keys in the tree, counted by walking every node
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(BinomialTree::node_count)
            .sum::<usize>()
    }

    /// Consumes the tree, returning its root key and its subtrees
    pub fn into_parts(self) -> (Key, Vec<BinomialTree>) {
        (self.value, self.children)
    }

    /// Links two trees of equal rank into one tree of rank + 1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The root with the smaller key becomes the parent; on a tie `a` wins.
    /// The other tree is appended as the parent's last child, at position
    /// equal to the parent's old rank, which keeps `children[i].rank == i`.
    ///
    /// Both trees must have the same rank. Callers guarantee this by only
    /// linking a carry with the root occupying the carry's own rank slot.
    pub fn link(a: BinomialTree, b: BinomialTree) -> BinomialTree {
        debug_assert_eq!(a.rank, b.rank, "linked trees must have equal rank");

        let (mut parent, child) = if a.value <= b.value { (a, b) } else { (b, a) };
        parent.children.push(child);
        parent.rank = checked_increment(parent.rank);
        parent
    }

    /// Checks heap order and binomial shape throughout the tree
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.children.len() != usize::from(self.rank) {
            return Err(HeapError::ShapeMismatch {
                position: self.children.len(),
                expected: usize::from(self.rank),
                found: self.children.len(),
            });
        }

        for (position, child) in self.children.iter().enumerate() {
            if usize::from(child.rank) != position {
                return Err(HeapError::ShapeMismatch {
                    position,
                    expected: position,
                    found: usize::from(child.rank),
                });
            }
            if child.value < self.value {
                return Err(HeapError::HeapOrder {
                    parent: self.value,
                    child: child.value,
                });
            }
            child.validate()?;
        }

        Ok(())
    }
}

//! Fixed-universe bitset of word indices
//!
//! Index buckets and candidate memberships are sets over the positions of a
//! sorted word list, so set algebra is a handful of word-wide bit operations.

use std::fmt;
use std::iter::FusedIterator;

const BITS: usize = u64::BITS as usize;

/// A set of indices in `0..capacity`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WordSet {
    blocks: Vec<u64>,
    capacity: usize,
}

impl WordSet {
    /// An empty set over `capacity` indices
    #[must_use]
    pub fn empty(capacity: usize) -> Self {
        Self {
            blocks: vec![0; capacity.div_ceil(BITS)],
            capacity,
        }
    }

    /// A set holding every index below `capacity`
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        let mut set = Self {
            blocks: vec![u64::MAX; capacity.div_ceil(BITS)],
            capacity,
        };
        set.trim();
        set
    }

    fn trim(&mut self) {
        let tail = self.capacity % BITS;
        if tail != 0 {
            if let Some(last) = self.blocks.last_mut() {
                *last &= (1 << tail) - 1;
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        self.blocks[index / BITS] |= 1 << (index % BITS);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.capacity);
        self.blocks[index / BITS] &= !(1 << (index % BITS));
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.blocks[index / BITS] & (1 << (index % BITS)) != 0
    }

    /// Number of indices in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Keep only indices also in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        debug_assert_eq!(self.capacity, other.capacity);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= b;
        }
    }

    /// Remove every index in `other`
    pub fn difference_with(&mut self, other: &Self) {
        debug_assert_eq!(self.capacity, other.capacity);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= !b;
        }
    }

    /// Add every index in `other`
    pub fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.capacity, other.capacity);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a |= b;
        }
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .all(|(a, b)| a & b == 0)
    }

    /// Indices in ascending order
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            blocks: &self.blocks,
            block: 0,
            current: self.blocks.first().copied().unwrap_or(0),
        }
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterates over the indices of a [`WordSet`] in ascending order
pub struct Iter<'a> {
    blocks: &'a [u64],
    block: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.block * BITS + bit);
            }
            self.block += 1;
            self.current = *self.blocks.get(self.block)?;
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a WordSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

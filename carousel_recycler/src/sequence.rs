// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data a recycler renders.

use alloc::vec::Vec;

/// An ordered, indexable sequence of items.
///
/// Every structural mutation bumps [`revision`](Self::revision), which lets
/// observers tell "same length, different content" apart from "unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSequence<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> DataSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates the items in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutation counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Consumes the sequence and returns its items.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Appends an item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.bump();
    }

    /// Inserts an item at `index`; indices past the end append.
    pub fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.bump();
    }

    /// Removes and returns the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.bump();
        Some(item)
    }

    /// Removes and returns the first item equal to `item`.
    pub fn remove_first(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|it| it == item)?;
        self.remove_at(index)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> From<Vec<T>> for DataSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }
}

impl<T> FromIterator<T> for DataSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a DataSequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_past_end_appends() {
        let mut seq: DataSequence<u32> = (0..3).collect();
        seq.insert(99, 7);
        assert_eq!(seq.as_slice(), &[0, 1, 2, 7]);
        seq.insert(0, 9);
        assert_eq!(seq.get(0), Some(&9));
    }

    #[test]
    fn removals_report_misses() {
        let mut seq: DataSequence<char> = "abca".chars().collect();
        assert_eq!(seq.remove_first(&'a'), Some('a'));
        assert_eq!(seq.as_slice(), &['b', 'c', 'a']);
        assert_eq!(seq.remove_first(&'z'), None);
        assert_eq!(seq.remove_at(3), None);
        assert_eq!(seq.remove_at(0), Some('b'));
    }

    #[test]
    fn revision_tracks_mutations() {
        let mut seq = DataSequence::new();
        seq.push(1);
        seq.push(2);
        let r = seq.revision();
        assert_eq!(seq.remove_at(5), None);
        assert_eq!(seq.revision(), r);
        seq.clear();
        assert!(seq.revision() > r);
        assert!(seq.is_empty());
    }
}

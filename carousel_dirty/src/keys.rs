// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty key set: accumulated per-element invalidations.

use core::hash::Hash;

use hashbrown::HashSet;

/// Accumulated dirty keys with generation tracking.
///
/// Where [`Invalidation`](crate::Invalidation) answers "does the container need
/// to do this kind of work?", `DirtyKeys` answers "for which elements?". A grid
/// container, for example, records the cells whose occupant still has to be
/// positioned and drains them during its next update.
///
/// # Example
///
/// ```
/// use carousel_dirty::DirtyKeys;
///
/// let mut dirty = DirtyKeys::<(i32, i32)>::new();
/// dirty.mark((0, 0));
/// dirty.mark((2, 1));
/// dirty.mark((0, 0));
///
/// assert_eq!(dirty.len(), 2);
/// let mut drained: Vec<_> = dirty.drain().collect();
/// drained.sort();
/// assert_eq!(drained, vec![(0, 0), (2, 1)]);
/// assert!(dirty.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DirtyKeys<K>
where
    K: Copy + Eq + Hash,
{
    keys: HashSet<K>,
    generation: u64,
}

impl<K> Default for DirtyKeys<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DirtyKeys<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            generation: 0,
        }
    }

    /// Returns the current generation.
    ///
    /// Incremented on every mutation (mark, remove, drain, clear).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks a key as dirty.
    ///
    /// Returns `true` if the key was newly inserted.
    pub fn mark(&mut self, key: K) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.keys.insert(key)
    }

    /// Returns `true` if `key` is dirty.
    #[must_use]
    pub fn is_dirty(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    /// Returns `true` if no key is dirty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of dirty keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Iterates the dirty keys without clearing them.
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().copied()
    }

    /// Removes a single key, returning whether it was dirty.
    pub fn remove_key(&mut self, key: K) -> bool {
        let removed = self.keys.remove(&key);
        if removed {
            self.generation = self.generation.wrapping_add(1);
        }
        removed
    }

    /// Drains and returns every dirty key.
    pub fn drain(&mut self) -> impl Iterator<Item = K> + '_ {
        self.generation = self.generation.wrapping_add(1);
        self.keys.drain()
    }

    /// Clears every dirty key.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn mark_is_idempotent() {
        let mut dirty = DirtyKeys::<u32>::new();
        assert!(dirty.mark(7));
        assert!(!dirty.mark(7));
        assert_eq!(dirty.len(), 1);
        assert!(dirty.is_dirty(7));
    }

    #[test]
    fn remove_key_only_bumps_on_change() {
        let mut dirty = DirtyKeys::<u32>::new();
        dirty.mark(1);
        let g = dirty.generation();

        assert!(!dirty.remove_key(2));
        assert_eq!(dirty.generation(), g);

        assert!(dirty.remove_key(1));
        assert_eq!(dirty.generation(), g + 1);
        assert!(dirty.is_empty());
    }

    #[test]
    fn drain_empties_set() {
        let mut dirty = DirtyKeys::<u32>::new();
        dirty.mark(1);
        dirty.mark(2);
        dirty.mark(3);

        let mut keys: Vec<_> = dirty.drain().collect();
        keys.sort_unstable();
        assert_eq!(keys, [1, 2, 3]);
        assert!(dirty.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut dirty = DirtyKeys::<u32>::new();
        dirty.mark(1);
        dirty.clear();
        assert!(!dirty.is_dirty(1));
        assert_eq!(dirty.iter().count(), 0);
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pool addressed by a logical key.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::arena::{Pool, PoolId};

/// A [`Pool`] whose live values are addressed by a cheap, copyable key.
///
/// The key is the value's logical identity (a packed grid coordinate, an
/// entity number, …). At most one live value exists per key. Released values
/// stay in the underlying arena and are reset in place by the next
/// [`acquire`](Self::acquire) of any key.
///
/// # Example
///
/// ```
/// use carousel_pool::KeyedPool;
///
/// let mut visited = KeyedPool::<u64, Vec<u32>>::new();
/// visited.acquire(7, Vec::new, Vec::clear).push(1);
/// // Same key, same value.
/// visited.acquire(7, Vec::new, Vec::clear).push(2);
/// assert_eq!(visited.get(7).map(Vec::len), Some(2));
///
/// assert!(visited.release(7));
/// // A different key reuses the released allocation after resetting it.
/// assert!(visited.acquire(8, Vec::new, Vec::clear).is_empty());
/// ```
#[derive(Debug)]
pub struct KeyedPool<K, T>
where
    K: Copy + Eq + Hash,
{
    pool: Pool<T>,
    index: HashMap<K, PoolId>,
}

impl<K, T> Default for KeyedPool<K, T>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> KeyedPool<K, T>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pool: Pool::new(),
            index: HashMap::new(),
        }
    }

    /// Number of live keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no key is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` has a live value.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.index.contains_key(&key)
    }

    /// Returns the live value for `key`, creating or recycling one if needed.
    ///
    /// - If `key` is live, its current value is returned untouched.
    /// - Otherwise a released value is reset with `reset`, or `init` builds a
    ///   new one when nothing is available for recycling.
    pub fn acquire(
        &mut self,
        key: K,
        init: impl FnOnce() -> T,
        reset: impl FnOnce(&mut T),
    ) -> &mut T {
        let existing = self.index.get(&key).copied();
        let id = match existing {
            Some(id) => id,
            None => {
                let id = self.pool.insert_with_reset(init, reset);
                self.index.insert(key, id);
                id
            }
        };
        self.pool
            .get_mut(id)
            .expect("keyed pool invariant violated: index references a dead slot")
    }

    /// Returns the live value for `key`.
    #[must_use]
    pub fn get(&self, key: K) -> Option<&T> {
        self.index.get(&key).and_then(|&id| self.pool.get(id))
    }

    /// Returns the live value for `key` mutably.
    #[must_use]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        let id = *self.index.get(&key)?;
        self.pool.get_mut(id)
    }

    /// Releases the value for `key`, keeping it for reuse.
    ///
    /// Returns `false` if `key` was not live.
    pub fn release(&mut self, key: K) -> bool {
        match self.index.remove(&key) {
            Some(id) => self.pool.release(id),
            None => false,
        }
    }

    /// Releases every live value.
    pub fn release_all(&mut self) {
        self.index.clear();
        self.pool.release_all();
    }

    /// Iterates live keys and values in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.index
            .iter()
            .filter_map(|(&key, &id)| self.pool.get(id).map(|v| (key, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_is_stable_per_key() {
        let mut pool = KeyedPool::<u32, u32>::new();
        *pool.acquire(1, || 0, |v| *v = 0) += 5;
        *pool.acquire(1, || 0, |v| *v = 0) += 5;
        assert_eq!(pool.get(1), Some(&10));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn release_then_acquire_resets() {
        let mut pool = KeyedPool::<u32, u32>::new();
        *pool.acquire(1, || 0, |v| *v = 0) = 42;
        assert!(pool.release(1));
        assert!(!pool.contains(1));
        assert!(!pool.release(1));

        let mut inits = 0;
        let v = *pool.acquire(
            2,
            || {
                inits += 1;
                0
            },
            |v| *v = 0,
        );
        assert_eq!(v, 0);
        assert_eq!(inits, 0);
    }

    #[test]
    fn release_all_empties_index() {
        let mut pool = KeyedPool::<u32, u32>::new();
        for k in 0..4 {
            pool.acquire(k, || k, |v| *v = k);
        }
        assert_eq!(pool.iter().count(), 4);
        pool.release_all();
        assert!(pool.is_empty());
        assert_eq!(pool.get(0), None);
    }
}

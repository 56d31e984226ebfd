// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational arena with a free-list.

use alloc::vec::Vec;
use core::fmt;

/// Handle to a value stored in a [`Pool`].
///
/// A `PoolId` consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert into a fresh slot, the generation is `1`.
/// - On remove or release, the slot is freed; existing ids for it are now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `PoolId`.
///
/// Stale ids never alias a different live value because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PoolId {
    index: u32,
    generation: u32,
}

impl PoolId {
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index of this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Generation of this id.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

enum Entry<T> {
    Occupied(T),
    /// A freed slot. It may keep the previous value around for in-place reuse.
    Vacant(Option<T>),
}

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Index-addressed arena with a free-list and generational handles.
///
/// Values are stored contiguously; freed slots are pushed on a free-list and
/// reused by later inserts. [`Pool::release`] frees a slot but keeps its value
/// so [`Pool::insert_with_reset`] can recycle it without reallocating.
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    len: usize,
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("slots", &self.slots.len())
            .field("live", &self.len)
            .field("free_list", &self.free_list.len())
            .finish()
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the pool has no live values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value and returns its handle.
    ///
    /// Freed slots are reused first; any value a reused slot was holding for
    /// recycling is dropped.
    pub fn insert(&mut self, value: T) -> PoolId {
        self.occupy(move |_| value)
    }

    /// Inserts a value, recycling a released one when available.
    ///
    /// If the reused slot still holds a value from [`Pool::release`], `reset`
    /// is called on it in place. Otherwise `init` builds a new value.
    pub fn insert_with_reset(
        &mut self,
        init: impl FnOnce() -> T,
        reset: impl FnOnce(&mut T),
    ) -> PoolId {
        self.occupy(|retained| match retained {
            Some(mut old) => {
                reset(&mut old);
                old
            }
            None => init(),
        })
    }

    fn occupy(&mut self, make: impl FnOnce(Option<T>) -> T) -> PoolId {
        self.len += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.saturating_add(1);
            let retained = match core::mem::replace(&mut slot.entry, Entry::Vacant(None)) {
                Entry::Vacant(retained) => retained,
                Entry::Occupied(_) => unreachable!("free-list referenced an occupied slot"),
            };
            slot.entry = Entry::Occupied(make(retained));
            return PoolId::new(index, slot.generation);
        }

        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 1,
            entry: Entry::Occupied(make(None)),
        });
        PoolId::new(index, 1)
    }

    /// Returns `true` if `id` refers to a live value.
    #[must_use]
    pub fn contains(&self, id: PoolId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a shared reference to the value behind `id`, if it is live.
    #[must_use]
    pub fn get(&self, id: PoolId) -> Option<&T> {
        let slot = self.slots.get(id.index())?;
        match &slot.entry {
            Entry::Occupied(value) if slot.generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `id`, if it is live.
    #[must_use]
    pub fn get_mut(&mut self, id: PoolId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index())?;
        match &mut slot.entry {
            Entry::Occupied(value) if slot.generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Removes and returns the value behind `id`.
    pub fn remove(&mut self, id: PoolId) -> Option<T> {
        self.vacate(id, false)
    }

    /// Frees the slot behind `id` but keeps its value for in-place reuse.
    ///
    /// Returns `false` if `id` was stale.
    pub fn release(&mut self, id: PoolId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let _ = self.vacate(id, true);
        true
    }

    fn vacate(&mut self, id: PoolId, keep: bool) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        let slot = &mut self.slots[id.index()];
        let Entry::Occupied(value) = core::mem::replace(&mut slot.entry, Entry::Vacant(None))
        else {
            return None;
        };
        self.free_list.push(id.index);
        self.len -= 1;
        if keep {
            slot.entry = Entry::Vacant(Some(value));
            None
        } else {
            Some(value)
        }
    }

    /// Iterates live values with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (PoolId, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let Entry::Occupied(value) = &slot.entry else {
                return None;
            };
            let index = u32::try_from(i).ok()?;
            Some((PoolId::new(index, slot.generation), value))
        })
    }

    /// Iterates live values mutably with their handles, in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PoolId, &mut T)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            let Entry::Occupied(value) = &mut slot.entry else {
                return None;
            };
            let index = u32::try_from(i).ok()?;
            Some((PoolId::new(index, generation), value))
        })
    }

    /// Releases every live value, keeping them all for reuse.
    pub fn release_all(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Entry::Occupied(_) = slot.entry {
                let Entry::Occupied(value) =
                    core::mem::replace(&mut slot.entry, Entry::Vacant(None))
                else {
                    continue;
                };
                slot.entry = Entry::Vacant(Some(value));
                if let Ok(index) = u32::try_from(i) {
                    self.free_list.push(index);
                }
            }
        }
        self.len = 0;
    }

    /// Drops every value, live or retained, and forgets all slots.
    ///
    /// Ids issued before the call are invalidated because slot generations
    /// start over; do not keep ids across a `clear`.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_get_remove() {
        let mut pool = Pool::new();
        let a = pool.insert(1);
        let b = pool.insert(2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(a), Some(&1));
        assert_eq!(pool.get(b), Some(&2));

        assert_eq!(pool.remove(a), Some(1));
        assert_eq!(pool.get(a), None);
        assert_eq!(pool.remove(a), None);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn reused_slot_bumps_generation() {
        let mut pool = Pool::new();
        let a = pool.insert("a");
        pool.remove(a);
        let b = pool.insert("b");

        assert_eq!(a.index(), b.index());
        assert!(b.generation() > a.generation(), "generation must increase on reuse");
        assert_eq!(pool.get(a), None);
        assert_eq!(pool.get(b), Some(&"b"));
    }

    #[test]
    fn released_values_are_reset_in_place() {
        let mut pool = Pool::new();
        let a = pool.insert(vec![1, 2, 3]);
        let cap = pool.get(a).map(|v| v.capacity()).unwrap_or_default();
        assert!(pool.release(a));
        assert!(!pool.release(a));

        let mut built_new = false;
        let b = pool.insert_with_reset(
            || {
                built_new = true;
                vec![]
            },
            |v| v.clear(),
        );
        assert!(!built_new);
        let v = pool.get(b).expect("b is live");
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn plain_insert_replaces_retained_value() {
        let mut pool = Pool::new();
        let a = pool.insert(10);
        pool.release(a);
        let b = pool.insert(20);
        assert_eq!(pool.get(b), Some(&20));
    }

    #[test]
    fn iter_skips_vacant_slots() {
        let mut pool = Pool::new();
        let a = pool.insert('a');
        let b = pool.insert('b');
        let c = pool.insert('c');
        pool.remove(b);

        let ids: alloc::vec::Vec<_> = pool.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, c]);

        for (_, v) in pool.iter_mut() {
            *v = v.to_ascii_uppercase();
        }
        assert_eq!(pool.get(c), Some(&'C'));
    }

    #[test]
    fn release_all_recycles_every_slot() {
        let mut pool = Pool::new();
        let ids = [pool.insert(1), pool.insert(2)];
        pool.release_all();
        assert!(pool.is_empty());
        assert!(ids.iter().all(|&id| !pool.contains(id)));

        let mut resets = 0;
        for _ in 0..2 {
            pool.insert_with_reset(|| 0, |v| {
                resets += 1;
                *v = 0;
            });
        }
        assert_eq!(resets, 2);
        assert_eq!(pool.len(), 2);
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse cell-to-value storage.

use hashbrown::HashMap;

use crate::grid::Cell;

/// Sparse map from [`Cell`] to `T`.
///
/// Vacant cells cost nothing; reading one yields `None` rather than an error.
#[derive(Clone, Debug)]
pub struct CellMap<T> {
    slots: HashMap<Cell, T>,
}

impl<T> Default for CellMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CellMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value stored at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.slots.get(&cell)
    }

    /// Value stored at `cell`, mutably.
    #[must_use]
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.slots.get_mut(&cell)
    }

    /// Stores `value` at `cell` (or vacates it for `None`) and returns the
    /// previous occupant.
    pub fn set(&mut self, cell: Cell, value: Option<T>) -> Option<T> {
        match value {
            Some(value) => self.slots.insert(cell, value),
            None => self.slots.remove(&cell),
        }
    }

    /// Vacates `cell` and returns its occupant.
    pub fn remove(&mut self, cell: Cell) -> Option<T> {
        self.slots.remove(&cell)
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(Cell, &T) -> bool) {
        self.slots.retain(|&cell, value| keep(cell, value));
    }

    /// Iterates occupied cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        self.slots.iter().map(|(&cell, value)| (cell, value))
    }

    /// Vacates every cell.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_none_vacates_without_error() {
        let mut map = CellMap::new();
        assert_eq!(map.set(Cell::new(1, 1), Some('a')), None);
        assert_eq!(map.set(Cell::new(1, 1), Some('b')), Some('a'));
        assert_eq!(map.set(Cell::new(1, 1), None), Some('b'));
        assert_eq!(map.set(Cell::new(9, 9), None), None);
        assert!(map.is_empty());
        assert_eq!(map.get(Cell::new(1, 1)), None);
    }

    #[test]
    fn retain_filters_by_value() {
        let mut map = CellMap::new();
        for x in 0..4 {
            map.set(Cell::new(x, 0), Some(x));
        }
        map.retain(|_, &v| v % 2 == 0);
        assert_eq!(map.len(), 2);
        assert!(map.iter().all(|(c, &v)| c.x == v && v % 2 == 0));
    }
}

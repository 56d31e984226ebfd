// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse container placing visuals at grid cells.

use carousel_dirty::{DirtyKeys, Invalidation, InvalidationFlags};
use carousel_pool::{Pool, PoolId};
use kurbo::Size;
use smallvec::SmallVec;
use tracing::trace;

use crate::cell_map::CellMap;
use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::visual::Visual;

/// Handle to a child owned by a [`GridContainer`].
pub type ChildId = PoolId;

/// Owns a set of visuals and places some of them at cells of a [`Grid`].
///
/// Children have two independent kinds of membership:
/// - *ownership*: every child added to the container lives in its pool until
///   removed, addressed by a [`ChildId`];
/// - *placement*: a sparse cell map binds cells to children. A child may be
///   owned without occupying any cell.
///
/// Positioning is either immediate or deferred. Deferred cells are recorded
/// and resolved in one batch by [`update`](Self::update), so many placements
/// in one frame cost one positioning pass.
#[derive(Debug)]
pub struct GridContainer<V> {
    grid: Grid,
    children: Pool<V>,
    cells: CellMap<ChildId>,
    pending: DirtyKeys<Cell>,
    invalidation: Invalidation,
}

impl<V: Visual> GridContainer<V> {
    /// Creates an empty container laid out on `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            children: Pool::new(),
            cells: CellMap::new(),
            pending: DirtyKeys::new(),
            invalidation: Invalidation::new(),
        }
    }

    /// The grid children are placed on.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the grid and defers repositioning of every occupied cell.
    pub fn set_grid(&mut self, grid: Grid) {
        if grid == self.grid {
            return;
        }
        self.grid = grid;
        for (cell, _) in self.cells.iter() {
            self.pending.mark(cell);
        }
        if !self.pending.is_empty() {
            self.invalidation.raise(InvalidationFlags::CHILDREN_POSITION);
        }
    }

    /// Size of the container: the grid bounds grown by one unit on each axis.
    #[must_use]
    pub fn size(&self) -> Size {
        let bounds = self.grid.bounds();
        Size::new(bounds.width() + 1.0, bounds.height() + 1.0)
    }

    /// Invalidation state of the container.
    #[must_use]
    pub fn invalidation(&self) -> &Invalidation {
        &self.invalidation
    }

    /// Number of owned children, placed or not.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Takes ownership of `child` without placing it.
    pub fn add_child(&mut self, child: V) -> ChildId {
        self.children.insert(child)
    }

    /// Takes ownership of `child` and places it at `cell`.
    ///
    /// With `update_position`, the child is moved to the cell immediately;
    /// otherwise it is moved on the next [`update`](Self::update). A previous
    /// occupant of `cell` stays owned but loses its placement.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` is not addressable; the
    /// child is dropped in that case.
    pub fn add_child_at(
        &mut self,
        child: V,
        cell: Cell,
        update_position: bool,
    ) -> Result<ChildId, GridError> {
        if !self.grid.contains(cell) {
            return Err(GridError::OutOfBounds(cell));
        }
        let id = self.children.insert(child);
        self.place(cell, Some(id), update_position);
        Ok(id)
    }

    /// Places an owned child at `cell`, or vacates the cell for `None`.
    ///
    /// Returns the previous occupant, which stays owned.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] if `cell` is not addressable.
    /// - [`GridError::UnknownChild`] if `child` is stale or foreign.
    pub fn set_child_at(
        &mut self,
        child: Option<ChildId>,
        cell: Cell,
        update_position: bool,
    ) -> Result<Option<ChildId>, GridError> {
        if !self.grid.contains(cell) {
            return Err(GridError::OutOfBounds(cell));
        }
        if child.is_some_and(|id| !self.children.contains(id)) {
            return Err(GridError::UnknownChild);
        }
        Ok(self.place(cell, child, update_position))
    }

    /// Child placed at `cell`, if any.
    #[must_use]
    pub fn child_at(&self, cell: Cell) -> Option<&V> {
        self.child_id_at(cell).and_then(|id| self.children.get(id))
    }

    /// Child placed at `cell`, mutably.
    #[must_use]
    pub fn child_at_mut(&mut self, cell: Cell) -> Option<&mut V> {
        let id = self.child_id_at(cell)?;
        self.children.get_mut(id)
    }

    /// Handle of the child placed at `cell`, if any.
    #[must_use]
    pub fn child_id_at(&self, cell: Cell) -> Option<ChildId> {
        self.cells.get(cell).copied()
    }

    /// Owned child behind `id`.
    #[must_use]
    pub fn child(&self, id: ChildId) -> Option<&V> {
        self.children.get(id)
    }

    /// Owned child behind `id`, mutably.
    #[must_use]
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut V> {
        self.children.get_mut(id)
    }

    /// Iterates owned children.
    pub fn children(&self) -> impl Iterator<Item = (ChildId, &V)> + '_ {
        self.children.iter()
    }

    /// Iterates placements in no particular order.
    pub fn placements(&self) -> impl Iterator<Item = (Cell, ChildId)> + '_ {
        self.cells.iter().map(|(cell, &id)| (cell, id))
    }

    /// Removes the child placed at `cell` from the container entirely.
    ///
    /// The child loses every placement it had and is returned. A vacant cell
    /// yields `None`.
    pub fn remove_child_at(&mut self, cell: Cell) -> Option<V> {
        let id = self.child_id_at(cell)?;
        self.remove_child(id)
    }

    /// Removes an owned child, vacating any cell it occupies.
    pub fn remove_child(&mut self, id: ChildId) -> Option<V> {
        let child = self.children.remove(id)?;
        let pending = &mut self.pending;
        self.cells.retain(|cell, &occupant| {
            if occupant == id {
                pending.remove_key(cell);
                false
            } else {
                true
            }
        });
        Some(child)
    }

    /// Exchanges the occupants of two cells.
    ///
    /// Either cell may be vacant. Swapping a pair twice restores the original
    /// placement.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if either cell is not addressable;
    /// nothing changes in that case.
    pub fn swap_children(&mut self, a: Cell, b: Cell, update_position: bool) -> Result<(), GridError> {
        for cell in [a, b] {
            if !self.grid.contains(cell) {
                return Err(GridError::OutOfBounds(cell));
            }
        }
        // Both reads happen before either write.
        let at_a = self.child_id_at(a);
        let at_b = self.child_id_at(b);
        self.place(a, at_b, update_position);
        self.place(b, at_a, update_position);
        trace!(?a, ?b, "swapped grid children");
        Ok(())
    }

    /// Resolves deferred positions.
    ///
    /// Consumes the `CHILDREN_POSITION` flag once and moves every pending
    /// occupant to its cell. Returns the number of children moved; `0` when
    /// nothing was pending.
    pub fn update(&mut self) -> usize {
        if !self.invalidation.consume(InvalidationFlags::CHILDREN_POSITION) {
            return 0;
        }
        let cells: SmallVec<[Cell; 8]> = self.pending.drain().collect();
        let mut moved = 0;
        for cell in cells {
            let Some(id) = self.child_id_at(cell) else {
                continue;
            };
            if let Some(child) = self.children.get_mut(id) {
                child.set_position(self.grid.cell_to_point(cell));
                moved += 1;
            }
        }
        trace!(moved, "grid container positioned children");
        moved
    }

    fn place(&mut self, cell: Cell, child: Option<ChildId>, update_position: bool) -> Option<ChildId> {
        let previous = self.cells.set(cell, child);
        let Some(id) = child else {
            self.pending.remove_key(cell);
            return previous;
        };
        if update_position {
            if let Some(visual) = self.children.get_mut(id) {
                visual.set_position(self.grid.cell_to_point(cell));
            }
            self.pending.remove_key(cell);
        } else {
            self.pending.mark(cell);
            self.invalidation.raise(InvalidationFlags::CHILDREN_POSITION);
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::Sprite;
    use kurbo::Point;

    fn board() -> GridContainer<Sprite> {
        GridContainer::new(Grid::new(Size::new(10.0, 10.0), 4, 4).unwrap())
    }

    fn sprite() -> Sprite {
        Sprite::new(Size::new(10.0, 10.0))
    }

    #[test]
    fn immediate_placement_moves_child() {
        let mut b = board();
        let id = b.add_child_at(sprite(), Cell::new(2, 3), true).unwrap();
        assert_eq!(b.child(id).unwrap().position(), Point::new(20.0, 30.0));
        assert!(b.invalidation().is_clean());
        assert_eq!(b.update(), 0);
    }

    #[test]
    fn deferred_placements_resolve_in_one_update() {
        let mut b = board();
        let ids: SmallVec<[ChildId; 4]> = (0..4)
            .map(|x| b.add_child_at(sprite(), Cell::new(x, 1), false).unwrap())
            .collect();
        assert!(b.invalidation().is_raised(InvalidationFlags::CHILDREN_POSITION));
        assert!(ids.iter().all(|&id| b.child(id).unwrap().position() == Point::ZERO));

        assert_eq!(b.update(), 4);
        assert_eq!(b.child(ids[3]).unwrap().position(), Point::new(30.0, 10.0));
        assert_eq!(b.update(), 0);
    }

    #[test]
    fn vacant_cells_read_as_none() {
        let mut b = board();
        assert!(b.child_at(Cell::new(0, 0)).is_none());
        assert_eq!(b.set_child_at(None, Cell::new(0, 0), true), Ok(None));
        assert!(b.remove_child_at(Cell::new(0, 0)).is_none());
    }

    #[test]
    fn set_child_at_rejects_unknown_handles() {
        let mut b = board();
        let id = b.add_child(sprite());
        assert!(b.remove_child(id).is_some());
        assert_eq!(
            b.set_child_at(Some(id), Cell::new(1, 1), true),
            Err(GridError::UnknownChild)
        );
        assert_eq!(
            b.set_child_at(None, Cell::new(9, 0), true),
            Err(GridError::OutOfBounds(Cell::new(9, 0)))
        );
        assert_eq!(b.occupied_count(), 0);
    }

    #[test]
    fn remove_child_at_drops_membership_and_placement() {
        let mut b = board();
        let id = b.add_child_at(sprite(), Cell::new(0, 0), false).unwrap();
        assert!(b.remove_child_at(Cell::new(0, 0)).is_some());
        assert_eq!(b.child_count(), 0);
        assert!(b.child(id).is_none());
        // The pending move was dropped with the child.
        assert_eq!(b.update(), 0);
    }

    #[test]
    fn swap_with_vacant_cell() {
        let mut b = board();
        let id = b.add_child_at(sprite(), Cell::new(0, 0), true).unwrap();
        b.swap_children(Cell::new(0, 0), Cell::new(3, 3), true).unwrap();
        assert!(b.child_at(Cell::new(0, 0)).is_none());
        assert_eq!(b.child_id_at(Cell::new(3, 3)), Some(id));
        assert_eq!(b.child(id).unwrap().position(), Point::new(30.0, 30.0));
    }

    #[test]
    fn swap_same_cell_is_noop() {
        let mut b = board();
        let id = b.add_child_at(sprite(), Cell::new(1, 1), true).unwrap();
        b.swap_children(Cell::new(1, 1), Cell::new(1, 1), true).unwrap();
        assert_eq!(b.child_id_at(Cell::new(1, 1)), Some(id));
        assert_eq!(b.occupied_count(), 1);
    }

    #[test]
    fn size_is_bounds_plus_one() {
        let b = board();
        assert_eq!(b.size(), Size::new(41.0, 41.0));
    }

    #[test]
    fn regridding_defers_repositioning() {
        let mut b = board();
        let id = b.add_child_at(sprite(), Cell::new(1, 1), true).unwrap();
        b.set_grid(Grid::new(Size::new(20.0, 20.0), 4, 4).unwrap());
        assert_eq!(b.update(), 1);
        assert_eq!(b.child(id).unwrap().position(), Point::new(20.0, 20.0));
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid mapping between cells and continuous positions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::error::GridError;

/// Quotients this close to an integer are treated as that integer when
/// mapping a point back to a cell.
const SNAP_EPSILON: f64 = 1e-9;

/// Integer cell coordinate `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// Creates a cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Direction in which cell indices grow along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDirection {
    /// Cell `n` lies at `origin + n * extent`.
    #[default]
    Positive,
    /// Cell `n` lies at `origin - (n + 1) * extent`.
    Negative,
}

impl AxisDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A uniform grid of `columns × rows` cells.
///
/// `Grid` is a pure mapping: it owns no objects and has no mutable state, so
/// it is `Copy` and can be shared freely by the views that lay things out on
/// it.
///
/// Cell `(0, 0)` touches the origin. With the default
/// [`AxisDirection::Positive`] directions, columns grow to the right and rows
/// grow downwards (y-down screen space).
///
/// ```
/// use carousel_grid::{AxisDirection, Cell, Grid};
/// use kurbo::{Point, Rect, Size};
///
/// let grid = Grid::new(Size::new(10.0, 20.0), 4, 3)
///     .unwrap()
///     .with_origin(Point::new(100.0, 0.0))
///     .with_directions(AxisDirection::Negative, AxisDirection::Positive);
///
/// // Columns grow to the left of the origin.
/// assert_eq!(grid.cell_rect(Cell::new(0, 0)), Rect::new(90.0, 0.0, 100.0, 20.0));
/// assert_eq!(grid.bounds(), Rect::new(60.0, 0.0, 100.0, 60.0));
/// assert_eq!(grid.point_to_cell(Point::new(75.0, 30.0)), Cell::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    cell_size: Size,
    origin: Point,
    columns: u32,
    rows: u32,
    x_direction: AxisDirection,
    y_direction: AxisDirection,
}

impl Grid {
    /// Creates a grid anchored at the origin with positive axis directions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellSize`] when either extent of
    /// `cell_size` is not finite or not strictly positive.
    pub fn new(cell_size: Size, columns: u32, rows: u32) -> Result<Self, GridError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cell_size.width) || !valid(cell_size.height) {
            return Err(GridError::InvalidCellSize {
                width: cell_size.width,
                height: cell_size.height,
            });
        }
        Ok(Self {
            cell_size,
            origin: Point::ZERO,
            columns,
            rows,
            x_direction: AxisDirection::Positive,
            y_direction: AxisDirection::Positive,
        })
    }

    /// Returns a copy anchored at `origin`.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Returns a copy with the given per-axis index directions.
    #[must_use]
    pub const fn with_directions(mut self, x: AxisDirection, y: AxisDirection) -> Self {
        self.x_direction = x;
        self.y_direction = y;
        self
    }

    /// Size of one cell.
    #[must_use]
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Anchor point of cell `(0, 0)`.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Number of addressable columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of addressable rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Per-axis index directions `(x, y)`.
    #[must_use]
    pub const fn directions(&self) -> (AxisDirection, AxisDirection) {
        (self.x_direction, self.y_direction)
    }

    /// Number of addressable cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Returns `true` if `cell` is one of the addressable cells.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        u32::try_from(cell.x).is_ok_and(|x| x < self.columns)
            && u32::try_from(cell.y).is_ok_and(|y| y < self.rows)
    }

    /// Minimum corner of `cell`'s rectangle.
    ///
    /// Defined for any cell, addressable or not, so callers can extrapolate
    /// past the grid's edge.
    #[must_use]
    pub fn cell_to_point(&self, cell: Cell) -> Point {
        Point::new(
            min_edge(
                self.origin.x,
                self.cell_size.width,
                cell.x,
                self.x_direction,
            ),
            min_edge(
                self.origin.y,
                self.cell_size.height,
                cell.y,
                self.y_direction,
            ),
        )
    }

    /// Full rectangle of `cell`.
    #[must_use]
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::from_origin_size(self.cell_to_point(cell), self.cell_size)
    }

    /// Center of `cell`.
    #[must_use]
    pub fn cell_center(&self, cell: Cell) -> Point {
        self.cell_to_point(cell) + Vec2::new(self.cell_size.width, self.cell_size.height) * 0.5
    }

    /// Cell containing `point`.
    ///
    /// Cells are half-open: a point on the shared edge of two cells belongs to
    /// the one whose minimum corner it is. This is the exact inverse of
    /// [`cell_to_point`](Self::cell_to_point); quotients within a tiny epsilon
    /// of an integer snap to it so rounding in the forward mapping never moves
    /// a corner into the neighbouring cell.
    #[must_use]
    pub fn point_to_cell(&self, point: Point) -> Cell {
        Cell::new(
            axis_cell(
                point.x,
                self.origin.x,
                self.cell_size.width,
                self.x_direction,
            ),
            axis_cell(
                point.y,
                self.origin.y,
                self.cell_size.height,
                self.y_direction,
            ),
        )
    }

    /// Union of every addressable cell's rectangle.
    ///
    /// An empty grid reports a zero-area rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        if self.columns == 0 || self.rows == 0 {
            return Rect::from_origin_size(self.origin, Size::ZERO);
        }
        let last = Cell::new(
            i32::try_from(self.columns - 1).unwrap_or(i32::MAX),
            i32::try_from(self.rows - 1).unwrap_or(i32::MAX),
        );
        self.cell_rect(Cell::new(0, 0)).union(self.cell_rect(last))
    }

    /// Iterates addressable cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = i32::try_from(self.columns).unwrap_or(i32::MAX);
        let rows = i32::try_from(self.rows).unwrap_or(i32::MAX);
        (0..rows).flat_map(move |y| (0..columns).map(move |x| Cell::new(x, y)))
    }
}

fn min_edge(origin: f64, extent: f64, index: i32, direction: AxisDirection) -> f64 {
    let index = f64::from(index);
    match direction {
        AxisDirection::Positive => origin + index * extent,
        AxisDirection::Negative => origin - (index + 1.0) * extent,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "cell indices are i32 by construction; out-of-range points saturate"
)]
fn axis_cell(p: f64, origin: f64, extent: f64, direction: AxisDirection) -> i32 {
    let t = (p - origin) * direction.sign() / extent;
    let nearest = t.round();
    let snapped = (t - nearest).abs() <= SNAP_EPSILON;
    match direction {
        // [n, n + 1) maps to n.
        AxisDirection::Positive => {
            if snapped {
                nearest as i32
            } else {
                t.floor() as i32
            }
        }
        // (n, n + 1] maps to n: the minimum corner sits at t = n + 1.
        AxisDirection::Negative => {
            if snapped {
                nearest as i32 - 1
            } else {
                t.ceil() as i32 - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_directions() -> [(AxisDirection, AxisDirection); 4] {
        use AxisDirection::{Negative, Positive};
        [
            (Positive, Positive),
            (Positive, Negative),
            (Negative, Positive),
            (Negative, Negative),
        ]
    }

    #[test]
    fn rejects_degenerate_cell_sizes() {
        for size in [
            Size::new(0.0, 1.0),
            Size::new(1.0, -2.0),
            Size::new(f64::NAN, 1.0),
            Size::new(1.0, f64::INFINITY),
        ] {
            assert!(matches!(
                Grid::new(size, 2, 2),
                Err(GridError::InvalidCellSize { .. })
            ));
        }
    }

    #[test]
    fn point_to_cell_inverts_cell_to_point() {
        // Awkward sizes and origin make the forward mapping round.
        for (x_dir, y_dir) in all_directions() {
            let grid = Grid::new(Size::new(0.1, 1.0 / 3.0), 40, 30)
                .unwrap()
                .with_origin(Point::new(-7.3, 12.9))
                .with_directions(x_dir, y_dir);
            for cell in grid.cells() {
                assert_eq!(grid.point_to_cell(grid.cell_to_point(cell)), cell);
                assert_eq!(grid.point_to_cell(grid.cell_center(cell)), cell);
                assert!(grid.bounds().contains(grid.cell_center(cell)));
            }
        }
    }

    #[test]
    fn negative_points_floor() {
        let grid = Grid::new(Size::new(10.0, 10.0), 1, 1).unwrap();
        assert_eq!(grid.point_to_cell(Point::new(-0.5, -10.0)), Cell::new(-1, -1));
        assert_eq!(grid.point_to_cell(Point::new(9.999, 10.0)), Cell::new(0, 1));
    }

    #[test]
    fn contains_and_count() {
        let grid = Grid::new(Size::new(1.0, 1.0), 3, 2).unwrap();
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.cells().count(), 6);
        assert!(grid.contains(Cell::new(2, 1)));
        assert!(!grid.contains(Cell::new(3, 0)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert_eq!(grid.cells().nth(3), Some(Cell::new(0, 1)));
    }

    #[test]
    fn empty_grid_bounds() {
        let grid = Grid::new(Size::new(4.0, 4.0), 0, 5)
            .unwrap()
            .with_origin(Point::new(1.0, 2.0));
        assert_eq!(grid.bounds(), Rect::new(1.0, 2.0, 1.0, 2.0));
        assert_eq!(grid.cells().count(), 0);
    }
}

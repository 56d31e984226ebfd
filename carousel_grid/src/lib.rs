// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Grid: uniform grid mapping and a sparse grid container.
//!
//! This crate provides:
//!
//! - [`Grid`]: a pure mapping between integer [`Cell`] coordinates and
//!   continuous positions, with configurable cell size, origin, and per-axis
//!   direction. It owns no objects and has no mutable state.
//! - [`Visual`]: the capability a scene object needs to be laid out
//!   (position, size, visibility). Anything implementing it can be placed by
//!   the containers in this workspace. [`Sprite`] is a minimal implementation.
//! - [`GridContainer`]: owns a set of visuals and places them at cells of a
//!   [`Grid`], backed by a sparse [`CellMap`]. Positioning can be immediate or
//!   deferred to the container's [`update`](GridContainer::update) tick.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_grid::{Cell, Grid, GridContainer, Sprite, Visual};
//! use kurbo::{Point, Size};
//!
//! let grid = Grid::new(Size::new(32.0, 32.0), 8, 8).unwrap();
//! assert_eq!(grid.cell_to_point(Cell::new(2, 1)), Point::new(64.0, 32.0));
//! assert_eq!(grid.point_to_cell(Point::new(70.0, 40.0)), Cell::new(2, 1));
//!
//! let mut board = GridContainer::new(grid);
//! let a = board.add_child_at(Sprite::new(Size::new(32.0, 32.0)), Cell::new(0, 0), true).unwrap();
//! let _b = board.add_child_at(Sprite::new(Size::new(32.0, 32.0)), Cell::new(3, 3), false).unwrap();
//!
//! // Deferred positions are resolved once, on the next update.
//! assert_eq!(board.update(), 1);
//!
//! board.swap_children(Cell::new(0, 0), Cell::new(5, 5), true).unwrap();
//! assert_eq!(board.child_id_at(Cell::new(5, 5)), Some(a));
//! assert_eq!(board.child(a).unwrap().position(), Point::new(160.0, 160.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell_map;
mod container;
mod error;
mod grid;
mod visual;

pub use cell_map::CellMap;
pub use container::{ChildId, GridContainer};
pub use error::GridError;
pub use grid::{AxisDirection, Cell, Grid};
pub use visual::{Sprite, Visual};

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid errors.

use crate::grid::Cell;

/// Errors reported by [`Grid`](crate::Grid) and
/// [`GridContainer`](crate::GridContainer).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A cell extent was zero, negative, or not finite.
    #[error("cell size must be finite and strictly positive, got {width}x{height}")]
    InvalidCellSize {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// The cell lies outside the grid's addressable range.
    #[error("cell ({}, {}) is outside the grid", .0.x, .0.y)]
    OutOfBounds(Cell),
    /// The child handle is stale or belongs to another container.
    #[error("child handle is not a member of this container")]
    UnknownChild,
}

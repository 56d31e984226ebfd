// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis and main/cross decomposition.

use kurbo::{Point, Size};

/// The axis a recycler scrolls along.
///
/// The other axis is the *cross* axis. Helpers on this type split points and
/// sizes into `(main, cross)` components and back, so the ring arithmetic can
/// be written once for both orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Items are laid out left to right.
    Horizontal,
    /// Items are laid out top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub const fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    #[must_use]
    pub const fn cross_extent(self, size: Size) -> f64 {
        self.cross().main_extent(size)
    }

    /// Coordinate of `point` along this axis.
    #[must_use]
    pub const fn main_coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Builds a point from main and cross coordinates.
    #[must_use]
    pub const fn pack_point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main and cross extents.
    #[must_use]
    pub const fn pack_size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }
}

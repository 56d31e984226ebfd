// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability shared by everything a container can lay out.

use kurbo::{Point, Rect, Size};

/// Something with a position, a size, and a visibility bit.
///
/// Containers only ever move, resize, show, and hide their children; drawing
/// is the host's business. Any scene object type can implement this trait to
/// be placed by a [`GridContainer`](crate::GridContainer) or a recycling
/// scroller.
pub trait Visual {
    /// Current size in local units.
    fn size(&self) -> Size;

    /// Resizes the visual.
    fn set_size(&mut self, size: Size);

    /// Position of the visual's origin in its container's coordinate space.
    fn position(&self) -> Point;

    /// Moves the visual.
    fn set_position(&mut self, position: Point);

    /// Whether the visual is currently shown.
    fn is_visible(&self) -> bool;

    /// Shows or hides the visual.
    fn set_visible(&mut self, visible: bool);

    /// Axis-aligned bounds in the container's coordinate space.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }
}

/// A plain data-only [`Visual`].
///
/// Useful as a stand-in for real scene objects in tests and headless tools.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Position of the sprite's origin.
    pub position: Point,
    /// Size of the sprite.
    pub size: Size,
    /// Whether the sprite is shown.
    pub visible: bool,
}

impl Sprite {
    /// Creates a visible sprite of `size` at the origin.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            position: Point::ZERO,
            size,
            visible: true,
        }
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Visual for Sprite {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_position_and_size() {
        let mut s = Sprite::new(Size::new(10.0, 20.0));
        s.set_position(Point::new(5.0, 5.0));
        assert_eq!(s.bounds(), Rect::new(5.0, 5.0, 15.0, 25.0));

        s.set_visible(false);
        assert!(!s.is_visible());
    }
}

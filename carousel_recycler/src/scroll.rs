// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state and rubber-band damping.

use kurbo::{Size, Vec2};

use crate::axis::Axis;

/// How a recycler treats the ends of its sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMode {
    /// The sequence has a start and an end. Scrolling past either is damped
    /// and springs back; slots past the ends are hidden.
    #[default]
    Bounded,
    /// The sequence repeats forever in both directions.
    Wrapping,
}

/// Scroll position and the extents it is measured against.
///
/// Only the component along the recycler's [`Axis`] ever moves; the cross
/// component of [`position`](Self::position) stays at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    axis: Axis,
    mode: ScrollMode,
    position: f64,
    content_size: Size,
    scroll_max: Vec2,
    dragging: bool,
}

impl ScrollState {
    pub(crate) fn new(axis: Axis, mode: ScrollMode) -> Self {
        Self {
            axis,
            mode,
            ..Self::default()
        }
    }

    /// Scroll position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.axis.pack_point(self.position, 0.0).to_vec2()
    }

    /// Scroll position along the scroll axis.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.position
    }

    /// Virtual size of the whole sequence.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Largest in-range position on each axis.
    #[must_use]
    pub const fn scroll_max(&self) -> Vec2 {
        self.scroll_max
    }

    /// Largest in-range position along the scroll axis.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.axis.main_coord(self.scroll_max.to_point())
    }

    /// Scroll mode.
    #[must_use]
    pub const fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the position lies outside `[0, max]` in bounded mode.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.mode == ScrollMode::Bounded && self.nearest_bound().is_some()
    }

    /// In bounded mode, the bound to spring back to when out of range.
    #[must_use]
    pub fn nearest_bound(&self) -> Option<f64> {
        let max = self.max_offset();
        if self.position < 0.0 {
            Some(0.0)
        } else if self.position > max {
            Some(max)
        } else {
            None
        }
    }

    pub(crate) fn set_axis(&mut self, axis: Axis) {
        if axis != self.axis {
            self.axis = axis;
            self.position = 0.0;
        }
    }

    pub(crate) fn set_mode(&mut self, mode: ScrollMode) {
        self.mode = mode;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Updates extents from the content and viewport sizes.
    pub(crate) fn set_content(&mut self, content_size: Size, viewport: Size) {
        self.content_size = content_size;
        self.scroll_max = Vec2::new(
            (content_size.width - viewport.width).max(0.0),
            (content_size.height - viewport.height).max(0.0),
        );
    }

    /// Moves to `target`, rubber-banding its out-of-range part in bounded mode.
    ///
    /// Fed the current position plus a delta over and over, the overshoot
    /// converges to `friction / (1 - friction)` times the delta, so with a
    /// friction of at most one half it never exceeds a single delta.
    pub(crate) fn scroll_to_damped(&mut self, target: f64, friction: f64, cap: f64) {
        self.position = match self.mode {
            ScrollMode::Bounded => rubber_band(target, self.max_offset(), friction, cap),
            ScrollMode::Wrapping => target,
        };
    }

    /// Places the position exactly, with no damping.
    pub(crate) fn jump_to(&mut self, position: f64) {
        self.position = position;
    }
}

/// Damps the out-of-range part of an undamped position.
///
/// Inside `[0, max]` the position is returned unchanged. Past either end, the
/// excess is multiplied by `friction` and capped at `cap`, so a long drag
/// stretches less and less and never runs away.
///
/// ```
/// use carousel_recycler::rubber_band;
///
/// assert_eq!(rubber_band(40.0, 100.0, 0.5, 30.0), 40.0);
/// assert_eq!(rubber_band(-20.0, 100.0, 0.5, 30.0), -10.0);
/// assert_eq!(rubber_band(120.0, 100.0, 0.5, 30.0), 110.0);
/// assert_eq!(rubber_band(500.0, 100.0, 0.5, 30.0), 130.0);
/// ```
#[must_use]
pub fn rubber_band(raw: f64, max: f64, friction: f64, cap: f64) -> f64 {
    if raw < 0.0 {
        (raw * friction).max(-cap)
    } else if raw > max {
        max + ((raw - max) * friction).min(cap)
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(max: f64) -> ScrollState {
        let mut s = ScrollState::new(Axis::Vertical, ScrollMode::Bounded);
        s.set_content(Size::new(100.0, 300.0 + max), Size::new(100.0, 300.0));
        s
    }

    #[test]
    fn scroll_max_never_negative() {
        let mut s = ScrollState::new(Axis::Vertical, ScrollMode::Bounded);
        s.set_content(Size::new(50.0, 100.0), Size::new(100.0, 300.0));
        assert_eq!(s.scroll_max(), Vec2::ZERO);
        assert_eq!(s.max_offset(), 0.0);
    }

    #[test]
    fn in_range_moves_are_undamped() {
        let mut s = bounded(1000.0);
        s.scroll_to_damped(275.0, 0.5, 150.0);
        assert_eq!(s.offset(), 275.0);
        assert_eq!(s.position(), Vec2::new(0.0, 275.0));
        assert!(!s.is_out_of_range());
    }

    #[test]
    fn only_the_excess_is_damped() {
        let mut s = bounded(1000.0);
        s.scroll_to_damped(1040.0, 0.5, 150.0);
        assert_eq!(s.offset(), 1020.0);
        assert_eq!(s.nearest_bound(), Some(1000.0));

        s.scroll_to_damped(-60.0, 0.5, 150.0);
        assert_eq!(s.offset(), -30.0);
        assert_eq!(s.nearest_bound(), Some(0.0));
    }

    #[test]
    fn repeated_steps_past_the_end_stay_within_one_step() {
        let mut s = bounded(200.0);
        s.jump_to(200.0);
        for _ in 0..50 {
            let next = s.offset() + 20.0;
            s.scroll_to_damped(next, 0.5, 150.0);
            assert!(s.offset() <= 220.0, "overshoot {}", s.offset());
        }
        assert!(s.offset() > 219.0);
    }

    #[test]
    fn wrapping_is_never_damped() {
        let mut s = ScrollState::new(Axis::Horizontal, ScrollMode::Wrapping);
        s.scroll_to_damped(-5000.0, 0.5, 10.0);
        assert_eq!(s.offset(), -5000.0);
        assert_eq!(s.position(), Vec2::new(-5000.0, 0.0));
        assert!(!s.is_out_of_range());
    }

    #[test]
    fn cap_limits_overshoot() {
        for raw in [1e3, 1e6, 1e9] {
            assert!(rubber_band(raw, 10.0, 0.9, 25.0) <= 35.0);
            assert!(rubber_band(-raw, 10.0, 0.9, 25.0) >= -25.0);
        }
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler configuration.

use core::time::Duration;

use kurbo::Size;

use crate::axis::Axis;
use crate::error::{ConfigError, check_extent, check_friction};
use crate::scroll::ScrollMode;

/// Settings of a [`Recycler`](crate::Recycler).
///
/// Build one with [`Default`] and the `with_*` methods, then hand it to
/// [`Recycler::new`](crate::Recycler::new) or
/// [`Recycler::set_config`](crate::Recycler::set_config), which validate it.
///
/// ```
/// use carousel_recycler::{Axis, RecyclerConfig, ScrollMode};
/// use kurbo::Size;
///
/// let config = RecyclerConfig::default()
///     .with_axis(Axis::Horizontal)
///     .with_mode(ScrollMode::Wrapping)
///     .with_viewport(Size::new(640.0, 120.0))
///     .with_gap(8.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_overscroll_extent(), 320.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecyclerConfig {
    /// Scroll axis.
    pub axis: Axis,
    /// Whether the sequence ends or wraps around.
    pub mode: ScrollMode,
    /// Size of the visible region.
    pub viewport: Size,
    /// Spacing between consecutive items.
    pub gap: f64,
    /// Lower bound on an item's cell extent along the scroll axis.
    pub min_cell_size: f64,
    /// Multiplier applied to the out-of-range part of a bounded scroll.
    pub overscroll_friction: f64,
    /// Largest out-of-range displacement; half the viewport when `None`.
    pub max_overscroll: Option<f64>,
    /// Fraction of fling velocity left after one second.
    pub fling_friction: f64,
    /// Release velocity above which a drag turns into a fling, and below
    /// which a fling stops.
    pub min_fling_velocity: f64,
    /// Duration of snap animations.
    pub snap_duration: Duration,
}

impl Default for RecyclerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            mode: ScrollMode::Bounded,
            viewport: Size::ZERO,
            gap: 0.0,
            min_cell_size: 0.0,
            overscroll_friction: 0.5,
            max_overscroll: None,
            fling_friction: 0.05,
            min_fling_velocity: 50.0,
            snap_duration: Duration::from_millis(250),
        }
    }
}

impl RecyclerConfig {
    /// Sets the scroll axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the scroll mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ScrollMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the viewport size.
    #[must_use]
    pub const fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the gap between items.
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the minimum cell extent.
    #[must_use]
    pub const fn with_min_cell_size(mut self, min_cell_size: f64) -> Self {
        self.min_cell_size = min_cell_size;
        self
    }

    /// Sets the overscroll friction.
    #[must_use]
    pub const fn with_overscroll_friction(mut self, friction: f64) -> Self {
        self.overscroll_friction = friction;
        self
    }

    /// Sets the overscroll cap.
    #[must_use]
    pub const fn with_max_overscroll(mut self, max: Option<f64>) -> Self {
        self.max_overscroll = max;
        self
    }

    /// Sets the fling friction.
    #[must_use]
    pub const fn with_fling_friction(mut self, friction: f64) -> Self {
        self.fling_friction = friction;
        self
    }

    /// Sets the fling velocity threshold.
    #[must_use]
    pub const fn with_min_fling_velocity(mut self, velocity: f64) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    /// Sets the snap duration.
    #[must_use]
    pub const fn with_snap_duration(mut self, duration: Duration) -> Self {
        self.snap_duration = duration;
        self
    }

    /// Viewport extent along the scroll axis.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.axis.main_extent(self.viewport)
    }

    /// The effective overscroll cap.
    #[must_use]
    pub fn max_overscroll_extent(&self) -> f64 {
        self.max_overscroll.unwrap_or(self.viewport_extent() * 0.5)
    }

    /// Checks every setting.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found. A zero pitch is only
    /// detectable once the item size is known and is checked by the recycler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_extent("viewport.width", self.viewport.width)?;
        check_extent("viewport.height", self.viewport.height)?;
        check_extent("gap", self.gap)?;
        check_extent("min_cell_size", self.min_cell_size)?;
        check_friction("overscroll_friction", self.overscroll_friction)?;
        check_friction("fling_friction", self.fling_friction)?;
        check_extent("min_fling_velocity", self.min_fling_velocity)?;
        if let Some(max) = self.max_overscroll {
            check_extent("max_overscroll", max)?;
        }
        Ok(())
    }

    /// Cell extent of an item of main extent `item_extent`.
    #[must_use]
    pub fn cell_extent(&self, item_extent: f64) -> f64 {
        item_extent.max(self.min_cell_size)
    }

    /// Distance between the leading edges of consecutive items.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPitch`] if the pitch would be zero, or an
    /// extent error if `item_extent` is itself invalid.
    pub fn pitch(&self, item_extent: f64) -> Result<f64, ConfigError> {
        let item_extent = check_extent("item extent", item_extent)?;
        let pitch = self.cell_extent(item_extent) + self.gap;
        if pitch > 0.0 {
            Ok(pitch)
        } else {
            Err(ConfigError::ZeroPitch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RecyclerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.overscroll_friction, 0.5);
        assert_eq!(config.max_overscroll_extent(), 0.0);
    }

    #[test]
    fn rejects_bad_values() {
        let base = RecyclerConfig::default();
        assert!(base.with_gap(-1.0).validate().is_err());
        assert!(base.with_viewport(Size::new(f64::NAN, 1.0)).validate().is_err());
        assert!(base.with_overscroll_friction(1.5).validate().is_err());
        assert!(base.with_fling_friction(-0.1).validate().is_err());
        assert!(base.with_max_overscroll(Some(-3.0)).validate().is_err());
    }

    #[test]
    fn pitch_uses_min_cell_size_and_gap() {
        let config = RecyclerConfig::default().with_min_cell_size(40.0).with_gap(2.0);
        assert_eq!(config.pitch(30.0), Ok(42.0));
        assert_eq!(config.pitch(50.0), Ok(52.0));
        assert_eq!(RecyclerConfig::default().pitch(0.0), Err(ConfigError::ZeroPitch));
        assert!(config.pitch(-1.0).is_err());
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-driven scroll motions: velocity decay and snapping.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A velocity that decays exponentially over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    velocity: f64,
    friction: f64,
    min_velocity: f64,
}

impl Fling {
    /// Starts a fling at `velocity` units per second.
    ///
    /// `friction` is the fraction of velocity left after one second; the
    /// fling finishes once the speed drops below `min_velocity`.
    #[must_use]
    pub const fn new(velocity: f64, friction: f64, min_velocity: f64) -> Self {
        Self {
            velocity,
            friction,
            min_velocity,
        }
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether the fling has run out of speed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.velocity.abs() < self.min_velocity || self.velocity == 0.0
    }

    /// Advances by `dt` and returns the displacement covered.
    pub fn step(&mut self, dt: Duration) -> f64 {
        if self.is_finished() {
            return 0.0;
        }
        if self.friction <= 0.0 {
            self.velocity = 0.0;
            return 0.0;
        }
        let secs = dt.as_secs_f64();
        let decay = self.friction.powf(secs);
        // Exact integral of v0 * friction^t over [0, secs].
        let displacement = if decay < 1.0 {
            self.velocity * (decay - 1.0) / self.friction.ln()
        } else {
            0.0
        };
        self.velocity *= decay;
        displacement
    }
}

/// A fixed-duration ease-out move between two positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Snap {
    /// Starts a snap from `from` to `to` lasting `duration`.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Destination of the snap.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Whether the snap has reached its destination.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advances by `dt` and returns the new position.
    pub fn step(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let inv = 1.0 - t;
        let eased = 1.0 - inv * inv * inv;
        self.from + (self.to - self.from) * eased
    }
}

/// The motion currently driving a recycler's scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Free movement after a release.
    Fling(Fling),
    /// Animated move to a fixed position.
    Snap(Snap),
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn fling_decays_and_stops() {
        let mut fling = Fling::new(1000.0, 0.05, 20.0);
        let mut travelled = 0.0;
        let mut frames = 0;
        while !fling.is_finished() {
            travelled += fling.step(FRAME);
            frames += 1;
            assert!(frames < 10_000, "fling must terminate");
        }
        assert!(travelled > 0.0);
        // The total distance of an exponential decay is bounded by v0 / -ln(f).
        assert!(travelled < 1000.0 / -(0.05_f64.ln()));
    }

    #[test]
    fn fling_step_size_does_not_change_distance() {
        let mut coarse = Fling::new(-600.0, 0.1, 0.0);
        let mut fine = coarse;
        let a = coarse.step(Duration::from_millis(500));
        let b: f64 = (0..50).map(|_| fine.step(Duration::from_millis(10))).sum();
        assert!((a - b).abs() < 1e-6);
        assert!((coarse.velocity() - fine.velocity()).abs() < 1e-6);
    }

    #[test]
    fn snap_lands_exactly() {
        let mut snap = Snap::new(-40.0, 0.0, Duration::from_millis(100));
        let mut last = -40.0;
        while !snap.is_finished() {
            let p = snap.step(FRAME);
            assert!(p >= last, "ease-out is monotonic");
            last = p;
        }
        assert_eq!(last, 0.0);
        assert_eq!(Snap::new(3.0, 9.0, Duration::ZERO).step(FRAME), 9.0);
    }
}

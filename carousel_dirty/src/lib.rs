// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Dirty: deferred invalidation for tick-driven containers.
//!
//! Containers in a frame-driven scene rarely want to recompute layout the
//! moment something changes. Adding five items in one frame should cost one
//! resize, not five. This crate provides the two small pieces that make that
//! possible:
//!
//! - [`InvalidationFlags`] and [`Invalidation`]: a per-container register of
//!   independent flags (children count, children position, content size, …).
//!   Mutations *raise* flags; the container's update tick *consumes* each raised
//!   flag exactly once and performs the deferred work.
//! - [`DirtyKeys`]: a set of dirty keys with generation tracking, for cases where
//!   the deferred work is per element (for example, grid cells whose occupant
//!   still needs to be positioned).
//!
//! ## Quick Start
//!
//! ```rust
//! use carousel_dirty::{Invalidation, InvalidationFlags};
//!
//! let mut flags = Invalidation::new();
//!
//! // Several mutations in one frame...
//! for _ in 0..5 {
//!     flags.raise(InvalidationFlags::CHILDREN_COUNT);
//! }
//!
//! // ...coalesce into a single recomputation on the next tick.
//! let mut resizes = 0;
//! if flags.consume(InvalidationFlags::CHILDREN_COUNT) {
//!     resizes += 1;
//! }
//! assert_eq!(resizes, 1);
//! assert!(!flags.is_raised(InvalidationFlags::CHILDREN_COUNT));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flags;
mod keys;

pub use flags::{Invalidation, InvalidationFlags};
pub use keys::DirtyKeys;

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Recycler: a virtualized scroller built on a ring of recycled
//! renderers.
//!
//! A [`Recycler`] shows a sequence of any length with only as many renderers
//! as it takes to cover the viewport. As the offset changes, the ring rotates:
//! the renderer that scrolled out on one side is repositioned on the other and
//! rebound to the item that scrolled in. Sequences can be bounded (with a
//! rubber-banded overscroll) or wrap around forever.
//!
//! The pieces:
//!
//! - [`ItemRenderer`] and [`RendererFactory`]: what the recycler needs from the
//!   host's visuals. Renderers build on [`carousel_grid::Visual`].
//! - [`DataSequence`]: the items, plus [`DataCommand`] for describing
//!   mutations as values.
//! - [`RecyclerConfig`]: axis, viewport, spacing, and scroll physics.
//! - [`ring`]: the pure arithmetic that maps an offset onto slots, usable on
//!   its own.
//! - [`ScrollState`], [`rubber_band`], and the [`Fling`] and [`Snap`] motions.
//!
//! Nothing is recomputed while the host mutates data or scrolls. The host calls
//! [`Recycler::tick`] once per frame, and the recycler performs each kind of
//! pending work at most once, tracked with
//! [`carousel_dirty::Invalidation`].
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_grid::{Sprite, Visual};
//! use carousel_recycler::{ItemRenderer, Recycler, RecyclerConfig, ScrollMode};
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//!
//! #[derive(Debug, Default)]
//! struct Label {
//!     sprite: Sprite,
//!     text: String,
//!     index: Option<usize>,
//! }
//!
//! impl Visual for Label {
//!     fn size(&self) -> Size { self.sprite.size }
//!     fn set_size(&mut self, size: Size) { self.sprite.size = size; }
//!     fn position(&self) -> Point { self.sprite.position }
//!     fn set_position(&mut self, p: Point) { self.sprite.position = p; }
//!     fn is_visible(&self) -> bool { self.sprite.visible }
//!     fn set_visible(&mut self, v: bool) { self.sprite.visible = v; }
//! }
//!
//! impl ItemRenderer<&'static str> for Label {
//!     fn set_data(&mut self, index: usize, item: &&'static str) {
//!         self.index = Some(index);
//!         self.text = item.to_string();
//!     }
//!     fn data_index(&self) -> Option<usize> { self.index }
//! }
//!
//! let config = RecyclerConfig::default()
//!     .with_viewport(Size::new(120.0, 100.0))
//!     .with_mode(ScrollMode::Wrapping);
//! let make = || Some(Label { sprite: Sprite::new(Size::new(120.0, 40.0)), ..Label::default() });
//! let mut wheel = Recycler::with_factory(config, make).unwrap();
//! wheel.set_data(Some(["mon", "tue", "wed", "thu", "fri"].into_iter().collect()));
//!
//! // Scroll back past the start: the wheel wraps to the end of the week.
//! wheel.scroll_to(-40.0);
//! wheel.tick(Duration::ZERO);
//! let first = wheel.visible_bindings().next().map(|(slot, _)| slot).unwrap();
//! assert_eq!(wheel.renderers()[first].text, "fri");
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables [`command_queue`] for feeding a recycler from
//!   other threads.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: serialization of [`RecyclerConfig`] and friends.
//!
//! Without `std` this crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod command;
mod config;
mod error;
mod motion;
mod recycler;
mod renderer;
pub mod ring;
mod scroll;
mod sequence;

pub use axis::Axis;
#[cfg(feature = "std")]
pub use command::{CommandReceiver, CommandSender, command_queue};
pub use command::DataCommand;
pub use config::RecyclerConfig;
pub use error::ConfigError;
pub use motion::{Fling, Motion, Snap};
pub use recycler::{Recycler, RecyclerStats, ScrollAlign, TickReport};
pub use renderer::{ItemRenderer, RendererFactory};
pub use scroll::{ScrollMode, ScrollState, rubber_band};
pub use sequence::DataSequence;

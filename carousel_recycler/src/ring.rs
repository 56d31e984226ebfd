// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring arithmetic.
//!
//! Pure functions mapping a scroll offset onto a ring of `slots` renderers
//! showing a sequence of `len` items spaced `pitch` apart. Nothing here touches
//! renderers, so every rule can be checked in isolation.
//!
//! Terms:
//! - *pitch*: cell extent plus gap, the distance between consecutive items.
//! - *first item*: the unwrapped (possibly negative, possibly `>= len`) index
//!   of the first item whose leading edge is at or after the viewport start.
//! - *leading offset*: where that item's leading edge sits in the viewport.
//! - *geometric order*: slots sorted by their position along the axis.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::scroll::ScrollMode;

/// Quotients this close to an integer count as that integer.
const EPSILON: f64 = 1e-9;

fn snap(q: f64) -> f64 {
    let nearest = q.round();
    if (q - nearest).abs() <= EPSILON {
        nearest
    } else {
        q
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "rem_euclid by a usize length yields a value below that length"
)]
fn wrap_index(item: i64, len: usize) -> usize {
    item.rem_euclid(len_i64(len)) as usize
}

/// Number of renderers needed to fill `viewport` with items `pitch` apart.
///
/// This is `ceil(viewport / pitch)` clamped to `len`, plus one spare slot
/// when the viewport does not tile into whole pitches and more items remain,
/// so a partially visible trailing item always has a renderer.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the count is clamped to `len` before the cast"
)]
pub fn needed_renderers(viewport: f64, pitch: f64, len: usize) -> usize {
    if len == 0 || !is_positive(pitch) || !is_positive(viewport) {
        return 0;
    }
    let ratio = snap(viewport / pitch);
    let covering = ratio.ceil();
    if covering >= len as f64 {
        return len;
    }
    let count = covering as usize;
    if ratio == covering { count } else { count + 1 }
}

/// Extent of `len` cells of `cell` extent separated by `gap`.
#[must_use]
pub fn content_extent(cell: f64, gap: f64, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    cell * len as f64 + gap * (len - 1) as f64
}

/// Unwrapped index of the first item starting at or after `offset`.
///
/// Equals `ceil(offset / pitch)`; negative for offsets before the start.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "scroll offsets are far inside the i64 range"
)]
pub fn unwrapped_start(offset: f64, pitch: f64) -> i64 {
    snap(offset / pitch).ceil() as i64
}

/// Index of the item shown in the first regular slot.
///
/// - For `offset >= 0` this is `ceil(offset / pitch) mod len`.
/// - For `offset < 0`, with `looped = floor(-offset / pitch)`, this is
///   `(len - looped mod len) mod len`.
///
/// An empty sequence yields `0` without dividing by its length.
///
/// ```
/// use carousel_recycler::ring::data_start_index;
///
/// assert_eq!(data_start_index(275.0, 50.0, 1000), 6);
/// assert_eq!(data_start_index(-30.0, 50.0, 1000), 0);
/// assert_eq!(data_start_index(-60.0, 50.0, 1000), 999);
/// assert_eq!(data_start_index(-60.0, 50.0, 0), 0);
/// ```
#[must_use]
pub fn data_start_index(offset: f64, pitch: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    wrap_index(unwrapped_start(offset, pitch), len)
}

/// Position of the first regular item's leading edge, in `[0, pitch)`.
#[must_use]
pub fn leading_offset(offset: f64, pitch: f64) -> f64 {
    (unwrapped_start(offset, pitch) as f64 * pitch - offset).max(0.0)
}

/// Spacing and viewport the ring is laid out in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    /// Cell extent plus gap.
    pub pitch: f64,
    /// Gap between items.
    pub gap: f64,
    /// Viewport extent along the scroll axis.
    pub viewport: f64,
}

/// Where one slot goes and what it shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotPlacement {
    /// Index into the renderer pool.
    pub slot: usize,
    /// Unwrapped item index; may lie outside `0..len`.
    pub item: i64,
    /// Item index wrapped into `0..len`; what the slot is bound to.
    pub index: usize,
    /// Leading edge along the scroll axis, relative to the viewport start.
    pub offset: f64,
    /// Whether the slot is shown. In bounded mode, slots whose unwrapped item
    /// lies outside the sequence are hidden rather than clamped.
    pub visible: bool,
}

/// Assignment of ring slots to items for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingWindow {
    /// Unwrapped index of the first regular item.
    pub first_item: i64,
    /// `first_item` wrapped into `0..len`.
    pub data_start: usize,
    /// Slot holding the first regular item.
    ///
    /// This is `data_start % slots`, so a given offset always maps to the
    /// same slot layout. When `len` is not a multiple of `slots`, crossing
    /// the wrap seam (from item `len - 1` to item `0`) shifts every slot
    /// and the whole ring is rebound once per lap.
    pub start_slot: usize,
    /// Leading edge of the first regular item.
    pub leading_offset: f64,
    /// Whether the slot preceding `start_slot` fills the leading gap with the
    /// item before `first_item`.
    pub wrap_fill: bool,
    slots: usize,
    len: usize,
    pitch: f64,
    mode: ScrollMode,
}

impl RingWindow {
    /// Computes the window for `offset`.
    ///
    /// Returns `None` when there is nothing to show: no slots, an empty
    /// sequence, or a non-positive pitch.
    #[must_use]
    pub fn compute(
        geometry: RingGeometry,
        offset: f64,
        slots: usize,
        len: usize,
        mode: ScrollMode,
    ) -> Option<Self> {
        if slots == 0 || len == 0 || !is_positive(geometry.pitch) {
            return None;
        }
        let pitch = geometry.pitch;
        let first_item = unwrapped_start(offset, pitch);
        let data_start = wrap_index(first_item, len);
        let leading = leading_offset(offset, pitch);

        // Slots needed to cover [leading, viewport) with regular items.
        let trailing = snap((geometry.viewport - leading) / pitch).ceil().max(0.0);
        let wrap_fill = leading > geometry.gap && (slots as f64) > trailing;

        Some(Self {
            first_item,
            data_start,
            start_slot: data_start % slots,
            leading_offset: leading,
            wrap_fill,
            slots,
            len,
            pitch,
            mode,
        })
    }

    /// Number of slots in the ring.
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Placement of the slot at position `order` in geometric order.
    ///
    /// With [`wrap_fill`](Self::wrap_fill), order `0` is the leading fill slot
    /// and regular items follow; otherwise order `j` shows `first_item + j`.
    #[must_use]
    pub fn placement(&self, order: usize) -> SlotPlacement {
        let regular = |j: usize| (len_i64(j), self.leading_offset + j as f64 * self.pitch);
        let (rel, offset) = match (self.wrap_fill, order) {
            (true, 0) => (-1, self.leading_offset - self.pitch),
            (true, j) => regular(j - 1),
            (false, j) => regular(j),
        };
        let item = self.first_item + rel;
        let visible = match self.mode {
            ScrollMode::Wrapping => true,
            ScrollMode::Bounded => (0..len_i64(self.len)).contains(&item),
        };
        SlotPlacement {
            slot: wrap_index(len_i64(self.start_slot) + rel, self.slots),
            item,
            index: wrap_index(item, self.len),
            offset,
            visible,
        }
    }

    /// All placements in geometric order.
    pub fn placements(self) -> impl Iterator<Item = SlotPlacement> {
        (0..self.slots).map(move |order| self.placement(order))
    }
}

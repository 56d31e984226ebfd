// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling scroller.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use carousel_dirty::{Invalidation, InvalidationFlags};
use kurbo::{Point, Size};
use tracing::{debug, trace, warn};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::RecyclerConfig;
use crate::error::ConfigError;
use crate::motion::{Fling, Motion, Snap};
use crate::renderer::{ItemRenderer, RendererFactory};
use crate::ring::{self, RingGeometry, RingWindow};
use crate::scroll::{ScrollMode, ScrollState};
use crate::sequence::DataSequence;

/// Alignment when scrolling a specific index into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the item's leading edge with the viewport start.
    Start,
    /// Center the item within the viewport.
    Center,
    /// Align the item's trailing edge with the viewport end.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current offset.
    Nearest,
}

/// What one [`Recycler::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A fling or snap moved the scroll position.
    pub motion_active: bool,
    /// The renderer pool was resized.
    pub resized: bool,
    /// Renderers created by the resize pass.
    pub created: usize,
    /// Renderers dropped by the resize pass.
    pub dropped: usize,
    /// The factory failed before the pool reached its needed size.
    pub growth_stalled: bool,
    /// Data is present but no factory is installed.
    pub missing_factory: bool,
    /// Content extents were recomputed.
    pub content_size_updated: bool,
    /// Slots were repositioned.
    pub repositioned: bool,
    /// Number of `set_data` calls made.
    pub rebound: usize,
}

impl TickReport {
    /// Returns `true` if the tick did no work at all.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Lifetime counters of a [`Recycler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecyclerStats {
    /// Calls to [`Recycler::tick`].
    pub ticks: u64,
    /// Resize passes run.
    pub resize_passes: u64,
    /// Layout passes run (repositioning, with or without rebinding).
    pub layout_passes: u64,
    /// Total `set_data` calls.
    pub bindings: u64,
    /// Renderers created, sample renderers excluded.
    pub renderers_created: u64,
    /// Renderers dropped.
    pub renderers_dropped: u64,
    /// Resize passes cut short by a factory failure.
    pub stalls: u64,
}

/// A virtualized scroller that shows a long, or endlessly wrapping, sequence
/// with a small ring of recycled renderers.
///
/// The recycler owns:
/// - its [`RecyclerConfig`],
/// - an optional [`RendererFactory`] and the pool of renderers it produced,
/// - the [`DataSequence`] being shown,
/// - the scroll state and any running fling or snap.
///
/// The data is moved in with [`set_data`](Self::set_data) and handed back
/// with [`take_data`](Self::take_data). In between the host changes it only
/// through the recycler's mutation methods, and renderers see each item by
/// shared reference while being bound.
///
/// Mutations never recompute anything on the spot. They raise invalidation
/// flags, and the next [`tick`](Self::tick) performs each kind of deferred
/// work once, however many mutations happened in between. A tick with nothing
/// raised and an unchanged scroll offset does constant work.
///
/// ```
/// use carousel_grid::{Sprite, Visual};
/// use carousel_recycler::{ItemRenderer, Recycler, RecyclerConfig};
/// use core::time::Duration;
/// use kurbo::{Point, Size};
///
/// #[derive(Debug)]
/// struct Row {
///     sprite: Sprite,
///     index: Option<usize>,
/// }
///
/// impl Visual for Row {
///     fn size(&self) -> Size { self.sprite.size }
///     fn set_size(&mut self, size: Size) { self.sprite.size = size; }
///     fn position(&self) -> Point { self.sprite.position }
///     fn set_position(&mut self, p: Point) { self.sprite.position = p; }
///     fn is_visible(&self) -> bool { self.sprite.visible }
///     fn set_visible(&mut self, v: bool) { self.sprite.visible = v; }
/// }
///
/// impl ItemRenderer<String> for Row {
///     fn set_data(&mut self, index: usize, _item: &String) { self.index = Some(index); }
///     fn data_index(&self) -> Option<usize> { self.index }
/// }
///
/// let config = RecyclerConfig::default().with_viewport(Size::new(200.0, 300.0));
/// let factory = || Some(Row { sprite: Sprite::new(Size::new(200.0, 50.0)), index: None });
/// let mut list = Recycler::with_factory(config, factory).unwrap();
/// list.set_data(Some((0..1000).map(|i| format!("row {i}")).collect()));
///
/// list.tick(Duration::ZERO);
/// assert_eq!(list.renderer_count(), 6);
///
/// list.scroll_to(275.0);
/// list.tick(Duration::ZERO);
/// let shown: Vec<usize> = list.visible_bindings().map(|(_, index)| index).collect();
/// assert_eq!(shown, [6, 7, 8, 9, 10, 11]);
/// ```
pub struct Recycler<T, R, F = fn() -> Option<R>> {
    config: RecyclerConfig,
    factory: Option<F>,
    item_size: Size,
    data: Option<DataSequence<T>>,
    renderers: Vec<R>,
    scroll: ScrollState,
    motion: Option<Motion>,
    invalidation: Invalidation,
    window: Option<RingWindow>,
    laid_out_at: Option<f64>,
    warned_missing_factory: bool,
    stalled: bool,
    stats: RecyclerStats,
}

impl<T, R, F> fmt::Debug for Recycler<T, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recycler")
            .field("config", &self.config)
            .field("has_factory", &self.factory.is_some())
            .field("item_size", &self.item_size)
            .field("len", &self.data.as_ref().map(DataSequence::len))
            .field("renderers", &self.renderers.len())
            .field("scroll", &self.scroll)
            .field("motion", &self.motion)
            .field("invalidation", &self.invalidation)
            .field("window", &self.window)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<T, R, F> Recycler<T, R, F>
where
    R: ItemRenderer<T>,
    F: RendererFactory<R>,
{
    /// Creates a recycler with no factory and no data.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting in `config`.
    pub fn new(config: RecyclerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            factory: None,
            item_size: Size::ZERO,
            data: None,
            renderers: Vec::new(),
            scroll: ScrollState::new(config.axis, config.mode),
            motion: None,
            invalidation: Invalidation::new(),
            window: None,
            laid_out_at: None,
            warned_missing_factory: false,
            stalled: false,
            stats: RecyclerStats::default(),
        })
    }

    /// Creates a recycler and installs `factory`.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new) and [`set_factory`](Self::set_factory).
    pub fn with_factory(config: RecyclerConfig, factory: F) -> Result<Self, ConfigError> {
        let mut recycler = Self::new(config)?;
        recycler.set_factory(factory)?;
        Ok(recycler)
    }

    /// Installs the renderer factory.
    ///
    /// One sample renderer is created to learn the item size and then dropped.
    /// Renderers from a previous factory are discarded and the pool is rebuilt
    /// on the next tick.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FactorySampleFailed`] if the sample could not be made.
    /// - [`ConfigError::ZeroPitch`] or an extent error if the sampled size
    ///   would make the per-item pitch invalid.
    pub fn set_factory(&mut self, mut factory: F) -> Result<(), ConfigError> {
        let sample = factory.create().ok_or(ConfigError::FactorySampleFailed)?;
        let item_size = sample.size();
        self.config.pitch(self.config.axis.main_extent(item_size))?;

        self.item_size = item_size;
        self.factory = Some(factory);
        self.warned_missing_factory = false;
        self.release_renderers();
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        debug!(
            width = item_size.width,
            height = item_size.height,
            "renderer factory installed"
        );
        Ok(())
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RecyclerConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Changes to layout inputs (axis, viewport, gap, minimum cell size)
    /// schedule a resize pass; a mode change schedules a visibility pass.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting; nothing changes in that case.
    pub fn set_config(&mut self, config: RecyclerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if self.factory.is_some() {
            config.pitch(config.axis.main_extent(self.item_size))?;
        }
        let old = core::mem::replace(&mut self.config, config);
        self.scroll.set_axis(config.axis);
        if old.axis != config.axis
            || old.viewport != config.viewport
            || old.gap != config.gap
            || old.min_cell_size != config.min_cell_size
        {
            self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        }
        if old.mode != config.mode {
            self.apply_mode(config.mode);
        }
        Ok(())
    }

    /// Resizes the viewport.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite extents.
    pub fn set_viewport(&mut self, viewport: Size) -> Result<(), ConfigError> {
        self.set_config(self.config.with_viewport(viewport))
    }

    /// Changes the gap between items.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite gaps and gaps that zero the pitch.
    pub fn set_gap(&mut self, gap: f64) -> Result<(), ConfigError> {
        self.set_config(self.config.with_gap(gap))
    }

    /// Switches between bounded and wrapping scrolling.
    ///
    /// Entering bounded mode while out of range springs back to the nearest
    /// end.
    pub fn set_mode(&mut self, mode: ScrollMode) {
        if mode != self.config.mode {
            self.config.mode = mode;
            self.apply_mode(mode);
        }
    }

    fn apply_mode(&mut self, mode: ScrollMode) {
        self.scroll.set_mode(mode);
        self.invalidation.raise(InvalidationFlags::VISIBILITY);
        debug!(?mode, "recycler scroll mode changed");
        if self.motion.is_none() && !self.scroll.is_dragging() {
            self.settle();
        }
    }

    /// Size of one item, as sampled from the factory.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    fn geometry(&self) -> Option<RingGeometry> {
        self.factory.as_ref()?;
        let pitch = self
            .config
            .pitch(self.config.axis.main_extent(self.item_size))
            .ok()?;
        Some(RingGeometry {
            pitch,
            gap: self.config.gap,
            viewport: self.config.viewport_extent(),
        })
    }

    fn damping(&self) -> (f64, f64) {
        (
            self.config.overscroll_friction,
            self.config.max_overscroll_extent(),
        )
    }

    // --- data ---

    /// The sequence being shown.
    #[must_use]
    pub fn data(&self) -> Option<&DataSequence<T>> {
        self.data.as_ref()
    }

    /// Number of items in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, DataSequence::len)
    }

    /// Returns `true` if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the sequence.
    ///
    /// `None` or an empty sequence releases every renderer immediately.
    pub fn set_data(&mut self, data: Option<DataSequence<T>>) {
        let empty = data.as_ref().is_none_or(DataSequence::is_empty);
        self.data = data;
        if empty {
            self.release_renderers();
            self.update_content_size();
        }
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
    }

    /// Moves the sequence out, releasing every renderer.
    pub fn take_data(&mut self) -> Option<DataSequence<T>> {
        let data = self.data.take();
        self.release_renderers();
        self.update_content_size();
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        data
    }

    /// Appends an item, creating the sequence if there is none.
    pub fn add_item(&mut self, item: T) -> bool {
        self.data.get_or_insert_with(DataSequence::new).push(item);
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        true
    }

    /// Inserts an item at `index`; indices past the end append.
    pub fn insert_item(&mut self, index: usize, item: T) -> bool {
        self.data
            .get_or_insert_with(DataSequence::new)
            .insert(index, item);
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        true
    }

    /// Removes the item at `index`. Returns `false` if there is none.
    pub fn remove_item_at(&mut self, index: usize) -> bool {
        let removed = self
            .data
            .as_mut()
            .and_then(|data| data.remove_at(index))
            .is_some();
        if removed {
            self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        }
        removed
    }

    /// Empties the sequence and releases every renderer.
    ///
    /// Returns `false` if there was no sequence at all.
    pub fn remove_all_items(&mut self) -> bool {
        let Some(data) = self.data.as_mut() else {
            return false;
        };
        data.clear();
        self.release_renderers();
        self.update_content_size();
        self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        true
    }

    /// Forces every slot to be rebound on the next tick.
    ///
    /// Use after mutating items in place through shared ownership.
    pub fn refresh(&mut self) {
        self.invalidation.raise(InvalidationFlags::CHILDREN_POSITION);
    }

    // --- renderers ---

    /// The renderer pool, in slot order.
    #[must_use]
    pub fn renderers(&self) -> &[R] {
        &self.renderers
    }

    /// Number of renderers in the pool.
    #[must_use]
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// The slot assignment applied by the last layout pass.
    #[must_use]
    pub fn window(&self) -> Option<RingWindow> {
        self.window
    }

    /// Visible slots and the data index each shows, in geometric order.
    pub fn visible_bindings(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.window
            .into_iter()
            .flat_map(RingWindow::placements)
            .filter(|p| p.visible)
            .map(|p| (p.slot, p.index))
    }

    /// Data index of the visible item under `point` (viewport coordinates).
    #[must_use]
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.renderers
            .iter()
            .filter(|r| r.is_visible())
            .find(|r| r.bounds().contains(point))
            .and_then(|r| r.data_index())
    }

    fn release_renderers(&mut self) {
        let dropped = self.renderers.len();
        if dropped > 0 {
            self.renderers.clear();
            self.stats.renderers_dropped += dropped as u64;
            debug!(dropped, "recycler released renderers");
        }
        self.window = None;
        self.laid_out_at = None;
    }

    // --- scrolling ---

    /// Scroll state.
    #[must_use]
    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Scroll offset along the scroll axis.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Whether a fling or snap is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.scroll.is_dragging()
    }

    /// Scrolls to `offset`, stopping any motion.
    ///
    /// In bounded mode the out-of-range part of `offset` is rubber-banded.
    pub fn scroll_to(&mut self, offset: f64) {
        self.motion = None;
        self.sync_range();
        let (friction, cap) = self.damping();
        self.scroll.scroll_to_damped(offset, friction, cap);
    }

    /// Scrolls by `delta`, stopping any motion.
    ///
    /// Past either end of a bounded sequence each step is damped from where
    /// the last one left off, so repeated steps of `delta` never overshoot by
    /// more than `delta` while the friction is at most one half.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll.offset() + delta);
    }

    /// Starts a drag gesture, stopping any motion.
    pub fn drag_start(&mut self) {
        self.motion = None;
        self.scroll.set_dragging(true);
    }

    /// Moves by a drag delta.
    pub fn drag_by(&mut self, delta: f64) {
        self.scroll_by(delta);
    }

    /// Ends a drag gesture released at `velocity` units per second.
    ///
    /// Fast releases fling; slow ones spring back into range if needed.
    pub fn drag_end(&mut self, velocity: f64) {
        self.scroll.set_dragging(false);
        if velocity.abs() > self.config.min_fling_velocity {
            self.fling(velocity);
        } else {
            self.settle();
        }
    }

    /// Starts a fling at `velocity` units per second.
    pub fn fling(&mut self, velocity: f64) {
        self.sync_range();
        self.motion = Some(Motion::Fling(Fling::new(
            velocity,
            self.config.fling_friction,
            self.config.min_fling_velocity,
        )));
    }

    /// Animates to `offset` over the configured snap duration.
    pub fn snap_to(&mut self, offset: f64) {
        self.sync_range();
        self.motion = Some(Motion::Snap(Snap::new(
            self.scroll.offset(),
            offset,
            self.config.snap_duration,
        )));
    }

    /// Stops any fling or snap where it is.
    pub fn stop_motion(&mut self) {
        self.motion = None;
    }

    /// Jumps so that the item at `index` is aligned as requested.
    ///
    /// In bounded mode the result is clamped into range. An empty sequence
    /// resets the offset to zero.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) {
        self.motion = None;
        let len = self.len();
        let Some(geometry) = self.geometry().filter(|_| len > 0) else {
            self.scroll.jump_to(0.0);
            return;
        };
        self.sync_range();

        let idx = index.min(len - 1);
        let item_start = idx as f64 * geometry.pitch;
        let item_end = item_start + (geometry.pitch - geometry.gap);
        let viewport = geometry.viewport;
        let current = self.scroll.offset();
        let target = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => (item_start + item_end) * 0.5 - viewport * 0.5,
            ScrollAlign::Nearest => {
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };
        let target = match self.config.mode {
            ScrollMode::Bounded => target.clamp(0.0, self.scroll.max_offset()),
            ScrollMode::Wrapping => target,
        };
        self.scroll.jump_to(target);
    }

    /// Refreshes the scroll range if data or layout changed since the last
    /// tick, leaving the flags for the tick to consume.
    fn sync_range(&mut self) {
        if self
            .invalidation
            .is_raised(InvalidationFlags::CHILDREN_COUNT | InvalidationFlags::CONTENT_SIZE)
        {
            self.update_content_size();
        }
    }

    /// Springs back after the range changed under a resting or snapping
    /// offset. Drags and flings are left alone.
    fn keep_in_range(&mut self) {
        if self.scroll.mode() != ScrollMode::Bounded || self.scroll.is_dragging() {
            return;
        }
        let max = self.scroll.max_offset();
        match self.motion {
            None => self.settle(),
            Some(Motion::Snap(snap)) if !(0.0..=max).contains(&snap.target()) => {
                debug!(target = snap.target(), max, "snap target left the scroll range");
                self.snap_to(snap.target().clamp(0.0, max));
            }
            Some(_) => {}
        }
    }

    /// Springs back into range in bounded mode.
    fn settle(&mut self) {
        if self.scroll.mode() == ScrollMode::Bounded {
            if let Some(bound) = self.scroll.nearest_bound() {
                self.snap_to(bound);
            }
        }
    }

    fn advance_motion(&mut self, dt: Duration) -> bool {
        let Some(motion) = self.motion else {
            return false;
        };
        self.sync_range();
        match motion {
            Motion::Fling(mut fling) => {
                let delta = fling.step(dt);
                let (friction, cap) = self.damping();
                self.scroll
                    .scroll_to_damped(self.scroll.offset() + delta, friction, cap);
                self.motion = None;
                if self.scroll.mode() == ScrollMode::Bounded {
                    // Never coast past either end of a finite sequence.
                    let rounded = self.scroll.offset().round();
                    if rounded < 0.0 {
                        self.snap_to(0.0);
                        return true;
                    }
                    if rounded > self.scroll.max_offset() {
                        self.snap_to(self.scroll.max_offset());
                        return true;
                    }
                }
                if fling.is_finished() {
                    self.settle();
                } else {
                    self.motion = Some(Motion::Fling(fling));
                }
            }
            Motion::Snap(mut snap) => {
                let offset = snap.step(dt);
                self.scroll.jump_to(offset);
                self.motion = (!snap.is_finished()).then_some(Motion::Snap(snap));
            }
        }
        true
    }

    // --- tick ---

    /// Invalidation state.
    #[must_use]
    pub fn invalidation(&self) -> &Invalidation {
        &self.invalidation
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> RecyclerStats {
        self.stats
    }

    /// Advances one frame.
    ///
    /// In order:
    /// 1. advances a running fling or snap by `dt`;
    /// 2. if the item count or layout inputs changed, resizes the renderer
    ///    pool (and schedules the next two steps);
    /// 3. if needed, recomputes the content extents and scroll range, and
    ///    springs a resting offset back if the range shrank past it;
    /// 4. if the offset moved or a rebind was requested, repositions every
    ///    slot, rebinding them when the ring window changed.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        let mut report = TickReport::default();
        self.stats.ticks += 1;
        report.motion_active = self.advance_motion(dt);

        if self.invalidation.consume(InvalidationFlags::CHILDREN_COUNT) {
            self.resize_pass(&mut report);
        }
        if self.invalidation.consume(InvalidationFlags::CONTENT_SIZE) {
            self.update_content_size();
            report.content_size_updated = true;
            self.keep_in_range();
        }
        let force = self
            .invalidation
            .consume(InvalidationFlags::CHILDREN_POSITION | InvalidationFlags::VISIBILITY);
        self.layout_pass(force, &mut report);
        report
    }

    fn resize_pass(&mut self, report: &mut TickReport) {
        report.resized = true;
        self.stats.resize_passes += 1;
        self.window = None;
        self.invalidation
            .raise(InvalidationFlags::CONTENT_SIZE | InvalidationFlags::CHILDREN_POSITION);

        let len = self.len();
        let Some(factory) = self.factory.as_mut() else {
            if len > 0 {
                report.missing_factory = true;
                if !self.warned_missing_factory {
                    self.warned_missing_factory = true;
                    warn!(len, "recycler has data but no renderer factory; nothing is shown");
                }
            }
            return;
        };

        let axis = self.config.axis;
        let item_extent = axis.main_extent(self.item_size);
        let Ok(pitch) = self.config.pitch(item_extent) else {
            return;
        };
        let needed = ring::needed_renderers(self.config.viewport_extent(), pitch, len);
        let size = axis.pack_size(item_extent, axis.cross_extent(self.config.viewport));

        while self.renderers.len() < needed {
            let Some(renderer) = factory.create() else {
                report.growth_stalled = true;
                self.stats.stalls += 1;
                if !self.stalled {
                    warn!(
                        needed,
                        created = self.renderers.len(),
                        "renderer factory failed; pool growth stalled"
                    );
                }
                // Retry on the next tick.
                self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
                break;
            };
            self.renderers.push(renderer);
            report.created += 1;
        }
        self.stalled = report.growth_stalled;

        if self.renderers.len() > needed {
            report.dropped = self.renderers.len() - needed;
            self.renderers.truncate(needed);
        }
        for renderer in &mut self.renderers {
            renderer.set_size(size);
        }

        self.stats.renderers_created += report.created as u64;
        self.stats.renderers_dropped += report.dropped as u64;
        debug!(
            needed,
            renderers = self.renderers.len(),
            created = report.created,
            dropped = report.dropped,
            "recycler resize pass"
        );
    }

    fn update_content_size(&mut self) {
        let axis = self.config.axis;
        let cell = self.config.cell_extent(axis.main_extent(self.item_size));
        let main = ring::content_extent(cell, self.config.gap, self.len());
        let cross = axis
            .cross_extent(self.item_size)
            .max(axis.cross_extent(self.config.viewport));
        self.scroll
            .set_content(axis.pack_size(main, cross), self.config.viewport);
    }

    fn layout_pass(&mut self, force: bool, report: &mut TickReport) {
        let offset = self.scroll.offset();
        if !force && self.laid_out_at == Some(offset) {
            return;
        }
        self.laid_out_at = Some(offset);

        let window = self.geometry().and_then(|geometry| {
            RingWindow::compute(
                geometry,
                offset,
                self.renderers.len(),
                self.len(),
                self.config.mode,
            )
        });
        let (Some(window), Some(data)) = (window, self.data.as_ref()) else {
            // Nothing to show.
            self.window = None;
            return;
        };

        let rebind = force
            || self.window.is_none_or(|last| {
                last.first_item != window.first_item
                    || last.start_slot != window.start_slot
                    || last.wrap_fill != window.wrap_fill
            });
        let axis = self.config.axis;
        let mut rebound = 0;
        for placement in window.placements() {
            let Some(renderer) = self.renderers.get_mut(placement.slot) else {
                continue;
            };
            renderer.set_position(axis.pack_point(placement.offset, 0.0));
            if !rebind {
                continue;
            }
            if force || renderer.data_index() != Some(placement.index) {
                if let Some(item) = data.get(placement.index) {
                    renderer.set_data(placement.index, item);
                    rebound += 1;
                }
            }
            renderer.set_visible(placement.visible);
        }

        self.window = Some(window);
        report.repositioned = true;
        report.rebound = rebound;
        self.stats.layout_passes += 1;
        self.stats.bindings += rebound as u64;
        trace!(
            offset,
            first_item = window.first_item,
            start_slot = window.start_slot,
            rebound,
            "recycler layout pass"
        );
    }
}

impl<T, R, F> Recycler<T, R, F>
where
    T: PartialEq,
    R: ItemRenderer<T>,
    F: RendererFactory<R>,
{
    /// Removes the first item equal to `item`. Returns `false` if none was.
    pub fn remove_item(&mut self, item: &T) -> bool {
        let removed = self
            .data
            .as_mut()
            .and_then(|data| data.remove_first(item))
            .is_some();
        if removed {
            self.invalidation.raise(InvalidationFlags::CHILDREN_COUNT);
        }
        removed
    }
}

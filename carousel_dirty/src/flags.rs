// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation flags and the per-container flag register.

bitflags::bitflags! {
    /// Kinds of deferred recomputation a container can be asked to perform.
    ///
    /// Flags are independent: raising one never implies another. Containers
    /// decide in which order they consume them during their update tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InvalidationFlags: u8 {
        /// The number of children (or the inputs that determine it) changed.
        const CHILDREN_COUNT    = 0b0000_0001;
        /// Children need to be repositioned or rebound.
        const CHILDREN_POSITION = 0b0000_0010;
        /// The content extents need to be recomputed.
        const CONTENT_SIZE      = 0b0000_0100;
        /// Child visibility needs to be re-evaluated.
        const VISIBILITY        = 0b0000_1000;
        /// Both children flags.
        const CHILDREN = Self::CHILDREN_COUNT.bits() | Self::CHILDREN_POSITION.bits();
    }
}

/// Flag register owned by a single container for its whole lifetime.
///
/// Raising a flag is idempotent: any number of raises between two consuming
/// passes results in one recomputation. The register keeps a generation
/// counter that changes whenever its state changes, which callers can use to
/// detect "nothing happened since last frame" in O(1).
///
/// # Example
///
/// ```
/// use carousel_dirty::{Invalidation, InvalidationFlags};
///
/// let mut inv = Invalidation::new();
/// inv.raise(InvalidationFlags::CHILDREN_COUNT | InvalidationFlags::CONTENT_SIZE);
///
/// assert!(inv.consume(InvalidationFlags::CHILDREN_COUNT));
/// // Already consumed.
/// assert!(!inv.consume(InvalidationFlags::CHILDREN_COUNT));
///
/// assert_eq!(inv.take(), InvalidationFlags::CONTENT_SIZE);
/// assert!(inv.is_clean());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Invalidation {
    pending: InvalidationFlags,
    generation: u64,
    raise_count: u64,
}

impl Invalidation {
    /// Creates a register with no flags raised.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: InvalidationFlags::empty(),
            generation: 0,
            raise_count: 0,
        }
    }

    /// Raises `flags`, deferring their recomputation to the next consuming pass.
    ///
    /// Returns `true` if at least one of the flags was not already raised.
    pub fn raise(&mut self, flags: InvalidationFlags) -> bool {
        self.raise_count = self.raise_count.wrapping_add(1);
        let newly = !self.pending.contains(flags);
        if newly {
            self.pending |= flags;
            self.generation = self.generation.wrapping_add(1);
        }
        newly
    }

    /// Returns `true` if any of `flags` is currently raised.
    #[must_use]
    pub fn is_raised(&self, flags: InvalidationFlags) -> bool {
        self.pending.intersects(flags)
    }

    /// Returns `true` if no flag is raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the currently raised flags without clearing them.
    #[must_use]
    pub fn pending(&self) -> InvalidationFlags {
        self.pending
    }

    /// Clears `flags` and reports whether any of them was raised.
    ///
    /// This is the consuming side: call it once per tick and perform the
    /// deferred work when it returns `true`.
    pub fn consume(&mut self, flags: InvalidationFlags) -> bool {
        let hit = self.pending.intersects(flags);
        if hit {
            self.pending.remove(flags);
            self.generation = self.generation.wrapping_add(1);
        }
        hit
    }

    /// Consumes and returns every raised flag.
    pub fn take(&mut self) -> InvalidationFlags {
        let taken = self.pending;
        if !taken.is_empty() {
            self.pending = InvalidationFlags::empty();
            self.generation = self.generation.wrapping_add(1);
        }
        taken
    }

    /// Drops every raised flag without performing the deferred work.
    pub fn clear(&mut self) {
        let _ = self.take();
    }

    /// Generation counter, bumped whenever the set of raised flags changes.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total number of [`raise`](Self::raise) calls over the register's lifetime.
    ///
    /// Mostly useful for diagnostics: comparing it with the number of
    /// recomputations shows how much work coalescing saved.
    #[must_use]
    pub fn raise_count(&self) -> u64 {
        self.raise_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raises_coalesce_until_consumed() {
        let mut inv = Invalidation::new();
        assert!(inv.raise(InvalidationFlags::CHILDREN_COUNT));
        for _ in 0..4 {
            assert!(!inv.raise(InvalidationFlags::CHILDREN_COUNT));
        }
        assert_eq!(inv.raise_count(), 5);

        let mut passes = 0;
        while inv.consume(InvalidationFlags::CHILDREN_COUNT) {
            passes += 1;
        }
        assert_eq!(passes, 1);
    }

    #[test]
    fn flags_are_independent() {
        let mut inv = Invalidation::new();
        inv.raise(InvalidationFlags::CHILDREN_POSITION);

        assert!(!inv.is_raised(InvalidationFlags::CHILDREN_COUNT));
        assert!(inv.is_raised(InvalidationFlags::CHILDREN));
        assert!(!inv.consume(InvalidationFlags::CONTENT_SIZE));
        assert!(inv.is_raised(InvalidationFlags::CHILDREN_POSITION));
    }

    #[test]
    fn composite_consume_clears_both() {
        let mut inv = Invalidation::new();
        inv.raise(InvalidationFlags::CHILDREN_COUNT);
        inv.raise(InvalidationFlags::CHILDREN_POSITION);
        inv.raise(InvalidationFlags::VISIBILITY);

        assert!(inv.consume(InvalidationFlags::CHILDREN));
        assert_eq!(inv.pending(), InvalidationFlags::VISIBILITY);
    }

    #[test]
    fn generation_tracks_state_changes_only() {
        let mut inv = Invalidation::new();
        let g0 = inv.generation();

        inv.raise(InvalidationFlags::CONTENT_SIZE);
        let g1 = inv.generation();
        assert_ne!(g0, g1);

        // Re-raising an already raised flag is not a state change.
        inv.raise(InvalidationFlags::CONTENT_SIZE);
        assert_eq!(inv.generation(), g1);

        // Consuming something that is not raised is not a state change either.
        inv.consume(InvalidationFlags::CHILDREN_COUNT);
        assert_eq!(inv.generation(), g1);

        inv.clear();
        assert!(inv.is_clean());
        assert_ne!(inv.generation(), g1);
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poolable path-search node.

use core::cmp::Ordering;

use crate::arena::PoolId;

/// A node of a grid path search (cost so far, heuristic, parent link).
///
/// Nodes are identified by their cell; [`SearchNode::key`] packs the cell into
/// a `u64` so nodes can live in a [`KeyedPool`](crate::KeyedPool) and be
/// [`reset`](SearchNode::reset) in place between queries.
///
/// The [`Ord`] implementation compares by *descending* `f = g + h` so that a
/// [`BinaryHeap`](alloc::collections::BinaryHeap) of nodes pops the cheapest
/// node first. Equality, however, is positional: two nodes are equal when they
/// refer to the same cell.
///
/// ```
/// use std::collections::BinaryHeap;
/// use carousel_pool::SearchNode;
///
/// let mut open = BinaryHeap::new();
/// open.push(SearchNode::with_costs(0, 0, 5, 5));
/// open.push(SearchNode::with_costs(1, 0, 2, 1));
/// open.push(SearchNode::with_costs(2, 0, 4, 0));
///
/// assert_eq!(open.pop().map(|n| n.f()), Some(3));
/// assert_eq!(open.pop().map(|n| n.f()), Some(4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SearchNode {
    /// Cell column.
    pub x: i32,
    /// Cell row.
    pub y: i32,
    /// Cost from the start node.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// Parent node in the pool, if any.
    pub parent: Option<PoolId>,
    key: u64,
}

impl SearchNode {
    /// Creates a node at `(x, y)` with unit cost and no heuristic.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self::with_costs(x, y, 1, 0)
    }

    /// Creates a node with explicit costs.
    #[must_use]
    pub const fn with_costs(x: i32, y: i32, g: i32, h: i32) -> Self {
        Self {
            x,
            y,
            g,
            h,
            parent: None,
            key: Self::key_for(x, y),
        }
    }

    /// Packs a cell into the lookup key used by [`SearchNode::key`].
    #[must_use]
    pub const fn key_for(x: i32, y: i32) -> u64 {
        ((y as u32 as u64) << 32) | (x as u32 as u64)
    }

    /// Lookup key of this node's cell.
    #[must_use]
    pub const fn key(&self) -> u64 {
        self.key
    }

    /// Total estimated cost `g + h`.
    #[must_use]
    pub const fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }

    /// Re-targets the node at `(x, y)` and restores default costs.
    pub fn reset(&mut self, x: i32, y: i32) {
        *self = Self::new(x, y);
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f()
            .cmp(&self.f())
            .then_with(|| self.key.cmp(&other.key))
    }
}

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Pool: reusable objects without reallocation.
//!
//! Scene code churns through short-lived objects: children that come and go
//! from a container, search nodes that live for a single query. This crate
//! keeps them in index-addressed arenas with a free-list so that slots are
//! reused, and lets callers reset a recycled value in place instead of building
//! a new one.
//!
//! - [`Pool`]: a generational arena. Handles ([`PoolId`]) stay stable while the
//!   value lives and become stale once it is removed; a stale handle never
//!   aliases a newer value in the same slot.
//! - [`KeyedPool`]: a pool addressed by a cheap, copyable logical key (for
//!   example a packed grid coordinate). Acquiring a key that was released
//!   earlier recycles a freed slot and resets it in place.
//! - [`SearchNode`]: a poolable path-search node keyed by its cell.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_pool::Pool;
//!
//! let mut pool = Pool::new();
//! let a = pool.insert(String::from("a"));
//! assert_eq!(pool.get(a).map(String::as_str), Some("a"));
//!
//! // Release keeps the allocation around for the next insert.
//! assert!(pool.release(a));
//! assert!(pool.get(a).is_none());
//!
//! let b = pool.insert_with_reset(String::new, |s| {
//!     s.clear();
//!     s.push('b');
//! });
//! assert_eq!(pool.get(b).map(String::as_str), Some("b"));
//! assert_ne!(a, b);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod keyed;
mod search_node;

pub use arena::{Pool, PoolId};
pub use keyed::KeyedPool;
pub use search_node::SearchNode;

// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A renderer that records what it was bound to.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use carousel_grid::{Sprite, Visual};
use carousel_recycler::{ItemRenderer, Recycler, RecyclerConfig, RendererFactory, ScrollMode};
use core::time::Duration;
use kurbo::{Point, Size};

pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug)]
pub struct Tile {
    pub sprite: Sprite,
    pub index: Option<usize>,
    pub value: u32,
    pub binds: usize,
}

impl Visual for Tile {
    fn size(&self) -> Size {
        self.sprite.size
    }
    fn set_size(&mut self, size: Size) {
        self.sprite.size = size;
    }
    fn position(&self) -> Point {
        self.sprite.position
    }
    fn set_position(&mut self, position: Point) {
        self.sprite.position = position;
    }
    fn is_visible(&self) -> bool {
        self.sprite.visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.sprite.visible = visible;
    }
}

impl ItemRenderer<u32> for Tile {
    fn set_data(&mut self, index: usize, item: &u32) {
        self.index = Some(index);
        self.value = *item;
        self.binds += 1;
    }
    fn data_index(&self) -> Option<usize> {
        self.index
    }
}

pub fn tile() -> Option<Tile> {
    Some(Tile {
        sprite: Sprite::new(Size::new(100.0, 50.0)),
        index: None,
        value: 0,
        binds: 0,
    })
}

pub type TileList = Recycler<u32, Tile>;

/// A 100x300 vertical list of 50-high tiles showing `0..len`, ticked once.
pub fn tiles(len: u32, mode: ScrollMode) -> TileList {
    let config = RecyclerConfig::default()
        .with_viewport(Size::new(100.0, 300.0))
        .with_mode(mode);
    let mut list = Recycler::with_factory(config, tile as fn() -> Option<Tile>).unwrap();
    list.set_data(Some((0..len).collect()));
    list.tick(Duration::ZERO);
    list
}

/// Visible data indices in geometric order.
pub fn shown<F: RendererFactory<Tile>>(list: &Recycler<u32, Tile, F>) -> Vec<usize> {
    list.visible_bindings().map(|(_, index)| index).collect()
}

/// Ticks until no motion is left, bounded so a runaway animation fails.
pub fn settle<F: RendererFactory<Tile>>(list: &mut Recycler<u32, Tile, F>) {
    for _ in 0..10_000 {
        if !list.is_animating() {
            return;
        }
        list.tick(FRAME);
    }
    panic!("motion never finished");
}

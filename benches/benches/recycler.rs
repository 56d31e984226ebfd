// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use carousel_grid::{Sprite, Visual};
use carousel_recycler::{ItemRenderer, Recycler, RecyclerConfig, ScrollMode};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

#[derive(Debug)]
struct Row {
    sprite: Sprite,
    index: Option<usize>,
    checksum: u64,
}

impl Visual for Row {
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

impl ItemRenderer<u64> for Row {
    fn set_data(&mut self, index: usize, item: &u64) {
        self.index = Some(index);
        self.checksum = self.checksum.wrapping_add(*item);
    }
    fn data_index(&self) -> Option<usize> {
        self.index
    }
}

fn row() -> Option<Row> {
    Some(Row {
        sprite: Sprite::new(Size::new(320.0, 24.0)),
        index: None,
        checksum: 0,
    })
}

fn list(len: u64, viewport: f64, mode: ScrollMode) -> Recycler<u64, Row> {
    let config = RecyclerConfig::default()
        .with_viewport(Size::new(320.0, viewport))
        .with_mode(mode);
    let mut list = Recycler::with_factory(config, row as fn() -> Option<Row>)
        .expect("valid configuration");
    list.set_data(Some((0..len).collect()));
    list.tick(Duration::ZERO);
    list
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycler/idle_tick");
    for len in [1_000_u64, 1_000_000] {
        let mut list = list(len, 720.0, ScrollMode::Bounded);
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(list.tick(Duration::ZERO)));
        });
    }
    group.finish();
}

fn bench_scroll_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycler/scroll_tick");
    for viewport in [240.0, 720.0, 2_160.0] {
        for mode in [ScrollMode::Bounded, ScrollMode::Wrapping] {
            let mut list = list(100_000, viewport, mode);
            group.throughput(Throughput::Elements(list.renderer_count() as u64));
            let id = BenchmarkId::new(format!("{mode:?}"), viewport);
            let mut offset = 0.0;
            group.bench_function(id, |b| {
                b.iter(|| {
                    // Under one pitch per frame: mostly repositioning, some rebinding.
                    offset += 17.0;
                    if offset > 1_000_000.0 {
                        offset = 0.0;
                    }
                    list.scroll_to(offset);
                    black_box(list.tick(Duration::from_millis(16)))
                });
            });
        }
    }
    group.finish();
}

fn bench_resize_burst(c: &mut Criterion) {
    c.bench_function("recycler/add_items_then_tick", |b| {
        b.iter_batched(
            || list(0, 720.0, ScrollMode::Bounded),
            |mut list| {
                for i in 0..256 {
                    list.add_item(i);
                }
                black_box(list.tick(Duration::ZERO))
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_fling(c: &mut Criterion) {
    c.bench_function("recycler/fling_to_rest", |b| {
        b.iter_batched(
            || list(100_000, 720.0, ScrollMode::Bounded),
            |mut list| {
                list.fling(8_000.0);
                while list.is_animating() {
                    list.tick(Duration::from_millis(16));
                }
                black_box(list.offset())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_idle_tick,
    bench_scroll_tick,
    bench_resize_burst,
    bench_fling
);
criterion_main!(benches);

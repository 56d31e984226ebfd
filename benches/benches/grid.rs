// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_grid::{AxisDirection, Cell, Grid, GridContainer, Sprite};
use carousel_pool::Pool;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

fn board(side: u32) -> GridContainer<Sprite> {
    let grid = Grid::new(Size::new(16.0, 16.0), side, side).expect("valid grid");
    let mut board = GridContainer::new(grid);
    for cell in grid.cells() {
        if (cell.x + cell.y) % 3 != 0 {
            board
                .add_child_at(Sprite::new(Size::new(16.0, 16.0)), cell, false)
                .expect("cell in range");
        }
    }
    board.update();
    board
}

fn bench_point_to_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/point_to_cell");
    let points: Vec<Point> = (0..4_096)
        .map(|i| Point::new(f64::from(i % 64) * 7.3, f64::from(i / 64) * 5.9))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    for (name, dir) in [
        ("positive", AxisDirection::Positive),
        ("negative", AxisDirection::Negative),
    ] {
        let grid = Grid::new(Size::new(7.0, 5.0), 128, 128)
            .expect("valid grid")
            .with_directions(dir, dir);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0_i64;
                for &p in &points {
                    let cell = grid.point_to_cell(p);
                    acc += i64::from(cell.x) + i64::from(cell.y);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_deferred_swaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/deferred_swaps_then_update");
    for side in [16_u32, 64] {
        let n = i32::try_from(side).expect("small side");
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter_batched(
                || board(side),
                |mut board| {
                    for i in 0..n {
                        board
                            .swap_children(Cell::new(i, 0), Cell::new(n - 1 - i, n - 1), false)
                            .expect("cells in range");
                    }
                    black_box(board.update())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pool_churn(c: &mut Criterion) {
    c.bench_function("pool/insert_release_churn", |b| {
        let mut pool: Pool<[f64; 4]> = Pool::new();
        let mut live = Vec::with_capacity(64);
        b.iter(|| {
            for i in 0..64 {
                live.push(pool.insert([f64::from(i); 4]));
            }
            for id in live.drain(..) {
                pool.release(id);
            }
            black_box(pool.len())
        });
    });
}

criterion_group!(benches, bench_point_to_cell, bench_deferred_swaps, bench_pool_churn);
criterion_main!(benches);

// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size};
use mosaic_catalog::{AssignStrategy, ContentAssigner, ListingEntry, MediaCatalog, MediaRef};
use mosaic_grid::{CoordWindow, GridCoord, GridMetrics};
use mosaic_tiles::{EvictionPolicy, RenderSink, TileSet};

/// Sink that does no presentation work, so the benches measure set
/// management rather than rendering.
struct NullSink;

impl RenderSink for NullSink {
    type Handle = ();

    fn create(&mut self, _coord: GridCoord, _frame: Rect, _content: &MediaRef) {}

    fn destroy(&mut self, _handle: ()) {}
}

fn catalog_of(count: usize) -> MediaCatalog {
    let mut catalog = MediaCatalog::new();
    let ticket = catalog.begin_fetch();
    let entries: Vec<ListingEntry> = (0..count)
        .map(|i| ListingEntry::new("x.jpg", format!("https://cdn.example/{i}.jpg")))
        .collect();
    catalog.install(ticket, entries, Duration::ZERO);
    catalog
}

/// Builds a tile set with `window` fully materialized.
fn resident_set(window: &CoordWindow, catalog: &MediaCatalog) -> TileSet<()> {
    let mut tiles = TileSet::new(EvictionPolicy::ActiveWindow);
    let mut assigner = ContentAssigner::new(AssignStrategy::FillOrder);
    let metrics = GridMetrics::new(150.0, 2.0);
    let plan = tiles.reconcile(window);
    tiles.apply(&plan, &metrics, 1.0, &mut assigner, catalog, &mut NullSink);
    tiles
}

fn bench_reconcile_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiles/reconcile");
    let catalog = catalog_of(64);

    // Hypothesis: a pass costs O(window + resident), independent of how many
    // tiles were ever created, so cost should track the window edge length.
    for edge in [8_i64, 16, 32, 64] {
        let window = CoordWindow::new(0, edge - 1, 0, edge - 1);
        let tiles = resident_set(&window, &catalog);
        // One-column pan: the classic high-frequency scroll tick.
        let shifted = CoordWindow::new(1, edge, 0, edge - 1);
        group.throughput(Throughput::Elements(window.count()));

        group.bench_with_input(BenchmarkId::new("pan_one_column", edge), &shifted, |b, w| {
            b.iter(|| black_box(tiles.reconcile(w)));
        });
    }

    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiles/apply");
    let catalog = catalog_of(64);
    let metrics = GridMetrics::new(150.0, 2.0).with_buffer_margin(2);

    for edge in [8_i64, 16, 32] {
        let window = CoordWindow::new(0, edge - 1, 0, edge - 1);
        let shifted = CoordWindow::new(edge / 2, edge + edge / 2 - 1, 0, edge - 1);
        group.throughput(Throughput::Elements(window.count()));

        group.bench_with_input(
            BenchmarkId::new("pan_half_window", edge),
            &shifted,
            |b, w| {
                b.iter_batched(
                    || {
                        (
                            resident_set(&window, &catalog),
                            ContentAssigner::new(AssignStrategy::FillOrder),
                        )
                    },
                    |(mut tiles, mut assigner)| {
                        let plan = tiles.reconcile(w);
                        tiles.apply(&plan, &metrics, 1.0, &mut assigner, &catalog, &mut NullSink);
                        black_box(tiles.len());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_window_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/visible_window");
    let metrics = GridMetrics::new(150.0, 2.0).with_buffer_margin(2);

    group.bench_function("scroll_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_u64;
            for step in 0..256_u32 {
                let origin = Point::new(f64::from(step) * 37.0, f64::from(step) * 19.0);
                let window =
                    metrics.visible_window(origin, Size::new(1920.0, 1080.0), 1.0);
                acc = acc.wrapping_add(window.count());
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_reconcile_diff,
    bench_full_pass,
    bench_window_resolution
);
criterion_main!(benches);

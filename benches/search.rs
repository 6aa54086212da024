//! Benchmarks for the heap and the sample puzzles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frontier::grid::{Grid, GridWalk};
use frontier::input::owned_lines;
use frontier::puzzles::{cubicles, facility, vault};
use frontier::{Cost, MinHeap, Search, SearchConfig};

/// Benchmark filling and draining the heap with scrambled priorities.
fn bench_heap(c: &mut Criterion) {
    let priorities: Vec<Cost> = (0..10_000u64).map(|i| (i * 7_919) % 10_007).collect();

    c.bench_function("heap_insert_extract_10k", |b| {
        b.iter(|| {
            let mut heap = MinHeap::with_capacity(priorities.len());
            for &priority in &priorities {
                heap.insert((priority, ()));
            }
            while let Ok(item) = heap.extract_min() {
                black_box(item);
            }
        })
    });
}

/// Benchmark A* across an empty 100x100 grid.
fn bench_open_grid(c: &mut Criterion) {
    let grid = Grid::open(100, 100);
    let walk = GridWalk::to(&grid, (99, 99));

    c.bench_function("open_grid_100", |b| {
        b.iter(|| Search::new(&walk).shortest(black_box((0, 0))))
    });
}

/// Benchmark the published facility example.
fn bench_facility(c: &mut Criterion) {
    let (building, initial) = facility::parse(facility::SAMPLE).unwrap();

    c.bench_function("facility_sample", |b| {
        b.iter(|| building.min_moves(black_box(initial.clone()), SearchConfig::default()))
    });
}

/// Benchmark both cubicle maze questions.
fn bench_cubicles(c: &mut Criterion) {
    let maze = cubicles::parse(cubicles::SAMPLE).unwrap();

    c.bench_function("cubicles_fewest_steps", |b| {
        b.iter(|| black_box(&maze).fewest_steps(SearchConfig::default()))
    });
    c.bench_function("cubicles_reachable_50", |b| {
        b.iter(|| black_box(&maze).reachable_within(cubicles::STEP_LIMIT, SearchConfig::default()))
    });
}

/// Benchmark the exhaustive longest-route enumeration.
fn bench_vault_longest(c: &mut Criterion) {
    let vault = vault::parse(&owned_lines(vault::SAMPLE)).unwrap();

    let mut group = c.benchmark_group("vault");
    group.sample_size(10);
    group.bench_function("longest_route", |b| {
        b.iter(|| black_box(&vault).longest_route_len(SearchConfig::default()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_heap,
    bench_open_grid,
    bench_facility,
    bench_cubicles,
    bench_vault_longest
);
criterion_main!(benches);

//! Basic benchmarks for the `slot_map` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use slot_map::SlotMap;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

/// Number of values in the maps used by the iteration and churn benchmarks.
const POPULATED_LEN: usize = 10_000;

fn populated() -> (SlotMap<TestItem>, Vec<slot_map::SlotHandle>) {
    let mut map = SlotMap::with_capacity(POPULATED_LEN);
    let handles = (0..POPULATED_LEN).map(|i| map.insert(i)).collect::<Vec<_>>();
    (map, handles)
}

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("slot_map_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(SlotMap::<TestItem>::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_first");
    group.bench_function("insert_first", |b| {
        b.iter_custom(|iters| {
            let mut maps = iter::repeat_with(SlotMap::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for map in &mut maps {
                _ = black_box(map.insert(black_box(TEST_VALUE)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("read_one");
    group.bench_function("read_one", |b| {
        b.iter_custom(|iters| {
            let (map, handles) = populated();
            let handle = handles[POPULATED_LEN / 2];

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(map[black_box(handle)]);
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("remove_insert_churn");
    group.bench_function("remove_insert_churn", |b| {
        b.iter_custom(|iters| {
            let (mut map, mut handles) = populated();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for i in 0..iters {
                let slot = usize::try_from(i).unwrap() % POPULATED_LEN;
                let value = map.remove(handles[slot]);
                handles[slot] = map.insert(black_box(value));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("iterate_all");
    group.bench_function("iterate_all", |b| {
        b.iter_custom(|iters| {
            let (map, _) = populated();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(map.iter().copied().sum::<TestItem>());
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}

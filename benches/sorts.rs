//! Criterion comparison of the five sorting algorithms on each list shape.

use chainsort::{CircularList, DoublyList, SinglyList};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const SIZE: usize = 512;
const SEED: u64 = 42;

fn random_values() -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    (0..SIZE).map(|_| rng.gen_range(0..1000)).collect()
}

fn bench_singly(c: &mut Criterion) {
    let values = random_values();
    let list: SinglyList<i64> = values.iter().copied().collect();
    let mut group = c.benchmark_group("singly");

    group.bench_function("bubble", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.bubble_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("selection", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.selection_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("insertion", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.insertion_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("merge", |b| b.iter(|| black_box(list.merge_sort_by(i64::cmp))));
    group.bench_function("quick", |b| b.iter(|| black_box(list.quick_sort_by(i64::cmp))));
    group.finish();
}

fn bench_doubly(c: &mut Criterion) {
    let values = random_values();
    let list: DoublyList<i64> = values.iter().copied().collect();
    let mut group = c.benchmark_group("doubly");

    group.bench_function("bubble", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.bubble_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("selection", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.selection_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("insertion", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.insertion_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("merge", |b| b.iter(|| black_box(list.merge_sort_by(i64::cmp))));
    group.bench_function("quick", |b| b.iter(|| black_box(list.quick_sort_by(i64::cmp))));
    group.finish();
}

fn bench_circular(c: &mut Criterion) {
    let values = random_values();
    let list: CircularList<i64> = values.iter().copied().collect();
    let mut group = c.benchmark_group("circular");

    group.bench_function("bubble", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.bubble_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("selection", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.selection_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("insertion", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.insertion_sort_by(i64::cmp);
                list
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("merge", |b| b.iter(|| black_box(list.merge_sort_by(i64::cmp))));
    group.bench_function("quick", |b| b.iter(|| black_box(list.quick_sort_by(i64::cmp))));
    group.finish();
}

criterion_group!(benches, bench_singly, bench_doubly, bench_circular);
criterion_main!(benches);

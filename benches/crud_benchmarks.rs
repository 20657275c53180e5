use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::hint::black_box;
use wbt_set::WbtSet;

const N: usize = 10_000;
const SEED: u64 = 0x5EED;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ascending(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

fn descending(n: usize) -> Vec<i64> {
    let mut keys = ascending(n);
    keys.reverse();
    keys
}

/// `n` distinct keys in a fixed shuffled order.
fn shuffled(n: usize) -> Vec<i64> {
    let mut keys = ascending(n);
    keys.shuffle(&mut StdRng::seed_from_u64(SEED));
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("WbtSet", N), |b| {
        b.iter(|| {
            let mut set = WbtSet::new();
            for &k in keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn insert_ascending(c: &mut Criterion) {
    bench_insert(c, "insert/ascending", &ascending(N));
}

fn insert_descending(c: &mut Criterion) {
    bench_insert(c, "insert/descending", &descending(N));
}

fn insert_shuffled(c: &mut Criterion) {
    bench_insert(c, "insert/shuffled", &shuffled(N));
}

// ─── Contains ───────────────────────────────────────────────────────────────

fn contains_shuffled(c: &mut Criterion) {
    let keys = shuffled(N);
    let wbt: WbtSet<i64> = keys.iter().copied().collect();
    let btree: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("contains/shuffled");

    group.bench_function(BenchmarkId::new("WbtSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| wbt.contains(black_box(k))).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| btree.contains(black_box(k))).count());
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn remove_shuffled(c: &mut Criterion) {
    let keys = shuffled(N);

    let mut group = c.benchmark_group("remove/shuffled");

    group.bench_function(BenchmarkId::new("WbtSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<WbtSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn rank_queries(c: &mut Criterion) {
    let keys = shuffled(N);
    let set: WbtSet<i64> = keys.iter().copied().collect();
    let len = set.len();

    let mut group = c.benchmark_group("rank");

    group.bench_function(BenchmarkId::new("get_by_rank", N), |b| {
        b.iter(|| (1..=len).step_by(7).filter_map(|r| set.get_by_rank(black_box(r))).count());
    });

    group.bench_function(BenchmarkId::new("rank_of", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| set.rank_of(black_box(k))).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("remove_by_rank", N), |b| {
        b.iter_batched(
            || set.clone(),
            |mut set| {
                while set.len() > 1 {
                    set.remove_by_rank(set.len() / 2);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(inserts, insert_ascending, insert_descending, insert_shuffled);
criterion_group!(lookups, contains_shuffled, rank_queries);
criterion_group!(removals, remove_shuffled);
criterion_main!(inserts, lookups, removals);

//! Criterion benchmarks for heap operations
//!
//! Compares [`BinomialHeap`] against the standard library binary heap on
//! the operations where they differ: insertion (O(1) amortized vs
//! O(log n)), full drains, and melding.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//! cargo bench --bench heap_ops -- meld   # one group only
//! ```

use binomial_heap::binomial::BinomialHeap;
use binomial_heap::stdlib_compat::StdBinaryHeap;
use binomial_heap::{Heap, Key};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 18];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<Key> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| (rng.next() >> 33) as Key).collect()
}

fn build<H: Heap>(keys: &[Key]) -> H {
    let mut heap = H::new();
    for &key in keys {
        heap.push(key);
    }
    heap
}

fn drain<H: Heap>(mut heap: H) -> Key {
    let mut checksum: Key = 0;
    while let Some(key) = heap.pop() {
        checksum = checksum.wrapping_add(key);
    }
    checksum
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &SIZES {
        let keys = random_keys(n, 1);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("binomial", n), &keys, |b, keys| {
            b.iter(|| black_box(build::<BinomialHeap>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("std_binary", n), &keys, |b, keys| {
            b.iter(|| black_box(build::<StdBinaryHeap>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("binomial_sequential", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = BinomialHeap::new();
                heap.array_to_heap(&(0..n as Key).collect::<Vec<_>>());
                black_box(heap)
            })
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_drain");

    for &n in &SIZES {
        let keys = random_keys(n, 2);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("binomial", n), &keys, |b, keys| {
            b.iter(|| black_box(drain(build::<BinomialHeap>(keys))))
        });
        group.bench_with_input(BenchmarkId::new("std_binary", n), &keys, |b, keys| {
            b.iter(|| black_box(drain(build::<StdBinaryHeap>(keys))))
        });
    }

    group.finish();
}

fn bench_meld(c: &mut Criterion) {
    let mut group = c.benchmark_group("meld");

    for &n in &SIZES {
        let left = random_keys(n, 3);
        let right = random_keys(n, 4);

        group.bench_with_input(
            BenchmarkId::new("binomial", n),
            &(&left, &right),
            |b, (left, right)| {
                b.iter_batched(
                    || (build::<BinomialHeap>(left), build::<BinomialHeap>(right)),
                    |(mut a, other)| {
                        a.meld(other);
                        black_box(a)
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary", n),
            &(&left, &right),
            |b, (left, right)| {
                b.iter_batched(
                    || (build::<StdBinaryHeap>(left), build::<StdBinaryHeap>(right)),
                    |(mut a, other)| {
                        Heap::merge(&mut a, other);
                        black_box(a)
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_meld);
criterion_main!(benches);

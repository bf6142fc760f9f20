// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_record::Record;
use trellis_tree::{TreeComposer, VirtualRoot, compose_tree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// `n` records forming a balanced tree with `fanout` children per node, listed
/// breadth first.
fn gen_balanced(n: usize, fanout: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let parent = if i == 0 {
                String::new()
            } else {
                format!("n{}", (i - 1) / fanout)
            };
            Record::new()
                .with("id", format!("n{i}"))
                .with("parent", parent)
                .with("name", format!("Node {i}"))
        })
        .collect()
}

/// `n` records whose parent is a random earlier record, shuffled.
fn gen_random(n: usize, seed: u64) -> Vec<Record> {
    let mut rng = Rng::new(seed);
    let mut out: Vec<Record> = (0..n)
        .map(|i| {
            let parent = if i == 0 || rng.below(10) == 0 {
                String::new()
            } else {
                format!("n{}", rng.below(i))
            };
            Record::new()
                .with("id", format!("n{i}"))
                .with("parent", parent)
                .with("name", format!("Node {}", rng.below(n)))
        })
        .collect();
    for i in (1..out.len()).rev() {
        let j = rng.below(i + 1);
        out.swap(i, j);
    }
    out
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for &n in &[100_usize, 1_000, 10_000] {
        let balanced = gen_balanced(n, 8);
        let random = gen_random(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("balanced_n{n}"), |b| {
            let composer = TreeComposer::new("id", "parent");
            b.iter(|| black_box(composer.compose(black_box(&balanced))));
        });
        group.bench_function(format!("random_n{n}"), |b| {
            let composer = TreeComposer::new("id", "parent");
            b.iter(|| black_box(composer.compose(black_box(&random))));
        });
        group.bench_function(format!("random_sorted_virtual_root_n{n}"), |b| {
            let composer = TreeComposer::new("id", "parent")
                .label(|r: &Record| r.key_of("name").unwrap_or_default())
                .comparator(|a, b| a.label.cmp(&b.label))
                .virtual_root("__root__", "All");
            b.iter(|| black_box(composer.compose(black_box(&random))));
        });
    }
    group.finish();
}

fn bench_fresh_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_fresh_input");
    let n = 5_000;
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("clone_and_compose_n5000", |b| {
        let base = gen_random(n, 42);
        b.iter_batched(
            || base.clone(),
            |records| {
                let forest = compose_tree(
                    &records,
                    "id",
                    "parent",
                    |r: &Record| r.key_of("name").unwrap_or_default(),
                    None,
                    Some(VirtualRoot::new("__root__", "All")),
                )
                .map(|f| f.len());
                black_box(forest)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_compose, bench_fresh_input);
criterion_main!(benches);

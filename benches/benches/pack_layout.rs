// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_layout::{ColumnCount, LayoutItem, pack};

/// A form of `n` fields cycling through typical spans, with a section every
/// `section_every` fields and every seventh field hidden.
fn gen_form(n: usize, section_every: usize) -> Vec<LayoutItem> {
    const SPANS: [u8; 6] = [1, 1, 2, 1, 3, 4];
    (0..n)
        .map(|i| {
            let mut item = LayoutItem::new(format!("field{i}"), SPANS[i % SPANS.len()]);
            if i % 7 == 6 {
                item = item.hidden();
            }
            if section_every > 0 && i > 0 && i % section_every == 0 {
                item = item.section_start(Some("Section"));
            }
            item
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for &n in &[16_usize, 256, 4_096] {
        let plain = gen_form(n, 0);
        let sectioned = gen_form(n, 12);
        group.throughput(Throughput::Elements(n as u64));
        for columns in [ColumnCount::TWO, ColumnCount::FOUR] {
            let cols = columns.get();
            group.bench_function(format!("plain_c{cols}_n{n}"), |b| {
                b.iter(|| black_box(pack(black_box(&plain), columns)));
            });
            group.bench_function(format!("sectioned_c{cols}_n{n}"), |b| {
                b.iter(|| black_box(pack(black_box(&sectioned), columns)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for building and editing styles.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_state_property::{Opacity, PropertyId, StateMask};
use understory_state_style::{Style, StyleList};

const RADIUS: PropertyId = PropertyId::new(0x0, 0x0, false);
const BG_OPA: PropertyId = PropertyId::new(0x2, 0xA, false);

fn populated(count: u8) -> Style {
    let mut style = Style::new();
    for index in 0..count.min(6) {
        style
            .set_int(PropertyId::new(0x1, index, false), StateMask::DEFAULT, 1)
            .unwrap();
    }
    style
}

fn bench_style_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/mutate");

    for count in [0_u8, 3, 6] {
        group.bench_function(BenchmarkId::new("insert", count), |b| {
            b.iter_batched(
                || populated(count),
                |mut style| {
                    style
                        .set_int(RADIUS, black_box(StateMask::PRESSED), 4)
                        .unwrap();
                    black_box(style)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("overwrite", |b| {
        let mut style = populated(6);
        style.set_int(RADIUS, StateMask::DEFAULT, 0).unwrap();
        let mut value = 0_i16;
        b.iter(|| {
            value = value.wrapping_add(1);
            style
                .set_int(RADIUS, StateMask::DEFAULT, black_box(value))
                .unwrap();
        });
    });

    group.bench_function("copy_from", |b| {
        let src = populated(6);
        let mut dst = Style::new();
        b.iter(|| {
            dst.copy_from(black_box(&src)).unwrap();
        });
    });

    group.finish();

    let mut group = c.benchmark_group("style_list/mutate");

    group.bench_function("set_local_first", |b| {
        b.iter_batched(
            StyleList::new,
            |mut list| {
                list.set_local_opacity(BG_OPA, StateMask::DEFAULT, Opacity::COVER)
                    .unwrap();
                black_box(list)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_style_mutate);
criterion_main!(benches);

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `Style` and `StyleList` lookup.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;
use std::vec::Vec;

use understory_state_property::{Color, Opacity, PropertyId, StateMask, ValueCategory};
use understory_state_style::{SharedStyle, Style, StyleList, lookup_inherited};

const RADIUS: PropertyId = PropertyId::new(0x0, 0x0, false);
const BG_COLOR: PropertyId = PropertyId::new(0x2, ValueCategory::Color.first_index(), false);
const BG_OPA: PropertyId = PropertyId::new(0x2, ValueCategory::Opacity.first_index(), false);
const TEXT_LETTER_SPACE: PropertyId = PropertyId::new(0x8, 0x0, true);

/// A style holding `count` integer properties in the default state, plus
/// `BG_COLOR` for default and pressed.
fn filler_style(count: u8) -> Style {
    let mut style = Style::new();
    for index in 0..count.min(0x10) {
        let group = 0x4 + index / 6;
        let property = PropertyId::new(group, index % 6, false);
        style
            .set_int(property, StateMask::DEFAULT, i16::from(index))
            .unwrap();
    }
    style
        .set_color(BG_COLOR, StateMask::DEFAULT, Color::from_rgba8(0x20, 0x20, 0x20, 0xff))
        .unwrap();
    style
        .set_color(BG_COLOR, StateMask::PRESSED, Color::from_rgba8(0x60, 0x60, 0x60, 0xff))
        .unwrap();
    style
}

fn bench_style(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Style={} StyleList={} PropertyEntry={}",
            size_of::<Style>(),
            size_of::<StyleList>(),
            size_of::<understory_state_style::PropertyEntry>(),
        );
    });

    let mut group = c.benchmark_group("style/lookup");
    let pressed = StateMask::PRESSED | StateMask::FOCUSED;

    for count in [0_u8, 4, 16] {
        let style = filler_style(count);
        group.bench_function(BenchmarkId::new("hit_pressed", count), |b| {
            b.iter(|| black_box(style.lookup_color(black_box(BG_COLOR), black_box(pressed))));
        });
        group.bench_function(BenchmarkId::new("miss", count), |b| {
            b.iter(|| black_box(style.lookup_opacity(black_box(BG_OPA), black_box(pressed))));
        });
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_list/lookup");
    let pressed = StateMask::PRESSED | StateMask::FOCUSED;

    for attached in [1_usize, 4, 8] {
        let mut list = StyleList::new();
        for _ in 0..attached {
            list.add_style(SharedStyle::new(filler_style(8))).unwrap();
        }

        group.bench_function(BenchmarkId::new("attached_only", attached), |b| {
            b.iter(|| black_box(list.lookup_color(BG_COLOR, black_box(pressed))));
        });

        // Only the oldest style has the property: every style is visited.
        let mut sparse = list.clone();
        let base = SharedStyle::default();
        base.write()
            .set_opacity(BG_OPA, StateMask::DEFAULT, Opacity::COVER)
            .unwrap();
        sparse.reset();
        sparse.add_style(base).unwrap();
        for style in list.styles() {
            sparse.add_style(style.clone()).unwrap();
        }
        group.bench_function(BenchmarkId::new("deepest_hit", attached), |b| {
            b.iter(|| black_box(sparse.lookup_opacity(BG_OPA, black_box(pressed))));
        });

        let mut with_local = list.clone();
        with_local
            .set_local_color(BG_COLOR, pressed, Color::from_rgba8(0, 0, 0xff, 0xff))
            .unwrap();
        group.bench_function(BenchmarkId::new("local_exact", attached), |b| {
            b.iter(|| black_box(with_local.lookup_color(BG_COLOR, black_box(pressed))));
        });
    }

    group.finish();
}

fn bench_inherited(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_list/inherited");

    // A chain of lists where only the root sets the property.
    let chain_len = 16;
    let mut lists: Vec<StyleList> = (0..chain_len).map(|_| StyleList::new()).collect();
    lists[chain_len - 1]
        .set_local_int(TEXT_LETTER_SPACE, StateMask::DEFAULT, 2)
        .unwrap();

    group.bench_function(BenchmarkId::new("root_hit", chain_len), |b| {
        b.iter(|| {
            let chain = lists.iter().map(|list| (list, StateMask::DEFAULT));
            black_box(lookup_inherited::<i16>(chain, TEXT_LETTER_SPACE))
        });
    });

    group.bench_function(BenchmarkId::new("non_inheriting", chain_len), |b| {
        b.iter(|| {
            let chain = lists.iter().map(|list| (list, StateMask::DEFAULT));
            black_box(lookup_inherited::<i16>(chain, RADIUS))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_style, bench_list, bench_inherited);
criterion_main!(benches);

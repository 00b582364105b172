// Copyright 2026 the Casteljau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of offset curve construction.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use casteljau::{offset, offset_tapered, CubicBez, Line, QuadBez, Vec2};

fn bench_offset(cc: &mut Criterion) {
    let q = QuadBez::new(Vec2::new(0.0, 0.0), Vec2::new(50.0, 100.0), Vec2::new(100.0, 0.0));
    let c = CubicBez::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 0.0),
    );
    let cusp = CubicBez::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 0.0),
    );
    let taper = Line::new(1.0, 8.0);
    let mut out = Vec::with_capacity(1024);

    cc.bench_function("offset_quad", |b| {
        b.iter(|| {
            out.clear();
            offset(&black_box(q), 5.0, &mut out)
        });
    });
    cc.bench_function("offset_cubic", |b| {
        b.iter(|| {
            out.clear();
            offset(&black_box(c), 5.0, &mut out)
        });
    });
    cc.bench_function("offset_cubic_cusp", |b| {
        b.iter(|| {
            out.clear();
            offset(&black_box(cusp), 5.0, &mut out)
        });
    });
    cc.bench_function("offset_tapered_cubic", |b| {
        b.iter(|| {
            out.clear();
            offset_tapered(&black_box(c), &taper, &mut out)
        });
    });
}

criterion_group!(benches, bench_offset);
criterion_main!(benches);

/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trigkern::{cosf, f_cosf, f_sincosf, f_sinf, sincosf, sinf};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32));
            }
        })
    });

    c.bench_function("system: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::sin(i as f32));
            }
        })
    });

    c.bench_function("pxfm: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_sinf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: FMA sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_sinf(i as f32));
            }
        })
    });

    c.bench_function("libm::cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cosf(i as f32));
            }
        })
    });

    c.bench_function("pxfm: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pxfm::f_cosf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cosf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: FMA cosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_cosf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: sincosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sincosf(i as f32));
            }
        })
    });

    c.bench_function("trigkern: FMA sincosf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f_sincosf(i as f32));
            }
        })
    });

    c.bench_function("libm::sinf huge", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32 * 1e20));
            }
        })
    });

    c.bench_function("trigkern: sinf huge", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32 * 1e20));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

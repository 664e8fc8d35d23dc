// File: benches/complex_benchmarks.rs

use cplx::complex::Complex;
use cplx::procedures;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

// Naive repeated multiplication, the baseline for exponentiation by squaring
fn pow_naive(z: Complex, exp: u32) -> Complex {
    (0..exp).fold(Complex::ONE, |acc, _| acc * z)
}

fn bench_powu(c: &mut Criterion) {
    let mut group = c.benchmark_group("powu");
    let z = Complex::new(0.999, 0.01);

    for exp in [2u32, 16, 255, 4096] {
        group.bench_with_input(BenchmarkId::new("squaring", exp), &exp, |b, &exp| {
            b.iter(|| black_box(z).powu(black_box(exp)))
        });
        group.bench_with_input(BenchmarkId::new("naive", exp), &exp, |b, &exp| {
            b.iter(|| pow_naive(black_box(z), black_box(exp)))
        });
    }

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let a = Complex::new(1.25, -0.5);
    let b = Complex::new(-3.0, 2.0);

    c.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("argument", |bench| {
        bench.iter(|| black_box(b).argument())
    });
    c.bench_function("procedures::mul", |bench| {
        let mut result = Complex::ZERO;
        bench.iter(|| {
            procedures::mul(&mut result, black_box(a), black_box(b));
            black_box(result)
        })
    });
}

criterion_group!(complex_benches, bench_powu, bench_arithmetic);
criterion_main!(complex_benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ndarray::prelude::*;
use nmsimplex::prelude::*;

fn zero(_: ArrayView1<f64>) -> f64 {
    0.0
}

fn quadratic(x: ArrayView1<f64>) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn rosenbrock(x: ArrayView1<f64>) -> f64 {
    let p = 1.0 - x[0];
    let q = x[1] - x[0] * x[0];
    p * p + 100.0 * q * q
}

fn bench_objectives(c: &mut Criterion) {
    let mut group = c.benchmark_group("nelder_mead");
    let x6 = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let x2 = array![-2.0, 2.0];

    group.bench_with_input(BenchmarkId::new("zero", 6), &x6, |b, x0| {
        b.iter(|| minimize(zero, black_box(x0), 1.0))
    });
    group.bench_with_input(BenchmarkId::new("quadratic", 6), &x6, |b, x0| {
        b.iter(|| minimize(quadratic, black_box(x0), 1.0))
    });
    group.bench_with_input(BenchmarkId::new("rosenbrock", 2), &x2, |b, x0| {
        b.iter(|| minimize(rosenbrock, black_box(x0), 0.1))
    });
    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_vs_direct");
    let x0 = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    group.bench_function("cached", |b| {
        b.iter(|| minimize(quadratic, black_box(&x0), 1.0))
    });
    group.bench_function("direct", |b| {
        b.iter(|| {
            minimize_with_order(
                |x: ArrayView1<f64>, y: ArrayView1<f64>| quadratic(x) < quadratic(y),
                black_box(&x0),
                1.0,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_objectives, bench_cache);
criterion_main!(benches);

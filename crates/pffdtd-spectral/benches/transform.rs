//! Benchmarks for the direct transform against the FFT.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pffdtd_spectral::{FrequencySpec, dtft, fft};

fn sine(n: usize, dt: f64) -> (Vec<f64>, Vec<f64>) {
    let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
    let signal = time
        .iter()
        .map(|t| (2.0 * std::f64::consts::PI * 5e6 * t).sin())
        .collect();
    (time, signal)
}

fn bench_dtft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtft");
    let spec = FrequencySpec::default();

    for samples in [500, 2000, 8000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |bencher, &samples| {
                let (time, signal) = sine(samples, 1e-9);
                bencher.iter(|| dtft(black_box(&time), black_box(&signal), &spec).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    for samples in [500, 2000, 8000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |bencher, &samples| {
                let (time, signal) = sine(samples, 1e-9);
                bencher.iter(|| fft(black_box(&time), black_box(&signal)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dtft, bench_fft);
criterion_main!(benches);

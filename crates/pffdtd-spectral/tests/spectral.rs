//! End-to-end checks of the transform and impedance engine.

use std::f64::consts::PI;

use num_complex::Complex64;
use pffdtd_spectral::{FrequencySpec, capacitor_reactance, dtft, fft, impedance};

fn sampled(n: usize, dt: f64, f: impl Fn(f64) -> f64) -> (Vec<f64>, Vec<f64>) {
    let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
    let signal = time.iter().map(|&t| f(t)).collect();
    (time, signal)
}

#[test]
fn test_sinusoid_peaks_at_its_frequency() {
    let f0 = 5e6;
    let amplitude = 3.0;
    let n = 1000;
    let (time, signal) = sampled(n, 1e-9, |t| amplitude * (2.0 * PI * f0 * t).sin());

    let spec = FrequencySpec::from((1e6, 10e6, 0.25e6));
    let response = dtft(&time, &signal, &spec).unwrap();

    let (peak_freq, peak) = response.peak().unwrap();
    assert!((peak_freq - f0).abs() < 1.0, "peak at {peak_freq}");

    let expected = amplitude * n as f64 / 2.0;
    assert!(
        (peak.norm() - expected).abs() / expected < 1e-6,
        "|Y(f0)| = {} vs {expected}",
        peak.norm()
    );
}

#[test]
fn test_irregular_grid_off_bin() {
    // 7.3 MHz does not fall on an FFT bin of a 777-sample record
    let f0 = 7.3e6;
    let n = 777;
    let (time, signal) = sampled(n, 1e-9, |t| (2.0 * PI * f0 * t).cos());

    let spec = FrequencySpec::Explicit(vec![1.1e6, 4.0e6, 6.8e6, 7.3e6, 7.8e6, 9.9e6]);
    let response = dtft(&time, &signal, &spec).unwrap();

    assert_eq!(response.len(), 6);
    assert_eq!(response.peak().unwrap().0, 7.3e6);
    // the negative-frequency image leaks a few percent into the peak
    let half = n as f64 / 2.0;
    assert!((response.values()[3].norm() - half).abs() < 0.05 * half);
}

#[test]
fn test_fft_agrees_on_bins() {
    let n = 200;
    let dt = 1e-9;
    let (time, signal) = sampled(n, dt, |t| (2.0 * PI * 20e6 * t).sin() + 0.5);

    let spectrum = fft(&time, &signal).unwrap().positive().unwrap();
    let direct = dtft(
        &time,
        &signal,
        &FrequencySpec::Explicit(spectrum.frequencies().to_vec()),
    )
    .unwrap();

    for (a, b) in spectrum.values().iter().zip(direct.values()) {
        assert!((a - b).norm() < 1e-8);
    }
    assert!((spectrum.nearest(20e6).unwrap().1.norm() - n as f64 / 2.0).abs() < 1e-6);
}

#[test]
fn test_resistive_load_impedance() {
    let r = 75.0;
    let (time, voltage) = sampled(600, 1e-9, |t| {
        (-((t - 50e-9) / 10e-9).powi(2)).exp()
    });
    let current: Vec<f64> = voltage.iter().map(|v| v / r).collect();

    let spec = FrequencySpec::from((0.5e6, 10e6, 0.5e6));
    let z = impedance(
        &dtft(&time, &voltage, &spec).unwrap(),
        &dtft(&time, &current, &spec).unwrap(),
    )
    .unwrap();

    for m in z.magnitude() {
        assert!((m - r).abs() < 1e-9 * r);
    }
}

#[test]
fn test_zero_current_source_gives_zero_impedance() {
    let (time, voltage) = sampled(100, 1e-9, |t| (2.0 * PI * 3e6 * t).sin());
    let current = vec![0.0; 100];

    let spec = FrequencySpec::from((1e6, 5e6, 1e6));
    let z = impedance(
        &dtft(&time, &voltage, &spec).unwrap(),
        &dtft(&time, &current, &spec).unwrap(),
    )
    .unwrap();

    assert!(z.values().iter().all(|v| *v == Complex64::new(0.0, 0.0)));
    assert!(z.magnitude_db().iter().all(|db| db.is_finite()));
}

#[test]
fn test_reactance_falls_with_frequency() {
    let x = capacitor_reactance(&[1e6, 2e6, 4e6], 100e-12).unwrap();
    let mags = x.magnitude();
    assert!((mags[0] / mags[1] - 2.0).abs() < 1e-12);
    assert!((mags[1] / mags[2] - 2.0).abs() < 1e-12);
    assert!(x.phase_deg().iter().all(|p| (p + 90.0).abs() < 1e-9));
}

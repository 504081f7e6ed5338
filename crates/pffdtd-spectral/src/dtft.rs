//! Direct discrete-time Fourier transform on an arbitrary frequency grid.
//!
//! Evaluates `Y(f) = Σ_n x[n]·exp(-j·2π·f·n·dt)` for every requested
//! frequency. Unlike an FFT the frequency axis is free: any count, any
//! spacing, independent of the number of samples. Cost is O(N·M) for N
//! samples and M frequencies.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::frequency::FrequencySpec;
use crate::response::FrequencyResponse;

/// Sampling interval from the first two samples of a time axis.
///
/// The signal is assumed uniformly sampled; later samples are not checked.
pub fn sample_interval(time: &[f64]) -> Result<f64> {
    let [t0, t1, ..] = time else {
        return Err(Error::InsufficientSamples {
            needed: 2,
            actual: time.len(),
        });
    };
    let dt = t1 - t0;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(Error::Config(format!(
            "sampling interval {dt} from the first two samples is not positive"
        )));
    }
    Ok(dt)
}

/// Project a uniformly sampled signal onto explicit frequencies.
pub fn dtft_at(signal: &[f64], dt: f64, frequencies: &[f64]) -> Vec<Complex64> {
    frequencies
        .iter()
        .map(|&f| {
            // normalised angular frequency, rad/sample
            let w = 2.0 * PI * f * dt;
            signal
                .iter()
                .enumerate()
                .map(|(n, &x)| x * Complex64::cis(-w * n as f64))
                .sum()
        })
        .collect()
}

/// Transform a signal sampled on `time` at the frequencies of `spec`.
pub fn dtft(time: &[f64], signal: &[f64], spec: &FrequencySpec) -> Result<FrequencyResponse> {
    if signal.len() != time.len() {
        return Err(Error::LengthMismatch {
            what: "signal",
            expected: time.len(),
            actual: signal.len(),
        });
    }
    let dt = sample_interval(time)?;
    let frequencies = spec.frequencies()?;

    log::debug!(
        "DTFT of {} samples at {} frequencies (dt = {dt:e} s)",
        signal.len(),
        frequencies.len()
    );

    let values = dtft_at(signal, dt, &frequencies);
    FrequencyResponse::new(frequencies, values)
}

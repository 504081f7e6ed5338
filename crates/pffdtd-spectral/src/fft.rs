//! Standard FFT with the conventional frequency-bin ordering.
//!
//! Values are the raw, unnormalised transform `Σ_n x[n]·exp(-j·2π·k·n/N)`,
//! so at a bin frequency they agree with [`dtft`](crate::dtft::dtft).

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use crate::dtft::sample_interval;
use crate::error::{Error, Result};
use crate::response::FrequencyResponse;

/// Bin frequencies for an `n`-point transform with sample spacing `d`.
///
/// Non-negative frequencies come first in increasing order, followed by the
/// negative ones from most negative up to `-1/(n·d)`.
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let scale = 1.0 / (n as f64 * d);
    let positive = (n - 1) / 2 + 1;
    (0..positive as i64)
        .chain(-((n / 2) as i64)..0)
        .map(|k| k as f64 * scale)
        .collect()
}

/// Output of [`fft`], in transform order.
#[derive(Debug, Clone)]
pub struct FftResult {
    /// Bin frequencies (Hz), as [`fftfreq`] orders them.
    pub frequencies: Vec<f64>,
    /// Complex bin values.
    pub values: Vec<Complex64>,
}

impl FftResult {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The non-negative half of the spectrum as an ordered response.
    pub fn positive(&self) -> Result<FrequencyResponse> {
        let (frequencies, values): (Vec<f64>, Vec<Complex64>) = self
            .frequencies
            .iter()
            .zip(&self.values)
            .filter(|(f, _)| **f >= 0.0)
            .map(|(&f, &v)| (f, v))
            .unzip();
        FrequencyResponse::new(frequencies, values)
    }
}

/// FFT of a signal sampled on `time`.
pub fn fft(time: &[f64], signal: &[f64]) -> Result<FftResult> {
    if signal.len() != time.len() {
        return Err(Error::LengthMismatch {
            what: "signal",
            expected: time.len(),
            actual: signal.len(),
        });
    }
    let dt = sample_interval(time)?;

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let plan: Arc<dyn Fft<f64>> = planner.plan_fft_forward(buffer.len());
    plan.process(&mut buffer);

    log::debug!("FFT of {} samples (dt = {dt:e} s)", buffer.len());

    Ok(FftResult {
        frequencies: fftfreq(buffer.len(), dt),
        values: buffer,
    })
}

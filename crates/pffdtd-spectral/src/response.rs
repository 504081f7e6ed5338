//! Complex frequency responses on an arbitrary frequency axis.

use num_complex::Complex64;

use crate::error::{Error, Result};

/// Floor applied when converting a zero magnitude to dB.
pub const DB_FLOOR: f64 = -400.0;

/// Relative tolerance when matching two frequency axes bin by bin.
const AXIS_RTOL: f64 = 1e-9;

/// `(frequency, value)` pairs with strictly increasing frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    frequencies: Vec<f64>,
    values: Vec<Complex64>,
}

impl FrequencyResponse {
    /// Pair a frequency axis with its values.
    pub fn new(frequencies: Vec<f64>, values: Vec<Complex64>) -> Result<Self> {
        if values.len() != frequencies.len() {
            return Err(Error::LengthMismatch {
                what: "response values",
                expected: frequencies.len(),
                actual: values.len(),
            });
        }
        if frequencies.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::Config(
                "response frequencies must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            frequencies,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency axis (Hz).
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// |X(f)|.
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.norm()).collect()
    }

    /// 20·log10|X(f)|, floored at [`DB_FLOOR`].
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| {
                let mag = v.norm();
                if mag > 1e-20 {
                    20.0 * mag.log10()
                } else {
                    DB_FLOOR
                }
            })
            .collect()
    }

    /// arg X(f) in radians.
    pub fn phase(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.arg()).collect()
    }

    /// arg X(f) in degrees.
    pub fn phase_deg(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.arg().to_degrees()).collect()
    }

    /// Fail unless `other` is sampled on the same frequency axis.
    pub fn check_same_axis(&self, other: &FrequencyResponse) -> Result<()> {
        if other.len() != self.len() {
            return Err(Error::LengthMismatch {
                what: "frequency axis",
                expected: self.len(),
                actual: other.len(),
            });
        }
        for (bin, (&left, &right)) in self.frequencies.iter().zip(&other.frequencies).enumerate() {
            if (left - right).abs() > AXIS_RTOL * left.abs().max(right.abs()) {
                return Err(Error::AxisMismatch { bin, left, right });
            }
        }
        Ok(())
    }

    /// Bin with the largest magnitude.
    pub fn peak(&self) -> Option<(f64, Complex64)> {
        self.iter().max_by(|(_, a), (_, b)| {
            a.norm()
                .partial_cmp(&b.norm())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Bin closest to `freq`.
    pub fn nearest(&self, freq: f64) -> Option<(f64, Complex64)> {
        if self.is_empty() || !freq.is_finite() {
            return None;
        }
        let i = self.frequencies.partition_point(|&f| f < freq);
        let best = match i {
            0 => 0,
            i if i == self.len() => i - 1,
            i if (self.frequencies[i] - freq) < (freq - self.frequencies[i - 1]) => i,
            i => i - 1,
        };
        Some((self.frequencies[best], self.values[best]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> FrequencyResponse {
        FrequencyResponse::new(
            vec![1.0, 2.0, 4.0],
            vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, -10.0),
                Complex64::new(0.0, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_bad_axis() {
        assert!(FrequencyResponse::new(vec![1.0, 1.0], vec![Complex64::default(); 2]).is_err());
        assert!(FrequencyResponse::new(vec![1.0, 2.0], vec![Complex64::default()]).is_err());
    }

    #[test]
    fn test_magnitude_and_phase() {
        let r = response();
        assert_eq!(r.magnitude(), vec![1.0, 10.0, 0.0]);
        assert_eq!(r.magnitude_db(), vec![0.0, 20.0, DB_FLOOR]);
        assert!((r.phase_deg()[1] + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_peak_and_nearest() {
        let r = response();
        assert_eq!(r.peak().unwrap().0, 2.0);
        assert_eq!(r.nearest(0.0).unwrap().0, 1.0);
        assert_eq!(r.nearest(2.9).unwrap().0, 2.0);
        assert_eq!(r.nearest(3.1).unwrap().0, 4.0);
        assert_eq!(r.nearest(100.0).unwrap().0, 4.0);
        assert!(r.nearest(f64::NAN).is_none());
    }
}

//! Differences between already-decoded artifacts.
//!
//! These work on structures rather than paths, for callers that want to
//! look at one source, one field cut or one impedance curve in detail after
//! a file-level comparison flagged a difference.

use nalgebra::DMatrix;
use pffdtd_io::field::{FieldId, FieldSet, SpatialAxis, TimeSelector};
use pffdtd_io::Trace;
use pffdtd_spectral::FrequencyResponse;

use crate::compare::config::{CompareConfig, max_abs_difference};
use crate::error::{Error, Result};

/// Largest voltage and current differences between two traces.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceDiff {
    /// Samples compared.
    pub samples: usize,
    /// True when the traces had different lengths and the longer one was cut.
    pub truncated: bool,
    pub max_voltage_difference: f64,
    pub max_current_difference: f64,
}

impl TraceDiff {
    /// Larger of the voltage and current differences.
    pub fn max_abs_difference(&self) -> f64 {
        let (v, i) = (self.max_voltage_difference, self.max_current_difference);
        if v.is_nan() || i.is_nan() {
            f64::NAN
        } else {
            v.max(i)
        }
    }

    /// Within tolerance and not truncated.
    pub fn passes(&self, config: &CompareConfig) -> bool {
        !self.truncated && config.accepts(self.max_abs_difference())
    }
}

/// Compare two traces over their common length.
pub fn diff_traces(baseline: &Trace, candidate: &Trace) -> TraceDiff {
    let samples = baseline.len().min(candidate.len());
    let truncated = baseline.len() != candidate.len();
    if truncated {
        log::warn!(
            "trace length mismatch {} vs {}, comparing the first {samples} samples",
            baseline.len(),
            candidate.len()
        );
    }

    TraceDiff {
        samples,
        truncated,
        max_voltage_difference: max_abs_difference(
            &baseline.voltage[..samples],
            &candidate.voltage[..samples],
        ),
        max_current_difference: max_abs_difference(
            &baseline.current[..samples],
            &candidate.current[..samples],
        ),
    }
}

/// Element-wise difference of one 2-D field cut.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceDiff {
    pub field: FieldId,
    pub axis: SpatialAxis,
    /// Index along `axis` after clamping.
    pub index: usize,
    /// Time index after clamping.
    pub time_index: usize,
    /// `baseline - candidate`.
    pub difference: DMatrix<f64>,
    pub max_abs_difference: f64,
}

/// Compare the same cut through `field` in two decoded field files.
///
/// Both files must hold the same number of samples on grids of the same
/// extents, otherwise [`Error::ShapeMismatch`] reports `(T, nx, ny, nz)` of
/// each. The cut is selected with the baseline's clamping rules.
pub fn diff_field_slices(
    baseline: &FieldSet,
    candidate: &FieldSet,
    field: FieldId,
    axis: SpatialAxis,
    index: usize,
    time: TimeSelector,
) -> Result<SliceDiff> {
    let left = baseline.field(field)?.dims();
    let right = candidate.field(field)?.dims();
    if left != right {
        return Err(Error::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        });
    }

    let expected = baseline.slice(field, axis, index, time)?;
    // identical shapes, so the clamped indices carry over
    let actual = candidate.slice(
        field,
        axis,
        expected.index,
        TimeSelector::Index(expected.time_index),
    )?;

    let difference = &expected.values - &actual.values;
    let max_abs_difference = max_abs_difference(expected.values.as_slice(), actual.values.as_slice());

    Ok(SliceDiff {
        field,
        axis,
        index: expected.index,
        time_index: expected.time_index,
        difference,
        max_abs_difference,
    })
}

/// Largest complex difference between two responses on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseDiff {
    /// `max |a(f) - b(f)|`.
    pub max_abs_difference: f64,
    /// Frequency at which it occurs.
    pub at_frequency: f64,
}

/// Compare two frequency responses, e.g. impedance curves from two runs.
pub fn diff_responses(baseline: &FrequencyResponse, candidate: &FrequencyResponse) -> Result<ResponseDiff> {
    baseline.check_same_axis(candidate)?;

    let mut worst = ResponseDiff {
        max_abs_difference: 0.0,
        at_frequency: baseline.frequencies().first().copied().unwrap_or_default(),
    };
    for ((f, a), b) in baseline.iter().zip(candidate.values()) {
        let d = (a - b).norm();
        if d.is_nan() || d > worst.max_abs_difference {
            worst = ResponseDiff {
                max_abs_difference: d,
                at_frequency: f,
            };
            if d.is_nan() {
                break;
            }
        }
    }
    Ok(worst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn trace(voltage: &[f64], current: &[f64]) -> Trace {
        Trace {
            source: 1,
            time: (0..voltage.len()).map(|t| t as f64).collect(),
            voltage: voltage.to_vec(),
            current: current.to_vec(),
        }
    }

    #[test]
    fn test_trace_diff() {
        let a = trace(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]);
        let b = trace(&[1.0, 2.5, 3.0], &[0.0, -0.1, 0.0]);
        let diff = diff_traces(&a, &b);

        assert_eq!(diff.samples, 3);
        assert!(!diff.truncated);
        assert_eq!(diff.max_voltage_difference, 0.5);
        assert_eq!(diff.max_current_difference, 0.1);
        assert_eq!(diff.max_abs_difference(), 0.5);
        assert!(!diff.passes(&CompareConfig::default()));
        assert!(diff.passes(&CompareConfig::default().with_tolerance(0.5)));
    }

    #[test]
    fn test_trace_diff_truncates() {
        let a = trace(&[1.0, 2.0, 3.0, 4.0], &[1.0; 4]);
        let b = trace(&[1.0, 2.0], &[1.0; 2]);
        let diff = diff_traces(&a, &b);

        assert_eq!(diff.samples, 2);
        assert!(diff.truncated);
        assert_eq!(diff.max_abs_difference(), 0.0);
        assert!(!diff.passes(&CompareConfig::default()));
    }

    #[test]
    fn test_response_diff() {
        let freqs = vec![1.0, 2.0, 3.0];
        let a = FrequencyResponse::new(freqs.clone(), vec![Complex64::new(1.0, 0.0); 3]).unwrap();
        let b = FrequencyResponse::new(
            freqs,
            vec![
                Complex64::new(1.0, 0.0),
                Complex64::new(1.0, 2.0),
                Complex64::new(2.0, 0.0),
            ],
        )
        .unwrap();

        let diff = diff_responses(&a, &b).unwrap();
        assert_eq!(diff.max_abs_difference, 2.0);
        assert_eq!(diff.at_frequency, 2.0);

        let other = FrequencyResponse::new(vec![1.0, 2.0], vec![Complex64::default(); 2]).unwrap();
        assert!(matches!(diff_responses(&a, &other), Err(Error::Spectral(_))));
    }
}

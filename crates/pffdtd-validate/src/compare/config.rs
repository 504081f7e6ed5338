//! Comparison settings.

use serde::{Deserialize, Serialize};

/// Default absolute tolerance for numeric comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Settings for [`compare_files`](crate::compare_files).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Largest absolute element-wise difference that still passes.
    pub tolerance: f64,
    /// Compare files with unrecognised extensions byte for byte. When false
    /// such files fail outright.
    #[serde(default = "default_byte_compare")]
    pub byte_compare_unknown: bool,
}

fn default_byte_compare() -> bool {
    true
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            byte_compare_unknown: default_byte_compare(),
        }
    }
}

impl CompareConfig {
    /// Create with a custom absolute tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable the byte-for-byte fallback.
    pub fn with_byte_compare_unknown(mut self, enabled: bool) -> Self {
        self.byte_compare_unknown = enabled;
        self
    }

    /// True if `max_abs_difference` is within tolerance. NaN never passes.
    pub fn accepts(&self, max_abs_difference: f64) -> bool {
        max_abs_difference <= self.tolerance
    }
}

/// Difference of one element pair.
///
/// Equal values (including equal infinities) and NaN paired with NaN count
/// as zero, so byte-identical files always compare clean. NaN against any
/// other value gives NaN.
fn pair_difference(x: f64, y: f64) -> f64 {
    if x == y || (x.is_nan() && y.is_nan()) {
        0.0
    } else {
        (x - y).abs()
    }
}

/// Largest `|a - b|` over paired elements; NaN if any difference is NaN.
pub fn max_abs_difference<'a>(
    a: impl IntoIterator<Item = &'a f64>,
    b: impl IntoIterator<Item = &'a f64>,
) -> f64 {
    a.into_iter()
        .zip(b)
        .map(|(&x, &y)| pair_difference(x, y))
        .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
}

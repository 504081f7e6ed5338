//! Pass/fail outcome of comparing one file pair.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Outcome of comparing a candidate file against its golden counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Display name, usually the golden file name.
    pub name: String,
    pub golden: PathBuf,
    pub candidate: PathBuf,
    pub passed: bool,
    /// Human-readable explanation.
    pub reason: String,
    /// Largest absolute element-wise difference, when a numeric comparison
    /// got that far.
    #[serde(default, with = "difference_json")]
    pub max_abs_difference: Option<f64>,
}

impl Verdict {
    pub(crate) fn new(golden: &Path, candidate: &Path) -> Self {
        let name = golden
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| golden.display().to_string());
        Self {
            name,
            golden: golden.to_path_buf(),
            candidate: candidate.to_path_buf(),
            passed: false,
            reason: String::new(),
            max_abs_difference: None,
        }
    }

    pub(crate) fn pass(mut self, reason: impl Into<String>) -> Self {
        self.passed = true;
        self.reason = reason.into();
        self
    }

    pub(crate) fn fail(mut self, reason: impl Into<String>) -> Self {
        self.passed = false;
        self.reason = reason.into();
        self
    }

    pub(crate) fn with_difference(mut self, max_abs_difference: f64) -> Self {
        self.max_abs_difference = Some(max_abs_difference);
        self
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{status}: {} ({})", self.name, self.reason)
    }
}

/// JSON form of an optional difference.
///
/// JSON has no NaN or infinity, so non-finite values are written as the
/// strings `"NaN"`, `"inf"` and `"-inf"` instead of collapsing to `null`.
pub(crate) mod difference_json {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Difference {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        value
            .map(|d| {
                if d.is_finite() {
                    Difference::Number(d)
                } else {
                    Difference::Text(d.to_string())
                }
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Difference>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Difference::Number(d)) => Ok(Some(d)),
            Some(Difference::Text(text)) => text
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid difference '{text}'"))),
        }
    }
}

//! Aggregated comparison results.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compare::verdict::Verdict;
use crate::error::Result;

/// Summary statistics over a set of verdicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Total number of file pairs compared.
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Largest difference among numeric comparisons, if any ran.
    #[serde(default, with = "crate::compare::verdict::difference_json")]
    pub max_abs_difference: Option<f64>,
}

/// Verdicts for a batch of file pairs chosen by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Free-form label, e.g. the run being checked.
    pub title: String,
    /// Whether every comparison passed.
    pub passed: bool,
    pub verdicts: Vec<Verdict>,
    pub summary: ComparisonSummary,
}

impl ComparisonReport {
    /// Create an empty report.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            passed: true,
            verdicts: Vec::new(),
            summary: ComparisonSummary::default(),
        }
    }

    /// Add one verdict and update the summary.
    pub fn add(&mut self, verdict: Verdict) {
        if verdict.passed {
            self.summary.passed += 1;
        } else {
            self.passed = false;
            self.summary.failed += 1;
        }
        self.summary.total += 1;
        if let Some(d) = verdict.max_abs_difference {
            self.summary.max_abs_difference = Some(match self.summary.max_abs_difference {
                Some(m) if !(d > m || d.is_nan()) => m,
                _ => d,
            });
        }
        self.verdicts.push(verdict);
    }

    /// True when no comparisons have been added.
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Verdicts that failed.
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    /// Format as human-readable text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Comparison Report: {}\n", self.title));
        out.push_str(&format!("Status: {}\n", if self.passed { "PASS" } else { "FAIL" }));
        out.push_str(&format!(
            "Files: {}/{} passed\n",
            self.summary.passed, self.summary.total
        ));
        if let Some(d) = self.summary.max_abs_difference {
            out.push_str(&format!("Max difference: {d:.2e}\n"));
        }
        out.push('\n');

        for verdict in &self.verdicts {
            out.push_str(&format!("  {verdict}\n"));
        }

        if !self.passed {
            out.push_str("\nFailed files:\n");
            for verdict in self.failures() {
                out.push_str(&format!("  - {}\n", verdict.name));
            }
        }

        out
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report previously written with [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the JSON form to `path`.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

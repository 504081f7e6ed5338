//! Regression checks for PFFDTD output files.
//!
//! This crate provides:
//! - A single-file comparator ([`compare_files`]) that picks the decoder from
//!   the file extension and reports a [`Verdict`] instead of failing
//! - Detailed diffs of decoded traces, field cuts and frequency responses
//! - A [`ComparisonReport`] that aggregates verdicts chosen by the caller
//!
//! Walking directories and mapping results to exit codes is left to callers.

pub mod compare;
pub mod error;

pub use compare::{
    CompareConfig, ComparisonReport, ComparisonSummary, ResponseDiff, SliceDiff, TraceDiff,
    Verdict, compare_files, diff_field_slices, diff_responses, diff_traces,
};
pub use error::{Error, Result};

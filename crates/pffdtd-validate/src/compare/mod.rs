//! Comparison of simulator outputs against golden results.

pub mod config;
pub mod decoded;
pub mod file;
pub mod report;
pub mod verdict;

pub use config::{CompareConfig, DEFAULT_TOLERANCE, max_abs_difference};
pub use decoded::{
    ResponseDiff, SliceDiff, TraceDiff, diff_field_slices, diff_responses, diff_traces,
};
pub use file::compare_files;
pub use report::{ComparisonReport, ComparisonSummary};
pub use verdict::Verdict;

//! Format-aware comparison of two output files.

use std::fs;
use std::path::Path;

use pffdtd_io::{OutputFormat, read_table};

use crate::compare::config::{CompareConfig, max_abs_difference};
use crate::compare::verdict::Verdict;

/// Compare `candidate` against `golden`.
///
/// The golden file's extension picks the decoder: `.vc` and `.fd` files are
/// loaded as numeric tables below their header rows and compared element-wise
/// against `config.tolerance`; anything else is compared byte for byte.
/// Missing files, decode failures and shape mismatches all produce a failing
/// verdict rather than an error.
pub fn compare_files(golden: &Path, candidate: &Path, config: &CompareConfig) -> Verdict {
    let verdict = judge(Verdict::new(golden, candidate), golden, candidate, config);
    if verdict.passed {
        log::info!("{verdict}");
    } else {
        log::warn!("{verdict}");
    }
    verdict
}

fn judge(verdict: Verdict, golden: &Path, candidate: &Path, config: &CompareConfig) -> Verdict {
    if !golden.exists() {
        return verdict.fail(format!("golden file {} missing", golden.display()));
    }
    if !candidate.exists() {
        return verdict.fail(format!("new file {} missing", candidate.display()));
    }

    match OutputFormat::from_path(golden) {
        Some(format) => compare_numeric(verdict, format, golden, candidate, config),
        None if config.byte_compare_unknown => compare_bytes(verdict, golden, candidate),
        None => verdict.fail("unrecognised extension, byte comparison disabled"),
    }
}

fn compare_numeric(
    verdict: Verdict,
    format: OutputFormat,
    golden: &Path,
    candidate: &Path,
    config: &CompareConfig,
) -> Verdict {
    let skip = format.header_rows();
    let expected = match read_table(golden, skip) {
        Ok(table) => table,
        Err(e) => return verdict.fail(format!("cannot decode golden file: {e}")),
    };
    let actual = match read_table(candidate, skip) {
        Ok(table) => table,
        Err(e) => return verdict.fail(format!("cannot decode new file: {e}")),
    };

    if expected.shape() != actual.shape() {
        return verdict.fail(format!(
            "shape mismatch {:?} vs {:?}",
            expected.shape(),
            actual.shape()
        ));
    }

    let max_diff = max_abs_difference(expected.values(), actual.values());
    let verdict = verdict.with_difference(max_diff);
    if config.accepts(max_diff) {
        verdict.pass(format!("max diff {max_diff:.2e}"))
    } else {
        verdict.fail(format!("max diff {max_diff:.2e} > {:e}", config.tolerance))
    }
}

fn compare_bytes(verdict: Verdict, golden: &Path, candidate: &Path) -> Verdict {
    let (expected, actual) = match (fs::read(golden), fs::read(candidate)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => return verdict.fail(format!("cannot read file: {e}")),
    };
    if expected == actual {
        verdict.pass("binary match")
    } else {
        verdict.fail("binary mismatch")
    }
}

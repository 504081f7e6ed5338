//! Voltage/current trace decoding (`.vc` files).
//!
//! A `.vc` file starts with one header row (`0  11 12  21 22 ...`) that is
//! skipped unconditionally. Every following row holds the sample time in
//! column 0 and then a voltage/current pair per source, so source `k`
//! (1-based) occupies columns `2k-1` and `2k`.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{self, Table};

/// Number of leading rows in a `.vc` file that carry no samples.
pub const TRACE_HEADER_ROWS: usize = 1;

/// Column holding the voltage of a 1-based source, `None` for source 0.
pub fn voltage_column(source: usize) -> Option<usize> {
    source.checked_mul(2)?.checked_sub(1)
}

/// Column holding the current of a 1-based source, `None` for source 0.
pub fn current_column(source: usize) -> Option<usize> {
    if source == 0 { None } else { source.checked_mul(2) }
}

/// Voltage and current of one source, aligned to the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// 1-based source index.
    pub source: usize,
    /// Sample times (s).
    pub time: Vec<f64>,
    /// Source voltage (V).
    pub voltage: Vec<f64>,
    /// Source current (A).
    pub current: Vec<f64>,
}

impl Trace {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sampling interval taken from the first two samples.
    pub fn sample_interval(&self) -> Option<f64> {
        match self.time.as_slice() {
            [t0, t1, ..] => Some(t1 - t0),
            _ => None,
        }
    }
}

/// Every source of a `.vc` file.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSet {
    origin: String,
    table: Table,
}

impl TraceSet {
    /// Wrap a decoded sample table.
    ///
    /// The table must hold at least two rows so a sampling interval exists.
    pub fn from_table(table: Table, origin: &str) -> Result<Self> {
        if table.rows() < 2 {
            return Err(Error::format(
                origin,
                None,
                format!("expected at least 2 data rows, found {}", table.rows()),
            ));
        }
        Ok(Self {
            origin: origin.to_string(),
            table,
        })
    }

    /// Number of samples.
    pub fn num_samples(&self) -> usize {
        self.table.rows()
    }

    /// Number of complete voltage/current pairs after the time column.
    pub fn num_sources(&self) -> usize {
        self.table.cols().saturating_sub(1) / 2
    }

    /// The raw sample table, time in column 0.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Sample times.
    pub fn time(&self) -> Vec<f64> {
        self.table.column(0).unwrap_or_default()
    }

    /// Extract one source.
    ///
    /// `source` is 1-based; zero is a configuration error, a source past the
    /// last column pair is a format error of the file.
    pub fn source(&self, source: usize) -> Result<Trace> {
        if source == 0 {
            return Err(Error::Config("source index is 1-based, got 0".to_string()));
        }

        let cols = self.table.cols();
        let (v_col, i_col) = match (voltage_column(source), current_column(source)) {
            (Some(v), Some(i)) if i < cols => (v, i),
            _ => {
                return Err(Error::format(
                    &self.origin,
                    None,
                    format!("source {source} is past the last column pair, file has {cols} columns"),
                ));
            }
        };

        let mut time = Vec::with_capacity(self.table.rows());
        let mut voltage = Vec::with_capacity(self.table.rows());
        let mut current = Vec::with_capacity(self.table.rows());
        for row in self.table.iter_rows() {
            time.push(row[0]);
            voltage.push(row[v_col]);
            current.push(row[i_col]);
        }

        Ok(Trace {
            source,
            time,
            voltage,
            current,
        })
    }

    /// Extract every source in order.
    pub fn sources(&self) -> Result<Vec<Trace>> {
        (1..=self.num_sources()).map(|s| self.source(s)).collect()
    }
}

/// Parse a `.vc` stream.
pub fn parse_trace_set<R: BufRead>(reader: R, origin: &str) -> Result<TraceSet> {
    let table = table::parse_table(reader, origin, TRACE_HEADER_ROWS)?;
    log::debug!(
        "decoded {}: {} samples x {} columns",
        origin,
        table.rows(),
        table.cols()
    );
    TraceSet::from_table(table, origin)
}

/// Load every source of a `.vc` file.
pub fn load_trace_set(path: &Path) -> Result<TraceSet> {
    let reader = table::open(path)?;
    parse_trace_set(reader, &path.display().to_string())
}

/// Load the time axis, voltage and current of one 1-based source.
pub fn load_trace(path: &Path, source: usize) -> Result<Trace> {
    load_trace_set(path)?.source(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SOURCES: &str = "0\t11\t12\t21\t22\n\
        0.0e0\t1.0\t0.1\t2.0\t0.2\n\
        1.0e-9\t1.5\t0.15\t2.5\t0.25\n\
        2.0e-9\t1.25\t0.125\t2.25\t0.225\n";

    #[test]
    fn test_source_columns() {
        assert_eq!(voltage_column(1), Some(1));
        assert_eq!(current_column(1), Some(2));
        assert_eq!(voltage_column(3), Some(5));
        assert_eq!(current_column(3), Some(6));
        assert_eq!(voltage_column(0), None);
        assert_eq!(current_column(0), None);
        assert_eq!(voltage_column(usize::MAX), None);
    }

    #[test]
    fn test_parse_two_sources() {
        let set = parse_trace_set(TWO_SOURCES.as_bytes(), "mem").unwrap();
        assert_eq!(set.num_samples(), 3);
        assert_eq!(set.num_sources(), 2);

        let second = set.source(2).unwrap();
        assert_eq!(second.source, 2);
        assert_eq!(second.time, vec![0.0, 1.0e-9, 2.0e-9]);
        assert_eq!(second.voltage, vec![2.0, 2.5, 2.25]);
        assert_eq!(second.current, vec![0.2, 0.25, 0.225]);
        assert_eq!(second.sample_interval(), Some(1.0e-9));
    }

    #[test]
    fn test_source_zero_is_config_error() {
        let set = parse_trace_set(TWO_SOURCES.as_bytes(), "mem").unwrap();
        assert!(set.source(0).unwrap_err().is_config());
    }

    #[test]
    fn test_source_past_columns_is_format_error() {
        let set = parse_trace_set(TWO_SOURCES.as_bytes(), "mem").unwrap();
        let err = set.source(3).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("source 3"));
        assert!(set.source(usize::MAX).unwrap_err().is_format());
    }

    #[test]
    fn test_header_row_skipped_even_if_numeric_width_differs() {
        let text = "0 11 12 21 22 31 32\n0 1 2\n1 3 4\n";
        let set = parse_trace_set(text.as_bytes(), "mem").unwrap();
        assert_eq!(set.num_sources(), 1);
    }

    #[test]
    fn test_too_few_rows() {
        let text = "0\t11\t12\n0.0 1.0 2.0\n";
        assert!(parse_trace_set(text.as_bytes(), "mem").unwrap_err().is_format());
        assert!(parse_trace_set("".as_bytes(), "mem").unwrap_err().is_format());
    }

    #[test]
    fn test_ragged_rows() {
        let text = "0\t11\t12\n0.0 1.0 2.0\n1.0 1.0\n";
        assert!(parse_trace_set(text.as_bytes(), "mem").unwrap_err().is_format());
    }
}

//! Whitespace-delimited numeric tables.
//!
//! Both simulator output formats end in a block of rows of real numbers
//! separated by tabs or spaces. This module loads such a block into a dense
//! row-major [`Table`], rejecting ragged rows and unparsable tokens.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Lines of a reader paired with their 0-based line index.
pub(crate) type NumberedLines<R> = std::iter::Enumerate<io::Lines<R>>;

/// A dense row-major table of real numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Table {
    /// Build a table from row vectors.
    ///
    /// Fails with [`Error::Config`] when the rows do not all have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::Config(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// One row, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Iterate over rows in file order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on zero, and a zero-width table has no values anyway
        self.values.chunks_exact(self.cols.max(1))
    }

    /// Copy one column out of the table, or `None` past the last column.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.cols {
            return None;
        }
        Some(self.iter_rows().map(|row| row[index]).collect())
    }

    /// All values, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Open a file for line-oriented reading, mapping a missing path to
/// [`Error::NotFound`].
pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Load a numeric table from a file, skipping the first `skip_lines` lines
/// unconditionally.
pub fn read_table(path: &Path, skip_lines: usize) -> Result<Table> {
    let reader = open(path)?;
    parse_table(reader, &path.display().to_string(), skip_lines)
}

/// Parse a numeric table from any buffered reader.
///
/// `origin` labels the input in error messages. Blank lines are ignored.
pub fn parse_table<R: BufRead>(reader: R, origin: &str, skip_lines: usize) -> Result<Table> {
    let mut lines = reader.lines().enumerate();
    for _ in 0..skip_lines {
        match lines.next() {
            Some((_, line)) => {
                line?;
            }
            None => break,
        }
    }
    collect_rows(lines, origin)
}

/// Collect the remaining lines into a table.
pub(crate) fn collect_rows<R: BufRead>(lines: NumberedLines<R>, origin: &str) -> Result<Table> {
    let mut values = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;

    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let line_no = index + 1;
        let before = values.len();
        parse_row_into(&line, origin, line_no, &mut values)?;
        let width = values.len() - before;

        match cols {
            None => cols = Some(width),
            Some(expected) if expected != width => {
                return Err(Error::format(
                    origin,
                    Some(line_no),
                    format!("ragged row: expected {expected} columns, found {width}"),
                ));
            }
            Some(_) => {}
        }
        rows += 1;
    }

    Ok(Table {
        rows,
        cols: cols.unwrap_or(0),
        values,
    })
}

fn parse_row_into(line: &str, origin: &str, line_no: usize, out: &mut Vec<f64>) -> Result<()> {
    for token in line.split_whitespace() {
        let value = token.parse::<f64>().map_err(|_| {
            Error::format(origin, Some(line_no), format!("invalid number '{token}'"))
        })?;
        out.push(value);
    }
    Ok(())
}

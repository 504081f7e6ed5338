//! The four-row `.fd` header and its column descriptor table.
//!
//! The simulator writes one header entry per *data column*, not per grid
//! point: with the electric field enabled, every point contributes three
//! columns (`11 12 13`) and its coordinates are repeated three times on each
//! coordinate row. All four rows therefore have the same length, and that
//! equality is what makes the file decodable.

use std::collections::BTreeSet;
use std::io::BufRead;

use crate::error::{Error, Result};
use crate::field::quantity::FieldId;
use crate::field::topology::GridTopology;
use crate::table::NumberedLines;

/// Number of header rows at the top of a `.fd` file.
pub const FIELD_HEADER_ROWS: usize = 4;

const ROW_NAMES: [&str; FIELD_HEADER_ROWS] = ["field id", "x coordinate", "y coordinate", "z coordinate"];

/// Field and grid point a data column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    pub field: FieldId,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Column descriptor table built from the header rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldHeader {
    columns: Vec<ColumnDescriptor>,
}

impl FieldHeader {
    pub fn from_columns(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Descriptors in data-column order (data column `c + 1` is `columns()[c]`).
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Number of data columns after the time column.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Distinct field ids, ascending.
    pub fn field_ids(&self) -> BTreeSet<FieldId> {
        self.columns.iter().map(|c| c.field).collect()
    }

    /// Grid inferred from the coordinate rows.
    pub fn topology(&self) -> GridTopology {
        GridTopology::from_columns(&self.columns)
    }

    /// Read the four header rows from the front of a line stream.
    pub(crate) fn parse<R: BufRead>(lines: &mut NumberedLines<R>, origin: &str) -> Result<Self> {
        let mut rows: [Vec<i64>; FIELD_HEADER_ROWS] = Default::default();

        for (slot, name) in ROW_NAMES.iter().enumerate() {
            let Some((index, line)) = lines.next() else {
                let message = if slot == 0 {
                    "empty file".to_string()
                } else {
                    format!("file ends before the {name} header row")
                };
                return Err(Error::format(origin, None, message));
            };
            rows[slot] = parse_header_row(&line?, name, origin, index + 1)?;
        }

        let [ids, xs, ys, zs] = rows;
        if xs.len() != ids.len() || ys.len() != ids.len() || zs.len() != ids.len() {
            return Err(Error::format(
                origin,
                None,
                format!(
                    "header rows disagree on column count: field id {}, x {}, y {}, z {}",
                    ids.len(),
                    xs.len(),
                    ys.len(),
                    zs.len()
                ),
            ));
        }
        if ids.is_empty() {
            return Err(Error::format(origin, Some(1), "header declares no field columns"));
        }

        let mut columns = Vec::with_capacity(ids.len());
        for (c, &id) in ids.iter().enumerate() {
            let field = u16::try_from(id).ok().filter(|&id| id > 0).ok_or_else(|| {
                Error::format(
                    origin,
                    Some(1),
                    format!("field id {id} in column {} is not a small positive integer", c + 1),
                )
            })?;
            columns.push(ColumnDescriptor {
                field: FieldId(field),
                x: xs[c],
                y: ys[c],
                z: zs[c],
            });
        }

        Ok(Self { columns })
    }
}

/// Parse `0<TAB>v1<TAB>v2...` into `[v1, v2, ...]`.
fn parse_header_row(line: &str, name: &str, origin: &str, line_no: usize) -> Result<Vec<i64>> {
    let mut tokens = line.split_whitespace();

    match tokens.next().map(str::parse::<i64>) {
        Some(Ok(0)) => {}
        Some(_) => {
            return Err(Error::format(
                origin,
                Some(line_no),
                format!("{name} row must start with the 0 sentinel"),
            ));
        }
        None => {
            return Err(Error::format(
                origin,
                Some(line_no),
                format!("{name} row is empty"),
            ));
        }
    }

    tokens
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                Error::format(
                    origin,
                    Some(line_no),
                    format!("invalid {name} '{token}', expected an integer"),
                )
            })
        })
        .collect()
}

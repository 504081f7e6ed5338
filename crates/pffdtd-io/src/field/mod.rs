//! Field snapshot decoding (`.fd` files).
//!
//! A `.fd` file is four integer header rows (field ids, then x, y and z
//! coordinates, each prefixed with a `0` sentinel) followed by one row per
//! time sample. The header is turned into a column descriptor table, the grid
//! is inferred from it, and every data column is scattered into a dense
//! `(T, nx, ny, nz)` array for its field.

pub mod header;
pub mod layout;
pub mod quantity;
pub mod snapshot;
pub mod topology;

use std::io::BufRead;
use std::path::Path;

pub use header::{ColumnDescriptor, FIELD_HEADER_ROWS, FieldHeader};
pub use layout::{OutputRegion, column_layout};
pub use quantity::{Component, FieldGroup, FieldId, Quantity};
pub use snapshot::{FieldArray, FieldSet, FieldSlice, TimeSelector};
pub use topology::{Axis, GridTopology, SpatialAxis};

use crate::error::Result;
use crate::table;

/// Decode a `.fd` stream.
pub fn parse_fields<R: BufRead>(reader: R, origin: &str) -> Result<FieldSet> {
    let mut lines = reader.lines().enumerate();
    let header = FieldHeader::parse(&mut lines, origin)?;
    let data = table::collect_rows(lines, origin)?;
    FieldSet::decode(header, &data, origin)
}

/// Decode a `.fd` file.
pub fn load_fields(path: &Path) -> Result<FieldSet> {
    let reader = table::open(path)?;
    parse_fields(reader, &path.display().to_string())
}

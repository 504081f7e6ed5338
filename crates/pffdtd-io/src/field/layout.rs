//! Column layout of the simulator's field output.
//!
//! The simulator walks an inclusive box of grid points with x outermost and
//! z innermost and, for each point, writes every enabled field group in a
//! fixed order. Reproducing that walk gives the column descriptor table a
//! `.fd` file produced for the same settings would carry.

use crate::error::{Error, Result};
use crate::field::header::{ColumnDescriptor, FieldHeader};
use crate::field::quantity::FieldGroup;

/// Inclusive box of grid points written to a `.fd` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRegion {
    /// Lower corner `(x, y, z)`.
    pub lo: [i64; 3],
    /// Upper corner `(x, y, z)`, inclusive.
    pub hi: [i64; 3],
}

impl OutputRegion {
    pub fn new(lo: [i64; 3], hi: [i64; 3]) -> Result<Self> {
        if (0..3).any(|a| hi[a] < lo[a]) {
            return Err(Error::Config(format!(
                "output region upper corner {hi:?} is below lower corner {lo:?}"
            )));
        }
        Ok(Self { lo, hi })
    }

    /// Number of grid points in the box.
    pub fn point_count(&self) -> usize {
        (0..3)
            .map(|a| (self.hi[a] - self.lo[a] + 1) as usize)
            .product()
    }
}

/// Descriptor table for `region` with the given groups enabled.
///
/// Groups are emitted in the simulator's fixed order regardless of the order
/// they are passed in; duplicates are ignored.
pub fn column_layout(region: &OutputRegion, groups: &[FieldGroup]) -> FieldHeader {
    let mut enabled = groups.to_vec();
    enabled.sort_unstable();
    enabled.dedup();

    let per_point: usize = enabled.iter().map(|g| g.ids().len()).sum();
    let mut columns = Vec::with_capacity(region.point_count() * per_point);

    for x in region.lo[0]..=region.hi[0] {
        for y in region.lo[1]..=region.hi[1] {
            for z in region.lo[2]..=region.hi[2] {
                for group in &enabled {
                    for &field in group.ids() {
                        columns.push(ColumnDescriptor { field, x, y, z });
                    }
                }
            }
        }
    }

    FieldHeader::from_columns(columns)
}

//! Grid topology inferred from `.fd` header coordinates.
//!
//! A field file never states its grid extents. Each axis is reconstructed as
//! the sorted set of distinct coordinates the header mentions, and a grid
//! coordinate maps to its position in that set.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::field::header::ColumnDescriptor;

/// One of the three spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpatialAxis {
    X,
    Y,
    Z,
}

impl SpatialAxis {
    /// Position of the axis in `(x, y, z)` order.
    pub fn position(self) -> usize {
        match self {
            SpatialAxis::X => 0,
            SpatialAxis::Y => 1,
            SpatialAxis::Z => 2,
        }
    }
}

impl fmt::Display for SpatialAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpatialAxis::X => "x",
            SpatialAxis::Y => "y",
            SpatialAxis::Z => "z",
        };
        f.write_str(name)
    }
}

impl FromStr for SpatialAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(SpatialAxis::X),
            "y" => Ok(SpatialAxis::Y),
            "z" => Ok(SpatialAxis::Z),
            other => Err(Error::Config(format!(
                "unknown axis '{other}', expected x, y or z"
            ))),
        }
    }
}

/// Distinct coordinates along one axis, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Axis {
    coords: Vec<i64>,
}

impl Axis {
    /// Build an axis from coordinates in any order, with repeats.
    pub fn from_coords(coords: impl IntoIterator<Item = i64>) -> Self {
        let mut coords: Vec<i64> = coords.into_iter().collect();
        coords.sort_unstable();
        coords.dedup();
        Self { coords }
    }

    /// Number of grid points along the axis.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Sorted coordinates.
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Index of a grid coordinate along the axis.
    pub fn index_of(&self, coord: i64) -> Option<usize> {
        self.coords.binary_search(&coord).ok()
    }

    /// Grid coordinate at an index.
    pub fn coord(&self, index: usize) -> Option<i64> {
        self.coords.get(index).copied()
    }
}

/// Grid extents and coordinate lookup for all three axes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridTopology {
    x: Axis,
    y: Axis,
    z: Axis,
}

impl GridTopology {
    /// Infer the grid from a column descriptor table.
    pub fn from_columns(columns: &[ColumnDescriptor]) -> Self {
        Self {
            x: Axis::from_coords(columns.iter().map(|c| c.x)),
            y: Axis::from_coords(columns.iter().map(|c| c.y)),
            z: Axis::from_coords(columns.iter().map(|c| c.z)),
        }
    }

    /// `(nx, ny, nz)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x.len(), self.y.len(), self.z.len())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.x.len() * self.y.len() * self.z.len()
    }

    pub fn axis(&self, axis: SpatialAxis) -> &Axis {
        match axis {
            SpatialAxis::X => &self.x,
            SpatialAxis::Y => &self.y,
            SpatialAxis::Z => &self.z,
        }
    }

    /// Index triple of a grid coordinate triple.
    pub fn locate(&self, x: i64, y: i64, z: i64) -> Option<[usize; 3]> {
        Some([
            self.x.index_of(x)?,
            self.y.index_of(y)?,
            self.z.index_of(z)?,
        ])
    }

    /// Offset of a cell inside one `nx * ny * nz` block, z fastest.
    pub fn cell_offset(&self, [ix, iy, iz]: [usize; 3]) -> usize {
        (ix * self.y.len() + iy) * self.z.len() + iz
    }
}

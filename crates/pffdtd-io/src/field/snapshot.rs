//! Dense per-field arrays reconstructed from a `.fd` file.

use std::collections::BTreeMap;

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::field::header::FieldHeader;
use crate::field::quantity::FieldId;
use crate::field::topology::{GridTopology, SpatialAxis};
use crate::table::Table;

/// Which time sample to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSelector {
    /// 0-based sample index.
    Index(usize),
    /// The final sample.
    #[default]
    Last,
}

impl From<usize> for TimeSelector {
    fn from(index: usize) -> Self {
        TimeSelector::Index(index)
    }
}

/// Values of one field over time and space, shape `(T, nx, ny, nz)`.
///
/// Stored row-major with z fastest. Cells the file never wrote hold zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArray {
    dims: [usize; 4],
    values: Vec<f64>,
}

impl FieldArray {
    pub(crate) fn zeros(dims: [usize; 4]) -> Self {
        Self {
            dims,
            values: vec![0.0; dims.iter().product()],
        }
    }

    /// `[T, nx, ny, nz]`.
    pub fn dims(&self) -> [usize; 4] {
        self.dims
    }

    /// All values, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn block_len(&self) -> usize {
        self.dims[1] * self.dims[2] * self.dims[3]
    }

    fn offset(&self, t: usize, ix: usize, iy: usize, iz: usize) -> Option<usize> {
        let [nt, nx, ny, nz] = self.dims;
        if t >= nt || ix >= nx || iy >= ny || iz >= nz {
            return None;
        }
        Some(t * self.block_len() + (ix * ny + iy) * nz + iz)
    }

    /// Value at a time index and cell index triple.
    pub fn get(&self, t: usize, ix: usize, iy: usize, iz: usize) -> Option<f64> {
        self.offset(t, ix, iy, iz).map(|o| self.values[o])
    }

    /// The `nx * ny * nz` block of one time sample.
    pub fn snapshot(&self, t: usize) -> Option<&[f64]> {
        if t >= self.dims[0] {
            return None;
        }
        let len = self.block_len();
        Some(&self.values[t * len..(t + 1) * len])
    }

    /// History of one cell across every sample.
    pub fn time_series(&self, ix: usize, iy: usize, iz: usize) -> Option<Vec<f64>> {
        self.offset(0, ix, iy, iz)?;
        Some(
            (0..self.dims[0])
                .filter_map(|t| self.get(t, ix, iy, iz))
                .collect(),
        )
    }

    /// 2-D cut at one time sample, holding `axis` fixed at `index`.
    ///
    /// The two remaining axes keep their `(x, y, z)` order: fixing z gives an
    /// `nx × ny` matrix, fixing y `nx × nz`, fixing x `ny × nz`.
    pub fn plane(&self, t: usize, axis: SpatialAxis, index: usize) -> Option<DMatrix<f64>> {
        let [nt, nx, ny, nz] = self.dims;
        if t >= nt {
            return None;
        }
        let at = |t: usize, ix: usize, iy: usize, iz: usize| {
            self.values[t * self.block_len() + (ix * ny + iy) * nz + iz]
        };
        let plane = match axis {
            SpatialAxis::X if index < nx => DMatrix::from_fn(ny, nz, |r, c| at(t, index, r, c)),
            SpatialAxis::Y if index < ny => DMatrix::from_fn(nx, nz, |r, c| at(t, r, index, c)),
            SpatialAxis::Z if index < nz => DMatrix::from_fn(nx, ny, |r, c| at(t, r, c, index)),
            _ => return None,
        };
        Some(plane)
    }
}

/// A 2-D cut through one field at one time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlice {
    pub field: FieldId,
    pub axis: SpatialAxis,
    /// Index along `axis` after clamping.
    pub index: usize,
    /// Grid coordinate at `index`.
    pub coord: i64,
    /// Time index after clamping.
    pub time_index: usize,
    /// Sample time.
    pub time: f64,
    pub values: DMatrix<f64>,
}

/// Every field of a `.fd` file on a shared grid and time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    time: Vec<f64>,
    header: FieldHeader,
    topology: GridTopology,
    fields: BTreeMap<FieldId, FieldArray>,
    present: BTreeMap<FieldId, Vec<bool>>,
}

impl FieldSet {
    /// Scatter the data block into dense per-field arrays.
    ///
    /// `table` holds the rows after the header: time in column 0 and one
    /// value per header column after it.
    pub fn decode(header: FieldHeader, table: &Table, origin: &str) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::format(origin, None, "header declares no field columns"));
        }
        if table.is_empty() {
            return Err(Error::format(origin, None, "no data rows after the header"));
        }
        if table.cols() != header.len() + 1 {
            return Err(Error::format(
                origin,
                None,
                format!(
                    "data rows have {} columns, header describes {} plus time",
                    table.cols(),
                    header.len()
                ),
            ));
        }

        let topology = header.topology();
        let cells = topology.cell_count();
        let samples = table.rows();
        let (nx, ny, nz) = topology.dims();

        // Arena of dense arrays, one slot per distinct field id.
        let ids: Vec<FieldId> = header.field_ids().into_iter().collect();
        let mut arena: Vec<FieldArray> = ids
            .iter()
            .map(|_| FieldArray::zeros([samples, nx, ny, nz]))
            .collect();
        let mut present = vec![vec![false; cells]; ids.len()];

        // (slot, cell offset) for each data column, computed once.
        let mut plan = Vec::with_capacity(header.len());
        for column in header.columns() {
            let slot = ids.binary_search(&column.field).map_err(|_| {
                Error::format(origin, None, format!("field {} missing from catalog", column.field))
            })?;
            let cell = topology
                .locate(column.x, column.y, column.z)
                .map(|idx| topology.cell_offset(idx))
                .ok_or_else(|| {
                    Error::format(
                        origin,
                        None,
                        format!("column ({}, {}, {}) is off the grid", column.x, column.y, column.z),
                    )
                })?;
            present[slot][cell] = true;
            plan.push((slot, cell));
        }

        let mut time = Vec::with_capacity(samples);
        for (t, row) in table.iter_rows().enumerate() {
            time.push(row[0]);
            for (&(slot, cell), &value) in plan.iter().zip(&row[1..]) {
                arena[slot].values[t * cells + cell] = value;
            }
        }

        if time.windows(2).any(|w| w[1] <= w[0]) {
            log::warn!("{origin}: time axis is not strictly increasing");
        }
        log::debug!(
            "decoded {origin}: {samples} samples, {} fields on a {nx}x{ny}x{nz} grid",
            ids.len()
        );

        Ok(Self {
            time,
            header,
            topology,
            fields: ids.iter().copied().zip(arena).collect(),
            present: ids.into_iter().zip(present).collect(),
        })
    }

    /// Sample times.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Number of time samples.
    pub fn num_samples(&self) -> usize {
        self.time.len()
    }

    /// Column descriptor table the set was decoded with.
    pub fn header(&self) -> &FieldHeader {
        &self.header
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Field ids present in the file, ascending.
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.keys().copied()
    }

    /// Dense array of one field.
    pub fn field(&self, id: FieldId) -> Result<&FieldArray> {
        self.fields.get(&id).ok_or_else(|| {
            let available: Vec<String> = self.fields.keys().map(ToString::to_string).collect();
            Error::Config(format!(
                "field {id} not in file, available: {}",
                available.join(", ")
            ))
        })
    }

    /// Whether the header wrote `id` at a cell. Cells it did not write read
    /// as zero but carry no data.
    pub fn is_present(&self, id: FieldId, ix: usize, iy: usize, iz: usize) -> bool {
        let (nx, ny, nz) = self.topology.dims();
        if ix >= nx || iy >= ny || iz >= nz {
            return false;
        }
        let cell = self.topology.cell_offset([ix, iy, iz]);
        self.present.get(&id).is_some_and(|mask| mask[cell])
    }

    /// Resolve a time selector, clamping past-the-end indices to the last
    /// sample.
    pub fn time_index(&self, selector: TimeSelector) -> usize {
        let last = self.time.len().saturating_sub(1);
        match selector {
            TimeSelector::Last => last,
            TimeSelector::Index(i) if i > last => {
                log::warn!("time index {i} out of bounds, using last sample {last}");
                last
            }
            TimeSelector::Index(i) => i,
        }
    }

    /// Resolve an index along a spatial axis, clamping past-the-end indices
    /// to the last grid point.
    pub fn axis_index(&self, axis: SpatialAxis, index: usize) -> usize {
        let last = self.topology.axis(axis).len().saturating_sub(1);
        if index > last {
            log::warn!("{axis} index {index} out of bounds, using {last}");
            return last;
        }
        index
    }

    /// The `nx * ny * nz` block of one field at one time sample.
    pub fn snapshot(&self, id: FieldId, selector: TimeSelector) -> Result<&[f64]> {
        let t = self.time_index(selector);
        let field = self.field(id)?;
        // time_index is always in range for a decoded set
        field
            .snapshot(t)
            .ok_or_else(|| Error::Config(format!("time index {t} out of range")))
    }

    /// Cut through one field with `axis` held at `index`.
    pub fn slice(
        &self,
        id: FieldId,
        axis: SpatialAxis,
        index: usize,
        selector: TimeSelector,
    ) -> Result<FieldSlice> {
        let field = self.field(id)?;
        let time_index = self.time_index(selector);
        let index = self.axis_index(axis, index);
        let values = field
            .plane(time_index, axis, index)
            .ok_or_else(|| Error::Config(format!("{axis} index {index} out of range")))?;

        Ok(FieldSlice {
            field: id,
            axis,
            index,
            coord: self.topology.axis(axis).coord(index).unwrap_or_default(),
            time_index,
            time: self.time[time_index],
            values,
        })
    }
}

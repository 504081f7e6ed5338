//! Encoders producing files in the simulator's output formats.
//!
//! Values are written in Rust's shortest round-trip scientific notation, so
//! decoding an encoded file reproduces every `f64` bit for bit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::field::{ColumnDescriptor, FIELD_HEADER_ROWS, FieldHeader, FieldSet};
use crate::trace::TraceSet;

/// Write the four `.fd` header rows and one row per sample.
///
/// `value(t, column)` supplies the value of each header column at sample
/// `t`.
pub fn encode_fields<W, F>(
    mut writer: W,
    header: &FieldHeader,
    time: &[f64],
    mut value: F,
) -> Result<()>
where
    W: Write,
    F: FnMut(usize, &ColumnDescriptor) -> f64,
{
    for row in 0..FIELD_HEADER_ROWS {
        write!(writer, "0")?;
        for column in header.columns() {
            let entry = match row {
                0 => i64::from(column.field.0),
                1 => column.x,
                2 => column.y,
                _ => column.z,
            };
            write!(writer, "\t{entry}")?;
        }
        writeln!(writer)?;
    }

    for (t, &time) in time.iter().enumerate() {
        write!(writer, "{time:e}")?;
        for column in header.columns() {
            write!(writer, "\t{:e}", value(t, column))?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Re-encode a decoded field set.
pub fn write_fields<W: Write>(writer: W, set: &FieldSet) -> Result<()> {
    let topology = set.topology();
    encode_fields(writer, set.header(), set.time(), |t, column| {
        let located = topology.locate(column.x, column.y, column.z);
        match (set.field(column.field), located) {
            (Ok(array), Some([ix, iy, iz])) => array.get(t, ix, iy, iz).unwrap_or(0.0),
            _ => 0.0,
        }
    })
}

/// Write a field set to a `.fd` file.
pub fn write_field_file(path: &Path, set: &FieldSet) -> Result<()> {
    write_fields(BufWriter::new(File::create(path)?), set)
}

/// Write a `.vc` stream: a `0  11 12  21 22 ...` header then
/// `time v1 i1 v2 i2 ...` rows.
///
/// Every voltage and current sequence must match the length of `time`.
pub fn encode_traces<W: Write>(
    mut writer: W,
    time: &[f64],
    sources: &[(&[f64], &[f64])],
) -> Result<()> {
    for (k, (voltage, current)) in sources.iter().enumerate() {
        if voltage.len() != time.len() || current.len() != time.len() {
            return Err(Error::Config(format!(
                "source {} has {} voltage and {} current samples for {} times",
                k + 1,
                voltage.len(),
                current.len(),
                time.len()
            )));
        }
    }

    write!(writer, "0")?;
    for k in 1..=sources.len() {
        write!(writer, "\t{k}1\t{k}2")?;
    }
    writeln!(writer)?;

    for (t, time) in time.iter().enumerate() {
        write!(writer, "{time:e}")?;
        for (voltage, current) in sources {
            write!(writer, "\t{:e}\t{:e}", voltage[t], current[t])?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Re-encode a decoded trace set.
pub fn write_traces<W: Write>(writer: W, set: &TraceSet) -> Result<()> {
    let traces = set.sources()?;
    let pairs: Vec<(&[f64], &[f64])> = traces
        .iter()
        .map(|t| (t.voltage.as_slice(), t.current.as_slice()))
        .collect();
    encode_traces(writer, &set.time(), &pairs)
}

/// Write voltage/current samples to a `.vc` file.
pub fn write_trace_file(path: &Path, time: &[f64], sources: &[(&[f64], &[f64])]) -> Result<()> {
    encode_traces(BufWriter::new(File::create(path)?), time, sources)
}

//! Readers and writers for PFFDTD simulator output.
//!
//! This crate decodes the two text formats the simulator writes:
//! - `.vc` voltage/current traces, one column pair per source
//! - `.fd` field snapshots, a column-flattened encoding whose grid is only
//!   implied by the header coordinates
//!
//! # Example
//!
//! ```
//! use pffdtd_io::field::{FieldId, SpatialAxis, TimeSelector, parse_fields};
//!
//! let text = "0\t11\t11\n0\t0\t1\n0\t0\t0\n0\t0\t0\n0.0\t1.0\t2.0\n1e-9\t3.0\t4.0\n";
//! let fields = parse_fields(text.as_bytes(), "inline").unwrap();
//!
//! assert_eq!(fields.topology().dims(), (2, 1, 1));
//! let cut = fields
//!     .slice(FieldId::EX, SpatialAxis::Z, 0, TimeSelector::Last)
//!     .unwrap();
//! assert_eq!(cut.values[(1, 0)], 4.0);
//! ```

pub mod error;
pub mod field;
pub mod format;
pub mod table;
pub mod trace;
pub mod writer;

pub use error::{Error, Result};
pub use field::{FieldId, FieldSet, load_fields, parse_fields};
pub use format::OutputFormat;
pub use table::{Table, parse_table, read_table};
pub use trace::{Trace, TraceSet, load_trace, load_trace_set, parse_trace_set};

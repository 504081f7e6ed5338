//! # PFFDTD tools
//!
//! Post-processing for the output of the PFFDTD plasma-fluid FDTD simulator:
//! - Decoding `.vc` voltage/current traces and `.fd` field snapshots
//! - Reconstructing dense `(time, x, y, z)` field arrays from the sparse,
//!   column-flattened file layout
//! - Direct DTFT on arbitrary frequency grids and impedance estimation
//! - Golden-file comparison for regression runs
//!
//! ## Quick Start
//!
//! ```rust
//! use pffdtd::prelude::*;
//!
//! let text = "0\tk1\tk2\n0.0\t1.0\t0.02\n1e-9\t0.5\t0.01\n2e-9\t0.0\t0.0\n";
//! let traces = parse_trace_set(text.as_bytes(), "inline").unwrap();
//! let trace = traces.source(1).unwrap();
//!
//! let spec = FrequencySpec::from(vec![1e6, 2e6]);
//! let v = dtft(&trace.time, &trace.voltage, &spec).unwrap();
//! let i = dtft(&trace.time, &trace.current, &spec).unwrap();
//! let z = impedance(&v, &i).unwrap();
//! assert!((z.magnitude()[0] - 50.0).abs() < 1e-9);
//! ```

pub use pffdtd_io as io;
pub use pffdtd_spectral as spectral;
pub use pffdtd_validate as validate;

// ============================================================================
// Convenient re-exports from pffdtd_io
// ============================================================================

pub use pffdtd_io::field::{
    ColumnDescriptor, FieldArray, FieldGroup, FieldHeader, FieldId, FieldSet, FieldSlice,
    GridTopology, OutputRegion, Quantity, SpatialAxis, TimeSelector, column_layout, load_fields,
    parse_fields,
};
pub use pffdtd_io::{
    // Errors
    Error as IoError,
    OutputFormat,
    Table,
    Trace,
    TraceSet,
    load_trace,
    load_trace_set,
    parse_trace_set,
    read_table,
};

// ============================================================================
// Convenient re-exports from pffdtd_spectral
// ============================================================================

pub use pffdtd_spectral::{
    // Errors
    Error as SpectralError,
    FftResult,
    FrequencyResponse,
    FrequencySpec,
    capacitor_reactance,
    dtft,
    fft,
    impedance,
};

// ============================================================================
// Convenient re-exports from pffdtd_validate
// ============================================================================

pub use pffdtd_validate::{
    CompareConfig,
    ComparisonReport,
    // Errors
    Error as ValidateError,
    Verdict,
    compare_files,
    diff_field_slices,
    diff_responses,
    diff_traces,
};

// ============================================================================
// Re-export commonly used external types
// ============================================================================

/// Re-export of nalgebra's dynamic matrix type.
pub use nalgebra::DMatrix;

/// Re-export of num_complex's double-precision complex type.
pub use num_complex::Complex64;

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use pffdtd::prelude::*;
/// ```
pub mod prelude {
    // Decoding
    pub use crate::{
        FieldId, FieldSet, SpatialAxis, TimeSelector, Trace, TraceSet, load_fields, load_trace,
        load_trace_set, parse_fields, parse_trace_set,
    };

    // Spectral
    pub use crate::{FrequencyResponse, FrequencySpec, dtft, impedance};

    // Validation
    pub use crate::{CompareConfig, ComparisonReport, Verdict, compare_files};

    // Common external types
    pub use crate::{Complex64, DMatrix};
}

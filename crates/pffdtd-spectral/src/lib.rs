//! Frequency-domain analysis of PFFDTD voltage/current traces.
//!
//! The core is a direct discrete-time Fourier transform evaluated on an
//! arbitrary, caller-chosen frequency axis ([`dtft`]). Impedance curves are
//! formed from two such responses ([`impedance`]), with zero-current bins
//! reported as zero rather than as non-finite values.
//!
//! # Example
//!
//! ```
//! use pffdtd_spectral::{FrequencySpec, dtft, impedance};
//!
//! let time: Vec<f64> = (0..100).map(|n| n as f64 * 1e-9).collect();
//! let voltage: Vec<f64> = time.iter().map(|t| (2e7 * t).sin()).collect();
//! let current: Vec<f64> = voltage.iter().map(|v| v / 50.0).collect();
//!
//! let spec: FrequencySpec = "1e6:5e6:1e6".parse().unwrap();
//! let v = dtft(&time, &voltage, &spec).unwrap();
//! let i = dtft(&time, &current, &spec).unwrap();
//! let z = impedance(&v, &i).unwrap();
//!
//! assert!(z.magnitude().iter().all(|m| (m - 50.0).abs() < 1e-9));
//! ```

pub mod dtft;
pub mod error;
pub mod fft;
pub mod frequency;
pub mod impedance;
pub mod response;

pub use dtft::{dtft, dtft_at, sample_interval};
pub use error::{Error, Result};
pub use fft::{FftResult, fft, fftfreq};
pub use frequency::FrequencySpec;
pub use impedance::{capacitor_reactance, divide_or_zero, impedance};
pub use response::FrequencyResponse;

//! Frequency axis specifications.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lower edge of the analysis band (Hz).
pub const DEFAULT_START_HZ: f64 = 0.5e6;
/// Default upper edge of the analysis band, exclusive (Hz).
pub const DEFAULT_STOP_HZ: f64 = 10e6;
/// Default spacing of the analysis band (Hz).
pub const DEFAULT_STEP_HZ: f64 = 10e3;
/// Largest number of points a range may expand to.
pub const MAX_RANGE_POINTS: usize = 10_000_000;

/// The frequencies a transform is evaluated at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencySpec {
    /// Strictly increasing list of frequencies (Hz).
    Explicit(Vec<f64>),
    /// `start, start + step, ...` up to but excluding `stop` (Hz).
    Range { start: f64, stop: f64, step: f64 },
}

impl Default for FrequencySpec {
    fn default() -> Self {
        FrequencySpec::Range {
            start: DEFAULT_START_HZ,
            stop: DEFAULT_STOP_HZ,
            step: DEFAULT_STEP_HZ,
        }
    }
}

impl From<Vec<f64>> for FrequencySpec {
    fn from(frequencies: Vec<f64>) -> Self {
        FrequencySpec::Explicit(frequencies)
    }
}

impl From<(f64, f64, f64)> for FrequencySpec {
    fn from((start, stop, step): (f64, f64, f64)) -> Self {
        FrequencySpec::Range { start, stop, step }
    }
}

impl FrequencySpec {
    /// Expand into a validated, strictly increasing frequency axis.
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        match self {
            FrequencySpec::Explicit(freqs) => {
                if freqs.is_empty() {
                    return Err(Error::Config("frequency list is empty".to_string()));
                }
                if let Some(f) = freqs.iter().find(|f| !f.is_finite()) {
                    return Err(Error::Config(format!("frequency {f} is not finite")));
                }
                if let Some(i) = freqs.windows(2).position(|w| w[1] <= w[0]) {
                    return Err(Error::Config(format!(
                        "frequencies must be strictly increasing: {} then {}",
                        freqs[i],
                        freqs[i + 1]
                    )));
                }
                Ok(freqs.clone())
            }
            &FrequencySpec::Range { start, stop, step } => {
                if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
                    return Err(Error::Config(format!(
                        "range ({start}, {stop}, {step}) is not finite"
                    )));
                }
                if step <= 0.0 {
                    return Err(Error::Config(format!("range step {step} must be positive")));
                }
                if stop <= start {
                    return Err(Error::Config(format!(
                        "range stop {stop} must exceed start {start}"
                    )));
                }
                let count = ((stop - start) / step).ceil();
                if !(count.is_finite() && count <= MAX_RANGE_POINTS as f64) {
                    return Err(Error::Config(format!(
                        "range ({start}, {stop}, {step}) expands to more than {MAX_RANGE_POINTS} points"
                    )));
                }
                let freqs: Vec<f64> = (0..count as usize).map(|i| start + i as f64 * step).collect();
                if freqs.windows(2).any(|w| w[1] <= w[0]) {
                    return Err(Error::Config(format!(
                        "range step {step} is below the resolution of start {start}"
                    )));
                }
                Ok(freqs)
            }
        }
    }
}

impl FromStr for FrequencySpec {
    type Err = Error;

    /// Accepts `start:stop:step` for a range or `f1,f2,...` for an explicit
    /// list.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |token: &str| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::Config(format!("invalid frequency '{}'", token.trim())))
        };

        if s.contains(':') {
            let parts: Vec<&str> = s.split(':').collect();
            let [start, stop, step] = parts.as_slice() else {
                return Err(Error::Config(format!(
                    "range '{s}' must have exactly three parts (start:stop:step)"
                )));
            };
            return Ok(FrequencySpec::Range {
                start: parse(*start)?,
                stop: parse(*stop)?,
                step: parse(*step)?,
            });
        }

        let freqs = s
            .split(',')
            .filter(|t| !t.trim().is_empty())
            .map(parse)
            .collect::<Result<Vec<f64>>>()?;
        if freqs.is_empty() {
            return Err(Error::Config(
                "frequency specification is neither a list nor a start:stop:step range"
                    .to_string(),
            ));
        }
        Ok(FrequencySpec::Explicit(freqs))
    }
}

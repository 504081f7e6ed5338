//! Impedance from voltage and current spectra.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::response::FrequencyResponse;

/// `num / den`, or exactly zero when `den` is zero.
///
/// Bins with no current carry no impedance information; reporting zero keeps
/// every output finite.
pub fn divide_or_zero(num: Complex64, den: Complex64) -> Complex64 {
    if den.re == 0.0 && den.im == 0.0 {
        Complex64::new(0.0, 0.0)
    } else {
        num / den
    }
}

/// `Z(f) = V(f) / I(f)` over a shared frequency axis.
pub fn impedance(voltage: &FrequencyResponse, current: &FrequencyResponse) -> Result<FrequencyResponse> {
    voltage.check_same_axis(current)?;

    let values: Vec<Complex64> = voltage
        .values()
        .iter()
        .zip(current.values())
        .map(|(&v, &i)| divide_or_zero(v, i))
        .collect();

    let zeroed = current.values().iter().filter(|i| i.norm_sqr() == 0.0).count();
    if zeroed > 0 {
        log::debug!("{zeroed} zero-current bins reported as zero impedance");
    }

    FrequencyResponse::new(voltage.frequencies().to_vec(), values)
}

/// Ideal capacitor reactance `-j / (2πfC)` at each frequency.
pub fn capacitor_reactance(frequencies: &[f64], capacitance: f64) -> Result<FrequencyResponse> {
    if !(capacitance.is_finite() && capacitance > 0.0) {
        return Err(Error::Config(format!(
            "capacitance {capacitance} F must be positive"
        )));
    }
    if let Some(f) = frequencies.iter().find(|&&f| !(f.is_finite() && f > 0.0)) {
        return Err(Error::Config(format!(
            "reactance is undefined at frequency {f} Hz"
        )));
    }
    let values = frequencies
        .iter()
        .map(|&f| Complex64::new(0.0, -1.0 / (2.0 * PI * f * capacitance)))
        .collect();
    FrequencyResponse::new(frequencies.to_vec(), values)
}

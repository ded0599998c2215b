//! Display formatting for impact estimates.
//!
//! Number rendering follows the conventions of a browser readout
//! (`toExponential`, `toFixed`), so `1.57e+9` keeps its explicit exponent
//! sign and non-finite values read `NaN` / `Infinity`.

use bevy::prelude::*;

use crate::estimate::ImpactEstimate;
use crate::types::METERS_PER_KM;

/// Formatted strings for each output surface.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct ImpactReadout {
    /// Current diameter, e.g. `"100 m"`.
    pub diameter: String,
    /// Mass, e.g. `"1.57e+9 kg"`.
    pub mass: String,
    /// Energy, e.g. `"75.09 Megatons (TNT)"`.
    pub energy: String,
    /// Crater size, e.g. `"21 meters"` or `"1.22 km"`.
    pub crater: String,
}

impl ImpactReadout {
    /// Format every field of an estimate.
    pub fn from_estimate(estimate: &ImpactEstimate) -> Self {
        Self {
            diameter: format_diameter(estimate.diameter_m()),
            mass: format_mass(estimate.mass_kg()),
            energy: format_energy(estimate.energy_megatons_tnt()),
            crater: format_crater(estimate.crater_diameter_m()),
        }
    }
}

/// Mass in scientific notation with two fractional digits.
pub fn format_mass(mass_kg: f64) -> String {
    format!("{} kg", to_exponential(mass_kg, 2))
}

/// Energy in megatons with two decimals.
pub fn format_energy(megatons: f64) -> String {
    format!("{} Megatons (TNT)", to_fixed(megatons, 2))
}

/// Crater diameter in kilometers from 1000 m upward, whole meters below.
pub fn format_crater(crater_m: f64) -> String {
    if crater_m >= METERS_PER_KM {
        format!("{} km", to_fixed(crater_m / METERS_PER_KM, 2))
    } else {
        format!("{} meters", to_fixed(crater_m, 0))
    }
}

/// Diameter in meters, shortest representation.
pub fn format_diameter(diameter_m: f64) -> String {
    match non_finite(diameter_m) {
        Some(s) => format!("{s} m"),
        None => format!("{} m", positive_zero(diameter_m)),
    }
}

/// Scientific notation with an explicitly signed exponent (`1.57e+9`).
///
/// Exact binary ties in the mantissa round half to even.
pub fn to_exponential(value: f64, digits: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let formatted = format!("{:.*e}", digits, positive_zero(value));
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Fixed-point with `digits` decimals.
///
/// Whole numbers (`digits == 0`) round ties away from zero. With decimals,
/// exact binary ties round half to even (`0.125` -> `0.12`).
pub fn to_fixed(value: f64, digits: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let rounded = if digits == 0 { value.round() } else { value };
    format!("{:.*}", digits, positive_zero(rounded))
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Collapse `-0.0` so it never renders with a sign.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

//! Closed-form impact estimates for a spherical impactor.
//!
//! Given a diameter, derives:
//! - Mass from volume and bulk density
//! - Kinetic energy at impact velocity, in joules and megatons of TNT
//! - Final crater diameter from an energy power law
//!
//! [`estimate`] mirrors the reference arithmetic exactly and performs no
//! validation. [`try_estimate`] rejects input that would yield a
//! non-physical result.

use std::f64::consts::PI;

use crate::error::EstimateError;
use crate::types::ImpactConstants;

/// A validated impactor diameter in meters (finite, strictly positive).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Diameter(f64);

impl Diameter {
    /// Validate a raw diameter.
    pub fn new(meters: f64) -> Result<Self, EstimateError> {
        if !meters.is_finite() {
            return Err(EstimateError::NotFinite(meters));
        }
        if meters <= 0.0 {
            return Err(EstimateError::NonPositive(meters));
        }
        Ok(Self(meters))
    }

    /// Diameter in meters.
    pub fn meters(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Diameter {
    type Error = EstimateError;

    fn try_from(meters: f64) -> Result<Self, Self::Error> {
        Self::new(meters)
    }
}

/// Result of a single estimator invocation.
///
/// Recomputed from scratch every time; fields are read-only so the derived
/// values can never drift from the diameter they were computed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEstimate {
    diameter_m: f64,
    mass_kg: f64,
    energy_joules: f64,
    energy_megatons_tnt: f64,
    crater_diameter_m: f64,
}

impl ImpactEstimate {
    /// Impactor diameter (meters).
    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    /// Impactor radius (meters).
    pub fn radius_m(&self) -> f64 {
        self.diameter_m / 2.0
    }

    /// Impactor volume assuming a sphere (m³).
    pub fn volume_m3(&self) -> f64 {
        sphere_volume(self.radius_m())
    }

    /// Impactor mass (kg).
    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Kinetic energy at impact (J).
    pub fn energy_joules(&self) -> f64 {
        self.energy_joules
    }

    /// Kinetic energy at impact (megatons of TNT).
    pub fn energy_megatons_tnt(&self) -> f64 {
        self.energy_megatons_tnt
    }

    /// Estimated final crater diameter (meters).
    pub fn crater_diameter_m(&self) -> f64 {
        self.crater_diameter_m
    }

    /// Returns true if every field is finite and the diameter is positive.
    pub fn is_physical(&self) -> bool {
        self.diameter_m > 0.0
            && [
                self.diameter_m,
                self.mass_kg,
                self.energy_joules,
                self.energy_megatons_tnt,
                self.crater_diameter_m,
            ]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// V = (4/3)·π·r³
fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Estimate impact effects for an impactor of the given diameter.
///
/// Invalid input (NaN, infinite, zero or negative) is not rejected and
/// propagates through the arithmetic. Use [`try_estimate`] at input
/// boundaries.
///
/// # Arguments
/// * `diameter_m` - Impactor diameter (meters)
/// * `constants` - Density, velocity and scaling constants
pub fn estimate(diameter_m: f64, constants: &ImpactConstants) -> ImpactEstimate {
    let radius = diameter_m / 2.0;
    let volume = sphere_volume(radius);
    let mass_kg = constants.density * volume;

    // Ek = ½·m·v²
    let energy_joules = 0.5 * mass_kg * constants.velocity.powi(2);
    let energy_megatons_tnt = energy_joules / constants.joules_per_megaton;

    // Dc ≈ C·Ek^(1/3.4)
    let crater_diameter_m =
        constants.crater_constant * energy_joules.powf(constants.crater_exponent);

    ImpactEstimate {
        diameter_m,
        mass_kg,
        energy_joules,
        energy_megatons_tnt,
        crater_diameter_m,
    }
}

/// Checked variant of [`estimate`].
///
/// # Errors
/// Returns [`EstimateError`] if the diameter is not finite or not positive.
pub fn try_estimate(
    diameter_m: f64,
    constants: &ImpactConstants,
) -> Result<ImpactEstimate, EstimateError> {
    let diameter = Diameter::new(diameter_m)?;
    Ok(estimate(diameter.meters(), constants))
}

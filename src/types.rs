//! Physical constants and configuration for impact estimation.

use bevy::prelude::*;

// Physical constants (SI units)

/// Typical stony asteroid density (kg/m³)
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Typical Earth impact velocity (m/s)
pub const IMPACT_VELOCITY: f64 = 20_000.0;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Empirical crater scaling constant (m / J^exponent)
pub const CRATER_SCALING_CONSTANT: f64 = 0.00015;

/// Crater scaling exponent applied to impact energy
pub const CRATER_SCALING_EXPONENT: f64 = 1.0 / 3.4;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Immutable set of constants the estimator is evaluated with.
///
/// Inserted as a resource so an app can swap in different assumptions
/// (e.g. an iron impactor) before the plugins run. The estimator itself
/// only ever borrows it.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ImpactConstants {
    /// Impactor bulk density (kg/m³)
    pub density: f64,
    /// Impact velocity (m/s)
    pub velocity: f64,
    /// Joules per megaton of TNT
    pub joules_per_megaton: f64,
    /// Crater scaling constant
    pub crater_constant: f64,
    /// Crater scaling exponent
    pub crater_exponent: f64,
}

impl Default for ImpactConstants {
    fn default() -> Self {
        Self {
            density: ASTEROID_DENSITY,
            velocity: IMPACT_VELOCITY,
            joules_per_megaton: JOULES_PER_MEGATON,
            crater_constant: CRATER_SCALING_CONSTANT,
            crater_exponent: CRATER_SCALING_EXPONENT,
        }
    }
}

impl ImpactConstants {
    /// Same constants with a different impactor density.
    pub fn with_density(self, density: f64) -> Self {
        Self { density, ..self }
    }

    /// Same constants with a different impact velocity.
    pub fn with_velocity(self, velocity: f64) -> Self {
        Self { velocity, ..self }
    }
}

/// Range and stepping configuration for the diameter control.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct DiameterSettings {
    /// Smallest selectable diameter (meters)
    pub min_m: f64,
    /// Largest selectable diameter (meters)
    pub max_m: f64,
    /// Diameter used at startup and on reset (meters)
    pub default_m: f64,
    /// Use a logarithmic slider (the range spans several decades)
    pub logarithmic: bool,
    /// Multiplier applied per keyboard nudge
    pub nudge_factor: f64,
}

impl Default for DiameterSettings {
    fn default() -> Self {
        Self {
            min_m: 1.0,
            max_m: 10_000.0,
            default_m: 100.0,
            logarithmic: true,
            nudge_factor: 1.1,
        }
    }
}

impl DiameterSettings {
    /// Clamp a diameter into the configured range.
    pub fn clamp(&self, diameter_m: f64) -> f64 {
        diameter_m.clamp(self.min_m, self.max_m)
    }

    /// Returns true if the diameter lies inside the configured range.
    pub fn contains(&self, diameter_m: f64) -> bool {
        (self.min_m..=self.max_m).contains(&diameter_m)
    }
}

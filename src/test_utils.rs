//! Test utilities for impact estimate tests.
//!
//! Provides fixtures for common impactors and assertions for checking
//! derived quantities against independently computed values.

use crate::estimate::{estimate, ImpactEstimate};
use crate::types::ImpactConstants;

/// Fixtures for creating test estimates.
pub mod fixtures {
    use super::*;

    /// Diameters spanning the slider range (meters).
    pub const DIAMETERS: [f64; 6] = [1.0, 20.0, 100.0, 370.0, 1000.0, 10_000.0];

    /// Estimate with the default stony-asteroid constants.
    pub fn stony(diameter_m: f64) -> ImpactEstimate {
        estimate(diameter_m, &ImpactConstants::default())
    }

    /// Estimate for a dense iron impactor (7800 kg/m³).
    pub fn iron(diameter_m: f64) -> ImpactEstimate {
        estimate(diameter_m, &ImpactConstants::default().with_density(7800.0))
    }
}

/// Assertions for verifying estimates.
pub mod assertions {
    use super::*;

    /// Kinetic energy recomputed from mass and velocity: ½·m·v².
    pub fn kinetic_energy(mass_kg: f64, velocity: f64) -> f64 {
        0.5 * mass_kg * velocity * velocity
    }

    /// Relative difference |a - b| / |b|.
    pub fn relative_error(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    /// Assert the estimate's energy matches ½·m·v² and its unit conversion.
    pub fn assert_consistent(est: &ImpactEstimate, constants: &ImpactConstants) {
        let expected = kinetic_energy(est.mass_kg(), constants.velocity);
        assert!(
            relative_error(est.energy_joules(), expected) < 1e-12,
            "Energy {} J does not match ½mv² = {} J",
            est.energy_joules(),
            expected
        );
        let back = est.energy_megatons_tnt() * constants.joules_per_megaton;
        assert!(
            relative_error(back, est.energy_joules()) < 1e-12,
            "Megaton round trip drifted: {back} vs {}",
            est.energy_joules()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_consistent() {
        let constants = ImpactConstants::default();
        for d in fixtures::DIAMETERS {
            assertions::assert_consistent(&fixtures::stony(d), &constants);
        }
    }

    #[test]
    fn test_iron_fixture_heavier() {
        for d in fixtures::DIAMETERS {
            assert!(fixtures::iron(d).mass_kg() > fixtures::stony(d).mass_kg());
        }
    }
}

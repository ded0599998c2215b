//! Property-based tests for the impact estimator using proptest.
//!
//! These tests verify monotonicity, unit conversion and determinism across
//! the full range of impactor sizes.

use proptest::prelude::*;

use crate::estimate::{estimate, try_estimate};
use crate::format::format_crater;
use crate::test_utils::{assertions, fixtures};
use crate::types::ImpactConstants;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Larger impactors are heavier, more energetic and dig bigger craters.
    #[test]
    fn prop_monotonic_in_diameter(
        d1 in 0.01f64..50_000.0,
        scale in 1.001f64..10.0,
    ) {
        let d2 = d1 * scale;
        let a = fixtures::stony(d1);
        let b = fixtures::stony(d2);

        prop_assert!(a.mass_kg() < b.mass_kg(), "mass({d1}) >= mass({d2})");
        prop_assert!(a.energy_joules() < b.energy_joules(), "energy({d1}) >= energy({d2})");
        prop_assert!(
            a.crater_diameter_m() < b.crater_diameter_m(),
            "crater({d1}) >= crater({d2})"
        );
    }

    /// Megatons convert back to joules within floating-point tolerance.
    #[test]
    fn prop_megaton_round_trip(d in 0.01f64..50_000.0) {
        let constants = ImpactConstants::default();
        let est = estimate(d, &constants);
        let back = est.energy_megatons_tnt() * constants.joules_per_megaton;
        prop_assert!(
            assertions::relative_error(back, est.energy_joules()) < 1e-14,
            "Round trip drifted for D={d}"
        );
    }

    /// Repeated calls produce bitwise-identical output.
    #[test]
    fn prop_deterministic(d in prop::num::f64::ANY) {
        let constants = ImpactConstants::default();
        let a = estimate(d, &constants);
        let b = estimate(d, &constants);
        prop_assert_eq!(a.mass_kg().to_bits(), b.mass_kg().to_bits());
        prop_assert_eq!(a.energy_joules().to_bits(), b.energy_joules().to_bits());
        prop_assert_eq!(a.energy_megatons_tnt().to_bits(), b.energy_megatons_tnt().to_bits());
        prop_assert_eq!(a.crater_diameter_m().to_bits(), b.crater_diameter_m().to_bits());
    }

    /// The checked entry agrees with the raw estimator on valid input.
    #[test]
    fn prop_checked_matches_unchecked(d in 0.01f64..50_000.0) {
        let constants = ImpactConstants::default();
        let checked = try_estimate(d, &constants);
        prop_assert_eq!(checked, Ok(estimate(d, &constants)));
    }

    /// Crater text switches unit exactly at one kilometer.
    #[test]
    fn prop_crater_unit_switch(crater in 0.0f64..100_000.0) {
        let text = format_crater(crater);
        if crater >= 1000.0 {
            prop_assert!(text.ends_with(" km"), "{crater} -> {text}");
        } else {
            prop_assert!(text.ends_with(" meters"), "{crater} -> {text}");
        }
    }
}

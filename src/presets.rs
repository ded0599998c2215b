//! Reference impactor definitions.
//!
//! Well-known events and objects used as diameter presets, from airbursts
//! a few tens of meters across up to the Chicxulub impactor.

/// A named reference impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactorPreset {
    /// Unique identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description shown as hover text.
    pub description: &'static str,
    /// Estimated impactor diameter (meters).
    pub diameter_m: f64,
}

/// All available presets, smallest first.
pub static PRESETS: &[ImpactorPreset] = &[CHELYABINSK, BARRINGER, TUNGUSKA, APOPHIS, CHICXULUB];

/// Chelyabinsk superbolide (2013)
pub static CHELYABINSK: ImpactorPreset = ImpactorPreset {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "2013 airburst over Russia. ~20 m stony body.",
    diameter_m: 20.0,
};

/// Barringer (Meteor Crater) impactor, Arizona
pub static BARRINGER: ImpactorPreset = ImpactorPreset {
    id: "barringer",
    name: "Meteor Crater",
    description: "Iron impactor that formed Barringer Crater ~50,000 years ago. ~50 m.",
    diameter_m: 50.0,
};

/// Tunguska event (1908)
pub static TUNGUSKA: ImpactorPreset = ImpactorPreset {
    id: "tunguska",
    name: "Tunguska",
    description: "1908 airburst flattening 2,000 km² of Siberian forest. ~60 m.",
    diameter_m: 60.0,
};

/// 99942 Apophis
pub static APOPHIS: ImpactorPreset = ImpactorPreset {
    id: "apophis",
    name: "Apophis",
    description: "Near-Earth asteroid with a close approach in 2029. ~370 m.",
    diameter_m: 370.0,
};

/// Chicxulub impactor (K-Pg boundary)
pub static CHICXULUB: ImpactorPreset = ImpactorPreset {
    id: "chicxulub",
    name: "Chicxulub",
    description: "End-Cretaceous impactor linked to the dinosaur extinction. ~10 km.",
    diameter_m: 10_000.0,
};

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Option<&'static ImpactorPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Preset whose diameter matches the given value, if any.
pub fn preset_for_diameter(diameter_m: f64) -> Option<&'static ImpactorPreset> {
    PRESETS
        .iter()
        .find(|p| (p.diameter_m - diameter_m).abs() < 1e-9)
}

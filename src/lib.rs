//! Impact Estimator - Asteroid Impact Effects
//!
//! A library crate providing closed-form impact estimates (mass, kinetic
//! energy, crater size) and the Bevy plugins that drive them from a
//! diameter control.

pub mod error;
pub mod estimate;
pub mod format;
pub mod impact;
pub mod input;
pub mod presets;
pub mod types;
pub mod ui;

pub use error::EstimateError;
pub use estimate::{estimate, try_estimate, Diameter, ImpactEstimate};
pub use format::ImpactReadout;
pub use impact::{CurrentEstimate, EstimatorPlugin};
pub use types::{DiameterSettings, ImpactConstants};

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_estimate;

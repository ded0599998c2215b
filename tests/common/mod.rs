//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use impact_estimator::input::{DiameterInput, SetDiameter};
use impact_estimator::{CurrentEstimate, EstimatorPlugin, ImpactEstimate, ImpactReadout};

/// Headless app with only the estimator wired in.
pub fn create_estimator_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(EstimatorPlugin);
    app
}

/// Queue a diameter request and run one frame.
pub fn request_diameter(app: &mut App, diameter_m: f64) {
    app.world_mut()
        .resource_mut::<Messages<SetDiameter>>()
        .write(SetDiameter(diameter_m));
    app.update();
}

/// Current diameter held by the input resource.
pub fn diameter(app: &App) -> f64 {
    app.world().resource::<DiameterInput>().diameter_m
}

/// Latest estimate; panics if the startup pass has not run.
pub fn current_estimate(app: &App) -> ImpactEstimate {
    app.world()
        .resource::<CurrentEstimate>()
        .0
        .expect("estimate should exist after the first update")
}

/// Latest formatted readout.
pub fn readout(app: &App) -> ImpactReadout {
    app.world().resource::<ImpactReadout>().clone()
}

/// Compare two floats with a relative tolerance.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let err = ((actual - expected) / expected).abs();
    assert!(
        err < tolerance,
        "expected {expected}, got {actual} (relative error {err})"
    );
}

//! Keeps the current impact estimate in sync with the diameter input.

use bevy::prelude::*;

use crate::estimate::{estimate, ImpactEstimate};
use crate::format::ImpactReadout;
use crate::input::{apply_diameter_requests, DiameterInput, EstimatorSet, SetDiameter};
use crate::types::{DiameterSettings, ImpactConstants};

/// Most recent estimate. `None` until the startup pass has run.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CurrentEstimate(pub Option<ImpactEstimate>);

/// Plugin wiring the estimator into the app.
///
/// Runs headless; the UI and keyboard plugins only feed it [`SetDiameter`]
/// messages and read [`ImpactReadout`].
pub struct EstimatorPlugin;

impl Plugin for EstimatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactConstants>()
            .init_resource::<DiameterSettings>();

        // Start from the configured default unless the app already chose a diameter
        if !app.world().contains_resource::<DiameterInput>() {
            let default_m = app.world().resource::<DiameterSettings>().default_m;
            app.insert_resource(DiameterInput::new(default_m));
        }

        app.init_resource::<CurrentEstimate>()
            .init_resource::<ImpactReadout>()
            .add_message::<SetDiameter>()
            .configure_sets(
                Update,
                (
                    EstimatorSet::Shortcuts,
                    EstimatorSet::ApplyInput,
                    EstimatorSet::Recompute,
                )
                    .chain(),
            )
            // Initial estimate with whatever the control holds at startup
            .add_systems(Startup, refresh_estimate)
            .add_systems(
                Update,
                (
                    apply_diameter_requests.in_set(EstimatorSet::ApplyInput),
                    refresh_estimate.in_set(EstimatorSet::Recompute).run_if(
                        resource_changed::<DiameterInput>
                            .or(resource_changed::<ImpactConstants>),
                    ),
                ),
            );
    }
}

/// Recompute the estimate and its display strings from scratch.
pub fn refresh_estimate(
    constants: Res<ImpactConstants>,
    input: Res<DiameterInput>,
    mut current: ResMut<CurrentEstimate>,
    mut readout: ResMut<ImpactReadout>,
) {
    let est = estimate(input.diameter_m, &constants);
    *readout = ImpactReadout::from_estimate(&est);
    current.0 = Some(est);

    debug!(
        "Estimate for {} m: mass {:.3e} kg, energy {:.3e} J ({:.2} Mt), crater {:.1} m",
        est.diameter_m(),
        est.mass_kg(),
        est.energy_joules(),
        est.energy_megatons_tnt(),
        est.crater_diameter_m()
    );
}

//! UI module providing the egui-based estimator panel.

pub mod icons;
mod panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use panel::estimator_panel;

/// Plugin that adds all UI systems. Requires `EguiPlugin` and `EstimatorPlugin`.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                estimator_panel
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

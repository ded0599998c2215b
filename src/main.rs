//! Impact Estimator - Asteroid Impact Effects
//!
//! A desktop application estimating the mass, impact energy and crater size
//! of an asteroid from its diameter.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use impact_estimator::input::InputPlugin;
use impact_estimator::ui::UiPlugin;
use impact_estimator::EstimatorPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Impact Estimator".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.07)))
        // Estimator first: UI and input read its resources
        .add_plugins((EstimatorPlugin, InputPlugin, UiPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

/// egui renders through a camera; a plain 2D one is enough.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

//! Diameter input boundary.
//!
//! Everything that changes the diameter goes through a [`SetDiameter`]
//! message: the slider, preset picker, keyboard shortcuts and tests.
//! [`apply_diameter_requests`] validates each request before it reaches the
//! [`DiameterInput`] resource the estimator watches.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::estimate::Diameter;
use crate::types::DiameterSettings;

/// System sets for ordering input handling before recomputation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EstimatorSet {
    /// Turn keyboard input into diameter requests
    Shortcuts,
    /// Validate and apply diameter requests
    ApplyInput,
    /// Recompute the estimate and readout
    Recompute,
}

/// Current impactor diameter driving the estimate.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct DiameterInput {
    /// Diameter in meters
    pub diameter_m: f64,
}

impl DiameterInput {
    pub fn new(diameter_m: f64) -> Self {
        Self { diameter_m }
    }
}

impl Default for DiameterInput {
    fn default() -> Self {
        Self::new(DiameterSettings::default().default_m)
    }
}

/// Request to change the impactor diameter (meters).
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SetDiameter(pub f64);

/// Apply pending diameter requests.
///
/// Requests that are not finite or not positive are rejected with a warning
/// and the previous diameter stays in effect. Valid requests are clamped to
/// the configured slider range. Only the last request of a frame wins.
pub fn apply_diameter_requests(
    mut requests: MessageReader<SetDiameter>,
    settings: Res<DiameterSettings>,
    mut input: ResMut<DiameterInput>,
) {
    for SetDiameter(requested) in requests.read().copied() {
        let diameter = match Diameter::new(requested) {
            Ok(d) => d,
            Err(err) => {
                warn!("Ignoring diameter request: {err}");
                continue;
            }
        };

        let clamped = settings.clamp(diameter.meters());
        if clamped != diameter.meters() {
            debug!(
                "Clamped diameter {} m to {} m (range {}..={} m)",
                diameter.meters(),
                clamped,
                settings.min_m,
                settings.max_m
            );
        }

        input.set_if_neq(DiameterInput::new(clamped));
    }
}

/// Diameter requested by the keys pressed this frame, if any.
///
/// - R: reset to the default diameter (wins over the arrows)
/// - Up / Down: scale the current diameter by the nudge factor
///
/// Returns `None` while egui has keyboard focus (e.g. typing into the slider).
pub fn shortcut_request(
    keys: &ButtonInput<KeyCode>,
    settings: &DiameterSettings,
    current_m: f64,
    egui_wants_keyboard: bool,
) -> Option<f64> {
    if egui_wants_keyboard {
        return None;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        Some(settings.default_m)
    } else if keys.just_pressed(KeyCode::ArrowUp) {
        Some(current_m * settings.nudge_factor)
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        Some(current_m / settings.nudge_factor)
    } else {
        None
    }
}

/// Keyboard shortcuts for the diameter. See [`shortcut_request`].
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    settings: Res<DiameterSettings>,
    input: Res<DiameterInput>,
    mut requests: MessageWriter<SetDiameter>,
) {
    let egui_wants_keyboard = contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_keyboard_input());

    if let Some(diameter_m) =
        shortcut_request(&keys, &settings, input.diameter_m, egui_wants_keyboard)
    {
        debug!("Keyboard diameter request: {diameter_m} m");
        requests.write(SetDiameter(diameter_m));
    }
}

/// Plugin providing keyboard shortcuts. Requires `EguiPlugin`.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_shortcuts.in_set(EstimatorSet::Shortcuts),
        );
    }
}

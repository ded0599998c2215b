//! Estimator side panel: diameter control and result readouts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::format::ImpactReadout;
use crate::input::{DiameterInput, SetDiameter};
use crate::presets::{preset_for_diameter, PRESETS};
use crate::types::DiameterSettings;

use super::icons;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const LABEL: Color32 = Color32::from_rgb(150, 150, 165);
    pub const VALUE: Color32 = Color32::from_rgb(220, 220, 230);
    pub const ACCENT: Color32 = Color32::from_rgb(221, 170, 85);
}

/// System that renders the estimator panel.
pub fn estimator_panel(
    mut contexts: EguiContexts,
    settings: Res<DiameterSettings>,
    input: Res<DiameterInput>,
    readout: Res<ImpactReadout>,
    mut requests: MessageWriter<SetDiameter>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("estimator_panel")
        .resizable(false)
        .default_width(300.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(icons::IMPACTOR, 22.0, colors::ACCENT));
                ui.heading("Impact Estimator");
            });

            ui.separator();
            ui.add_space(8.0);

            render_diameter_control(ui, &settings, input.diameter_m, &mut requests);

            ui.add_space(8.0);

            render_preset_picker(ui, input.diameter_m, &mut requests);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            render_readout(ui, &readout);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} ρ, v and scaling constants are fixed. Up/Down to nudge, R to reset.",
                        icons::INFO
                    ))
                    .size(11.0)
                    .color(colors::LABEL),
                );
            });
        });
}

/// Logarithmic diameter slider plus reset button.
fn render_diameter_control(
    ui: &mut egui::Ui,
    settings: &DiameterSettings,
    diameter_m: f64,
    requests: &mut MessageWriter<SetDiameter>,
) {
    ui.label(egui::RichText::new("Asteroid diameter").color(colors::LABEL));

    ui.horizontal(|ui| {
        let mut value = diameter_m;
        let slider = egui::Slider::new(&mut value, settings.min_m..=settings.max_m)
            .logarithmic(settings.logarithmic)
            .suffix(" m")
            .max_decimals(1);

        if ui.add(slider).changed() {
            requests.write(SetDiameter(value));
        }

        if ui
            .button(icons::RESET)
            .on_hover_text(format!("Reset to {} m (R)", settings.default_m))
            .clicked()
        {
            requests.write(SetDiameter(settings.default_m));
        }
    });
}

/// Combo box of reference impactors.
fn render_preset_picker(
    ui: &mut egui::Ui,
    diameter_m: f64,
    requests: &mut MessageWriter<SetDiameter>,
) {
    let selected = preset_for_diameter(diameter_m);
    let selected_text = selected.map_or("Custom", |p| p.name);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Reference:").color(colors::LABEL));
        egui::ComboBox::from_id_salt("impactor_preset")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for preset in PRESETS {
                    let is_selected = selected.is_some_and(|s| s.id == preset.id);
                    if ui
                        .selectable_label(is_selected, preset.name)
                        .on_hover_text(preset.description)
                        .clicked()
                    {
                        requests.write(SetDiameter(preset.diameter_m));
                    }
                }
            });
    });
}

/// The three result surfaces.
fn render_readout(ui: &mut egui::Ui, readout: &ImpactReadout) {
    egui::Grid::new("impact_readout")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            readout_row(ui, icons::IMPACTOR, "Diameter", &readout.diameter);
            readout_row(ui, icons::MASS, "Mass", &readout.mass);
            readout_row(ui, icons::ENERGY, "Energy", &readout.energy);
            readout_row(ui, icons::CRATER, "Crater", &readout.crater);
        });
}

fn readout_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    ui.label(egui::RichText::new(format!("{icon} {label}")).color(colors::LABEL));
    ui.label(
        egui::RichText::new(value)
            .monospace()
            .size(15.0)
            .color(colors::VALUE),
    );
    ui.end_row();
}

//! Control panel overlay using bevy_egui

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::types::{CameraSettings, PlaneVisibility, PlaybackState, ViewerLayout, WorldSettings};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, control_panel);
    }
}

fn control_panel(
    mut contexts: EguiContexts,
    time: Res<Time>,
    layout: Res<ViewerLayout>,
    mut playback: ResMut<PlaybackState>,
    mut plane_visibility: ResMut<PlaneVisibility>,
    mut world_settings: ResMut<WorldSettings>,
    mut camera_settings: ResMut<CameraSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    egui::SidePanel::left("control_panel")
        .default_width(layout.panel_width())
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Somascope");
            ui.label(
                egui::RichText::new("Anatomical orientation aid")
                    .small()
                    .color(egui::Color32::GRAY),
            );
            ui.separator();

            ui.label("Animation");
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    playback.0.play(time.elapsed_secs_f64());
                    tracing::info!("animation playing");
                }
                if ui.button("⏹ Stop").clicked() {
                    playback.0.stop();
                    tracing::info!("animation stopped, figure at rest");
                }
            });
            let state = if playback.0.is_playing() {
                "Playing"
            } else {
                "Stopped"
            };
            ui.label(
                egui::RichText::new(state)
                    .small()
                    .color(egui::Color32::GRAY),
            );

            ui.separator();

            ui.label("Reference geometry");
            ui.checkbox(&mut plane_visibility.0, "Section Planes");
            ui.checkbox(&mut world_settings.show_grid, "Show Grid");
            ui.checkbox(&mut world_settings.show_axis, "Show World Axis");
            ui.checkbox(&mut world_settings.show_labels, "Show Landmarks");

            ui.separator();

            if ui.button("Reset View").clicked() {
                camera_settings.target_focus = Vec3::ZERO;
                camera_settings.target_distance = 600.0;
                camera_settings.azimuth = std::f32::consts::FRAC_PI_4;
                camera_settings.elevation = 0.34;
            }
        });
}

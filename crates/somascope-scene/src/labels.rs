//! Landmark labels drawn as screen-space overlays
//!
//! Bevy has no world-space text billboard, so each anchor is projected
//! to the viewport every frame and its label painted through egui. The
//! effect matches a depth-test-free billboard: always facing the
//! camera, never occluded by scene geometry.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use somascope_core::anatomy;

use crate::types::{LandmarkAnchor, MainCamera, WorldSettings};

pub struct LabelsPlugin;

impl Plugin for LabelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_landmarks)
            .add_systems(EguiPrimaryContextPass, draw_landmark_labels);
    }
}

fn spawn_landmarks(mut commands: Commands) {
    for landmark in anatomy::LANDMARKS {
        commands.spawn((
            LandmarkAnchor {
                text: landmark.label,
            },
            Transform::from_translation(Vec3::from_array(landmark.position)),
        ));
    }
}

fn draw_landmark_labels(
    mut contexts: EguiContexts,
    world_settings: Res<WorldSettings>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    anchors: Query<(&LandmarkAnchor, &GlobalTransform)>,
) {
    if !world_settings.show_labels {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (anchor, transform) in anchors.iter() {
        // Anchors behind the camera fail projection and are skipped.
        let Ok(pos) = camera.world_to_viewport(camera_transform, transform.translation()) else {
            continue;
        };

        egui::Area::new(egui::Id::new(anchor.text))
            .fixed_pos(egui::pos2(pos.x, pos.y))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(anchor.text)
                        .size(13.0)
                        .color(egui::Color32::from_rgb(255, 238, 136)),
                );
            });
    }
}

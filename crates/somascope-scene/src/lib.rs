//! Somascope Scene - shared 3D rendering and UI components
//!
//! This crate provides the 3D visualization used by the viewer binary:
//! static reference geometry (grid, world axes, section planes), the
//! animated head/torso proxy, landmark labels, the orbit camera rig,
//! and the egui control panel.

pub mod camera;
pub mod figure;
pub mod labels;
pub mod scene;
pub mod types;
pub mod ui;
pub mod viewport;

use bevy::prelude::*;

/// Plugin that sets up the full Somascope scene
pub struct SomascopeScenePlugin;

impl Plugin for SomascopeScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::CameraRigPlugin)
            .add_plugins(scene::SceneSetupPlugin)
            .add_plugins(figure::FigurePlugin)
            .add_plugins(labels::LabelsPlugin)
            .add_plugins(viewport::ViewportPlugin)
            .add_plugins(ui::UiPlugin);
    }
}

// Re-export commonly used types
pub use types::*;

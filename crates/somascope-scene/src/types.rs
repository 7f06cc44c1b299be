//! Shared resources and marker components for the scene

use bevy::prelude::*;
use somascope_core::{Playback, SectionPlane};

/// Animation playback state shared between the UI and the figure driver.
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct PlaybackState(pub Playback);

/// Visibility of the three anatomical section planes. One flag drives
/// all three; no partial state is reachable.
#[derive(Debug, Clone, Copy, Resource)]
pub struct PlaneVisibility(pub bool);

impl Default for PlaneVisibility {
    fn default() -> Self {
        Self(true)
    }
}

/// World visualization settings.
#[derive(Debug, Clone, Resource)]
pub struct WorldSettings {
    pub show_grid: bool,
    pub show_axis: bool,
    pub show_labels: bool,
    pub grid_spacing: f32,
    pub grid_line_thickness: f32,
    pub grid_alpha: f32,
    pub plane_alpha: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axis: true,
            show_labels: true,
            grid_spacing: 50.0,
            grid_line_thickness: 0.5,
            grid_alpha: 0.25,
            plane_alpha: 0.18,
        }
    }
}

/// Camera controller settings
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32, // For smooth zoom
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub target_focus: Vec3, // For smooth re-centering
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 600.0,
            target_distance: 600.0,
            azimuth: std::f32::consts::FRAC_PI_4,
            elevation: 0.34,
            target: Vec3::ZERO,
            target_focus: Vec3::ZERO,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }
}

/// Window extent tracking for responsive UI layout.
#[derive(Debug, Clone, Resource)]
pub struct ViewerLayout {
    pub width: f32,
    pub height: f32,
    pub is_compact: bool,
}

impl Default for ViewerLayout {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            is_compact: false,
        }
    }
}

impl ViewerLayout {
    pub fn update_from_window(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.is_compact = width < 800.0;
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn panel_width(&self) -> f32 {
        if self.is_compact {
            160.0
        } else {
            220.0
        }
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for grid lines
#[derive(Component)]
pub struct GridLine;

/// Marker for world axis geometry (the center X, Y, Z axes)
#[derive(Component)]
pub struct WorldAxis;

/// Marker for an anatomical section plane
#[derive(Component)]
pub struct ReferencePlane(pub SectionPlane);

/// Marker for the head proxy sphere
#[derive(Component)]
pub struct HeadProxy;

/// Marker for the torso proxy frustum
#[derive(Component)]
pub struct TorsoProxy;

/// A labeled landmark anchor; the label text is drawn screen-space at
/// the anchor's projected position.
#[derive(Component)]
pub struct LandmarkAnchor {
    pub text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_aspect_follows_resize() {
        let mut layout = ViewerLayout::default();
        layout.update_from_window(1920.0, 1080.0);
        assert_eq!(layout.width, 1920.0);
        assert_eq!(layout.height, 1080.0);
        assert!((layout.aspect() - 1920.0 / 1080.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_layout_compact_breakpoint() {
        let mut layout = ViewerLayout::default();
        layout.update_from_window(640.0, 480.0);
        assert!(layout.is_compact);
        layout.update_from_window(1024.0, 768.0);
        assert!(!layout.is_compact);
    }
}

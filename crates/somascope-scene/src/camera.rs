//! Orbit camera rig

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::types::{CameraSettings, MainCamera};

/// Plugin for camera spawn and orbit controls
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, update_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    // Z-up view from the right-anterior-superior octant, looking at the
    // glabella origin.
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 1.0,
            far: 5000.0,
            ..default()
        }),
        Transform::from_xyz(400.0, 400.0, 200.0).looking_at(Vec3::ZERO, Vec3::Z),
        MainCamera,
    ));
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut contexts: bevy_egui::EguiContexts,
) {
    // Don't move the camera while egui owns the pointer.
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    // Orbit with left mouse drag
    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.azimuth -= total_motion.x * settings.sensitivity;
        settings.elevation =
            (settings.elevation - total_motion.y * settings.sensitivity).clamp(-1.5, 1.5);
    }

    // Pan with right mouse drag (vertical plane: camera-right and up)
    if mouse_button.pressed(MouseButton::Right) && !egui_wants_pointer {
        let right = Vec3::new(settings.azimuth.sin(), -settings.azimuth.cos(), 0.0);
        let up = Vec3::Z;
        let pan_speed = settings.distance * 0.002;
        settings.target_focus += right * total_motion.x * pan_speed;
        settings.target_focus += up * total_motion.y * pan_speed;
    }

    // Zoom with scroll - smooth zoom using target_distance
    if !egui_wants_pointer {
        for scroll in mouse_wheel.read() {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.target_distance = (settings.target_distance * zoom_factor).clamp(50.0, 3000.0);
        }
    } else {
        // Drain the scroll events even if we're not using them
        for _ in mouse_wheel.read() {}
    }

    // Smooth interpolation for zoom and target
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance += (settings.target_distance - settings.distance) * lerp_factor;
    settings.target = settings.target + (settings.target_focus - settings.target) * lerp_factor;

    // Spherical coordinates with Z-up
    if let Ok(mut transform) = camera_query.single_mut() {
        let x = settings.distance * settings.azimuth.cos() * settings.elevation.cos();
        let y = settings.distance * settings.azimuth.sin() * settings.elevation.cos();
        let z = settings.distance * settings.elevation.sin();

        transform.translation = settings.target + Vec3::new(x, y, z);
        transform.look_at(settings.target, Vec3::Z);
    }
}

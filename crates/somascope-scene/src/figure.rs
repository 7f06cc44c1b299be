//! Head/torso proxy bodies and the animation driver

use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;
use somascope_core::{anatomy, animation, FigurePose, Playback};

use crate::types::{HeadProxy, PlaybackState, TorsoProxy};

/// Rest orientation standing the Y-aligned frustum along +Z.
const TORSO_UPRIGHT: Quat = Quat::from_xyzw(std::f32::consts::FRAC_1_SQRT_2, 0.0, 0.0, std::f32::consts::FRAC_1_SQRT_2);

/// Plugin for the stylized figure and its looping animation
pub struct FigurePlugin;

impl Plugin for FigurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaybackState>()
            .add_systems(Startup, spawn_figure)
            .add_systems(Update, drive_figure);
    }
}

fn spawn_figure(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let (head_transform, torso_transform) = figure_transforms(&animation::rest_pose());

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(anatomy::HEAD_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.8, 0.67, 0.95),
            metallic: 0.1,
            perceptual_roughness: 0.8,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        head_transform,
        HeadProxy,
    ));

    commands.spawn((
        Mesh3d(meshes.add(ConicalFrustum {
            radius_top: anatomy::TORSO_RADIUS_TOP,
            radius_bottom: anatomy::TORSO_RADIUS_BOTTOM,
            height: anatomy::TORSO_HEIGHT,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.53, 0.67, 0.93, 0.9),
            metallic: 0.1,
            perceptual_roughness: 0.8,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        torso_transform,
        TorsoProxy,
    ));
}

/// Transforms realizing a computed pose. The twist composes on top of
/// the upright rest orientation, about the world +Z axis.
fn figure_transforms(pose: &FigurePose) -> (Transform, Transform) {
    let head = Transform::from_translation(Vec3::from_array(pose.head_position));
    let torso = Transform::from_translation(Vec3::from_array(pose.torso_position))
        .with_rotation(Quat::from_rotation_z(pose.torso_twist) * TORSO_UPRIGHT);
    (head, torso)
}

/// Advance the looping pose while playing; restore the rest pose on the
/// frame playback stops.
fn drive_figure(
    playback: Res<PlaybackState>,
    time: Res<Time>,
    mut heads: Query<&mut Transform, With<HeadProxy>>,
    mut torsos: Query<&mut Transform, (With<TorsoProxy>, Without<HeadProxy>)>,
) {
    let pose = match playback.0 {
        Playback::Playing { .. } => playback.0.pose(time.elapsed_secs_f64()),
        Playback::Stopped => {
            if !playback.is_changed() {
                return;
            }
            animation::rest_pose()
        }
    };

    let (head_transform, torso_transform) = figure_transforms(&pose);
    for mut transform in heads.iter_mut() {
        *transform = head_transform;
    }
    for mut transform in torsos.iter_mut() {
        *transform = torso_transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torso_upright_stands_along_z() {
        // The frustum's local +Y axis must map to world +Z.
        let up = TORSO_UPRIGHT * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_rest_transforms_match_catalog() {
        let (head, torso) = figure_transforms(&animation::rest_pose());
        assert_eq!(head.translation, Vec3::from_array(anatomy::HEAD_REST));
        assert_eq!(head.rotation, Quat::IDENTITY);
        assert_eq!(torso.translation, Vec3::from_array(anatomy::TORSO_REST));
        assert_eq!(torso.rotation, TORSO_UPRIGHT);
    }

    #[test]
    fn test_twist_is_about_world_z() {
        let pose = FigurePose {
            head_position: anatomy::HEAD_REST,
            torso_position: anatomy::TORSO_REST,
            torso_twist: 0.05,
        };
        let (_, torso) = figure_transforms(&pose);
        // The frustum axis is unchanged by the twist.
        let up = torso.rotation * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_drive_figure_at_quarter_phase() {
        let mut app = App::new();
        app.init_resource::<Time>();
        // Epoch 1.5s behind the (zero) clock puts the loop at peak lift.
        app.insert_resource(PlaybackState(Playback::Playing { epoch: -1.5 }));
        app.add_systems(Update, drive_figure);

        let head = app
            .world_mut()
            .spawn((Transform::default(), HeadProxy))
            .id();
        let torso = app
            .world_mut()
            .spawn((Transform::default(), TorsoProxy))
            .id();
        app.update();

        let head_z = app.world().entity(head).get::<Transform>().unwrap().translation.z;
        assert!((head_z - (anatomy::HEAD_REST[2] + animation::HEAD_LIFT_AMPLITUDE)).abs() < 1e-3);
        let torso_rot = app.world().entity(torso).get::<Transform>().unwrap().rotation;
        let expected = Quat::from_rotation_z(animation::TORSO_TWIST_AMPLITUDE) * TORSO_UPRIGHT;
        assert!(torso_rot.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_stop_restores_rest_pose() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(PlaybackState(Playback::Stopped));
        app.add_systems(Update, drive_figure);

        // Spawn displaced, as if mid-animation.
        let head = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 30.0, 110.0), HeadProxy))
            .id();
        app.update();

        let (rest_head, _) = figure_transforms(&animation::rest_pose());
        let head_transform = *app.world().entity(head).get::<Transform>().unwrap();
        assert_eq!(head_transform.translation, rest_head.translation);

        // A later frame with no state change leaves the pose untouched.
        app.world_mut().entity_mut(head).insert(Transform::from_xyz(1.0, 2.0, 3.0));
        app.update();
        let head_transform = *app.world().entity(head).get::<Transform>().unwrap();
        assert_eq!(head_transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }
}

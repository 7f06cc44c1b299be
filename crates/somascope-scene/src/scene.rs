//! Scene setup - lights, grid, world axes, and section planes

use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;
use somascope_core::SectionPlane;

use crate::types::{GridLine, PlaneVisibility, ReferencePlane, WorldAxis, WorldSettings};

/// Plugin for static scene setup and visibility toggles
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldSettings>()
            .init_resource::<PlaneVisibility>()
            .add_systems(Startup, setup_scene)
            .add_systems(Update, (update_plane_visibility, update_world_visibility));
    }
}

/// Orientation taking the default plane mesh (normal +Y, spanning XZ)
/// to the given anatomical plane in the Z-up world.
fn plane_orientation(plane: SectionPlane) -> Quat {
    match plane {
        // Normal stays +Y (anterior), rectangle spans right x superior.
        SectionPlane::Coronal => Quat::IDENTITY,
        // Normal +Y -> +X, rectangle spans anterior x superior.
        SectionPlane::Sagittal => Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2),
        // Normal +Y -> +Z, rectangle spans right x anterior.
        SectionPlane::Transverse => Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    world_settings: Res<WorldSettings>,
    plane_visibility: Res<PlaneVisibility>,
) {
    // Ambient light, soft fill
    commands.insert_resource(AmbientLight {
        color: Color::srgb(1.0, 1.0, 1.0),
        brightness: 300.0,
        ..default()
    });

    // Directional key light from above-anterior
    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(200.0, 100.0, 400.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    // Translucent ground grid on the X-Y plane
    let grid_size = 8;
    let grid_spacing = world_settings.grid_spacing;
    let grid_extent = (grid_size as f32) * grid_spacing;
    let thickness = world_settings.grid_line_thickness;

    let grid_visibility = if world_settings.show_grid {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    let line_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.3, 0.3, 0.3, world_settings.grid_alpha),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    // Lines along X (right)
    let line_mesh_x = meshes.add(Cuboid::new(grid_extent * 2.0, thickness, thickness));
    // Lines along Y (anterior)
    let line_mesh_y = meshes.add(Cuboid::new(thickness, grid_extent * 2.0, thickness));

    for i in -grid_size..=grid_size {
        let y = i as f32 * grid_spacing;
        commands.spawn((
            Mesh3d(line_mesh_x.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_translation(Vec3::new(0.0, y, 0.0)),
            GridLine,
            grid_visibility,
        ));
    }

    for i in -grid_size..=grid_size {
        let x = i as f32 * grid_spacing;
        commands.spawn((
            Mesh3d(line_mesh_y.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
            GridLine,
            grid_visibility,
        ));
    }

    // World axis parameters
    let axis_length = 200.0;
    let axis_thickness = 1.5;
    let cone_height = axis_thickness * 4.0;
    let cone_radius = axis_thickness * 2.5;
    // Small lift keeps the X/Y shafts from z-fighting the grid.
    let axis_lift = 0.5;

    let axis_visibility = if world_settings.show_axis {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    // X axis (red, right) - cylinder + cone
    let x_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.2, 0.2),
        unlit: true,
        ..default()
    });
    // Cylinder along X: rotate -90 around Z to turn Y-aligned cylinder into X-aligned
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(axis_thickness, axis_length))),
        MeshMaterial3d(x_material.clone()),
        Transform::from_translation(Vec3::new(axis_length / 2.0, 0.0, axis_lift))
            .with_rotation(Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2)),
        WorldAxis,
        axis_visibility,
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cone::new(cone_radius, cone_height))),
        MeshMaterial3d(x_material),
        Transform::from_translation(Vec3::new(axis_length + cone_height / 2.0, 0.0, axis_lift))
            .with_rotation(Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2)),
        WorldAxis,
        axis_visibility,
    ));

    // Y axis (green, anterior) - cylinder + cone
    let y_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.9, 0.2),
        unlit: true,
        ..default()
    });
    // Cylinder along Y: no rotation needed, cylinder is Y-aligned by default
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(axis_thickness, axis_length))),
        MeshMaterial3d(y_material.clone()),
        Transform::from_translation(Vec3::new(0.0, axis_length / 2.0, axis_lift)),
        WorldAxis,
        axis_visibility,
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cone::new(cone_radius, cone_height))),
        MeshMaterial3d(y_material),
        Transform::from_translation(Vec3::new(0.0, axis_length + cone_height / 2.0, axis_lift)),
        WorldAxis,
        axis_visibility,
    ));

    // Z axis (blue, superior) - cylinder + cone
    let z_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.9),
        unlit: true,
        ..default()
    });
    // Cylinder along Z: rotate +90 around X to turn Y-aligned cylinder into Z-aligned
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(axis_thickness, axis_length))),
        MeshMaterial3d(z_material.clone()),
        Transform::from_translation(Vec3::new(0.0, 0.0, axis_length / 2.0))
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        WorldAxis,
        axis_visibility,
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cone::new(cone_radius, cone_height))),
        MeshMaterial3d(z_material),
        Transform::from_translation(Vec3::new(0.0, 0.0, axis_length + cone_height / 2.0))
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        WorldAxis,
        axis_visibility,
    ));

    // Section planes: one material definition, cloned per plane so each
    // could vary independently later.
    let plane_material = StandardMaterial {
        base_color: Color::srgba(0.0, 0.4, 1.0, world_settings.plane_alpha),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    };

    let plane_visibility = if plane_visibility.0 {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    for plane in SectionPlane::ALL {
        let [w, h] = plane.extent();
        commands.spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(w, h))),
            MeshMaterial3d(materials.add(plane_material.clone())),
            Transform::from_rotation(plane_orientation(plane)),
            ReferencePlane(plane),
            plane_visibility,
        ));
    }
}

/// Apply the shared section-plane flag to all three planes.
fn update_plane_visibility(
    plane_visibility: Res<PlaneVisibility>,
    mut planes: Query<&mut Visibility, With<ReferencePlane>>,
) {
    if !plane_visibility.is_changed() {
        return;
    }

    let visibility = if plane_visibility.0 {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    for mut vis in planes.iter_mut() {
        *vis = visibility;
    }
}

/// Update visibility of the grid and world axes based on settings
fn update_world_visibility(
    world_settings: Res<WorldSettings>,
    mut grid_query: Query<&mut Visibility, (With<GridLine>, Without<WorldAxis>)>,
    mut axis_query: Query<&mut Visibility, With<WorldAxis>>,
) {
    if !world_settings.is_changed() {
        return;
    }

    let grid_visibility = if world_settings.show_grid {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    for mut visibility in grid_query.iter_mut() {
        *visibility = grid_visibility;
    }

    let axis_visibility = if world_settings.show_axis {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    for mut visibility in axis_query.iter_mut() {
        *visibility = axis_visibility;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_orientation_matches_normal() {
        for plane in SectionPlane::ALL {
            let rotated = plane_orientation(plane) * Vec3::Y;
            let normal = Vec3::from_array(plane.normal());
            assert!(
                rotated.abs_diff_eq(normal, 1e-6),
                "{} normal mismatch: {rotated:?}",
                plane.label()
            );
        }
    }

    #[test]
    fn test_plane_toggle_drives_all_three() {
        let mut app = App::new();
        app.insert_resource(PlaneVisibility(true));
        app.add_systems(Update, update_plane_visibility);

        let planes: Vec<Entity> = SectionPlane::ALL
            .into_iter()
            .map(|plane| {
                app.world_mut()
                    .spawn((ReferencePlane(plane), Visibility::Visible))
                    .id()
            })
            .collect();
        app.update();

        app.world_mut().resource_mut::<PlaneVisibility>().0 = false;
        app.update();
        for entity in &planes {
            assert_eq!(
                *app.world().entity(*entity).get::<Visibility>().unwrap(),
                Visibility::Hidden
            );
        }

        app.world_mut().resource_mut::<PlaneVisibility>().0 = true;
        app.update();
        for entity in &planes {
            assert_eq!(
                *app.world().entity(*entity).get::<Visibility>().unwrap(),
                Visibility::Visible
            );
        }
    }
}

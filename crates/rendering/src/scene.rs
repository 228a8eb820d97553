//! Demo scene: ground, landmark blocks, the vehicle body, and lighting.
//!
//! The landmarks ring the spawn point so every camera, mirrors included,
//! has something recognizable in frame from the first moment.

use bevy::prelude::*;

use vehicle::config::GROUND_HALF_EXTENT;
use vehicle::motion::VehicleMotion;

use crate::camera_rig::RigRoot;

/// Number of landmark blocks ringed around the spawn point.
const LANDMARK_COUNT: usize = 12;
/// Radius of the landmark ring.
const LANDMARK_RADIUS: f32 = 60.0;

pub fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.95, 0.95, 1.0),
        brightness: 250.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}

pub fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Sky-colored clear for every camera that renders to the window.
    commands.insert_resource(ClearColor(Color::srgb(0.53, 0.75, 0.92)));

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(GROUND_HALF_EXTENT * 2.0, GROUND_HALF_EXTENT * 2.0),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.38, 0.35),
            perceptual_roughness: 1.0,
            ..default()
        })),
    ));

    // Landmark ring, heights and hues staggered so each view is distinct
    let block = meshes.add(Cuboid::new(4.0, 1.0, 4.0));
    for i in 0..LANDMARK_COUNT {
        let angle = i as f32 / LANDMARK_COUNT as f32 * std::f32::consts::TAU;
        let height = 3.0 + (i % 4) as f32 * 2.5;
        commands.spawn((
            Mesh3d(block.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(i as f32 * 30.0, 0.55, 0.5),
                ..default()
            })),
            Transform::from_xyz(
                angle.cos() * LANDMARK_RADIUS,
                height / 2.0,
                angle.sin() * LANDMARK_RADIUS,
            )
            .with_scale(Vec3::new(1.0, height, 1.0)),
        ));
    }

    // Vehicle: a two-box body under the rig root. The rig cameras are
    // attached to this root by `setup_camera_rig`.
    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.15, 0.15),
        perceptual_roughness: 0.4,
        ..default()
    });
    let cabin_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.25),
        perceptual_roughness: 0.3,
        ..default()
    });
    commands
        .spawn((
            Name::new("Vehicle"),
            RigRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.2, 1.0, 4.5))),
                MeshMaterial3d(body_material),
                Transform::from_xyz(0.0, 0.6, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.9, 0.7, 2.0))),
                MeshMaterial3d(cabin_material),
                Transform::from_xyz(0.0, 1.45, 0.4),
            ));
        });
}

/// System: copy the driving state onto the vehicle root each frame the state
/// changes. The rig cameras follow through the transform hierarchy.
pub fn apply_vehicle_motion(
    motion: Res<VehicleMotion>,
    mut roots: Query<&mut Transform, With<RigRoot>>,
) {
    if !motion.is_changed() {
        return;
    }
    let Ok(mut transform) = roots.get_single_mut() else {
        return;
    };
    transform.translation = motion.position;
    transform.rotation = motion.rotation();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_vehicle_motion_moves_the_root() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(VehicleMotion {
            position: Vec3::new(3.0, 0.0, -7.0),
            heading: 1.2,
            speed: 0.0,
        });
        app.add_systems(Update, apply_vehicle_motion);
        let root = app
            .world_mut()
            .spawn((RigRoot, Transform::default(), Visibility::default()))
            .id();
        app.update();

        let transform = app.world().get::<Transform>(root).unwrap();
        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, -7.0));
        assert!(transform
            .rotation
            .abs_diff_eq(Quat::from_rotation_y(1.2), 1e-5));
    }
}

//! Camera rig construction.
//!
//! Resolves or creates the six rig cameras as children of the vehicle root:
//! three primary views (driver seat, rear, top) of which exactly one is
//! active, and three mirror feed cameras that render offscreen. Pre-authored
//! children are adopted by name so a scene can ship its own tuned cameras;
//! anything missing is created at the default mount pose.

use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;

use vehicle::config::CAMERA_FOV_DEGREES;
use vehicle::view_state::{ActiveView, CameraView, MirrorFeed};

/// Marker for the vehicle root entity the rig cameras hang off.
#[derive(Component)]
pub struct RigRoot;

/// One of the three exclusive main-view cameras.
#[derive(Component)]
pub struct PrimaryCamera(pub CameraView);

/// One of the three offscreen mirror feed cameras.
#[derive(Component)]
pub struct MirrorCamera(pub MirrorFeed);

/// Mirror cameras render before the window cameras.
const MIRROR_CAMERA_ORDER: isize = -1;

/// Startup system: build the rig under the [`RigRoot`] entity.
///
/// The primary camera matching [`ActiveView`] (driver seat by default) starts
/// active; every other camera starts inactive. Mirror cameras get their
/// render targets bound afterwards by `mirror_feeds::bind_mirror_feeds`.
pub fn setup_camera_rig(
    mut commands: Commands,
    active: Res<ActiveView>,
    roots: Query<(Entity, Option<&Children>), With<RigRoot>>,
    names: Query<&Name>,
    mut cameras: Query<&mut Camera>,
) {
    let Ok((root, children)) = roots.get_single() else {
        warn!("no vehicle root in the world, skipping camera rig setup");
        return;
    };

    for &view in CameraView::ALL {
        let is_active = view == active.0;
        match resolve_child_camera(children, &names, &cameras, view.node_name()) {
            Some(existing) => {
                commands.entity(existing).insert(PrimaryCamera(view));
                if let Ok(mut camera) = cameras.get_mut(existing) {
                    camera.is_active = is_active;
                }
            }
            None => {
                spawn_rig_camera(
                    &mut commands,
                    root,
                    view.node_name(),
                    view.mount(),
                    Camera {
                        is_active,
                        ..default()
                    },
                )
                .insert(PrimaryCamera(view));
            }
        }
    }

    for &feed in MirrorFeed::ALL {
        match resolve_child_camera(children, &names, &cameras, feed.node_name()) {
            Some(existing) => {
                commands.entity(existing).insert(MirrorCamera(feed));
                if let Ok(mut camera) = cameras.get_mut(existing) {
                    camera.is_active = false;
                }
            }
            None => {
                spawn_rig_camera(
                    &mut commands,
                    root,
                    feed.node_name(),
                    feed.mount(),
                    Camera {
                        is_active: false,
                        order: MIRROR_CAMERA_ORDER,
                        ..default()
                    },
                )
                .insert(MirrorCamera(feed));
            }
        }
    }
}

/// Find a child of the rig root that carries the given name *and* a camera.
/// A named child without a camera does not count, matching the original
/// find-then-get-component contract.
fn resolve_child_camera(
    children: Option<&Children>,
    names: &Query<&Name>,
    cameras: &Query<&mut Camera>,
    name: &str,
) -> Option<Entity> {
    children?.iter().copied().find(|&child| {
        names.get(child).is_ok_and(|n| n.as_str() == name) && cameras.contains(child)
    })
}

fn spawn_rig_camera<'a>(
    commands: &'a mut Commands,
    root: Entity,
    name: &'static str,
    (translation, rotation): (Vec3, Quat),
    camera: Camera,
) -> EntityCommands<'a> {
    let mut entity = commands.spawn((
        Name::new(name),
        Camera3d::default(),
        camera,
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(translation).with_rotation(rotation),
    ));
    entity.set_parent(root);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ActiveView>();
        app.add_systems(Startup, setup_camera_rig);
        app
    }

    fn spawn_root(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Name::new("Vehicle"),
                RigRoot,
                Transform::default(),
                Visibility::default(),
            ))
            .id()
    }

    #[test]
    fn test_rig_creates_six_cameras_driver_seat_active() {
        let mut app = rig_app();
        let root = spawn_root(&mut app);
        app.update();

        let world = app.world_mut();
        let mut primaries = world.query::<(&PrimaryCamera, &Camera, &Parent)>();
        let mut seen = Vec::new();
        for (primary, camera, parent) in primaries.iter(world) {
            assert_eq!(parent.get(), root);
            assert_eq!(camera.is_active, primary.0 == CameraView::DriverSeat);
            seen.push(primary.0);
        }
        assert_eq!(seen.len(), 3);

        let mut mirrors = world.query::<(&MirrorCamera, &Camera, &Parent)>();
        let mut feeds = Vec::new();
        for (mirror, camera, parent) in mirrors.iter(world) {
            assert_eq!(parent.get(), root);
            assert!(!camera.is_active, "mirror cameras start inactive");
            feeds.push(mirror.0);
        }
        assert_eq!(feeds.len(), 3);
    }

    #[test]
    fn test_created_cameras_use_default_fov() {
        let mut app = rig_app();
        spawn_root(&mut app);
        app.update();

        let world = app.world_mut();
        let mut query = world.query_filtered::<&Projection, With<PrimaryCamera>>();
        for projection in query.iter(world) {
            let Projection::Perspective(perspective) = projection else {
                panic!("rig cameras are perspective");
            };
            assert!((perspective.fov - CAMERA_FOV_DEGREES.to_radians()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pre_authored_camera_is_adopted_not_duplicated() {
        let mut app = rig_app();
        let root = spawn_root(&mut app);
        let authored_transform = Transform::from_xyz(0.5, 2.0, -1.0);
        let authored = app
            .world_mut()
            .spawn((
                Name::new(CameraView::RearView.node_name()),
                Camera3d::default(),
                authored_transform,
            ))
            .set_parent(root)
            .id();
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(Entity, &PrimaryCamera, &Transform)>();
        let rear: Vec<_> = query
            .iter(world)
            .filter(|(_, p, _)| p.0 == CameraView::RearView)
            .collect();
        assert_eq!(rear.len(), 1, "adoption must not duplicate the camera");
        assert_eq!(rear[0].0, authored);
        assert_eq!(
            rear[0].2.translation,
            authored_transform.translation,
            "an adopted camera keeps its authored pose"
        );
    }

    #[test]
    fn test_named_child_without_camera_is_ignored() {
        let mut app = rig_app();
        let root = spawn_root(&mut app);
        let decoy = app
            .world_mut()
            .spawn((Name::new(CameraView::TopView.node_name()), Transform::default()))
            .set_parent(root)
            .id();
        app.update();

        let world = app.world_mut();
        assert!(world.get::<PrimaryCamera>(decoy).is_none());
        let mut query = world.query::<&PrimaryCamera>();
        assert_eq!(
            query.iter(world).count(),
            3,
            "a fresh top-view camera was created instead"
        );
    }

    #[test]
    fn test_missing_root_skips_rig_setup() {
        let mut app = rig_app();
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<&Camera>();
        assert_eq!(query.iter(world).count(), 0);
    }
}

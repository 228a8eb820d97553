use bevy::prelude::*;

pub mod camera_rig;
pub mod mirror_feeds;
pub mod scene;
pub mod view_switch;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                scene::setup_lighting,
                scene::spawn_world,
                camera_rig::setup_camera_rig,
                mirror_feeds::allocate_mirror_feeds,
                mirror_feeds::bind_mirror_feeds,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                view_switch::primary_view_keys,
                view_switch::apply_active_view,
                scene::apply_vehicle_motion.after(vehicle::motion::drive_vehicle),
            )
                .chain(),
        );
    }
}

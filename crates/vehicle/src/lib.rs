//! Domain state for the cab camera rig: tunable constants, configurable
//! keybindings, the camera/feed vocabulary, and kinematic vehicle motion.
//!
//! This crate is engine-facing but render-free, so `rendering` and `ui` can
//! both depend on it without cycles.

use bevy::prelude::*;

pub mod config;
pub mod keybindings;
pub mod motion;
pub mod view_state;

use keybindings::KeyBindings;
use motion::VehicleMotion;
use view_state::ActiveView;

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<ActiveView>()
            .init_resource::<VehicleMotion>()
            .add_systems(Update, motion::drive_vehicle);
    }
}

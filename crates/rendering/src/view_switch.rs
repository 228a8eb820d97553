//! Primary view switching.
//!
//! A key press requests a view; the request is only honored when the rig
//! actually contains a camera for it, otherwise it logs a warning and is a
//! no-op. `apply_active_view` then follows [`ActiveView`] with change
//! detection, keeping exactly one primary camera active.

use bevy::prelude::*;

use vehicle::keybindings::KeyBindings;
use vehicle::view_state::{ActiveView, CameraView};

use crate::camera_rig::PrimaryCamera;

/// System: map the view keys (1/2/3 by default) onto [`ActiveView`].
pub fn primary_view_keys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    cameras: Query<&PrimaryCamera>,
    mut active: ResMut<ActiveView>,
) {
    let requests = [
        (CameraView::DriverSeat, bindings.view_driver_seat),
        (CameraView::RearView, bindings.view_rear),
        (CameraView::TopView, bindings.view_top),
    ];
    for (view, binding) in requests {
        if !binding.just_pressed(&keys) {
            continue;
        }
        if !cameras.iter().any(|primary| primary.0 == view) {
            warn!(
                "{} camera is missing from the rig, ignoring view switch",
                view.label()
            );
            continue;
        }
        active.0 = view;
    }
}

/// System: activate the camera for the current view and deactivate the other
/// primaries. Runs on change only, including the first frame after startup.
pub fn apply_active_view(
    active: Res<ActiveView>,
    mut cameras: Query<(&PrimaryCamera, &mut Camera)>,
) {
    if !active.is_changed() {
        return;
    }
    for (primary, mut camera) in &mut cameras {
        let want = primary.0 == active.0;
        if camera.is_active != want {
            camera.is_active = want;
        }
    }
}

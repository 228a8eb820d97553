//! Camera rig vocabulary and the active-view state.
//!
//! [`CameraView`] names the three mutually exclusive main views and
//! [`MirrorFeed`] the three independently toggleable mirror feeds. Both carry
//! their vehicle-local mount pose and the stable entity name the rig uses to
//! adopt pre-authored cameras. [`ActiveView`] holds the current main view;
//! only the switching system in `rendering` writes it.

use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

// -----------------------------------------------------------------------------
// Primary views
// -----------------------------------------------------------------------------

/// One of the three exclusive main views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraView {
    /// Forward view from the cab. The startup view.
    #[default]
    DriverSeat,
    /// Backward view over the tail.
    RearView,
    /// Straight-down overview.
    TopView,
}

impl CameraView {
    pub const ALL: &'static [CameraView] = &[Self::DriverSeat, Self::RearView, Self::TopView];

    pub fn label(self) -> &'static str {
        match self {
            Self::DriverSeat => "driver seat",
            Self::RearView => "rear view",
            Self::TopView => "top view",
        }
    }

    /// Stable entity name, used to adopt pre-authored rig children.
    pub fn node_name(self) -> &'static str {
        match self {
            Self::DriverSeat => "DriverSeatCamera",
            Self::RearView => "RearViewCamera",
            Self::TopView => "TopViewCamera",
        }
    }

    /// Vehicle-local mount pose. Forward is -Z.
    pub fn mount(self) -> (Vec3, Quat) {
        match self {
            Self::DriverSeat => (Vec3::new(0.0, 1.0, 2.0), Quat::IDENTITY),
            Self::RearView => (Vec3::new(0.0, 1.0, -2.0), Quat::from_rotation_y(PI)),
            Self::TopView => (Vec3::new(0.0, 5.0, 0.0), Quat::from_rotation_x(-FRAC_PI_2)),
        }
    }
}

// -----------------------------------------------------------------------------
// Mirror feeds
// -----------------------------------------------------------------------------

/// One auxiliary camera + render target + overlay panel, toggled as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorFeed {
    LeftMirror,
    RightMirror,
    Reversing,
}

impl MirrorFeed {
    pub const ALL: &'static [MirrorFeed] = &[Self::LeftMirror, Self::RightMirror, Self::Reversing];

    pub fn label(self) -> &'static str {
        match self {
            Self::LeftMirror => "left mirror",
            Self::RightMirror => "right mirror",
            Self::Reversing => "reversing camera",
        }
    }

    /// Stable entity name, used to adopt pre-authored rig children.
    pub fn node_name(self) -> &'static str {
        match self {
            Self::LeftMirror => "LeftMirrorCamera",
            Self::RightMirror => "RightMirrorCamera",
            Self::Reversing => "ReversingCamera",
        }
    }

    /// Vehicle-local mount pose. The mirror cameras sit on the cab sides
    /// angled outward; the reversing camera looks straight down behind the
    /// tail.
    pub fn mount(self) -> (Vec3, Quat) {
        match self {
            Self::LeftMirror => (
                Vec3::new(-1.5, 1.5, 0.5),
                Quat::from_rotation_y(-30.0_f32.to_radians()),
            ),
            Self::RightMirror => (
                Vec3::new(1.5, 1.5, 0.5),
                Quat::from_rotation_y(30.0_f32.to_radians()),
            ),
            Self::Reversing => (Vec3::new(0.0, 1.0, -3.0), Quat::from_rotation_x(-FRAC_PI_2)),
        }
    }

    /// Horizontal offset of the panel *center* from the overlay container's
    /// left edge, in pixels.
    pub fn panel_offset_x(self) -> f32 {
        match self {
            Self::LeftMirror => 220.0,
            Self::RightMirror => 0.0,
            Self::Reversing => 440.0,
        }
    }
}

// -----------------------------------------------------------------------------
// Active view state
// -----------------------------------------------------------------------------

/// The currently selected main view. Written only by the guarded switching
/// system; followers (camera activation, screenshot driver) react to change
/// detection on this resource.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveView(pub CameraView);

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

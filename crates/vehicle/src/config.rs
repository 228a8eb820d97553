//! Central tuning constants. Geometry values for the mirror overlay are kept
//! here so the UI and the tests agree on one source of truth.

/// Mirror feed render target width in pixels.
pub const MIRROR_FEED_WIDTH: u32 = 256;
/// Mirror feed render target height in pixels.
pub const MIRROR_FEED_HEIGHT: u32 = 192;

/// Vertical field of view for every rig camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

// Overlay geometry. Panel x-offsets are measured from the container's left
// edge to the panel *center* (the source layout used a center pivot), so a
// panel's left edge sits at `offset - MIRROR_PANEL_WIDTH / 2`.
pub const OVERLAY_CONTAINER_WIDTH: f32 = 600.0;
pub const OVERLAY_CONTAINER_HEIGHT: f32 = 150.0;
/// Gap between the overlay container and the bottom screen edge.
pub const OVERLAY_BOTTOM_MARGIN: f32 = 10.0;

pub const MIRROR_PANEL_WIDTH: f32 = 200.0;
pub const MIRROR_PANEL_HEIGHT: f32 = 150.0;
/// Alpha of the black backing behind each feed image.
pub const MIRROR_PANEL_BACKDROP_ALPHA: f32 = 0.5;

// Driving model.
pub const MAX_FORWARD_SPEED: f32 = 18.0;
pub const MAX_REVERSE_SPEED: f32 = 6.0;
/// Acceleration while throttle is held, in units/s^2.
pub const THROTTLE_ACCEL: f32 = 9.0;
/// Deceleration while the opposing key is held (braking into reverse).
pub const BRAKE_DECEL: f32 = 14.0;
/// Speed decay with no input, in units/s^2.
pub const COAST_DECEL: f32 = 4.0;
/// Steering rate at full speed, in radians/s.
pub const STEER_RATE: f32 = 1.2;

/// Half-extent of the drivable ground plane.
pub const GROUND_HALF_EXTENT: f32 = 250.0;

//! Kinematic driving model.
//!
//! No physics: the vehicle is a pose plus a signed scalar speed, integrated
//! from held keys each frame. `rendering` copies the pose onto the vehicle
//! root transform; the rig cameras follow as children.

use bevy::prelude::*;

use crate::config::{
    BRAKE_DECEL, COAST_DECEL, GROUND_HALF_EXTENT, MAX_FORWARD_SPEED, MAX_REVERSE_SPEED, STEER_RATE,
    THROTTLE_ACCEL,
};
use crate::keybindings::KeyBindings;

/// Vehicle pose and speed. Speed is signed: negative while reversing.
#[derive(Resource, Debug, Clone, Copy)]
pub struct VehicleMotion {
    pub position: Vec3,
    /// Yaw around +Y in radians. 0 faces -Z.
    pub heading: f32,
    pub speed: f32,
}

impl Default for VehicleMotion {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
            speed: 0.0,
        }
    }
}

impl VehicleMotion {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// World-space forward direction for the current heading.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }
}

/// One integration step. `throttle` and `steer` are -1/0/+1 key axes
/// (steer +1 = left). Factored out of the system so it can be tested without
/// an `App`.
pub fn integrate(motion: &mut VehicleMotion, throttle: f32, steer: f32, dt: f32) {
    if throttle > 0.0 {
        let accel = if motion.speed < 0.0 {
            BRAKE_DECEL
        } else {
            THROTTLE_ACCEL
        };
        motion.speed += accel * dt;
    } else if throttle < 0.0 {
        let accel = if motion.speed > 0.0 {
            BRAKE_DECEL
        } else {
            THROTTLE_ACCEL
        };
        motion.speed -= accel * dt;
    } else {
        // Coast toward a stop without overshooting through zero.
        let decay = COAST_DECEL * dt;
        if motion.speed.abs() <= decay {
            motion.speed = 0.0;
        } else {
            motion.speed -= motion.speed.signum() * decay;
        }
    }
    motion.speed = motion.speed.clamp(-MAX_REVERSE_SPEED, MAX_FORWARD_SPEED);

    // Steering authority scales with speed, so a parked vehicle cannot spin
    // in place, and reversing steers the way a real car does (negative speed
    // factor flips the turn direction).
    let speed_factor = (motion.speed / MAX_FORWARD_SPEED).clamp(-1.0, 1.0);
    motion.heading += steer * STEER_RATE * speed_factor * dt;

    motion.position += motion.forward() * motion.speed * dt;
    motion.position.x = motion
        .position
        .x
        .clamp(-GROUND_HALF_EXTENT, GROUND_HALF_EXTENT);
    motion.position.z = motion
        .position
        .z
        .clamp(-GROUND_HALF_EXTENT, GROUND_HALF_EXTENT);
}

/// System: read the driving keys and advance the vehicle.
pub fn drive_vehicle(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    time: Res<Time>,
    mut motion: ResMut<VehicleMotion>,
) {
    let mut throttle = 0.0;
    if bindings.throttle.pressed(&keys) || bindings.throttle_alt.pressed(&keys) {
        throttle += 1.0;
    }
    if bindings.reverse.pressed(&keys) || bindings.reverse_alt.pressed(&keys) {
        throttle -= 1.0;
    }

    let mut steer = 0.0;
    if bindings.steer_left.pressed(&keys) || bindings.steer_left_alt.pressed(&keys) {
        steer += 1.0;
    }
    if bindings.steer_right.pressed(&keys) || bindings.steer_right_alt.pressed(&keys) {
        steer -= 1.0;
    }

    integrate(&mut motion, throttle, steer, time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn settle(motion: &mut VehicleMotion, throttle: f32, steer: f32, steps: usize) {
        for _ in 0..steps {
            integrate(motion, throttle, steer, DT);
        }
    }

    #[test]
    fn test_throttle_accelerates_and_clamps() {
        let mut motion = VehicleMotion::default();
        settle(&mut motion, 1.0, 0.0, 10);
        assert!(motion.speed > 0.0);

        settle(&mut motion, 1.0, 0.0, 1000);
        assert!((motion.speed - MAX_FORWARD_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reverse_clamps_at_reverse_limit() {
        let mut motion = VehicleMotion::default();
        settle(&mut motion, -1.0, 0.0, 1000);
        assert!((motion.speed + MAX_REVERSE_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn test_coasting_decays_to_exact_zero() {
        let mut motion = VehicleMotion {
            speed: 5.0,
            ..Default::default()
        };
        settle(&mut motion, 0.0, 0.0, 1000);
        assert_eq!(motion.speed, 0.0, "coasting must not oscillate around zero");
    }

    #[test]
    fn test_braking_from_forward_uses_brake_decel() {
        let mut fwd = VehicleMotion {
            speed: 10.0,
            ..Default::default()
        };
        let mut coast = fwd;
        integrate(&mut fwd, -1.0, 0.0, DT);
        integrate(&mut coast, 0.0, 0.0, DT);
        assert!(fwd.speed < coast.speed, "braking decelerates harder than coasting");
    }

    #[test]
    fn test_steering_requires_motion() {
        let mut motion = VehicleMotion::default();
        settle(&mut motion, 0.0, 1.0, 100);
        assert_eq!(motion.heading, 0.0, "a parked vehicle must not spin");

        settle(&mut motion, 1.0, 1.0, 100);
        assert!(motion.heading > 0.0, "steering left increases heading");
    }

    #[test]
    fn test_position_advances_along_heading() {
        let mut motion = VehicleMotion::default();
        settle(&mut motion, 1.0, 0.0, 60);
        assert!(motion.position.z < 0.0, "heading 0 drives toward -Z");
        assert!(motion.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_position_stays_on_ground_plane() {
        let mut motion = VehicleMotion::default();
        settle(&mut motion, 1.0, 0.0, 20_000);
        assert!(motion.position.x.abs() <= GROUND_HALF_EXTENT);
        assert!(motion.position.z.abs() <= GROUND_HALF_EXTENT);
        assert_eq!(motion.position.y, 0.0);
    }
}

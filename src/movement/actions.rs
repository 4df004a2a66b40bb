//! Movement domain: velocity-level actions shared by every controller.
//!
//! These act on a [`CharacterBody`] and never decide *when* to run; the
//! owning state does that.

use bevy::prelude::*;

use crate::error::ControllerError;
use crate::movement::{CharacterBody, Facing};

/// Critically damped spring toward `target`.
///
/// `velocity` is the spring's own rate of change and must persist between
/// calls.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never overshoot.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Turn toward a non-zero input. Returns true when the facing changed.
pub fn face_toward(facing: &mut Facing, axis: f32) -> bool {
    match Facing::from_axis(axis) {
        Some(wanted) if wanted != *facing => {
            *facing = wanted;
            true
        }
        _ => false,
    }
}

pub fn move_horizontal(
    body: &mut dyn CharacterBody,
    smoothing_velocity: &mut f32,
    axis: f32,
    speed: f32,
    smoothing: f32,
    dt: f32,
) {
    let target = axis.clamp(-1.0, 1.0) * speed;
    let x = smooth_damp(body.velocity().x, target, smoothing_velocity, smoothing, dt);
    body.set_velocity_x(x);
}

/// Impulse that lifts a body of `mass` exactly `height` under `gravity_y`.
pub fn jump_impulse(mass: f32, gravity_y: f32, height: f32) -> Result<f32, ControllerError> {
    if !(height.is_finite() && height > 0.0) {
        return Err(ControllerError::InvalidJumpHeight { height });
    }
    if !(gravity_y.is_finite() && gravity_y < 0.0) {
        return Err(ControllerError::NoDownwardGravity { gravity: gravity_y });
    }
    Ok(mass * (2.0 * -gravity_y * height).sqrt())
}

/// Vertical jump. Parameters are validated before the body is touched.
pub fn jump(body: &mut dyn CharacterBody, height: f32) -> Result<f32, ControllerError> {
    let impulse = jump_impulse(body.mass(), body.effective_gravity(), height)?;
    body.set_velocity_y(0.0);
    body.apply_impulse(Vec2::new(0.0, impulse));
    Ok(impulse)
}

/// Jump that lands at `target_x` after rising `height`. Returns the air time.
pub fn jump_arc_to(
    body: &mut dyn CharacterBody,
    height: f32,
    from_x: f32,
    target_x: f32,
) -> Result<f32, ControllerError> {
    let gravity_y = body.effective_gravity();
    let impulse = jump_impulse(body.mass(), gravity_y, height)?;
    let launch_speed = (2.0 * -gravity_y * height).sqrt();
    let air_time = 2.0 * launch_speed / -gravity_y;

    body.set_velocity_y(0.0);
    body.apply_impulse(Vec2::new(0.0, impulse));
    body.set_velocity_x((target_x - from_x) / air_time);
    Ok(air_time)
}

/// Shorten a rising jump.
pub fn jump_cut(body: &mut dyn CharacterBody, rate: f32) {
    let velocity = body.velocity();
    if velocity.y > 0.0 {
        body.set_velocity_y(velocity.y * rate);
    }
}

pub fn begin_dash(body: &mut dyn CharacterBody) {
    body.set_gravity_scale(0.0);
}

pub fn dash_velocity(body: &mut dyn CharacterBody, facing: Facing, speed: f32) {
    body.set_velocity(Vec2::new(facing.sign() * speed, 0.0));
}

pub fn end_dash(body: &mut dyn CharacterBody, gravity_scale: f32) {
    body.set_gravity_scale(gravity_scale);
}

/// Keep vertical speed at or above a negative floor while on a wall.
pub fn wall_slide(body: &mut dyn CharacterBody, floor: f32) {
    let velocity = body.velocity();
    if velocity.y < floor {
        body.set_velocity_y(floor);
    }
}

pub fn clamp_fall(body: &mut dyn CharacterBody, limit: f32) {
    let velocity = body.velocity();
    if velocity.y < -limit {
        body.set_velocity_y(-limit);
    }
}

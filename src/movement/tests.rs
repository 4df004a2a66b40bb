//! Movement domain: unit tests for timers, actions and sensing.

use bevy::prelude::*;

use super::actions::{
    begin_dash, clamp_fall, dash_velocity, end_dash, face_toward, jump, jump_arc_to, jump_cut,
    jump_impulse, move_horizontal, smooth_damp, wall_slide,
};
use super::sensors::{RISING_EPSILON, is_grounded, is_on_edge, is_on_wall, sense};
use super::{AssistTimer, ChargeHold, Deadline, Facing, GameLayer, SensorAnchors};
use crate::content::SensorLayout;
use crate::error::ControllerError;
use crate::movement::CharacterBody;
use crate::testing::{DT, TestBody, TestProbe};

// -----------------------------------------------------------------------------
// Timers
// -----------------------------------------------------------------------------

#[test]
fn test_grace_timer_arms_and_decays_to_zero() {
    let mut timer = AssistTimer::new(0.1);
    assert!(!timer.is_active());

    timer.arm();
    assert_eq!(timer.value(), 0.1);
    timer.decay(0.04);
    assert!(timer.is_active());
    timer.decay(0.5);
    assert_eq!(timer.value(), 0.0);
    assert!(!timer.is_active());
}

#[test]
fn test_memory_timer_holds_while_condition_true() {
    let mut coyote = AssistTimer::new(0.12);
    for _ in 0..10 {
        coyote.track(true, DT);
        assert_eq!(coyote.value(), 0.12);
    }

    let mut previous = coyote.value();
    for _ in 0..20 {
        coyote.track(false, DT);
        assert!(coyote.value() <= previous);
        assert!(coyote.value() >= 0.0);
        previous = coyote.value();
    }
    assert!(!coyote.is_active());

    coyote.track(true, DT);
    assert_eq!(coyote.value(), coyote.max());
}

#[test]
fn test_timer_ignores_negative_input() {
    let mut timer = AssistTimer::new(-1.0);
    timer.arm();
    assert_eq!(timer.max(), 0.0);
    assert!(!timer.is_active());

    let mut timer = AssistTimer::new(0.2);
    timer.arm();
    timer.decay(-5.0);
    assert_eq!(timer.value(), 0.2);

    timer.set_max(0.05);
    assert_eq!(timer.value(), 0.05);
}

#[test]
fn test_charge_hold_needs_continuous_hold() {
    let mut charge = ChargeHold::new(0.3);
    charge.advance(true, 1.0);
    assert!(!charge.is_charged(), "no press edge yet");

    charge.press();
    for _ in 0..10 {
        charge.advance(true, DT);
    }
    assert!(!charge.is_charged());
    charge.advance(false, 1.0);
    assert!(!charge.is_charged(), "released time does not count");

    for _ in 0..10 {
        charge.advance(true, DT);
    }
    assert!(charge.is_charged());

    charge.reset();
    assert!(!charge.is_charged());
    assert_eq!(charge.held_for(), 0.0);
}

#[test]
fn test_deadline() {
    let deadline = Deadline::after(1.0, 0.5);
    assert!(!deadline.has_passed(1.2));
    assert!((deadline.remaining(1.2) - 0.3).abs() < 1e-6);
    assert!(deadline.has_passed(1.5));
    assert_eq!(deadline.remaining(9.0), 0.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_smooth_damp_converges_without_overshoot() {
    let mut spring = 0.0;
    let mut value = 0.0;
    for _ in 0..120 {
        value = smooth_damp(value, 320.0, &mut spring, 0.05, DT);
        assert!(value <= 320.0);
    }
    assert!((value - 320.0).abs() < 0.5);
}

#[test]
fn test_smooth_damp_zero_dt_is_identity() {
    let mut spring = 3.0;
    assert_eq!(smooth_damp(10.0, 50.0, &mut spring, 0.1, 0.0), 10.0);
    assert_eq!(spring, 3.0);
}

#[test]
fn test_move_horizontal_keeps_vertical_velocity() {
    let mut body = TestBody::new(1.0);
    body.velocity = Vec2::new(0.0, -120.0);
    let mut spring = 0.0;

    move_horizontal(&mut body, &mut spring, -1.0, 300.0, 0.05, DT);
    assert!(body.velocity.x < 0.0);
    assert_eq!(body.velocity.y, -120.0);
}

#[test]
fn test_face_toward() {
    let mut facing = Facing::Right;
    assert!(!face_toward(&mut facing, 1.0));
    assert!(!face_toward(&mut facing, 0.0));
    assert!(face_toward(&mut facing, -0.5));
    assert_eq!(facing, Facing::Left);
    assert_eq!(facing.sign(), -1.0);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_jump_impulse_formula() {
    let impulse = jump_impulse(2.0, -1800.0, 100.0).unwrap();
    assert!((impulse - 2.0 * (2.0f32 * 1800.0 * 100.0).sqrt()).abs() < 1e-3);
}

#[test]
fn test_jump_replaces_vertical_velocity() {
    let mut body = TestBody::new(4.0);
    body.mass = 3.0;
    body.velocity = Vec2::new(50.0, -400.0);

    jump(&mut body, 90.0).unwrap();

    let expected = (2.0f32 * 1800.0 * 90.0).sqrt();
    assert!((body.velocity.y - expected).abs() < 1e-2);
    assert_eq!(body.velocity.x, 50.0);
}

#[test]
fn test_invalid_jump_height_leaves_body_untouched() {
    let mut body = TestBody::new(4.0);
    body.velocity = Vec2::new(10.0, -30.0);

    for height in [0.0, -5.0, f32::NAN] {
        let err = jump(&mut body, height).unwrap_err();
        assert!(matches!(err, ControllerError::InvalidJumpHeight { .. }));
        assert_eq!(body.velocity, Vec2::new(10.0, -30.0));
    }
}

#[test]
fn test_jump_without_gravity_is_rejected() {
    let mut body = TestBody::new(0.0);
    let err = jump(&mut body, 50.0).unwrap_err();
    assert!(matches!(err, ControllerError::NoDownwardGravity { .. }));
    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn test_jump_arc_reaches_target_x() {
    let mut body = TestBody::new(4.0);
    let air_time = jump_arc_to(&mut body, 50.0, 0.0, 100.0).unwrap();
    assert!((body.velocity.x * air_time - 100.0).abs() < 1e-3);
    assert!(body.velocity.y > 0.0);
}

#[test]
fn test_jump_cut_only_while_rising() {
    let mut body = TestBody::new(1.0);
    body.velocity = Vec2::new(0.0, 400.0);
    jump_cut(&mut body, 0.5);
    assert_eq!(body.velocity.y, 200.0);

    body.velocity.y = -100.0;
    jump_cut(&mut body, 0.5);
    assert_eq!(body.velocity.y, -100.0);
}

// -----------------------------------------------------------------------------
// Dash, wall slide, fall clamp
// -----------------------------------------------------------------------------

#[test]
fn test_dash_suspends_and_restores_gravity() {
    let mut body = TestBody::new(4.0);
    body.velocity = Vec2::new(20.0, -300.0);

    begin_dash(&mut body);
    dash_velocity(&mut body, Facing::Left, 900.0);
    assert_eq!(body.gravity_scale(), 0.0);
    assert_eq!(body.velocity, Vec2::new(-900.0, 0.0));
    assert_eq!(body.effective_gravity(), 0.0);

    end_dash(&mut body, 4.0);
    assert_eq!(body.gravity_scale(), 4.0);
}

#[test]
fn test_wall_slide_and_fall_clamp() {
    let mut body = TestBody::new(1.0);
    body.velocity.y = -500.0;
    wall_slide(&mut body, -160.0);
    assert_eq!(body.velocity.y, -160.0);

    body.velocity.y = 80.0;
    wall_slide(&mut body, -160.0);
    assert_eq!(body.velocity.y, 80.0);

    body.velocity.y = -2000.0;
    clamp_fall(&mut body, 900.0);
    assert_eq!(body.velocity.y, -900.0);
}

// -----------------------------------------------------------------------------
// Sensors
// -----------------------------------------------------------------------------

fn rig() -> SensorAnchors {
    SensorAnchors::from_layout(&SensorLayout::default()).unwrap()
}

/// Floor top at y = 0 spanning x in [-100, 100]; body center at y = 24.
fn floor_probe() -> TestProbe {
    let mut probe = TestProbe::default();
    probe.add(GameLayer::Ground, Vec2::new(0.0, -20.0), Vec2::new(200.0, 40.0));
    probe
}

#[test]
fn test_grounded_on_floor() {
    let probe = floor_probe();
    assert!(is_grounded(&probe, &rig(), Vec2::new(0.0, 24.0), Facing::Right, 0.0));
    assert!(!is_grounded(&probe, &rig(), Vec2::new(0.0, 80.0), Facing::Right, 0.0));
}

#[test]
fn test_grounded_suppressed_while_rising() {
    let probe = floor_probe();
    let origin = Vec2::new(0.0, 24.0);
    assert!(is_grounded(&probe, &rig(), origin, Facing::Right, RISING_EPSILON));
    assert!(!is_grounded(&probe, &rig(), origin, Facing::Right, RISING_EPSILON + 0.01));
}

#[test]
fn test_wall_probe_follows_facing() {
    let mut probe = TestProbe::default();
    probe.add(GameLayer::Wall, Vec2::new(20.0, 0.0), Vec2::new(10.0, 100.0));

    assert!(is_on_wall(&probe, &rig(), Vec2::ZERO, Facing::Right));
    assert!(!is_on_wall(&probe, &rig(), Vec2::ZERO, Facing::Left));
}

#[test]
fn test_walls_do_not_count_as_ground() {
    let mut probe = TestProbe::default();
    probe.add(GameLayer::Wall, Vec2::new(0.0, -20.0), Vec2::new(200.0, 40.0));
    assert!(!is_grounded(&probe, &rig(), Vec2::new(0.0, 24.0), Facing::Right, 0.0));
}

#[test]
fn test_edge_detected_past_floor_end() {
    let probe = floor_probe();
    assert!(!is_on_edge(&probe, &rig(), Vec2::new(0.0, 24.0), Facing::Right));
    assert!(is_on_edge(&probe, &rig(), Vec2::new(95.0, 24.0), Facing::Right));
    // Turning around puts the leading foot back over the floor.
    assert!(!is_on_edge(&probe, &rig(), Vec2::new(95.0, 24.0), Facing::Left));
}

#[test]
fn test_sense_combines_readings() {
    let mut probe = floor_probe();
    probe.add(GameLayer::Wall, Vec2::new(110.0, 50.0), Vec2::new(20.0, 100.0));

    let readings = sense(&probe, &rig(), Vec2::new(86.0, 24.0), Facing::Right, Vec2::ZERO);
    assert!(readings.grounded);
    assert!(readings.on_wall);
    assert!(!readings.on_edge);
}

#[test]
fn test_degenerate_layout_is_rejected() {
    let layout = SensorLayout {
        wall_size: [0.0, 36.0],
        ..SensorLayout::default()
    };
    let err = SensorAnchors::from_layout(&layout).unwrap_err();
    assert!(matches!(err, ControllerError::MissingCollaborator { .. }));
}

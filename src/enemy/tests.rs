//! Enemy domain: wolf behavior against a fake body and world.

use bevy::prelude::*;

use super::{Windup, WolfController, WolfState, WolfStateKind};
use crate::content::WolfTuning;
use crate::movement::{Facing, GameLayer, SensorAnchors};
use crate::testing::{DT, TestBody, TestWorld};

const HALF_SIZE: Vec2 = Vec2::new(20.0, 12.0);

struct WolfRig {
    controller: WolfController,
    body: TestBody,
    world: TestWorld,
    anchors: SensorAnchors,
}

impl WolfRig {
    fn new(world: TestWorld, seed: u64) -> Self {
        let tuning = WolfTuning::default();
        let mut rig = WolfRig {
            controller: WolfController::new(tuning.clone(), seed),
            body: TestBody::new(tuning.gravity_scale),
            world,
            anchors: SensorAnchors::from_layout(&tuning.sensors).unwrap(),
        };
        let origin = rig.world.position;
        rig.controller.initialize(&mut rig.body, origin, None).unwrap();
        rig.physics(None);
        rig
    }

    fn on_floor() -> Self {
        WolfRig::new(TestWorld::with_floor(-5000.0, 5000.0, HALF_SIZE), 7)
    }

    fn physics(&mut self, target: Option<Vec2>) {
        self.controller.fixed_tick(
            DT,
            &self.world.probe,
            &self.anchors,
            self.world.position,
            target,
            &mut self.body,
        );
        self.world.integrate(&mut self.body, DT);
    }

    fn step(&mut self, target: Option<Vec2>) -> Option<WolfStateKind> {
        let origin = self.world.position;
        let entered = self.controller.tick(DT, origin, target, &mut self.body);
        self.physics(target);
        entered
    }

    fn kind(&self) -> WolfStateKind {
        self.controller.state_kind().unwrap()
    }

    /// Target placed `dx` to the side at the wolf's height.
    fn beside(&self, dx: f32) -> Option<Vec2> {
        Some(self.world.position + Vec2::new(dx, 0.0))
    }
}

// -----------------------------------------------------------------------------
// Detection
// -----------------------------------------------------------------------------

#[test]
fn test_idle_without_target() {
    let mut rig = WolfRig::on_floor();
    for _ in 0..30 {
        rig.step(None);
    }
    assert_eq!(rig.kind(), WolfStateKind::Idle);
}

#[test]
fn test_idle_until_player_in_pursue_range() {
    let mut rig = WolfRig::on_floor();
    let range = rig.controller.tuning().pursue_range;

    rig.step(rig.beside(range + 50.0));
    assert_eq!(rig.kind(), WolfStateKind::Idle);

    assert_eq!(rig.step(rig.beside(range - 10.0)), Some(WolfStateKind::Pursue));
}

#[test]
fn test_pursue_returns_to_idle_when_player_leaves() {
    let mut rig = WolfRig::on_floor();
    rig.step(rig.beside(200.0));
    assert_eq!(rig.kind(), WolfStateKind::Pursue);

    assert_eq!(rig.step(rig.beside(2000.0)), Some(WolfStateKind::Idle));
    assert_eq!(rig.body.velocity.x, 0.0);
}

// -----------------------------------------------------------------------------
// Pursuit
// -----------------------------------------------------------------------------

#[test]
fn test_pursue_faces_and_runs_toward_player() {
    let mut rig = WolfRig::on_floor();
    for _ in 0..20 {
        rig.step(rig.beside(-200.0));
    }
    assert_eq!(rig.kind(), WolfStateKind::Pursue);
    assert_eq!(rig.controller.facing(), Facing::Left);
    assert!(rig.body.velocity.x < 0.0);
    assert!(rig.body.velocity.x >= -rig.controller.tuning().move_speed - 1e-3);
}

#[test]
fn test_pursue_stops_at_ledge() {
    let mut world = TestWorld::with_floor(-5000.0, 0.0, HALF_SIZE);
    world.position.x = -10.0;
    let mut rig = WolfRig::new(world, 7);
    assert!(rig.controller.brain().sensors.on_edge);

    let target = Some(Vec2::new(150.0, HALF_SIZE.y));
    for _ in 0..10 {
        rig.step(target);
    }
    assert_eq!(rig.kind(), WolfStateKind::Pursue);
    assert_eq!(rig.body.velocity.x, 0.0);
    assert_eq!(rig.world.position.x, -10.0);
}

#[test]
fn test_pursue_hops_wall() {
    let mut world = TestWorld::with_floor(-5000.0, 5000.0, HALF_SIZE);
    world
        .probe
        .add(GameLayer::Wall, Vec2::new(35.0, 50.0), Vec2::new(10.0, 100.0));
    world.position.x = 8.0;
    let mut rig = WolfRig::new(world, 7);
    assert!(rig.controller.brain().sensors.on_wall);

    rig.step(Some(Vec2::new(200.0, HALF_SIZE.y)));

    assert_eq!(rig.kind(), WolfStateKind::Pursue);
    let launch = (2.0 * 1800.0 * rig.controller.tuning().hop_height).sqrt();
    assert!((rig.body.velocity.y - (launch - 30.0)).abs() < 1e-2);
    assert!(rig.body.velocity.x > 0.0);
}

#[test]
fn test_stagger_suspends_steering() {
    let mut rig = WolfRig::on_floor();
    let target = rig.beside(200.0);
    for _ in 0..20 {
        rig.step(target);
    }
    assert!(rig.body.velocity.x > 0.0);

    rig.controller.stagger(Vec2::new(-300.0, 0.0), &mut rig.body);
    rig.step(target);
    assert_eq!(rig.body.velocity.x, -300.0);

    for _ in 0..40 {
        rig.step(target);
    }
    assert!(rig.body.velocity.x > 0.0);
}

// -----------------------------------------------------------------------------
// Melee
// -----------------------------------------------------------------------------

fn windup_of(rig: &WolfRig) -> (f32, f32) {
    match rig.controller.state() {
        Some(WolfState::Melee {
            started_at, windup, ..
        }) => (*started_at, *windup),
        other => panic!("expected melee, got {other:?}"),
    }
}

fn enter_melee(rig: &mut WolfRig, dx: f32) {
    rig.step(rig.beside(dx));
    assert_eq!(rig.step(rig.beside(dx)), Some(WolfStateKind::Melee));
    assert_eq!(rig.body.velocity.x, 0.0);
}

#[test]
fn test_melee_strikes_after_windup() {
    let mut rig = WolfRig::on_floor();
    enter_melee(&mut rig, 50.0);
    let (started_at, windup) = windup_of(&rig);
    let tuning = rig.controller.tuning().clone();
    assert!((windup - tuning.windup_time).abs() <= tuning.windup_jitter + 1e-4);

    let mut saw_open = false;
    while rig.controller.clock() < started_at + windup + tuning.strike_delay + tuning.strike_time {
        rig.step(rig.beside(50.0));
        assert_eq!(rig.kind(), WolfStateKind::Melee);
        saw_open |= rig.controller.strike_open();
    }
    assert!(saw_open);
    assert!(matches!(
        rig.controller.state(),
        Some(WolfState::Melee {
            outcome: Windup::Struck,
            ..
        })
    ));

    while rig.kind() == WolfStateKind::Melee {
        rig.step(rig.beside(50.0));
    }
    assert_eq!(rig.kind(), WolfStateKind::Pause);
    assert!(rig.controller.clock() - started_at >= tuning.melee_time);
    assert!(rig.controller.brain().strike.is_none());
}

#[test]
fn test_melee_aborts_when_player_escapes() {
    let mut rig = WolfRig::on_floor();
    enter_melee(&mut rig, 50.0);
    let (started_at, windup) = windup_of(&rig);

    let mut entered = None;
    while rig.controller.clock() < started_at + windup + 0.1 && entered.is_none() {
        entered = rig.step(rig.beside(150.0));
    }
    assert_eq!(entered, Some(WolfStateKind::Pursue));
    assert!(rig.controller.brain().strike.is_none());
    assert!(!rig.controller.strike_open());
}

#[test]
fn test_pause_then_idle_when_player_far() {
    let mut rig = WolfRig::on_floor();
    enter_melee(&mut rig, 50.0);
    while rig.kind() == WolfStateKind::Melee {
        rig.step(rig.beside(50.0));
    }
    let (started_at, duration) = match rig.controller.state() {
        Some(WolfState::Pause {
            started_at,
            duration,
        }) => (*started_at, *duration),
        other => panic!("expected pause, got {other:?}"),
    };
    let tuning = rig.controller.tuning().clone();
    assert!(duration >= tuning.attack_pause_time);
    assert!(duration <= tuning.attack_pause_time + tuning.pause_jitter);

    // Faces the player while pausing.
    rig.step(rig.beside(-100.0));
    assert_eq!(rig.controller.facing(), Facing::Left);

    while rig.kind() == WolfStateKind::Pause {
        rig.step(rig.beside(2000.0));
    }
    assert_eq!(rig.kind(), WolfStateKind::Idle);
    assert!(rig.controller.clock() - started_at >= duration);
}

#[test]
fn test_same_seed_rolls_same_windup() {
    let mut a = WolfRig::on_floor();
    let mut b = WolfRig::on_floor();
    enter_melee(&mut a, 50.0);
    enter_melee(&mut b, 50.0);
    assert_eq!(windup_of(&a), windup_of(&b));
}

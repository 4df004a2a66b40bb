//! Player domain: presentation cues emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::player::AttackKind;

/// Animation pose flags toggled by state enter/exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Walking,
    Sitting,
    Jumping,
    Falling,
    OnWall,
    Dashing,
    Attacking(AttackKind),
    ChargeAttacking,
    KnockedBack,
}

/// One-way intent for animation and effects. The controller never reads
/// presentation state back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresentationCue {
    Pose(Pose, bool),
    Turn,
    ClearTurn,
    ToggleAltAttack,
    /// Seconds spent in the current fall.
    FallTime(f32),
    ChargeReady(bool),
    JumpDust,
    LandingDust,
    WallDust(bool),
    DashTrail(bool),
    Hurt,
    Died,
}

#[derive(Debug, Clone)]
pub struct PlayerCue {
    pub entity: Entity,
    pub cue: PresentationCue,
}

impl Message for PlayerCue {}

//! Presentation: animator parameters driven by player cues.

use bevy::prelude::*;

use crate::player::{AttackKind, Pose, PresentationCue};

/// Seconds the sprite stays tinted after taking a hit.
pub const HURT_FLASH_TIME: f32 = 0.15;

/// Mirror of what an animator controller would hold for the player.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorParams {
    pub walking: bool,
    pub sitting: bool,
    pub jumping: bool,
    pub falling: bool,
    pub on_wall: bool,
    pub dashing: bool,
    pub attacking: Option<AttackKind>,
    pub charge_attacking: bool,
    pub knocked_back: bool,
    pub dead: bool,
    /// Set by a ground turn, cleared when leaving the ground states.
    pub turn: bool,
    pub alt_attack: bool,
    pub fall_time: f32,
    pub charge_ready: bool,
    pub wall_dust: bool,
    pub dash_trail: bool,
    pub hurt_flash: f32,
}

impl AnimatorParams {
    pub fn apply(&mut self, cue: PresentationCue) {
        match cue {
            PresentationCue::Pose(pose, on) => self.set_pose(pose, on),
            PresentationCue::Turn => self.turn = true,
            PresentationCue::ClearTurn => self.turn = false,
            PresentationCue::ToggleAltAttack => self.alt_attack = !self.alt_attack,
            PresentationCue::FallTime(seconds) => self.fall_time = seconds,
            PresentationCue::ChargeReady(ready) => self.charge_ready = ready,
            PresentationCue::WallDust(on) => self.wall_dust = on,
            PresentationCue::DashTrail(on) => self.dash_trail = on,
            PresentationCue::Hurt => self.hurt_flash = HURT_FLASH_TIME,
            PresentationCue::Died => self.dead = true,
            // One-shot effects, spawned by the cue system.
            PresentationCue::JumpDust | PresentationCue::LandingDust => {}
        }
    }

    fn set_pose(&mut self, pose: Pose, on: bool) {
        match pose {
            Pose::Walking => self.walking = on,
            Pose::Sitting => self.sitting = on,
            Pose::Jumping => self.jumping = on,
            Pose::Falling => self.falling = on,
            Pose::OnWall => self.on_wall = on,
            Pose::Dashing => self.dashing = on,
            Pose::ChargeAttacking => self.charge_attacking = on,
            Pose::KnockedBack => self.knocked_back = on,
            Pose::Attacking(kind) => {
                if on {
                    self.attacking = Some(kind);
                } else if self.attacking == Some(kind) {
                    self.attacking = None;
                }
            }
        }
    }

    /// Pose that wins when several flags are set.
    pub fn dominant(&self) -> Pose {
        if self.knocked_back {
            Pose::KnockedBack
        } else if self.dashing {
            Pose::Dashing
        } else if self.charge_attacking {
            Pose::ChargeAttacking
        } else if let Some(kind) = self.attacking {
            Pose::Attacking(kind)
        } else if self.on_wall {
            Pose::OnWall
        } else if self.jumping {
            Pose::Jumping
        } else if self.falling {
            Pose::Falling
        } else if self.sitting {
            Pose::Sitting
        } else {
            Pose::Walking
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.hurt_flash = (self.hurt_flash - dt).max(0.0);
    }
}

/// Placeholder tint per pose until real animation clips exist.
pub fn pose_tint(pose: Pose) -> Color {
    match pose {
        Pose::Walking => Color::srgb(0.9, 0.9, 0.9),
        Pose::Sitting => Color::srgb(0.7, 0.7, 0.8),
        Pose::Jumping | Pose::Falling => Color::srgb(0.8, 0.9, 1.0),
        Pose::OnWall => Color::srgb(0.6, 0.8, 1.0),
        Pose::Dashing => Color::srgb(0.5, 1.0, 1.0),
        Pose::Attacking(_) => Color::srgb(1.0, 0.9, 0.5),
        Pose::ChargeAttacking => Color::srgb(1.0, 0.6, 0.2),
        Pose::KnockedBack => Color::srgb(1.0, 0.7, 0.7),
    }
}

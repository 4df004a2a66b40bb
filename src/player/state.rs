//! Player domain: the state catalog.
//!
//! Every variant carries only its own transient data. Guards are listed in
//! priority order and the first one that matches decides the transition;
//! later guards are not evaluated that tick.

use bevy::prelude::*;

use crate::combat::Health;
use crate::content::{AttackMotion, PlayerTuning};
use crate::fsm::MachineState;
use crate::movement::{CharacterBody, InputSnapshot, actions};
use crate::player::{HitboxSlot, PlayerContext, Pose, PresentationCue};

/// Attack direction, picked from the vertical axis at the moment of the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackKind {
    #[default]
    Regular,
    Up,
    Down,
}

impl AttackKind {
    pub fn from_vertical(axis: f32) -> Self {
        if axis > 0.5 {
            AttackKind::Up
        } else if axis < -0.5 {
            AttackKind::Down
        } else {
            AttackKind::Regular
        }
    }
}

/// Payload-free tag for a [`PlayerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Walk,
    Sit,
    Jump,
    Fall,
    Wall,
    WallJump,
    Dash,
    Attack,
    ChargeAttack,
    Knockback,
    Death,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerState {
    Walk,
    Sit,
    Jump,
    Fall,
    Wall,
    /// Straight up, no push off the wall. Repeated wall jumps climb the same
    /// wall; that is the intended feel.
    WallJump,
    Dash {
        started_at: f32,
    },
    Attack {
        kind: AttackKind,
        started_at: f32,
        lunge: f32,
    },
    ChargeAttack {
        started_at: f32,
        lunge: f32,
    },
    Knockback {
        duration: f32,
        started_at: f32,
    },
    Death,
}

/// Everything a state hook may touch during one call.
pub struct PlayerCx<'a> {
    pub ctx: &'a mut PlayerContext,
    pub tuning: &'a PlayerTuning,
    pub input: &'a InputSnapshot,
    pub body: &'a mut dyn CharacterBody,
    pub health: &'a mut Health,
    pub now: f32,
    pub dt: f32,
}

impl PlayerCx<'_> {
    fn pose(&mut self, pose: Pose, on: bool) {
        self.ctx.cue(PresentationCue::Pose(pose, on));
    }

    fn dash_requested(&self) -> bool {
        self.input.dash_pressed || self.ctx.timers.dash_buffer.is_active()
    }

    fn can_dash(&self) -> bool {
        self.ctx.can_dash(self.now, self.tuning.dash_cooldown)
    }

    fn landing_state(&self) -> PlayerState {
        if self.ctx.sensors.grounded {
            PlayerState::Walk
        } else {
            PlayerState::Fall
        }
    }

    /// Face the move input; turning on the ground plays the turn animation.
    fn face_input(&mut self) {
        if actions::face_toward(&mut self.ctx.facing, self.input.move_axis)
            && self.ctx.sensors.grounded
        {
            self.ctx.cue(PresentationCue::Turn);
        }
    }

    fn run(&mut self, smoothing: f32) {
        self.face_input();
        actions::move_horizontal(
            &mut *self.body,
            &mut self.ctx.smoothing_velocity,
            self.input.move_axis,
            self.tuning.run_speed,
            smoothing,
            self.dt,
        );
    }

    /// Jump guards only pass when the impulse can actually be computed, so
    /// a bad height leaves the current state and its timers alone.
    fn can_jump(&self, height: f32) -> bool {
        match actions::jump_impulse(self.body.mass(), self.body.effective_gravity(), height) {
            Ok(_) => true,
            Err(err) => {
                error!("Jump refused: {err}");
                false
            }
        }
    }

    fn jump(&mut self, height: f32) {
        if let Err(err) = actions::jump(&mut *self.body, height) {
            error!("Jump skipped: {err}");
        }
    }

    /// Common entry for both attack flavours. Returns the signed lunge speed.
    fn begin_attack(&mut self, slot: HitboxSlot, motion: &AttackMotion) -> f32 {
        self.face_input();
        self.body.set_velocity(Vec2::ZERO);
        self.ctx.open_attack_window(slot, self.now, motion.hitbox_time);
        self.ctx.facing.sign() * motion.lunge_speed
    }

    fn lunge(&mut self, started_at: f32, lunge: f32, motion: &AttackMotion) {
        let lunging = self.now - started_at <= motion.forward_time && !self.ctx.sensors.on_edge;
        self.body.set_velocity_x(if lunging { lunge } else { 0.0 });
    }
}

impl PlayerState {
    pub fn dash() -> Self {
        PlayerState::Dash { started_at: 0.0 }
    }

    pub fn attack(kind: AttackKind) -> Self {
        PlayerState::Attack {
            kind,
            started_at: 0.0,
            lunge: 0.0,
        }
    }

    pub fn charge_attack() -> Self {
        PlayerState::ChargeAttack {
            started_at: 0.0,
            lunge: 0.0,
        }
    }

    pub fn knockback(duration: f32) -> Self {
        PlayerState::Knockback {
            duration,
            started_at: 0.0,
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            PlayerState::Walk => StateKind::Walk,
            PlayerState::Sit => StateKind::Sit,
            PlayerState::Jump => StateKind::Jump,
            PlayerState::Fall => StateKind::Fall,
            PlayerState::Wall => StateKind::Wall,
            PlayerState::WallJump => StateKind::WallJump,
            PlayerState::Dash { .. } => StateKind::Dash,
            PlayerState::Attack { .. } => StateKind::Attack,
            PlayerState::ChargeAttack { .. } => StateKind::ChargeAttack,
            PlayerState::Knockback { .. } => StateKind::Knockback,
            PlayerState::Death => StateKind::Death,
        }
    }

    /// Frame hook: pick the next state, if any.
    pub fn transitions(&self, cx: &mut PlayerCx) -> Option<PlayerState> {
        let velocity = cx.body.velocity();
        let sensors = cx.ctx.sensors;
        let jump_buffered = cx.ctx.timers.jump_buffer.is_active();
        let dash = cx.dash_requested() && cx.can_dash();

        match self {
            PlayerState::Walk => {
                ground_transitions(cx).or(cx.input.sit_pressed.then_some(PlayerState::Sit))
            }
            PlayerState::Sit => {
                let stand = cx.input.sit_pressed || cx.input.move_axis != 0.0;
                ground_transitions(cx).or(stand.then_some(PlayerState::Walk))
            }
            PlayerState::Jump => {
                if velocity.y < 0.0 && sensors.on_wall {
                    Some(PlayerState::Wall)
                } else if velocity.y < 0.0 {
                    Some(PlayerState::Fall)
                } else if dash {
                    Some(PlayerState::dash())
                } else {
                    None
                }
            }
            PlayerState::Fall => {
                if sensors.grounded {
                    Some(PlayerState::Walk)
                } else if sensors.on_wall {
                    Some(PlayerState::Wall)
                } else if cx.ctx.timers.coyote.is_active()
                    && jump_buffered
                    && cx.can_jump(cx.tuning.jump_height)
                {
                    Some(PlayerState::Jump)
                } else if cx.ctx.timers.wall_coyote.is_active()
                    && jump_buffered
                    && cx.can_jump(cx.tuning.wall_jump_height)
                {
                    Some(PlayerState::WallJump)
                } else if dash {
                    Some(PlayerState::dash())
                } else {
                    None
                }
            }
            PlayerState::Wall => {
                if sensors.grounded {
                    Some(PlayerState::Walk)
                } else if !sensors.on_wall {
                    cx.ctx.timers.wall_coyote.arm();
                    Some(PlayerState::Fall)
                } else if jump_buffered && cx.can_jump(cx.tuning.wall_jump_height) {
                    Some(PlayerState::WallJump)
                } else {
                    None
                }
            }
            PlayerState::WallJump => {
                if velocity.y < 0.0 {
                    Some(PlayerState::Fall)
                } else if dash {
                    Some(PlayerState::dash())
                } else {
                    None
                }
            }
            PlayerState::Dash { started_at } => {
                (cx.now - started_at >= cx.tuning.dash_time).then(|| cx.landing_state())
            }
            PlayerState::Attack {
                kind, started_at, ..
            } => combo_transitions(cx, *started_at, cx.tuning.attack(*kind)),
            PlayerState::ChargeAttack { started_at, .. } => {
                combo_transitions(cx, *started_at, &cx.tuning.attacks.charge)
            }
            PlayerState::Knockback {
                duration,
                started_at,
            } => {
                let expired = cx.now - started_at >= *duration;
                let landed = sensors.grounded && velocity.y < 0.0;
                (expired || landed).then(|| cx.landing_state())
            }
            PlayerState::Death => None,
        }
    }

    /// Physics hook, run once per fixed tick after the sensor refresh.
    pub fn physics_tick(&mut self, cx: &mut PlayerCx) {
        let tuning = cx.tuning;
        match self {
            PlayerState::Walk | PlayerState::Sit => cx.run(tuning.ground_smoothing),
            PlayerState::Jump | PlayerState::WallJump => {
                cx.run(tuning.air_smoothing);
                if !cx.input.jump_held {
                    actions::jump_cut(&mut *cx.body, tuning.jump_cut_rate);
                }
            }
            PlayerState::Fall => {
                cx.run(tuning.air_smoothing);
                actions::clamp_fall(&mut *cx.body, tuning.fall_speed_limit);
                cx.ctx.fall_time += cx.dt;
                let fall_time = cx.ctx.fall_time;
                cx.ctx.cue(PresentationCue::FallTime(fall_time));
            }
            PlayerState::Wall => {
                cx.run(tuning.ground_smoothing);
                actions::wall_slide(&mut *cx.body, tuning.wall_slide_velocity);
            }
            PlayerState::Dash { .. } => {
                actions::dash_velocity(&mut *cx.body, cx.ctx.facing, tuning.dash_speed)
            }
            PlayerState::Attack {
                kind,
                started_at,
                lunge,
            } => cx.lunge(*started_at, *lunge, tuning.attack(*kind)),
            PlayerState::ChargeAttack { started_at, lunge } => {
                cx.lunge(*started_at, *lunge, &tuning.attacks.charge)
            }
            PlayerState::Knockback { .. } => {
                actions::clamp_fall(&mut *cx.body, tuning.fall_speed_limit)
            }
            PlayerState::Death => cx.body.set_velocity_x(0.0),
        }
    }
}

/// Walk's guards, shared with Sit.
fn ground_transitions(cx: &mut PlayerCx) -> Option<PlayerState> {
    if cx.ctx.timers.jump_buffer.is_active() && cx.can_jump(cx.tuning.jump_height) {
        return Some(PlayerState::Jump);
    }
    if !cx.ctx.sensors.grounded {
        cx.ctx.timers.coyote.arm();
        return Some(PlayerState::Fall);
    }
    if cx.dash_requested() && cx.can_dash() {
        return Some(PlayerState::dash());
    }
    if cx.input.attack_pressed {
        return Some(PlayerState::attack(AttackKind::from_vertical(
            cx.input.vertical_axis,
        )));
    }
    if cx.input.attack_released && cx.ctx.timers.charge.is_charged() {
        return Some(PlayerState::charge_attack());
    }
    None
}

/// Chaining during the trailing combo window, then back to locomotion.
fn combo_transitions(cx: &PlayerCx, started_at: f32, motion: &AttackMotion) -> Option<PlayerState> {
    let elapsed = cx.now - started_at;
    if elapsed >= motion.total_time - motion.combo_time {
        if cx.input.attack_pressed {
            return Some(PlayerState::attack(AttackKind::from_vertical(
                cx.input.vertical_axis,
            )));
        }
        if cx.dash_requested() && cx.can_dash() {
            return Some(PlayerState::dash());
        }
    }
    (elapsed >= motion.total_time).then(|| cx.landing_state())
}

impl MachineState<PlayerCx<'_>> for PlayerState {
    fn on_enter(&mut self, cx: &mut PlayerCx<'_>) {
        let now = cx.now;
        let tuning = cx.tuning;
        match self {
            PlayerState::Walk => {
                cx.pose(Pose::Walking, true);
                cx.ctx.refill_dash();
            }
            PlayerState::Sit => {
                cx.pose(Pose::Walking, true);
                cx.pose(Pose::Sitting, true);
                cx.ctx.refill_dash();
            }
            PlayerState::Jump => {
                cx.ctx.timers.jump_buffer.clear();
                cx.ctx.timers.coyote.clear();
                cx.jump(tuning.jump_height);
                cx.pose(Pose::Jumping, true);
                cx.ctx.cue(PresentationCue::JumpDust);
            }
            PlayerState::WallJump => {
                cx.ctx.timers.jump_buffer.clear();
                cx.ctx.timers.wall_coyote.clear();
                cx.jump(tuning.wall_jump_height);
                cx.pose(Pose::Jumping, true);
            }
            PlayerState::Fall => cx.pose(Pose::Falling, true),
            PlayerState::Wall => {
                cx.pose(Pose::OnWall, true);
                cx.ctx.refill_dash();
                cx.ctx.cue(PresentationCue::WallDust(true));
            }
            PlayerState::Dash { started_at } => {
                *started_at = now;
                cx.face_input();
                cx.ctx.timers.dash_buffer.clear();
                cx.ctx.air_dash_used = true;
                actions::begin_dash(&mut *cx.body);
                cx.health
                    .set_invincible_for(now, tuning.dash_time + tuning.dash_invincibility_margin);
                cx.pose(Pose::Dashing, true);
                cx.ctx.cue(PresentationCue::DashTrail(true));
            }
            PlayerState::Attack {
                kind,
                started_at,
                lunge,
            } => {
                *started_at = now;
                *lunge = cx.begin_attack(HitboxSlot::Attack(*kind), tuning.attack(*kind));
                cx.pose(Pose::Attacking(*kind), true);
            }
            PlayerState::ChargeAttack { started_at, lunge } => {
                *started_at = now;
                *lunge = cx.begin_attack(HitboxSlot::Charge, &tuning.attacks.charge);
                cx.ctx.timers.charge.reset();
                cx.pose(Pose::ChargeAttacking, true);
            }
            PlayerState::Knockback {
                duration,
                started_at,
            } => {
                *started_at = now;
                cx.health
                    .set_invincible_for(now, *duration + tuning.invincible_time);
                cx.ctx.timers.charge.reset();
                cx.pose(Pose::KnockedBack, true);
            }
            PlayerState::Death => {
                cx.ctx.close_attack_window();
                cx.body.set_velocity_x(0.0);
                cx.ctx.cue(PresentationCue::Died);
            }
        }
    }

    fn on_exit(&mut self, cx: &mut PlayerCx<'_>) {
        match self {
            PlayerState::Walk => {
                cx.pose(Pose::Walking, false);
                cx.ctx.cue(PresentationCue::ClearTurn);
            }
            PlayerState::Sit => {
                cx.pose(Pose::Sitting, false);
                cx.pose(Pose::Walking, false);
                cx.ctx.cue(PresentationCue::ClearTurn);
            }
            PlayerState::Jump | PlayerState::WallJump => cx.pose(Pose::Jumping, false),
            PlayerState::Fall => {
                cx.pose(Pose::Falling, false);
                if cx.ctx.sensors.grounded {
                    cx.ctx.cue(PresentationCue::LandingDust);
                }
                cx.ctx.fall_time = 0.0;
                cx.ctx.cue(PresentationCue::FallTime(0.0));
            }
            PlayerState::Wall => {
                cx.pose(Pose::OnWall, false);
                cx.ctx.cue(PresentationCue::WallDust(false));
            }
            PlayerState::Dash { .. } => {
                cx.pose(Pose::Dashing, false);
                cx.ctx.cue(PresentationCue::DashTrail(false));
                actions::end_dash(&mut *cx.body, cx.tuning.gravity_scale);
                cx.ctx.last_dash_time = cx.now;
            }
            PlayerState::Attack { kind, .. } => {
                cx.ctx.close_attack_window();
                cx.pose(Pose::Attacking(*kind), false);
                cx.ctx.alt_attack = !cx.ctx.alt_attack;
                cx.ctx.cue(PresentationCue::ToggleAltAttack);
            }
            PlayerState::ChargeAttack { .. } => {
                cx.ctx.close_attack_window();
                cx.pose(Pose::ChargeAttacking, false);
            }
            PlayerState::Knockback { .. } => cx.pose(Pose::KnockedBack, false),
            PlayerState::Death => {}
        }
    }
}

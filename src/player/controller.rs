//! Player domain: the controller component that drives the state machine.
//!
//! Bevy systems call [`PlayerController::tick`] once per frame and
//! [`PlayerController::fixed_tick`] once per physics step. Sensor readings
//! are only refreshed in the physics step, so frame decisions may see them
//! up to one step old.

use bevy::prelude::*;

use crate::combat::Health;
use crate::content::PlayerTuning;
use crate::error::ControllerError;
use crate::fsm::StateMachine;
use crate::movement::{CharacterBody, InputSnapshot, SensorAnchors, SensorProbe, sensors};
use crate::player::{PlayerContext, PlayerCx, PlayerState, PresentationCue, StateKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnockbackRequest {
    pub velocity: Vec2,
    pub duration: f32,
    pub damage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnockbackOutcome {
    Applied,
    Invincible,
    Dead,
    Uninitialized,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    machine: StateMachine<PlayerState>,
    context: PlayerContext,
    tuning: PlayerTuning,
    clock: f32,
}

impl PlayerController {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            machine: StateMachine::new(PlayerState::Walk),
            context: PlayerContext::new(&tuning),
            tuning,
            clock: 0.0,
        }
    }

    /// Enter the default state. Call once, after the body and health exist.
    pub fn initialize(
        &mut self,
        body: &mut dyn CharacterBody,
        health: &mut Health,
    ) -> Result<(), ControllerError> {
        let input = InputSnapshot::default();
        let mut cx = PlayerCx {
            ctx: &mut self.context,
            tuning: &self.tuning,
            input: &input,
            body,
            health,
            now: self.clock,
            dt: 0.0,
        };
        self.machine.initialize(&mut cx)
    }

    /// Frame tick: advance the clock and input-driven timers, then evaluate
    /// transitions. Returns the state entered, if any.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        body: &mut dyn CharacterBody,
        health: &mut Health,
    ) -> Option<StateKind> {
        if !self.machine.is_initialized() {
            return None;
        }
        let dt = dt.max(0.0);
        self.clock += dt;
        let now = self.clock;

        let timers = &mut self.context.timers;
        timers.jump_buffer.decay(dt);
        if input.jump_pressed {
            timers.jump_buffer.arm();
        }
        timers.dash_buffer.decay(dt);
        if input.dash_pressed {
            timers.dash_buffer.arm();
        }
        let was_charged = timers.charge.is_charged();
        if input.attack_pressed {
            timers.charge.press();
        } else {
            timers.charge.advance(input.attack_held, dt);
        }
        self.context.expire_attack_window(now);

        let mut cx = PlayerCx {
            ctx: &mut self.context,
            tuning: &self.tuning,
            input,
            body,
            health,
            now,
            dt,
        };

        let in_death = matches!(self.machine.current(), Some(PlayerState::Death));
        let next = if cx.health.is_dead() && !in_death {
            Some(PlayerState::Death)
        } else {
            self.machine
                .current()
                .and_then(|state| state.transitions(&mut cx))
        };

        let entered = next.map(|next| {
            let from = self.machine.current().map(PlayerState::kind);
            let to = next.kind();
            self.machine.transition_to(next, &mut cx);
            debug!("Player state {:?} -> {:?}", from, to);
            to
        });

        if input.attack_released {
            cx.ctx.timers.charge.reset();
        }
        let charged = cx.ctx.timers.charge.is_charged();
        if charged && !was_charged {
            trace!("Attack charged after {:.2}s", cx.ctx.timers.charge.held_for());
        }
        if charged != was_charged {
            cx.ctx.cue(PresentationCue::ChargeReady(charged));
        }
        entered
    }

    /// Physics tick: refresh the sensor cache and memory timers, then run the
    /// current state's physics hook.
    #[allow(clippy::too_many_arguments)]
    pub fn fixed_tick(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        probe: &impl SensorProbe,
        anchors: &SensorAnchors,
        origin: Vec2,
        body: &mut dyn CharacterBody,
        health: &mut Health,
    ) {
        if !self.machine.is_initialized() {
            return;
        }
        let readings = sensors::sense(probe, anchors, origin, self.context.facing, body.velocity());
        self.context.sensors = readings;
        self.context.timers.coyote.track(readings.grounded, dt);
        self.context.timers.wall_coyote.track(readings.on_wall, dt);

        let mut cx = PlayerCx {
            ctx: &mut self.context,
            tuning: &self.tuning,
            input,
            body,
            health,
            now: self.clock,
            dt,
        };
        if let Some(state) = self.machine.current_mut() {
            state.physics_tick(&mut cx);
        }
    }

    /// External knockback entry point. Ignored while invincible or dead;
    /// otherwise overrides velocity, applies damage and enters Knockback.
    pub fn knockback(
        &mut self,
        request: KnockbackRequest,
        input: &InputSnapshot,
        body: &mut dyn CharacterBody,
        health: &mut Health,
    ) -> KnockbackOutcome {
        if !self.machine.is_initialized() {
            return KnockbackOutcome::Uninitialized;
        }
        let now = self.clock;
        if health.is_dead() {
            return KnockbackOutcome::Dead;
        }
        if health.is_invincible(now) {
            return KnockbackOutcome::Invincible;
        }

        body.set_velocity(request.velocity);
        if request.damage > 0.0 {
            health.damage(request.damage);
            self.context.cue(PresentationCue::Hurt);
        }

        let mut cx = PlayerCx {
            ctx: &mut self.context,
            tuning: &self.tuning,
            input,
            body,
            health,
            now,
            dt: 0.0,
        };
        self.machine
            .transition_to(PlayerState::knockback(request.duration), &mut cx);
        KnockbackOutcome::Applied
    }

    /// Swap in new tuning values, keeping runtime state.
    pub fn retune(&mut self, tuning: PlayerTuning) {
        self.context.timers.retune(&tuning);
        self.tuning = tuning;
    }

    pub fn can_dash(&self) -> bool {
        self.context.can_dash(self.clock, self.tuning.dash_cooldown)
    }

    pub fn state(&self) -> Option<&PlayerState> {
        self.machine.current()
    }

    pub fn state_kind(&self) -> Option<StateKind> {
        self.machine.current().map(PlayerState::kind)
    }

    pub fn context(&self) -> &PlayerContext {
        &self.context
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn take_cues(&mut self) -> Vec<PresentationCue> {
        self.context.take_cues()
    }
}

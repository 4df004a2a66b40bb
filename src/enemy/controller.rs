//! Enemy domain: the wolf controller component.

use bevy::prelude::*;

use crate::content::WolfTuning;
use crate::enemy::{WolfBrain, WolfCx, WolfState, WolfStateKind};
use crate::error::ControllerError;
use crate::fsm::StateMachine;
use crate::movement::{CharacterBody, Facing, SensorAnchors, SensorProbe, sensors};

#[derive(Component, Debug, Clone)]
pub struct WolfController {
    machine: StateMachine<WolfState>,
    brain: WolfBrain,
    tuning: WolfTuning,
    clock: f32,
}

impl WolfController {
    /// `seed` drives the pause and windup jitter.
    pub fn new(tuning: WolfTuning, seed: u64) -> Self {
        Self {
            machine: StateMachine::new(WolfState::Idle),
            brain: WolfBrain::new(seed),
            tuning,
            clock: 0.0,
        }
    }

    pub fn initialize(
        &mut self,
        body: &mut dyn CharacterBody,
        origin: Vec2,
        target: Option<Vec2>,
    ) -> Result<(), ControllerError> {
        let mut cx = WolfCx {
            brain: &mut self.brain,
            tuning: &self.tuning,
            body,
            origin,
            target,
            now: self.clock,
            dt: 0.0,
        };
        self.machine.initialize(&mut cx)
    }

    pub fn tick(
        &mut self,
        dt: f32,
        origin: Vec2,
        target: Option<Vec2>,
        body: &mut dyn CharacterBody,
    ) -> Option<WolfStateKind> {
        if !self.machine.is_initialized() {
            return None;
        }
        let dt = dt.max(0.0);
        self.clock += dt;
        let now = self.clock;
        if self
            .brain
            .strike
            .is_some_and(|strike| strike.closes.has_passed(now))
        {
            self.brain.cancel_strike();
        }

        let mut cx = WolfCx {
            brain: &mut self.brain,
            tuning: &self.tuning,
            body,
            origin,
            target,
            now,
            dt,
        };
        let next = self
            .machine
            .current_mut()
            .and_then(|state| state.frame(&mut cx))?;

        let from = self.machine.current().map(WolfState::kind);
        let to = next.kind();
        self.machine.transition_to(next, &mut cx);
        debug!("Wolf state {:?} -> {:?}", from, to);
        Some(to)
    }

    pub fn fixed_tick(
        &mut self,
        dt: f32,
        probe: &impl SensorProbe,
        anchors: &SensorAnchors,
        origin: Vec2,
        target: Option<Vec2>,
        body: &mut dyn CharacterBody,
    ) {
        if !self.machine.is_initialized() {
            return;
        }
        self.brain.sensors =
            sensors::sense(probe, anchors, origin, self.brain.facing, body.velocity());

        let mut cx = WolfCx {
            brain: &mut self.brain,
            tuning: &self.tuning,
            body,
            origin,
            target,
            now: self.clock,
            dt,
        };
        if let Some(state) = self.machine.current_mut() {
            state.physics_tick(&mut cx);
        }
    }

    /// Push from a player hit. Steering stays off for `stagger_time`.
    pub fn stagger(&mut self, push: Vec2, body: &mut dyn CharacterBody) {
        body.set_velocity_x(push.x * self.tuning.knockback_modifier);
        self.brain.smoothing_velocity = 0.0;
        self.brain.stagger(self.clock, self.tuning.stagger_time);
    }

    pub fn retune(&mut self, tuning: WolfTuning) {
        self.tuning = tuning;
    }

    pub fn strike_open(&self) -> bool {
        self.brain.strike_open(self.clock)
    }

    pub fn facing(&self) -> Facing {
        self.brain.facing
    }

    pub fn state(&self) -> Option<&WolfState> {
        self.machine.current()
    }

    pub fn state_kind(&self) -> Option<WolfStateKind> {
        self.machine.current().map(WolfState::kind)
    }

    pub fn brain(&self) -> &WolfBrain {
        &self.brain
    }

    pub fn tuning(&self) -> &WolfTuning {
        &self.tuning
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }
}

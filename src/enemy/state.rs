//! Enemy domain: the wolf's states.
//!
//! Idle until the player comes close, chase, wind up a bite, pause, repeat.

use bevy::prelude::*;

use crate::content::WolfTuning;
use crate::enemy::WolfBrain;
use crate::fsm::MachineState;
use crate::movement::{CharacterBody, actions};

/// How a melee windup resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Windup {
    Pending,
    Struck,
    /// The player left attack range before the bite.
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WolfStateKind {
    Idle,
    Pursue,
    Pause,
    Melee,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WolfState {
    Idle,
    Pursue,
    Pause {
        started_at: f32,
        duration: f32,
    },
    Melee {
        started_at: f32,
        windup: f32,
        outcome: Windup,
    },
}

pub struct WolfCx<'a> {
    pub brain: &'a mut WolfBrain,
    pub tuning: &'a WolfTuning,
    pub body: &'a mut dyn CharacterBody,
    pub origin: Vec2,
    /// Where the player is, if there is a live one to chase.
    pub target: Option<Vec2>,
    pub now: f32,
    pub dt: f32,
}

impl WolfCx<'_> {
    fn distance(&self) -> f32 {
        self.target
            .map_or(f32::INFINITY, |target| self.origin.distance(target))
    }

    fn in_pursue_range(&self) -> bool {
        self.distance() <= self.tuning.pursue_range
    }

    fn in_melee_range(&self) -> bool {
        self.distance() <= self.tuning.melee_range
    }

    fn in_attack_range(&self) -> bool {
        self.distance() <= self.tuning.attack_range
    }

    fn face_target(&mut self) {
        if let Some(target) = self.target {
            actions::face_toward(&mut self.brain.facing, target.x - self.origin.x);
        }
    }

    fn stop(&mut self) {
        self.body.set_velocity_x(0.0);
        self.brain.smoothing_velocity = 0.0;
    }

    fn hop(&mut self) {
        let target_x = self.origin.x + self.brain.facing.sign() * self.tuning.hop_distance;
        if let Err(err) =
            actions::jump_arc_to(&mut *self.body, self.tuning.hop_height, self.origin.x, target_x)
        {
            error!("Wolf hop skipped: {err}");
        }
    }

    fn chase(&mut self) {
        let sensors = self.brain.sensors;
        if sensors.on_edge {
            self.stop();
        } else if sensors.on_wall && sensors.grounded {
            self.hop();
        } else {
            actions::move_horizontal(
                &mut *self.body,
                &mut self.brain.smoothing_velocity,
                self.brain.facing.sign(),
                self.tuning.move_speed,
                self.tuning.smoothing,
                self.dt,
            );
        }
    }
}

impl WolfState {
    pub fn pause() -> Self {
        WolfState::Pause {
            started_at: 0.0,
            duration: 0.0,
        }
    }

    pub fn melee() -> Self {
        WolfState::Melee {
            started_at: 0.0,
            windup: 0.0,
            outcome: Windup::Pending,
        }
    }

    pub fn kind(&self) -> WolfStateKind {
        match self {
            WolfState::Idle => WolfStateKind::Idle,
            WolfState::Pursue => WolfStateKind::Pursue,
            WolfState::Pause { .. } => WolfStateKind::Pause,
            WolfState::Melee { .. } => WolfStateKind::Melee,
        }
    }

    /// Frame hook. Melee resolves its windup here, so this may update the
    /// state's own payload before picking the next state.
    pub fn frame(&mut self, cx: &mut WolfCx) -> Option<WolfState> {
        match self {
            WolfState::Idle => cx.in_pursue_range().then_some(WolfState::Pursue),
            WolfState::Pursue => {
                if !cx.in_pursue_range() {
                    Some(WolfState::Idle)
                } else if cx.in_melee_range() {
                    Some(WolfState::melee())
                } else {
                    None
                }
            }
            WolfState::Pause {
                started_at,
                duration,
            } => {
                if cx.now - *started_at < *duration {
                    None
                } else if cx.in_melee_range() {
                    Some(WolfState::melee())
                } else if cx.in_pursue_range() {
                    Some(WolfState::Pursue)
                } else {
                    Some(WolfState::Idle)
                }
            }
            WolfState::Melee {
                started_at,
                windup,
                outcome,
            } => {
                let elapsed = cx.now - *started_at;
                if *outcome == Windup::Pending && elapsed >= *windup {
                    if cx.in_attack_range() {
                        cx.brain
                            .schedule_strike(cx.now, cx.tuning.strike_delay, cx.tuning.strike_time);
                        *outcome = Windup::Struck;
                    } else {
                        *outcome = Windup::Aborted;
                        return Some(WolfState::Pursue);
                    }
                }
                (elapsed >= cx.tuning.melee_time).then(WolfState::pause)
            }
        }
    }

    /// Physics hook, run after the sensor refresh.
    pub fn physics_tick(&mut self, cx: &mut WolfCx) {
        match self {
            WolfState::Idle | WolfState::Melee { .. } => {}
            WolfState::Pursue => {
                cx.face_target();
                if !cx.brain.is_staggered(cx.now) {
                    cx.chase();
                }
            }
            WolfState::Pause { .. } => cx.face_target(),
        }
        actions::clamp_fall(&mut *cx.body, cx.tuning.fall_speed_limit);
    }
}

impl MachineState<WolfCx<'_>> for WolfState {
    fn on_enter(&mut self, cx: &mut WolfCx<'_>) {
        let now = cx.now;
        match self {
            WolfState::Idle => cx.stop(),
            WolfState::Pursue => {}
            WolfState::Pause {
                started_at,
                duration,
            } => {
                *started_at = now;
                *duration = cx.tuning.attack_pause_time + cx.brain.roll(cx.tuning.pause_jitter);
                cx.stop();
            }
            WolfState::Melee {
                started_at,
                windup,
                outcome,
            } => {
                *started_at = now;
                *windup = cx.tuning.windup_time + cx.brain.roll_around(cx.tuning.windup_jitter);
                *outcome = Windup::Pending;
                cx.stop();
            }
        }
    }

    fn on_exit(&mut self, cx: &mut WolfCx<'_>) {
        if let WolfState::Melee { .. } = self {
            cx.brain.cancel_strike();
        }
    }
}

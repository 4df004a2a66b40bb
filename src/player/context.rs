//! Player domain: runtime data shared by every player state.

use crate::content::PlayerTuning;
use crate::movement::{AssistTimer, ChargeHold, Deadline, Facing, SensorReadings};
use crate::player::{AttackKind, PresentationCue};

/// Which hitbox shape an attack window drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitboxSlot {
    Attack(AttackKind),
    Charge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackWindow {
    /// Unique per opened window so hit bookkeeping can tell them apart.
    pub id: u32,
    pub slot: HitboxSlot,
    pub deadline: Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssistTimers {
    pub coyote: AssistTimer,
    pub wall_coyote: AssistTimer,
    pub jump_buffer: AssistTimer,
    pub dash_buffer: AssistTimer,
    pub charge: ChargeHold,
}

impl AssistTimers {
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            coyote: AssistTimer::new(tuning.coyote_time),
            wall_coyote: AssistTimer::new(tuning.wall_coyote_time),
            jump_buffer: AssistTimer::new(tuning.jump_buffer),
            dash_buffer: AssistTimer::new(tuning.dash_buffer),
            charge: ChargeHold::new(tuning.charge_time),
        }
    }

    pub fn retune(&mut self, tuning: &PlayerTuning) {
        self.coyote.set_max(tuning.coyote_time);
        self.wall_coyote.set_max(tuning.wall_coyote_time);
        self.jump_buffer.set_max(tuning.jump_buffer);
        self.dash_buffer.set_max(tuning.dash_buffer);
        self.charge.set_threshold(tuning.charge_time);
    }
}

#[derive(Debug, Clone)]
pub struct PlayerContext {
    pub facing: Facing,
    pub sensors: SensorReadings,
    pub timers: AssistTimers,
    /// Set when a dash starts, cleared on touching ground or a wall.
    pub air_dash_used: bool,
    pub last_dash_time: f32,
    pub fall_time: f32,
    pub attack_window: Option<AttackWindow>,
    pub alt_attack: bool,
    /// Smooth-damp spring state for horizontal movement.
    pub smoothing_velocity: f32,
    next_window_id: u32,
    cues: Vec<PresentationCue>,
}

impl PlayerContext {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            facing: Facing::Right,
            sensors: SensorReadings::default(),
            timers: AssistTimers::from_tuning(tuning),
            air_dash_used: false,
            last_dash_time: f32::NEG_INFINITY,
            fall_time: 0.0,
            attack_window: None,
            alt_attack: false,
            smoothing_velocity: 0.0,
            next_window_id: 0,
            cues: Vec::new(),
        }
    }

    pub fn can_dash(&self, now: f32, cooldown: f32) -> bool {
        !self.air_dash_used && now >= self.last_dash_time + cooldown
    }

    pub fn refill_dash(&mut self) {
        self.air_dash_used = false;
    }

    /// Opens a fresh window, replacing any pending one.
    pub fn open_attack_window(&mut self, slot: HitboxSlot, now: f32, duration: f32) -> u32 {
        self.next_window_id = self.next_window_id.wrapping_add(1);
        self.attack_window = Some(AttackWindow {
            id: self.next_window_id,
            slot,
            deadline: Deadline::after(now, duration),
        });
        self.next_window_id
    }

    pub fn close_attack_window(&mut self) {
        self.attack_window = None;
    }

    pub fn expire_attack_window(&mut self, now: f32) {
        if self
            .attack_window
            .is_some_and(|window| window.deadline.has_passed(now))
        {
            self.attack_window = None;
        }
    }

    pub fn cue(&mut self, cue: PresentationCue) {
        self.cues.push(cue);
    }

    pub fn take_cues(&mut self) -> Vec<PresentationCue> {
        std::mem::take(&mut self.cues)
    }
}

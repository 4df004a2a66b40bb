//! Enemy domain: runtime data shared by every wolf state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::movement::{Deadline, Facing, SensorReadings};

/// Scheduled strike: the hitbox is live from `opens_at` until `closes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeWindow {
    pub opens_at: f32,
    pub closes: Deadline,
}

impl StrikeWindow {
    pub fn is_open(&self, now: f32) -> bool {
        now >= self.opens_at && !self.closes.has_passed(now)
    }
}

#[derive(Debug, Clone)]
pub struct WolfBrain {
    pub facing: Facing,
    pub sensors: SensorReadings,
    pub strike: Option<StrikeWindow>,
    /// Steering is suspended until this passes.
    pub stagger: Option<Deadline>,
    pub smoothing_velocity: f32,
    rng: ChaCha8Rng,
}

impl WolfBrain {
    pub fn new(seed: u64) -> Self {
        Self {
            facing: Facing::Right,
            sensors: SensorReadings::default(),
            strike: None,
            stagger: None,
            smoothing_velocity: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, spread]`.
    pub fn roll(&mut self, spread: f32) -> f32 {
        if spread > 0.0 {
            self.rng.random_range(0.0..=spread)
        } else {
            0.0
        }
    }

    /// Uniform sample in `[-spread, spread]`.
    pub fn roll_around(&mut self, spread: f32) -> f32 {
        if spread > 0.0 {
            self.rng.random_range(-spread..=spread)
        } else {
            0.0
        }
    }

    /// Replaces any pending strike.
    pub fn schedule_strike(&mut self, now: f32, delay: f32, duration: f32) {
        let opens_at = now + delay.max(0.0);
        self.strike = Some(StrikeWindow {
            opens_at,
            closes: Deadline::after(opens_at, duration),
        });
    }

    pub fn cancel_strike(&mut self) {
        self.strike = None;
    }

    pub fn strike_open(&self, now: f32) -> bool {
        self.strike.is_some_and(|strike| strike.is_open(now))
    }

    pub fn stagger(&mut self, now: f32, duration: f32) {
        self.stagger = Some(Deadline::after(now, duration));
    }

    pub fn is_staggered(&self, now: f32) -> bool {
        self.stagger.is_some_and(|until| !until.has_passed(now))
    }
}

//! Movement domain: assist timers for coyote time, input buffers and charge.

/// Countdown clamped to `[0, max]`.
///
/// Used two ways: as a grace timer (`arm` on an input edge, `decay` every
/// tick) or as a memory timer (`track` a condition every tick, staying at
/// max while it holds).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssistTimer {
    value: f32,
    max: f32,
}

impl AssistTimer {
    pub fn new(max: f32) -> Self {
        Self {
            value: 0.0,
            max: max.max(0.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.value = self.value.min(self.max);
    }

    pub fn arm(&mut self) {
        self.value = self.max;
    }

    pub fn decay(&mut self, dt: f32) {
        self.value = (self.value - dt.max(0.0)).clamp(0.0, self.max);
    }

    pub fn track(&mut self, condition: bool, dt: f32) {
        if condition {
            self.arm();
        } else {
            self.decay(dt);
        }
    }

    pub fn is_active(&self) -> bool {
        self.value > 0.0
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

/// Stopwatch measuring how long the attack input has been held.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChargeHold {
    held_for: f32,
    threshold: f32,
    holding: bool,
}

impl ChargeHold {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            ..Self::default()
        }
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold.max(0.0);
    }

    /// Restart on a press edge.
    pub fn press(&mut self) {
        self.holding = true;
        self.held_for = 0.0;
    }

    pub fn advance(&mut self, held: bool, dt: f32) {
        if self.holding && held {
            self.held_for += dt.max(0.0);
        }
    }

    pub fn held_for(&self) -> f32 {
        self.held_for
    }

    pub fn is_charged(&self) -> bool {
        self.holding && self.held_for >= self.threshold
    }

    pub fn reset(&mut self) {
        self.holding = false;
        self.held_for = 0.0;
    }
}

/// Absolute instant on a controller clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deadline {
    at: f32,
}

impl Deadline {
    pub fn after(now: f32, duration: f32) -> Self {
        Self {
            at: now + duration.max(0.0),
        }
    }

    pub fn at(&self) -> f32 {
        self.at
    }

    pub fn has_passed(&self, now: f32) -> bool {
        now >= self.at
    }

    pub fn remaining(&self, now: f32) -> f32 {
        (self.at - now).max(0.0)
    }
}

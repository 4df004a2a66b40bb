//! Combat domain: health, invincibility and hit bookkeeping.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Invincibility {
    #[default]
    Off,
    /// Until this instant on the owner's clock.
    Until(f32),
    Indefinite,
}

/// Hit points with a one-way death latch and a single invincibility window.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    /// Multiplies every incoming damage amount.
    pub damage_modifier: f32,
    dead: bool,
    invincibility: Invincibility,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            damage_modifier: 1.0,
            dead: false,
            invincibility: Invincibility::Off,
        }
    }

    /// Returns the damage actually taken. Nothing happens once dead.
    pub fn damage(&mut self, amount: f32) -> f32 {
        if self.dead {
            return 0.0;
        }
        let actual = (amount * self.damage_modifier).max(0.0).min(self.current);
        self.current -= actual;
        if self.current <= 0.0 {
            self.dead = true;
        }
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.dead {
            return 0.0;
        }
        let actual = amount.max(0.0).min(self.max - self.current);
        self.current += actual;
        actual
    }

    /// Open-ended toggle, independent of any clock.
    pub fn set_invincible(&mut self, on: bool) {
        self.invincibility = if on {
            Invincibility::Indefinite
        } else {
            Invincibility::Off
        };
    }

    /// Replaces any current window; the latest request wins.
    pub fn set_invincible_for(&mut self, now: f32, duration: f32) {
        self.invincibility = Invincibility::Until(now + duration.max(0.0));
    }

    pub fn is_invincible(&self, now: f32) -> bool {
        match self.invincibility {
            Invincibility::Off => false,
            Invincibility::Until(end) => now < end,
            Invincibility::Indefinite => true,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn percent(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Targets already struck by the current attack window.
#[derive(Component, Debug, Default)]
pub struct HitboxContacts {
    window: Option<u32>,
    struck: Vec<Entity>,
}

impl HitboxContacts {
    /// Records a hit on `target` for `window`. Returns false if it was
    /// already struck during that window.
    pub fn register(&mut self, window: u32, target: Entity) -> bool {
        if self.window != Some(window) {
            self.window = Some(window);
            self.struck.clear();
        }
        if self.struck.contains(&target) {
            return false;
        }
        self.struck.push(target);
        true
    }
}

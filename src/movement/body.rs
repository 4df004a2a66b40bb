//! Movement domain: the rigid-body surface the controllers steer.
//!
//! Controllers only ever talk to [`CharacterBody`]; [`AvianBody`] adapts the
//! avian components of one entity for the duration of a system call.

use avian2d::prelude::*;
use bevy::prelude::*;

pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous momentum change: `velocity += impulse / mass`.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn mass(&self) -> f32;
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    /// World gravity before scaling.
    fn world_gravity(&self) -> Vec2;

    /// Vertical gravity actually felt by this body.
    fn effective_gravity(&self) -> f32 {
        self.world_gravity().y * self.gravity_scale()
    }

    fn set_velocity_x(&mut self, x: f32) {
        let velocity = self.velocity();
        self.set_velocity(Vec2::new(x, velocity.y));
    }

    fn set_velocity_y(&mut self, y: f32) {
        let velocity = self.velocity();
        self.set_velocity(Vec2::new(velocity.x, y));
    }
}

pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity_scale: &'a mut GravityScale,
    pub mass: &'a ComputedMass,
    pub gravity: Vec2,
}

impl CharacterBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        let mass = self.mass();
        if mass > 0.0 {
            self.velocity.0 += impulse / mass;
        }
    }

    fn mass(&self) -> f32 {
        let mass = self.mass.value();
        if mass.is_finite() && mass > 0.0 { mass } else { 0.0 }
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn world_gravity(&self) -> Vec2 {
        self.gravity
    }
}

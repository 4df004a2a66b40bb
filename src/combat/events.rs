//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Player attack connecting with a target.
#[derive(Debug, Clone)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

/// Enemy strike connecting with the player. Routed into the player's own
/// frame tick as a knockback request.
#[derive(Debug, Clone)]
pub struct HitEvent {
    pub source: Entity,
    pub target: Entity,
    pub damage: f32,
    pub knockback_velocity: Vec2,
    pub knockback_time: f32,
}

impl Message for HitEvent {}

#[derive(Debug, Clone)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

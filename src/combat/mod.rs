//! Combat domain: health, hit routing and hitbox overlaps.

use bevy::prelude::*;

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Health, HitboxContacts, Team};
pub use events::{DamageEvent, DeathEvent, HitEvent};
pub use systems::{hitbox_center, push_direction};

use crate::movement::{ControllerSet, PhysicsSet};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<HitEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                FixedUpdate,
                (systems::player_hitbox_overlaps, systems::enemy_hitbox_overlaps)
                    .in_set(PhysicsSet::Strike),
            )
            .add_systems(
                Update,
                (systems::apply_damage, systems::despawn_dead_enemies)
                    .chain()
                    .in_set(ControllerSet::Decide),
            );
    }
}

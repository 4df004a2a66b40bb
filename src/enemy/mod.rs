//! Enemy domain: the wolf brain, its controller and systems.

use bevy::prelude::*;

mod brain;
mod controller;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use brain::{StrikeWindow, WolfBrain};
pub use controller::WolfController;
pub use state::{Windup, WolfCx, WolfState, WolfStateKind};
pub use systems::spawn_wolf;

use crate::content::WolfTuning;
use crate::movement::{ControllerSet, PhysicsSet};

#[derive(Component, Debug, Default)]
pub struct Wolf;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::initialize_wolves,
                systems::retune_wolves.run_if(resource_changed::<WolfTuning>),
                systems::wolf_frame_tick,
            )
                .chain()
                .in_set(ControllerSet::Decide),
        )
        .add_systems(
            FixedUpdate,
            systems::wolf_physics_tick.in_set(PhysicsSet::Steer),
        );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, systems::spawn_practice_wolf);
    }
}

//! Movement domain: physics layers, sensing, assist timers and the actions
//! every controller shares.

use bevy::prelude::*;

pub mod actions;
mod body;
mod components;
#[cfg(feature = "dev-tools")]
pub(crate) mod dev;
mod input;
pub mod sensors;
pub(crate) mod systems;
mod timers;

#[cfg(test)]
mod tests;

pub use body::{AvianBody, CharacterBody};
pub use components::{Facing, GameLayer, Ground, Player, Wall};
pub use input::InputSnapshot;
pub use sensors::{AvianProbe, ProbeShape, SensorAnchors, SensorProbe, SensorReadings};
pub use timers::{AssistTimer, ChargeHold, Deadline};

/// Ordering of the controller pipeline inside `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample devices into [`InputSnapshot`].
    Input,
    /// Advance clocks and evaluate transitions.
    Decide,
    /// Consume presentation cues.
    Present,
}

/// Ordering of controller work inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Refresh sensors and apply state physics.
    Steer,
    /// Overlap active hitboxes against their targets.
    Strike,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .configure_sets(
                Update,
                (ControllerSet::Input, ControllerSet::Decide, ControllerSet::Present).chain(),
            )
            .configure_sets(FixedUpdate, (PhysicsSet::Steer, PhysicsSet::Strike).chain())
            .add_systems(Update, systems::read_input.in_set(ControllerSet::Input));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}

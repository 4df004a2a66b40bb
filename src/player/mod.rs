//! Player domain: context, state catalog, controller and cues.

use bevy::prelude::*;

mod context;
mod controller;
mod cues;
mod state;
mod systems;


pub use context::{AssistTimers, AttackWindow, HitboxSlot, PlayerContext};
pub use controller::{KnockbackOutcome, KnockbackRequest, PlayerController};
pub use cues::{PlayerCue, Pose, PresentationCue};
pub use state::{AttackKind, PlayerCx, PlayerState, StateKind};

use crate::content::PlayerTuning;
use crate::movement::{ControllerSet, PhysicsSet};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerCue>()
            .add_systems(Startup, systems::spawn_player)
            .add_systems(
                Update,
                (
                    systems::initialize_players,
                    systems::retune_players.run_if(resource_changed::<PlayerTuning>),
                    systems::player_frame_tick,
                )
                    .chain()
                    .in_set(ControllerSet::Decide),
            )
            .add_systems(
                FixedUpdate,
                systems::player_physics_tick.in_set(PhysicsSet::Steer),
            );
    }
}

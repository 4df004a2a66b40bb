//! Presentation: consumes controller cues. Nothing here feeds back into the
//! controllers.

use bevy::prelude::*;

mod animator;
mod effects;
mod systems;

#[cfg(test)]
mod tests;

pub use animator::{AnimatorParams, HURT_FLASH_TIME, pose_tint};
pub use effects::{Dust, DustKind};

use crate::movement::ControllerSet;

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::apply_player_cues,
                systems::sync_player_sprites,
                systems::sync_wolf_sprites,
                effects::fade_dust,
            )
                .chain()
                .in_set(ControllerSet::Present),
        );
    }
}

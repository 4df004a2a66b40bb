//! Presentation: cue consumption and sprite sync.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Health;
use crate::enemy::{Windup, Wolf, WolfController, WolfState};
use crate::movement::Facing;
use crate::player::{PlayerController, PlayerCue};
use crate::presentation::{AnimatorParams, DustKind, effects, pose_tint};

const HURT_TINT: Color = Color::srgb(1.0, 0.3, 0.3);
const DEAD_TINT: Color = Color::srgb(0.35, 0.35, 0.35);

pub(crate) fn apply_player_cues(
    mut commands: Commands,
    mut cues: MessageReader<PlayerCue>,
    mut players: Query<(&Transform, &PlayerController, &mut AnimatorParams)>,
) {
    for PlayerCue { entity, cue } in cues.read() {
        let Ok((transform, controller, mut params)) = players.get_mut(*entity) else {
            continue;
        };
        params.apply(*cue);
        if let Some(kind) = DustKind::from_cue(*cue) {
            effects::spawn_dust(
                &mut commands,
                kind,
                transform.translation.truncate(),
                controller.context().facing.sign(),
            );
        }
    }
}

pub(crate) fn sync_player_sprites(
    time: Res<Time>,
    mut players: Query<(&PlayerController, &Health, &mut AnimatorParams, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (controller, health, mut params, mut sprite) in &mut players {
        params.tick(dt);
        sprite.flip_x = controller.context().facing == Facing::Left;

        sprite.color = if params.dead {
            DEAD_TINT
        } else if params.hurt_flash > 0.0 {
            HURT_TINT
        } else if health.is_invincible(controller.clock()) {
            pose_tint(params.dominant()).with_alpha(0.5)
        } else {
            pose_tint(params.dominant())
        };
    }
}

pub(crate) fn sync_wolf_sprites(mut wolves: Query<(&WolfController, &mut Sprite), With<Wolf>>) {
    for (controller, mut sprite) in &mut wolves {
        sprite.flip_x = controller.facing() == Facing::Left;
        sprite.color = match controller.state() {
            _ if controller.strike_open() => Color::srgb(0.9, 0.3, 0.25),
            Some(WolfState::Melee {
                outcome: Windup::Pending,
                ..
            }) => Color::srgb(0.8, 0.7, 0.35),
            _ => Color::srgb(0.55, 0.5, 0.45),
        };
    }
}

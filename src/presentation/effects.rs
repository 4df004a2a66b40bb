//! Presentation: short-lived dust puffs.

use bevy::prelude::*;

use crate::player::PresentationCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DustKind {
    Jump,
    Landing,
    Wall,
}

impl DustKind {
    pub fn from_cue(cue: PresentationCue) -> Option<Self> {
        match cue {
            PresentationCue::JumpDust => Some(DustKind::Jump),
            PresentationCue::LandingDust => Some(DustKind::Landing),
            PresentationCue::WallDust(true) => Some(DustKind::Wall),
            _ => None,
        }
    }

    /// Offset from the body center and puff size.
    fn placement(self) -> (Vec2, Vec2) {
        match self {
            DustKind::Jump => (Vec2::new(0.0, -24.0), Vec2::new(20.0, 6.0)),
            DustKind::Landing => (Vec2::new(0.0, -24.0), Vec2::new(32.0, 6.0)),
            DustKind::Wall => (Vec2::new(12.0, 0.0), Vec2::new(6.0, 20.0)),
        }
    }
}

const DUST_LIFETIME: f32 = 0.3;
const DUST_ALPHA: f32 = 0.8;

/// Seconds left before the puff disappears.
#[derive(Component, Debug)]
pub struct Dust(pub f32);

pub(crate) fn spawn_dust(commands: &mut Commands, kind: DustKind, origin: Vec2, facing_sign: f32) {
    let (offset, size) = kind.placement();
    let position = origin + Vec2::new(offset.x * facing_sign, offset.y);
    commands.spawn((
        Dust(DUST_LIFETIME),
        Sprite {
            color: Color::srgba(0.85, 0.8, 0.7, DUST_ALPHA),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.5)),
    ));
}

pub(crate) fn fade_dust(
    mut commands: Commands,
    time: Res<Time>,
    mut puffs: Query<(Entity, &mut Dust, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut dust, mut sprite) in &mut puffs {
        dust.0 -= dt;
        if dust.0 <= 0.0 {
            commands.entity(entity).despawn();
        } else {
            sprite.color = sprite.color.with_alpha(DUST_ALPHA * dust.0 / DUST_LIFETIME);
        }
    }
}

//! Enemy domain: spawn, per-frame and per-physics-step systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Health, Team};
use crate::content::WolfTuning;
use crate::enemy::{Wolf, WolfController};
use crate::movement::{AvianBody, AvianProbe, GameLayer, Player, SensorAnchors};

const WOLF_SIZE: Vec2 = Vec2::new(40.0, 24.0);

/// Spawns one wolf at `position`. `seed` fixes its timing jitter.
pub fn spawn_wolf(
    commands: &mut Commands,
    tuning: &WolfTuning,
    position: Vec2,
    seed: u64,
) -> Entity {
    let anchors = SensorAnchors::from_layout(&tuning.sensors)
        .unwrap_or_else(|err| panic!("Cannot spawn wolf: {err}"));

    let entity = commands
        .spawn((
            // Identity & control
            (Wolf, Team::Enemy, WolfController::new(tuning.clone(), seed), anchors),
            Health::new(tuning.max_health),
            // Rendering
            (
                Sprite {
                    color: Color::srgb(0.55, 0.5, 0.45),
                    custom_size: Some(WOLF_SIZE),
                    ..default()
                },
                Transform::from_translation(position.extend(0.0)),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(WOLF_SIZE.x, WOLF_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(tuning.gravity_scale),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .id();

    info!("Spawned wolf {:?} at {:?} (seed {})", entity, position, seed);
    entity
}

#[cfg(feature = "dev-tools")]
pub(crate) fn spawn_practice_wolf(mut commands: Commands, tuning: Res<WolfTuning>) {
    spawn_wolf(&mut commands, &tuning, Vec2::new(100.0, -160.0), rand::random::<u64>());
}

/// Position of the first living player, if any.
fn living_target(players: &Query<(&Transform, &Health), With<Player>>) -> Option<Vec2> {
    players
        .iter()
        .find(|(_, health)| !health.is_dead())
        .map(|(transform, _)| transform.translation.truncate())
}

pub(crate) fn initialize_wolves(
    gravity: Res<Gravity>,
    players: Query<(&Transform, &Health), With<Player>>,
    mut wolves: Query<
        (
            Entity,
            &Transform,
            &mut WolfController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        (Added<WolfController>, Without<Player>),
    >,
) {
    let target = living_target(&players);
    for (entity, transform, mut controller, mut velocity, mut gravity_scale, mass) in &mut wolves {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };
        if let Err(err) =
            controller.initialize(&mut body, transform.translation.truncate(), target)
        {
            warn!("Wolf {:?}: {err}", entity);
        }
    }
}

pub(crate) fn retune_wolves(tuning: Res<WolfTuning>, mut wolves: Query<&mut WolfController>) {
    for mut controller in &mut wolves {
        controller.retune(tuning.clone());
    }
}

pub(crate) fn wolf_frame_tick(
    time: Res<Time>,
    gravity: Res<Gravity>,
    players: Query<(&Transform, &Health), With<Player>>,
    mut wolves: Query<
        (
            &Transform,
            &Health,
            &mut WolfController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        (With<Wolf>, Without<Player>),
    >,
) {
    let dt = time.delta_secs();
    let target = living_target(&players);

    for (transform, health, mut controller, mut velocity, mut gravity_scale, mass) in &mut wolves {
        if health.is_dead() {
            continue;
        }
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };
        controller.tick(dt, transform.translation.truncate(), target, &mut body);
    }
}

pub(crate) fn wolf_physics_tick(
    time: Res<Time>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    players: Query<(&Transform, &Health), With<Player>>,
    mut wolves: Query<
        (
            Entity,
            &Transform,
            &SensorAnchors,
            &mut WolfController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        (With<Wolf>, Without<Player>),
    >,
) {
    let dt = time.delta_secs();
    let target = living_target(&players);

    for (entity, transform, anchors, mut controller, mut velocity, mut gravity_scale, mass) in
        &mut wolves
    {
        let probe = AvianProbe::new(&spatial_query, entity);
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };
        controller.fixed_tick(
            dt,
            &probe,
            anchors,
            transform.translation.truncate(),
            target,
            &mut body,
        );
    }
}

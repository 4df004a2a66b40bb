//! Player domain: spawn, per-frame and per-physics-step systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{DeathEvent, Health, HitEvent, HitboxContacts, Team};
use crate::content::PlayerTuning;
use crate::movement::{AvianBody, AvianProbe, GameLayer, InputSnapshot, Player, SensorAnchors};
use crate::player::{KnockbackOutcome, KnockbackRequest, PlayerController, PlayerCue};
use crate::presentation::AnimatorParams;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<PlayerTuning>) {
    let anchors = SensorAnchors::from_layout(&tuning.sensors)
        .unwrap_or_else(|err| panic!("Cannot spawn player: {err}"));

    info!(
        "Spawning player: health={}, run_speed={}, jump_height={}",
        tuning.max_health, tuning.run_speed, tuning.jump_height
    );

    commands.spawn((
        // Identity & control
        (
            Player,
            Team::Player,
            PlayerController::new(tuning.clone()),
            anchors,
        ),
        // Combat
        (Health::new(tuning.max_health), HitboxContacts::default()),
        // Rendering
        (
            AnimatorParams::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(Vec2::new(24.0, 48.0)),
                ..default()
            },
            Transform::from_xyz(-250.0, -150.0, 0.0),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

pub(crate) fn initialize_players(
    gravity: Res<Gravity>,
    mut cues: MessageWriter<PlayerCue>,
    mut players: Query<
        (
            Entity,
            &mut PlayerController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &mut Health,
        ),
        Added<PlayerController>,
    >,
) {
    for (entity, mut controller, mut velocity, mut gravity_scale, mass, mut health) in &mut players
    {
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };
        match controller.initialize(&mut body, &mut health) {
            Ok(()) => debug!("Player {:?} controller initialized", entity),
            Err(err) => warn!("Player {:?}: {err}", entity),
        }
        for cue in controller.take_cues() {
            cues.write(PlayerCue { entity, cue });
        }
    }
}

pub(crate) fn retune_players(tuning: Res<PlayerTuning>, mut players: Query<&mut PlayerController>) {
    for mut controller in &mut players {
        controller.retune(tuning.clone());
    }
}

pub(crate) fn player_frame_tick(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    gravity: Res<Gravity>,
    mut hits: MessageReader<HitEvent>,
    mut cues: MessageWriter<PlayerCue>,
    mut deaths: MessageWriter<DeathEvent>,
    mut players: Query<
        (
            Entity,
            &mut PlayerController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &mut Health,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let hits: Vec<HitEvent> = hits.read().cloned().collect();

    for (entity, mut controller, mut velocity, mut gravity_scale, mass, mut health) in &mut players
    {
        let was_dead = health.is_dead();
        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };

        for hit in hits.iter().filter(|hit| hit.target == entity) {
            let request = KnockbackRequest {
                velocity: hit.knockback_velocity,
                duration: hit.knockback_time,
                damage: hit.damage,
            };
            match controller.knockback(request, &input, &mut body, &mut health) {
                KnockbackOutcome::Applied => debug!(
                    "Player hit by {:?}: damage={}, health={:.0}%",
                    hit.source,
                    hit.damage,
                    health.percent() * 100.0
                ),
                outcome => trace!("Hit from {:?} ignored: {:?}", hit.source, outcome),
            }
        }

        controller.tick(dt, &input, &mut body, &mut health);

        for cue in controller.take_cues() {
            cues.write(PlayerCue { entity, cue });
        }
        if !was_dead && health.is_dead() {
            info!("Player {:?} died", entity);
            deaths.write(DeathEvent { entity });
        }
    }
}

pub(crate) fn player_physics_tick(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut cues: MessageWriter<PlayerCue>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &SensorAnchors,
            &mut PlayerController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &mut Health,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (
        entity,
        transform,
        anchors,
        mut controller,
        mut velocity,
        mut gravity_scale,
        mass,
        mut health,
    ) in &mut players
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
            &input,
            &probe,
            anchors,
            transform.translation.truncate(),
            &mut body,
            &mut health,
        );
        for cue in controller.take_cues() {
            cues.write(PlayerCue { entity, cue });
        }
    }
}

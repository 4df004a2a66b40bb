//! Combat domain: hitbox overlaps, damage application and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{DamageEvent, DeathEvent, Health, HitEvent, HitboxContacts};
use crate::content::vec2;
use crate::enemy::{Wolf, WolfController};
use crate::movement::{AvianBody, Facing, GameLayer, Player};
use crate::player::{HitboxSlot, PlayerController};

/// World-space center of a hitbox whose offset is given for a right-facing rig.
pub fn hitbox_center(origin: Vec2, offset: Vec2, facing: Facing) -> Vec2 {
    origin + Vec2::new(offset.x * facing.sign(), offset.y)
}

/// Sign pushing `target` away from `source` along x. Ties push along `facing`.
pub fn push_direction(source: Vec2, target: Vec2, facing: Facing) -> f32 {
    let dx = target.x - source.x;
    if dx == 0.0 {
        facing.sign()
    } else {
        dx.signum()
    }
}

pub(crate) fn player_hitbox_overlaps(
    spatial_query: SpatialQuery,
    mut damage_events: MessageWriter<DamageEvent>,
    mut players: Query<(Entity, &Transform, &PlayerController, &mut HitboxContacts), With<Player>>,
) {
    for (entity, transform, controller, mut contacts) in &mut players {
        let Some(window) = controller.context().attack_window else {
            continue;
        };
        if window.deadline.has_passed(controller.clock()) {
            continue;
        }

        let tuning = controller.tuning();
        let motion = match window.slot {
            HitboxSlot::Attack(kind) => tuning.attack(kind),
            HitboxSlot::Charge => &tuning.attacks.charge,
        };
        let facing = controller.context().facing;
        let center = hitbox_center(
            transform.translation.truncate(),
            vec2(motion.hitbox_offset),
            facing,
        );
        let size = vec2(motion.hitbox_size);
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Enemy).with_excluded_entities([entity]);
        let hits = spatial_query.shape_intersections(
            &Collider::rectangle(size.x, size.y),
            center,
            0.0,
            &filter,
        );

        for target in hits {
            if !contacts.register(window.id, target) {
                continue;
            }
            let amount = tuning.attack_damage * motion.damage_multiplier;
            debug!(
                "Player {:?} hit {:?} with {:?}: damage={}, window closes in {:.2}s",
                entity,
                target,
                window.slot,
                amount,
                window.deadline.remaining(controller.clock())
            );
            damage_events.write(DamageEvent {
                source: entity,
                target,
                amount,
                knockback: Vec2::new(facing.sign() * motion.knockback, 0.0),
            });
        }
    }
}

pub(crate) fn enemy_hitbox_overlaps(
    spatial_query: SpatialQuery,
    mut hit_events: MessageWriter<HitEvent>,
    wolves: Query<(Entity, &Transform, &WolfController, &Health), With<Wolf>>,
    players: Query<&Transform, With<Player>>,
) {
    for (entity, transform, controller, health) in &wolves {
        if health.is_dead() || !controller.strike_open() {
            continue;
        }
        let tuning = controller.tuning();
        let origin = transform.translation.truncate();
        let facing = controller.facing();
        let center = hitbox_center(origin, vec2(tuning.hitbox_offset), facing);
        let size = vec2(tuning.hitbox_size);
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Player).with_excluded_entities([entity]);
        let hits = spatial_query.shape_intersections(
            &Collider::rectangle(size.x, size.y),
            center,
            0.0,
            &filter,
        );

        for target in hits {
            let Ok(target_transform) = players.get(target) else {
                continue;
            };
            let direction =
                push_direction(origin, target_transform.translation.truncate(), facing);
            let knockback = vec2(tuning.knockback);
            hit_events.write(HitEvent {
                source: entity,
                target,
                damage: tuning.damage,
                knockback_velocity: Vec2::new(direction * knockback.x, knockback.y),
                knockback_time: tuning.knockback_time,
            });
        }
    }
}

pub(crate) fn apply_damage(
    gravity: Res<Gravity>,
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut targets: Query<
        (
            &mut Health,
            &mut WolfController,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        With<Wolf>,
    >,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut controller, mut velocity, mut gravity_scale, mass)) =
            targets.get_mut(event.target)
        else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let taken = health.damage(event.amount);
        debug!(
            "{:?} took {} damage from {:?}, health={:.0}%",
            event.target,
            taken,
            event.source,
            health.percent() * 100.0
        );

        if health.is_dead() {
            info!("{:?} died", event.target);
            death_events.write(DeathEvent {
                entity: event.target,
            });
            continue;
        }

        let mut body = AvianBody {
            velocity: &mut *velocity,
            gravity_scale: &mut *gravity_scale,
            mass,
            gravity: gravity.0,
        };
        controller.stagger(event.knockback, &mut body);
    }
}

pub(crate) fn despawn_dead_enemies(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    wolves: Query<(), With<Wolf>>,
) {
    for event in death_events.read() {
        if wolves.contains(event.entity) {
            commands.entity(event.entity).despawn();
        }
    }
}

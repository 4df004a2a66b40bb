//! Combat domain: health bookkeeping and hitbox geometry.

use bevy::prelude::*;

use super::{Health, HitboxContacts, hitbox_center, push_direction};
use crate::movement::Facing;

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_damage_scales_by_modifier_and_clamps_at_zero() {
    let mut health = Health::new(100.0);
    health.damage_modifier = 0.5;

    assert_eq!(health.damage(40.0), 20.0);
    assert_eq!(health.current, 80.0);
    assert_eq!(health.damage(1000.0), 80.0);
    assert_eq!(health.current, 0.0);
}

#[test]
fn test_death_latches() {
    let mut health = Health::new(30.0);
    health.damage(30.0);
    assert!(health.is_dead());

    assert_eq!(health.heal(10.0), 0.0);
    assert_eq!(health.damage(5.0), 0.0);
    assert!(health.is_dead());
    assert_eq!(health.current, 0.0);
}

#[test]
fn test_heal_caps_at_max() {
    let mut health = Health::new(50.0);
    health.damage(20.0);
    assert_eq!(health.heal(100.0), 20.0);
    assert_eq!(health.current, 50.0);
    assert_eq!(health.percent(), 1.0);
}

#[test]
fn test_timed_invincibility_is_replaced_by_latest_request() {
    let mut health = Health::new(10.0);
    health.set_invincible_for(1.0, 0.5);
    assert!(health.is_invincible(1.25));
    assert!(!health.is_invincible(1.5));

    health.set_invincible_for(1.25, 0.1);
    assert!(!health.is_invincible(1.4));
}

#[test]
fn test_open_ended_invincibility() {
    let mut health = Health::new(10.0);
    health.set_invincible(true);
    assert!(health.is_invincible(1.0e6));
    health.set_invincible(false);
    assert!(!health.is_invincible(0.0));
}

// -----------------------------------------------------------------------------
// Hit bookkeeping
// -----------------------------------------------------------------------------

#[test]
fn test_contacts_hit_each_target_once_per_window() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();
    let mut contacts = HitboxContacts::default();

    assert!(contacts.register(1, a));
    assert!(!contacts.register(1, a));
    assert!(contacts.register(1, b));

    // New window clears the list.
    assert!(contacts.register(2, a));
    assert!(!contacts.register(2, a));
}

#[test]
fn test_hitbox_offset_mirrors_with_facing() {
    let origin = Vec2::new(100.0, 50.0);
    let offset = Vec2::new(30.0, 8.0);

    assert_eq!(hitbox_center(origin, offset, Facing::Right), Vec2::new(130.0, 58.0));
    assert_eq!(hitbox_center(origin, offset, Facing::Left), Vec2::new(70.0, 58.0));
}

#[test]
fn test_push_direction_points_away_from_source() {
    let source = Vec2::new(0.0, 0.0);
    assert_eq!(push_direction(source, Vec2::new(-20.0, 5.0), Facing::Right), -1.0);
    assert_eq!(push_direction(source, Vec2::new(20.0, 5.0), Facing::Left), 1.0);
    assert_eq!(push_direction(source, Vec2::new(0.0, 5.0), Facing::Left), -1.0);
}

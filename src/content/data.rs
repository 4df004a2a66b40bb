//! Tuning data deserialized from `assets/data/tuning.ron`.
//!
//! Every struct is `#[serde(default)]` so a file only needs to name the
//! values it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level layout of the tuning file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub player: PlayerTuning,
    pub wolf: WolfTuning,
}

/// Player movement, timing and combat values.
///
/// Distances are world units (pixels), times are seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: f32,
    pub run_speed: f32,
    /// Smooth-damp time on the ground.
    pub ground_smoothing: f32,
    /// Smooth-damp time in the air.
    pub air_smoothing: f32,
    pub jump_height: f32,
    pub wall_jump_height: f32,
    /// Vertical velocity multiplier applied while rising with jump released.
    pub jump_cut_rate: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    /// Extra invincibility granted past the end of a dash.
    pub dash_invincibility_margin: f32,
    pub coyote_time: f32,
    pub wall_coyote_time: f32,
    pub jump_buffer: f32,
    pub dash_buffer: f32,
    pub attack_damage: f32,
    /// How long attack must be held before release triggers a charge attack.
    pub charge_time: f32,
    /// Invincibility added on top of a knockback's own duration.
    pub invincible_time: f32,
    /// Terminal downward speed (positive magnitude).
    pub fall_speed_limit: f32,
    /// Floor for vertical velocity while sliding on a wall (negative).
    pub wall_slide_velocity: f32,
    pub gravity_scale: f32,
    pub attacks: AttackSet,
    pub sensors: SensorLayout,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            run_speed: 320.0,
            ground_smoothing: 0.05,
            air_smoothing: 0.12,
            jump_height: 110.0,
            wall_jump_height: 90.0,
            jump_cut_rate: 0.5,
            dash_speed: 900.0,
            dash_time: 0.16,
            dash_cooldown: 0.35,
            dash_invincibility_margin: 0.1,
            coyote_time: 0.12,
            wall_coyote_time: 0.2,
            jump_buffer: 0.12,
            dash_buffer: 0.1,
            attack_damage: 10.0,
            charge_time: 0.6,
            invincible_time: 0.6,
            fall_speed_limit: 900.0,
            wall_slide_velocity: -160.0,
            gravity_scale: 4.0,
            attacks: AttackSet::default(),
            sensors: SensorLayout::default(),
        }
    }
}

/// Motion and hitbox data for one attack.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackMotion {
    pub total_time: f32,
    /// Leading part of the attack during which the lunge velocity applies.
    pub forward_time: f32,
    /// Trailing part of the attack during which a new attack or dash chains.
    pub combo_time: f32,
    pub lunge_speed: f32,
    pub hitbox_time: f32,
    /// Offset from the body center, x mirrored by facing.
    pub hitbox_offset: [f32; 2],
    pub hitbox_size: [f32; 2],
    pub damage_multiplier: f32,
    /// Horizontal push given to whatever the hitbox connects with.
    pub knockback: f32,
}

impl Default for AttackMotion {
    fn default() -> Self {
        Self {
            total_time: 0.5,
            forward_time: 0.2,
            combo_time: 0.1,
            lunge_speed: 160.0,
            hitbox_time: 0.2,
            hitbox_offset: [30.0, 0.0],
            hitbox_size: [40.0, 36.0],
            damage_multiplier: 1.0,
            knockback: 260.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackSet {
    pub regular: AttackMotion,
    pub up: AttackMotion,
    pub down: AttackMotion,
    pub charge: AttackMotion,
}

impl Default for AttackSet {
    fn default() -> Self {
        Self {
            regular: AttackMotion::default(),
            up: AttackMotion {
                lunge_speed: 0.0,
                hitbox_offset: [0.0, 38.0],
                hitbox_size: [36.0, 40.0],
                knockback: 120.0,
                ..default()
            },
            down: AttackMotion {
                lunge_speed: 0.0,
                hitbox_offset: [0.0, -38.0],
                hitbox_size: [36.0, 40.0],
                knockback: 120.0,
                ..default()
            },
            charge: AttackMotion {
                total_time: 0.7,
                lunge_speed: 480.0,
                hitbox_time: 0.25,
                hitbox_offset: [34.0, 0.0],
                hitbox_size: [56.0, 40.0],
                damage_multiplier: 2.5,
                knockback: 480.0,
                ..default()
            },
        }
    }
}

/// Sensor probe placement relative to the body center, for a right-facing rig.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorLayout {
    pub ground_offset: [f32; 2],
    pub ground_size: [f32; 2],
    pub wall_offset: [f32; 2],
    pub wall_size: [f32; 2],
    pub edge_offset: [f32; 2],
    pub edge_radius: f32,
}

impl Default for SensorLayout {
    fn default() -> Self {
        Self {
            ground_offset: [0.0, -24.0],
            ground_size: [20.0, 4.0],
            wall_offset: [13.0, 0.0],
            wall_size: [4.0, 36.0],
            edge_offset: [14.0, -26.0],
            edge_radius: 3.0,
        }
    }
}

/// Enemy AI, movement and strike values for the wolf.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WolfTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub pursue_range: f32,
    pub melee_range: f32,
    /// The strike is abandoned if the player is farther than this at the end of windup.
    pub attack_range: f32,
    pub attack_pause_time: f32,
    pub pause_jitter: f32,
    pub windup_time: f32,
    pub windup_jitter: f32,
    pub melee_time: f32,
    pub strike_delay: f32,
    pub strike_time: f32,
    pub damage: f32,
    pub knockback: [f32; 2],
    pub knockback_time: f32,
    /// Scales the push received from player hits.
    pub knockback_modifier: f32,
    /// How long a hit stops the wolf from steering.
    pub stagger_time: f32,
    /// Jump used to clear a wall while pursuing.
    pub hop_height: f32,
    pub hop_distance: f32,
    pub fall_speed_limit: f32,
    pub gravity_scale: f32,
    pub smoothing: f32,
    pub hitbox_offset: [f32; 2],
    pub hitbox_size: [f32; 2],
    pub sensors: SensorLayout,
}

impl Default for WolfTuning {
    fn default() -> Self {
        Self {
            max_health: 30.0,
            move_speed: 140.0,
            pursue_range: 260.0,
            melee_range: 60.0,
            attack_range: 80.0,
            attack_pause_time: 0.6,
            pause_jitter: 0.5,
            windup_time: 1.0,
            windup_jitter: 0.2,
            melee_time: 2.0,
            strike_delay: 0.1,
            strike_time: 0.1,
            damage: 10.0,
            knockback: [320.0, 260.0],
            knockback_time: 0.3,
            knockback_modifier: 1.0,
            stagger_time: 0.25,
            hop_height: 60.0,
            hop_distance: 48.0,
            fall_speed_limit: 900.0,
            gravity_scale: 4.0,
            smoothing: 0.08,
            hitbox_offset: [26.0, 0.0],
            hitbox_size: [30.0, 20.0],
            sensors: SensorLayout {
                ground_offset: [0.0, -12.0],
                ground_size: [30.0, 4.0],
                wall_offset: [21.0, 0.0],
                wall_size: [4.0, 16.0],
                edge_offset: [22.0, -14.0],
                edge_radius: 3.0,
            },
        }
    }
}

impl PlayerTuning {
    /// Motion for the given attack kind.
    pub fn attack(&self, kind: crate::player::AttackKind) -> &AttackMotion {
        use crate::player::AttackKind;
        match kind {
            AttackKind::Regular => &self.attacks.regular,
            AttackKind::Up => &self.attacks.up,
            AttackKind::Down => &self.attacks.down,
        }
    }
}

pub(crate) fn vec2(pair: [f32; 2]) -> Vec2 {
    Vec2::new(pair[0], pair[1])
}

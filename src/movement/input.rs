//! Movement domain: the per-frame input snapshot.

use bevy::prelude::*;

/// Input sampled once per frame. `*_pressed` / `*_released` are edges,
/// `*_held` is level.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_axis: f32,
    pub vertical_axis: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
    pub attack_held: bool,
    pub attack_released: bool,
    pub sit_pressed: bool,
}

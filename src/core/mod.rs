//! Core: camera, physics clock and world gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics steps per second.
pub const FIXED_HZ: f64 = 60.0;

/// Downward world gravity before per-body scaling.
pub const WORLD_GRAVITY: f32 = 450.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

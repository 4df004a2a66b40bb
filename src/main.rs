use avian2d::prelude::*;
use bevy::prelude::*;

use ledgewalker::{combat, content, core, enemy, movement, player, presentation};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ledgewalker".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            player::PlayerPlugin,
            enemy::EnemyPlugin,
            presentation::PresentationPlugin,
        ))
        .run();
}

//! Movement domain: debug-only practice arena.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Clone, Copy)]
enum Surface {
    Floor,
    Side,
}

fn spawn_block(commands: &mut Commands, surface: Surface, center: Vec2, size: Vec2) {
    let (layer, color) = match surface {
        Surface::Floor => (GameLayer::Ground, Color::srgb(0.4, 0.5, 0.4)),
        Surface::Side => (GameLayer::Wall, Color::srgb(0.3, 0.3, 0.4)),
    };
    let mut block = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Enemy]),
    ));
    match surface {
        Surface::Floor => block.insert(Ground),
        Surface::Side => block.insert(Wall),
    };
}

/// Floor with a pit, two boundary walls, a ledge and a wall-jump pillar.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Floor split by a pit on the right
    spawn_block(&mut commands, Surface::Floor, Vec2::new(-120.0, -200.0), Vec2::new(560.0, 40.0));
    spawn_block(&mut commands, Surface::Floor, Vec2::new(330.0, -200.0), Vec2::new(140.0, 40.0));

    // Boundary walls
    spawn_block(&mut commands, Surface::Side, Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0));
    spawn_block(&mut commands, Surface::Side, Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0));

    // Ledges for coyote-time practice
    spawn_block(&mut commands, Surface::Floor, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0));
    spawn_block(&mut commands, Surface::Floor, Vec2::new(0.0, 100.0), Vec2::new(120.0, 20.0));

    // Pillar for wall sliding and wall jumps
    spawn_block(&mut commands, Surface::Side, Vec2::new(-100.0, -40.0), Vec2::new(30.0, 240.0));

    info!("Spawned practice arena");
}

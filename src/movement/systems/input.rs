//! Movement domain: input sampling for locomotion and combat.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<InputSnapshot>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis picks up/down attacks
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    *input = InputSnapshot {
        move_axis: x,
        vertical_axis: y,
        jump_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyK),
        jump_held: keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK),
        dash_pressed: keyboard.just_pressed(KeyCode::ShiftLeft)
            || keyboard.just_pressed(KeyCode::KeyJ),
        attack_pressed: mouse.just_pressed(MouseButton::Left)
            || keyboard.just_pressed(KeyCode::KeyU),
        attack_held: mouse.pressed(MouseButton::Left) || keyboard.pressed(KeyCode::KeyU),
        attack_released: mouse.just_released(MouseButton::Left)
            || keyboard.just_released(KeyCode::KeyU),
        sit_pressed: keyboard.just_pressed(KeyCode::KeyX),
    };
}

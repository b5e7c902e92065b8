//! Input handling systems
//!
//! Touches and left clicks feed the tap interpreter; keyboard shortcuts mirror
//! the toolbar and simulate a device shake.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ar::bevy_engine::BevyArEngine;
use crate::ar::controller::DiceController;
use crate::ar::engine::SceneEvents;
use crate::ar::types::{MotionShakeEnded, ToolbarButton};

/// Deliver each touch-down (or left click) to the controller
pub fn handle_tap_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    toolbar_buttons: Query<&Interaction, With<ToolbarButton>>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    let clicked = mouse.just_pressed(MouseButton::Left);
    let mut points: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();

    if !clicked && points.is_empty() {
        return;
    }

    // Presses on the toolbar belong to the UI, not the scene.
    if toolbar_buttons.iter().any(|i| *i != Interaction::None) {
        return;
    }

    if clicked {
        // A click with the cursor outside the window arrives with no point.
        if let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) {
            points.push(cursor);
        }
    }

    let outcome = controller.on_touch(&mut engine, &points);
    debug!("Tap resolved to {:?}", outcome);
}

/// `R` rolls every die, `Delete`/`Backspace` clears, `Space` simulates a shake.
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut shake_events: MessageWriter<MotionShakeEnded>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        controller.roll_all(&mut engine);
    }

    if keyboard.just_pressed(KeyCode::Delete) || keyboard.just_pressed(KeyCode::Backspace) {
        controller.clear_all(&mut engine);
    }

    if keyboard.just_pressed(KeyCode::Space) {
        shake_events.write(MotionShakeEnded);
    }
}

//! Session lifecycle systems
//!
//! The app window plays the role of the AR view: it appears at startup,
//! disappears when it loses focus and reappears when focus returns.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowFocused};

use crate::ar::bevy_engine::BevyArEngine;
use crate::ar::controller::DiceController;

/// View will appear for the first time.
pub fn start_session_on_startup(mut controller: ResMut<DiceController>, mut engine: BevyArEngine) {
    controller.start_session(&mut engine);
}

/// Pause on focus loss, resume on focus gain.
pub fn sync_session_with_window_focus(
    mut focus_events: MessageReader<WindowFocused>,
    primary_window: Query<(), With<PrimaryWindow>>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    for event in focus_events.read() {
        if primary_window.get(event.window).is_err() {
            continue;
        }

        if event.focused {
            controller.start_session(&mut engine);
        } else {
            controller.pause_session(&mut engine);
        }
    }
}

//! Status line shown in the top-left corner

use bevy::prelude::*;

use crate::ar::controller::DiceController;
use crate::ar::systems::tracking::TrackingSession;
use crate::ar::types::StatusText;

/// Hint text for the current session state.
pub fn status_message(running: bool, detected_planes: usize, placed: usize) -> String {
    if !running {
        return String::from("Session paused");
    }
    if detected_planes == 0 {
        return String::from("Move the device to find a surface");
    }
    match placed {
        0 => String::from("Tap the grid to place a die"),
        1 => String::from("1 die placed\nTap it to roll, shake or press R to roll all"),
        n => format!("{n} dice placed\nTap one to roll it, shake or press R to roll all"),
    }
}

/// System to update the status text
pub fn update_status_text(
    controller: Res<DiceController>,
    tracking: Res<TrackingSession>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    if !controller.is_changed() && !tracking.is_changed() {
        return;
    }

    let message = status_message(
        tracking.is_running(),
        tracking.detected_planes(),
        controller.registry().len(),
    );

    for mut text in text_query.iter_mut() {
        if text.0 != message {
            text.0 = message.clone();
        }
    }
}

use bevy::prelude::*;

use crate::ar::controller::DiceController;
use crate::ar::embedded_assets::ArDiceEmbeddedAssetsPlugin;
use crate::ar::systems::*;
use crate::ar::types::{AnchorAdded, ArDiceConfig, MotionShakeEnded};

/// Wires the placement controller, simulated tracking and UI shell into an app.
///
/// Expects `DefaultPlugins`, the rapier physics plugin and `MaterialUiPlugin`
/// to be added first.
pub struct ArDicePlugin {
    pub config: ArDiceConfig,
}

impl ArDicePlugin {
    pub fn new(config: ArDiceConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ArDicePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ArDiceEmbeddedAssetsPlugin)
            .add_message::<AnchorAdded>()
            .add_message::<MotionShakeEnded>()
            .insert_resource(self.config.clone())
            .insert_resource(DiceController::new(&self.config))
            .insert_resource(ShakeDetector::new(self.config.shake))
            .init_resource::<TrackingSession>()
            .insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.11)))
            .add_systems(
                Startup,
                (
                    load_dice_assets,
                    setup_scene,
                    setup_toolbar,
                    start_session_on_startup,
                )
                    .chain(),
            )
            .add_systems(PreUpdate, ensure_buttons_have_interaction)
            .add_systems(
                Update,
                (
                    sync_session_with_window_focus,
                    advance_simulated_tracking,
                    handle_anchor_added,
                    handle_tap_input,
                    handle_toolbar_clicks,
                    handle_keyboard_shortcuts,
                    detect_mouse_shake,
                    handle_motion_shake,
                    animate_rolls,
                    update_status_text,
                )
                    .chain(),
            );
    }
}

//! Systems module for the AR dice demo
//!
//! This module contains all the Bevy systems, organized into submodules by
//! functionality:
//!
//! - `setup`: Asset preloading and scene initialization (camera, lights, status text)
//! - `lifecycle`: Starting and pausing the tracking session with the window
//! - `tracking`: Simulated tracking session and anchor delivery
//! - `input`: Taps, clicks and keyboard shortcuts
//! - `shake`: Mouse shake detection and shake-to-roll
//! - `toolbar`: Roll / Clear buttons
//! - `animation`: Roll animation playback
//! - `status`: Status text

mod animation;
mod input;
mod lifecycle;
mod setup;
pub mod shake;
mod status;
mod toolbar;
pub mod tracking;

// Re-export all public systems
pub use animation::animate_rolls;
pub use input::{handle_keyboard_shortcuts, handle_tap_input};
pub use lifecycle::{start_session_on_startup, sync_session_with_window_focus};
pub use setup::{load_dice_assets, setup_scene};
pub use shake::{detect_mouse_shake, handle_motion_shake, ShakeDetector};
pub use status::{status_message, update_status_text};
pub use toolbar::{ensure_buttons_have_interaction, handle_toolbar_clicks, setup_toolbar};
pub use tracking::{
    advance_simulated_tracking, estimated_plane_hit, handle_anchor_added, TrackingSession,
};

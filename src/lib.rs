//! AR Dice
//!
//! Tap a detected horizontal plane to place a die, tap a die (or shake) to
//! re-roll. The interaction core lives in [`ar::controller`] and talks to the
//! rendering/tracking engine only through the [`ar::engine::ArEngine`] trait;
//! [`ar::bevy_engine`] adapts it to Bevy.

pub mod ar;

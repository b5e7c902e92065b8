//! Type definitions for the AR dice demo
//!
//! This module is organized into submodules:
//! - `anchor` - Tracked anchors (planes and points) and the anchor-added message
//! - `dice` - Placed die components, roll draws and roll animation state
//! - `session` - Tracking configuration and session lifecycle
//! - `config` - Application configuration (RON file + defaults)
//! - `ui` - Toolbar and status text components

pub mod anchor;
pub mod config;
pub mod dice;
pub mod session;
pub mod ui;

// Re-export all public types for convenient access
pub use anchor::*;
pub use config::*;
pub use dice::*;
pub use session::*;
pub use ui::*;

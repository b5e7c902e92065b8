pub mod bevy_engine;
pub mod controller;
pub mod embedded_assets;
pub mod engine;
pub mod plane_visual;
pub mod plugin;
pub mod registry;
pub mod systems;
pub mod types;

pub use bevy_engine::*;
pub use controller::*;
pub use embedded_assets::*;
pub use engine::*;
pub use plane_visual::*;
pub use plugin::*;
pub use registry::*;
pub use systems::*;
pub use types::*;

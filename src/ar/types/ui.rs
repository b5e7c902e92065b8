//! UI components
//!
//! Markers for the toolbar buttons, the status line and the AR camera.

use bevy::prelude::*;

/// Marker component for the camera standing in for the device camera
#[derive(Component)]
pub struct MainCamera;

/// Commands the UI shell exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Re-roll every placed die.
    Refresh,
    /// Remove every placed die.
    Clear,
}

impl ToolbarAction {
    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::Refresh => "Roll",
            ToolbarAction::Clear => "Clear",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ToolbarButton(pub ToolbarAction);

/// Marker for the status text in the top-left corner
#[derive(Component)]
pub struct StatusText;

/// Marker for grid visuals built for detected planes
#[derive(Component, Debug, Clone, Copy)]
pub struct PlaneMarker {
    pub anchor_id: u64,
}

/// Written when the device (or the simulated one) stops shaking.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct MotionShakeEnded;

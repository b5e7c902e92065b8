//! Application configuration
//!
//! Settings are read from an optional RON file. Every field has a default so a
//! partial file (or no file at all) is valid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::{PlaneAlignment, PlaneAnchor, RollSettings};
use crate::ar::embedded_assets::{DICE_TEMPLATE_PATH, GRID_TEXTURE_PATH};

/// Name of the node cloned out of the template scene for every placed die.
pub const DEFAULT_TEMPLATE_NODE: &str = "Dice";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// A plane the simulated tracking session will report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneSpec {
    pub id: u64,
    /// World position of the anchor.
    pub position: [f32; 3],
    /// Plane center in anchor space.
    #[serde(default)]
    pub center: [f32; 3],
    /// Width (x) and depth (z) of the plane.
    pub extent: [f32; 2],
    #[serde(default)]
    pub alignment: PlaneAlignment,
    #[serde(default = "default_appear_after_secs")]
    pub appear_after_secs: f32,
}

impl PlaneSpec {
    pub fn to_anchor(&self) -> PlaneAnchor {
        PlaneAnchor {
            id: self.id,
            alignment: self.alignment,
            center: Vec3::from_array(self.center),
            extent: Vec3::new(self.extent[0], 0.0, self.extent[1]),
            transform: Transform::from_translation(Vec3::from_array(self.position)),
        }
    }
}

/// A feature point the simulated tracking session will report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
    pub id: u64,
    pub position: [f32; 3],
    #[serde(default = "default_appear_after_secs")]
    pub appear_after_secs: f32,
}

fn default_appear_after_secs() -> f32 {
    1.0
}

/// Simulated tracking: what gets detected and how estimated-plane hit-tests behave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingSettings {
    /// Height of the estimated horizontal plane used by plane hit-tests.
    pub estimated_floor_y: f32,
    /// Hit-tests further than this from the camera miss.
    pub max_hit_distance: f32,
    pub planes: Vec<PlaneSpec>,
    pub points: Vec<PointSpec>,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            estimated_floor_y: 0.0,
            max_hit_distance: 5.0,
            planes: vec![PlaneSpec {
                id: 1,
                position: [0.0, 0.0, -0.5],
                center: [0.0, 0.0, 0.0],
                extent: [1.2, 0.8],
                alignment: PlaneAlignment::Horizontal,
                appear_after_secs: 1.5,
            }],
            points: vec![PointSpec {
                id: 100,
                position: [0.3, 0.2, -0.8],
                appear_after_secs: 0.8,
            }],
        }
    }
}

/// Mouse shake detection thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeSettings {
    /// Horizontal cursor movement per frame (logical px) that counts as motion.
    pub min_step_px: f32,
    /// Direction reversals needed inside `window_secs` to count as a shake.
    pub min_reversals: usize,
    pub window_secs: f32,
    /// Time without motion after a shake before the motion is considered ended.
    pub settle_secs: f32,
}

impl Default for ShakeSettings {
    fn default() -> Self {
        Self {
            min_step_px: 6.0,
            min_reversals: 4,
            window_secs: 0.8,
            settle_secs: 0.25,
        }
    }
}

/// Top-level application configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArDiceConfig {
    #[serde(default = "default_template_asset")]
    pub template_asset: String,

    #[serde(default = "default_template_node")]
    pub template_node: String,

    #[serde(default = "default_grid_texture")]
    pub grid_texture: String,

    /// Attach the grid visual built for each detected plane to the scene.
    #[serde(default = "default_true")]
    pub attach_plane_visuals: bool,

    /// CSS color tinting the plane grid.
    #[serde(default = "default_plane_color")]
    pub plane_color: String,

    /// Fallback collider half size when the template mesh has no bounds.
    #[serde(default = "default_die_half_extent")]
    pub die_half_extent: f32,

    /// Fixed seed for roll draws; random when absent.
    #[serde(default)]
    pub roll_seed: Option<u64>,

    #[serde(default)]
    pub roll: RollSettings,

    #[serde(default)]
    pub tracking: TrackingSettings,

    #[serde(default)]
    pub shake: ShakeSettings,
}

fn default_template_asset() -> String {
    DICE_TEMPLATE_PATH.to_string()
}

fn default_template_node() -> String {
    DEFAULT_TEMPLATE_NODE.to_string()
}

fn default_grid_texture() -> String {
    GRID_TEXTURE_PATH.to_string()
}

fn default_true() -> bool {
    true
}

fn default_plane_color() -> String {
    "#ffffffd9".to_string()
}

fn default_die_half_extent() -> f32 {
    0.05
}

impl Default for ArDiceConfig {
    fn default() -> Self {
        Self {
            template_asset: default_template_asset(),
            template_node: default_template_node(),
            grid_texture: default_grid_texture(),
            attach_plane_visuals: true,
            plane_color: default_plane_color(),
            die_half_extent: default_die_half_extent(),
            roll_seed: None,
            roll: RollSettings::default(),
            tracking: TrackingSettings::default(),
            shake: ShakeSettings::default(),
        }
    }
}

impl ArDiceConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load settings from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Plane grid tint; falls back to translucent white on an unparseable color.
    pub fn plane_tint(&self) -> Color {
        match csscolorparser::parse(&self.plane_color) {
            Ok(c) => {
                let [r, g, b, a] = c.to_array();
                Color::srgba(r as f32, g as f32, b as f32, a as f32)
            }
            Err(err) => {
                warn!("Invalid plane_color {:?}: {err}", self.plane_color);
                Color::srgba(1.0, 1.0, 1.0, 0.85)
            }
        }
    }
}

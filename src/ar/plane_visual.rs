//! Grid visual for a detected plane
//!
//! The visual is a flat rectangle the size of the plane's extent. The
//! rectangle mesh faces +Z, so it is tipped -90 degrees about X to lie on the
//! surface.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::ar::types::PlaneAnchor;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaneVisual {
    pub anchor_id: u64,
    pub width: f32,
    pub height: f32,
    /// Offset from the anchor origin.
    pub translation: Vec3,
    pub rotation: Quat,
    pub texture: String,
}

impl PlaneVisual {
    pub fn for_anchor(anchor: &PlaneAnchor, texture: &str) -> Self {
        Self {
            anchor_id: anchor.id,
            width: anchor.extent.x,
            height: anchor.extent.z,
            translation: Vec3::new(anchor.center.x, 0.0, anchor.center.z),
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            texture: texture.to_string(),
        }
    }

    /// Transform relative to the anchor.
    pub fn local_transform(&self) -> Transform {
        Transform::from_translation(self.translation).with_rotation(self.rotation)
    }

    /// Transform in world space for a visual parented to `anchor`.
    pub fn world_transform(&self, anchor: &PlaneAnchor) -> Transform {
        anchor.transform.mul_transform(self.local_transform())
    }
}

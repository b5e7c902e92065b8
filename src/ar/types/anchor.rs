//! Tracked anchors
//!
//! Anchors are handed to the controller for the duration of a single callback
//! and are never stored by it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Orientation of a detected surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaneAlignment {
    #[default]
    Horizontal,
    Vertical,
}

/// A detected flat surface.
///
/// `center` and `extent` are expressed in the anchor's local space; `transform`
/// places the anchor in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub id: u64,
    pub alignment: PlaneAlignment,
    pub center: Vec3,
    pub extent: Vec3,
    pub transform: Transform,
}

/// Any anchor the tracking session can report.
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    Plane(PlaneAnchor),
    /// A feature point without surface information.
    Point { id: u64, transform: Transform },
}

impl Anchor {
    pub fn id(&self) -> u64 {
        match self {
            Anchor::Plane(plane) => plane.id,
            Anchor::Point { id, .. } => *id,
        }
    }

    pub fn as_plane(&self) -> Option<&PlaneAnchor> {
        match self {
            Anchor::Plane(plane) => Some(plane),
            Anchor::Point { .. } => None,
        }
    }
}

/// Written by the tracking session each time a new anchor is added.
#[derive(Message, Clone, Debug)]
pub struct AnchorAdded(pub Anchor);

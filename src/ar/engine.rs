//! Engine seam
//!
//! [`ArEngine`] is everything the placement controller needs from the AR /
//! rendering engine. [`SceneEvents`] is the other direction: the callbacks an
//! engine adapter delivers to the controller.

use bevy::math::{Mat4, Vec2, Vec3};
use std::fmt::Debug;
use thiserror::Error;

use crate::ar::plane_visual::PlaneVisual;
use crate::ar::types::{Anchor, PlaneAnchor, RollRotation, TrackingConfiguration};

/// Where new dice are cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub asset: String,
    pub node: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("template asset not loaded: {0}")]
    AssetNotLoaded(String),
    #[error("template node not found: {node} in {asset}")]
    NodeNotFound { asset: String, node: String },
}

pub trait ArEngine {
    /// Handle to a scene node.
    type Node: Copy + Eq + Debug + Send + Sync + 'static;

    fn run_session(&mut self, configuration: &TrackingConfiguration);

    fn pause_session(&mut self);

    /// Topmost rendered node under the screen point, if any.
    fn hit_test_nodes(&mut self, screen_point: Vec2) -> Option<Self::Node>;

    /// World transform of the nearest hit against the estimated horizontal plane.
    fn hit_test_estimated_plane(&mut self, screen_point: Vec2) -> Option<Mat4>;

    /// Clone the template node into a new, detached node.
    fn instantiate_template(&mut self, template: &TemplateRef) -> Result<Self::Node, SpawnError>;

    fn set_position(&mut self, node: Self::Node, position: Vec3);

    fn attach(&mut self, node: Self::Node);

    /// Remove a node from the scene. Unknown nodes are ignored.
    fn detach(&mut self, node: Self::Node);

    /// Start a rotate-by animation over both axes at once.
    fn rotate_by(&mut self, node: Self::Node, rotation: RollRotation, duration_secs: f32);

    fn attach_plane_visual(&mut self, anchor: &PlaneAnchor, visual: &PlaneVisual);
}

/// What a single touch-down resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome<N> {
    /// The event carried no touch points.
    NoTouch,
    /// An existing die was hit and re-rolled.
    Rolled(N),
    /// The plane was hit and a new die was placed.
    Spawned(N),
    /// The plane was hit but the template could not be cloned.
    SpawnFailed(SpawnError),
    /// Neither a die nor the plane was under the touch.
    Missed,
}

/// Engine callbacks, delivered by an adapter around the concrete engine.
pub trait SceneEvents<E: ArEngine> {
    fn on_plane_detected(&mut self, engine: &mut E, anchor: &Anchor);

    /// Only the first point is considered.
    fn on_touch(&mut self, engine: &mut E, touches: &[Vec2]) -> TapOutcome<E::Node>;

    fn on_motion_shake(&mut self, engine: &mut E);
}

//! Recording engine shared by the integration tests

#![allow(dead_code)]

use ardice::ar::{
    ArEngine, PlaneAnchor, PlaneVisual, RollRotation, SpawnError, TemplateRef,
    TrackingConfiguration,
};
use bevy::math::{Mat4, Vec2, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RunSession(TrackingConfiguration),
    PauseSession,
    Instantiate(u32),
    SetPosition(u32, Vec3),
    Attach(u32),
    Detach(u32),
    RotateBy(u32, RollRotation, f32),
    AttachPlaneVisual(u64),
}

/// In-memory engine: screen hits are looked up in tables, every call is logged.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    next_node: u32,
    pub template_missing: bool,
    /// Screen point -> node under it.
    pub node_hits: Vec<(Vec2, u32)>,
    /// Screen point -> world hit on the estimated plane.
    pub plane_hits: Vec<(Vec2, Vec3)>,
    /// Nodes currently attached to the scene.
    pub scene: Vec<u32>,
    pub calls: Vec<Call>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            next_node: 1,
            ..Default::default()
        }
    }

    pub fn with_plane_hit(mut self, screen: Vec2, world: Vec3) -> Self {
        self.plane_hits.push((screen, world));
        self
    }

    /// Make `node` the topmost hit at `screen`.
    pub fn put_node_at(&mut self, screen: Vec2, node: u32) {
        self.node_hits.retain(|(p, _)| *p != screen);
        self.node_hits.push((screen, node));
    }

    pub fn rotations(&self) -> Vec<(u32, RollRotation)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::RotateBy(node, rotation, _) => Some((*node, *rotation)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn position_of(&self, node: u32) -> Option<Vec3> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::SetPosition(n, p) if *n == node => Some(*p),
            _ => None,
        })
    }
}

impl ArEngine for RecordingEngine {
    type Node = u32;

    fn run_session(&mut self, configuration: &TrackingConfiguration) {
        self.calls.push(Call::RunSession(*configuration));
    }

    fn pause_session(&mut self) {
        self.calls.push(Call::PauseSession);
    }

    fn hit_test_nodes(&mut self, screen_point: Vec2) -> Option<u32> {
        self.node_hits
            .iter()
            .find(|(p, _)| *p == screen_point)
            .map(|(_, node)| *node)
    }

    fn hit_test_estimated_plane(&mut self, screen_point: Vec2) -> Option<Mat4> {
        self.plane_hits
            .iter()
            .find(|(p, _)| *p == screen_point)
            .map(|(_, world)| Mat4::from_translation(*world))
    }

    fn instantiate_template(&mut self, template: &TemplateRef) -> Result<u32, SpawnError> {
        if self.template_missing {
            return Err(SpawnError::NodeNotFound {
                asset: template.asset.clone(),
                node: template.node.clone(),
            });
        }
        let node = self.next_node;
        self.next_node += 1;
        self.calls.push(Call::Instantiate(node));
        Ok(node)
    }

    fn set_position(&mut self, node: u32, position: Vec3) {
        self.calls.push(Call::SetPosition(node, position));
    }

    fn attach(&mut self, node: u32) {
        self.scene.push(node);
        self.calls.push(Call::Attach(node));
    }

    fn detach(&mut self, node: u32) {
        self.scene.retain(|n| *n != node);
        self.node_hits.retain(|(_, n)| *n != node);
        self.calls.push(Call::Detach(node));
    }

    fn rotate_by(&mut self, node: u32, rotation: RollRotation, duration_secs: f32) {
        self.calls.push(Call::RotateBy(node, rotation, duration_secs));
    }

    fn attach_plane_visual(&mut self, anchor: &PlaneAnchor, _visual: &PlaneVisual) {
        self.calls.push(Call::AttachPlaneVisual(anchor.id));
    }
}

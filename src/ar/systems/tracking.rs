//! Simulated tracking session
//!
//! Stands in for device camera tracking: configured anchors are announced once
//! the session has been running long enough, and estimated-plane hit-tests are
//! a ray/floor intersection.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::ar::bevy_engine::BevyArEngine;
use crate::ar::controller::DiceController;
use crate::ar::engine::SceneEvents;
use crate::ar::types::{Anchor, AnchorAdded, ArDiceConfig, TrackingConfiguration, TrackingSettings};

/// Engine-side session state
///
/// Anchor ids are unique across planes and points; an id is announced at most
/// once per app run.
#[derive(Resource, Debug, Default)]
pub struct TrackingSession {
    configuration: Option<TrackingConfiguration>,
    running: bool,
    clock: f32,
    announced: HashSet<u64>,
    detected_planes: usize,
}

impl TrackingSession {
    pub fn run(&mut self, configuration: TrackingConfiguration) {
        self.configuration = Some(configuration);
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds the session has spent running.
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    pub fn detected_planes(&self) -> usize {
        self.detected_planes
    }

    /// Advance the session clock and return the anchors that became visible.
    pub fn advance(&mut self, dt: f32, settings: &TrackingSettings) -> Vec<Anchor> {
        let Some(configuration) = self.configuration.filter(|_| self.running) else {
            return Vec::new();
        };
        self.clock += dt;

        let mut added = Vec::new();

        for plane in &settings.planes {
            if self.announced.contains(&plane.id) || self.clock < plane.appear_after_secs {
                continue;
            }
            if !configuration.plane_detection.detects(plane.alignment) {
                continue;
            }
            self.announced.insert(plane.id);
            self.detected_planes += 1;
            added.push(Anchor::Plane(plane.to_anchor()));
        }

        for point in &settings.points {
            if self.announced.contains(&point.id) || self.clock < point.appear_after_secs {
                continue;
            }
            self.announced.insert(point.id);
            added.push(Anchor::Point {
                id: point.id,
                transform: Transform::from_translation(Vec3::from_array(point.position)),
            });
        }

        added
    }
}

/// Intersect a ray with the horizontal plane `y = floor_y`.
///
/// Misses when the ray is parallel to the floor, points away from it, or the
/// hit lies further than `max_distance` from the origin.
pub fn estimated_plane_hit(
    origin: Vec3,
    direction: Vec3,
    floor_y: f32,
    max_distance: f32,
) -> Option<Vec3> {
    if direction.y.abs() < 0.0001 {
        return None;
    }

    let t = (floor_y - origin.y) / direction.y;
    if t < 0.0 {
        return None;
    }

    let hit = origin + direction * t;
    if hit.distance(origin) > max_distance {
        return None;
    }
    Some(hit)
}

/// System advancing the simulated session and announcing new anchors
pub fn advance_simulated_tracking(
    time: Res<Time>,
    config: Res<ArDiceConfig>,
    mut tracking: ResMut<TrackingSession>,
    mut anchors: MessageWriter<AnchorAdded>,
) {
    for anchor in tracking.advance(time.delta_secs(), &config.tracking) {
        info!("Anchor {} added", anchor.id());
        anchors.write(AnchorAdded(anchor));
    }
}

/// System forwarding new anchors to the controller
pub fn handle_anchor_added(
    mut anchors: MessageReader<AnchorAdded>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    for AnchorAdded(anchor) in anchors.read() {
        controller.on_plane_detected(&mut engine, anchor);
    }
}

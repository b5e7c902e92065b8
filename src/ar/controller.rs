//! Placement-and-roll controller
//!
//! Owns the placed-die registry and makes every decision: when the session
//! runs, what a tap means, when a die is spawned, rolled or cleared. All scene
//! effects go through an [`ArEngine`], so the same logic drives Bevy and the
//! recording engine used in tests.

use bevy::log::{debug, info, warn};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Debug;

use crate::ar::engine::{ArEngine, SceneEvents, SpawnError, TapOutcome, TemplateRef};
use crate::ar::plane_visual::PlaneVisual;
use crate::ar::registry::DiceRegistry;
use crate::ar::types::{
    Anchor, ArDiceConfig, RollRotation, RollSettings, SessionLifecycle, TrackingConfiguration,
};

/// Controller driving Bevy entities.
pub type DiceController = PlacementController<Entity>;

#[derive(Resource)]
pub struct PlacementController<N: Copy + Eq + Debug + Send + Sync + 'static> {
    registry: DiceRegistry<N>,
    session: SessionLifecycle,
    tracking: TrackingConfiguration,
    template: TemplateRef,
    roll: RollSettings,
    rng: StdRng,
    grid_texture: String,
    attach_plane_visuals: bool,
}

impl<N: Copy + Eq + Debug + Send + Sync + 'static> PlacementController<N> {
    pub fn new(config: &ArDiceConfig) -> Self {
        let rng = match config.roll_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &ArDiceConfig, rng: StdRng) -> Self {
        Self {
            registry: DiceRegistry::new(),
            session: SessionLifecycle::default(),
            tracking: TrackingConfiguration::horizontal_planes(),
            template: TemplateRef {
                asset: config.template_asset.clone(),
                node: config.template_node.clone(),
            },
            roll: config.roll,
            rng,
            grid_texture: config.grid_texture.clone(),
            attach_plane_visuals: config.attach_plane_visuals,
        }
    }

    pub fn registry(&self) -> &DiceRegistry<N> {
        &self.registry
    }

    pub fn session(&self) -> &SessionLifecycle {
        &self.session
    }

    /// View will appear: run the session with horizontal plane detection.
    pub fn start_session<E: ArEngine<Node = N>>(&mut self, engine: &mut E) -> bool {
        if !self.session.begin() {
            return false;
        }
        engine.run_session(&self.tracking);
        info!("Tracking session started");
        true
    }

    /// View will disappear: pause the session.
    pub fn pause_session<E: ArEngine<Node = N>>(&mut self, engine: &mut E) -> bool {
        if !self.session.suspend() {
            return false;
        }
        engine.pause_session();
        info!("Tracking session paused");
        true
    }

    /// Build (and optionally attach) the grid visual for a detected plane.
    ///
    /// Non-plane anchors are ignored.
    pub fn handle_anchor<E: ArEngine<Node = N>>(
        &mut self,
        engine: &mut E,
        anchor: &Anchor,
    ) -> Option<PlaneVisual> {
        let plane = anchor.as_plane()?;
        let visual = PlaneVisual::for_anchor(plane, &self.grid_texture);
        if self.attach_plane_visuals {
            engine.attach_plane_visual(plane, &visual);
        }
        debug!(
            "Plane {} detected ({} x {})",
            plane.id, visual.width, visual.height
        );
        Some(visual)
    }

    /// Clone the template at `position`, register it, roll it, then attach it.
    pub fn spawn_die<E: ArEngine<Node = N>>(
        &mut self,
        engine: &mut E,
        position: Vec3,
    ) -> Result<N, SpawnError> {
        let node = engine.instantiate_template(&self.template)?;
        engine.set_position(node, position);
        self.registry.push(node);
        self.roll(engine, node);
        engine.attach(node);
        info!("Placed die {:?} at {}", node, position);
        Ok(node)
    }

    /// Spin one die. Nodes that are not in the registry are left alone.
    pub fn roll<E: ArEngine<Node = N>>(&mut self, engine: &mut E, node: N) -> Option<RollRotation> {
        if !self.registry.contains(node) {
            debug!("Ignoring roll for unregistered node {:?}", node);
            return None;
        }
        let rotation = RollRotation::random(&mut self.rng, self.roll.spin_multiplier);
        engine.rotate_by(node, rotation, self.roll.duration_secs);
        Some(rotation)
    }

    /// Spin every placed die in placement order. Returns how many were rolled.
    pub fn roll_all<E: ArEngine<Node = N>>(&mut self, engine: &mut E) -> usize {
        let placed: Vec<N> = self.registry.iter().collect();
        placed
            .into_iter()
            .filter(|node| self.roll(engine, *node).is_some())
            .count()
    }

    /// Detach every placed die and empty the registry. Returns how many were removed.
    pub fn clear_all<E: ArEngine<Node = N>>(&mut self, engine: &mut E) -> usize {
        let removed = self.registry.take_all();
        for node in &removed {
            engine.detach(*node);
        }
        if !removed.is_empty() {
            info!("Cleared {} dice", removed.len());
        }
        removed.len()
    }
}

impl<E: ArEngine> SceneEvents<E> for PlacementController<E::Node> {
    fn on_plane_detected(&mut self, engine: &mut E, anchor: &Anchor) {
        self.handle_anchor(engine, anchor);
    }

    fn on_touch(&mut self, engine: &mut E, touches: &[Vec2]) -> TapOutcome<E::Node> {
        let Some(point) = touches.first().copied() else {
            warn!("Error in detecting the touch");
            return TapOutcome::NoTouch;
        };

        if let Some(node) = engine.hit_test_nodes(point) {
            if self.registry.contains(node) {
                self.roll(engine, node);
                return TapOutcome::Rolled(node);
            }
        }

        let Some(hit) = engine.hit_test_estimated_plane(point) else {
            debug!("Tap at {} hit nothing", point);
            return TapOutcome::Missed;
        };

        let position = hit.w_axis.truncate();
        match self.spawn_die(engine, position) {
            Ok(node) => TapOutcome::Spawned(node),
            Err(err) => {
                warn!("Could not place die: {err}");
                TapOutcome::SpawnFailed(err)
            }
        }
    }

    fn on_motion_shake(&mut self, engine: &mut E) {
        let rolled = self.roll_all(engine);
        debug!("Shake rolled {rolled} dice");
    }
}

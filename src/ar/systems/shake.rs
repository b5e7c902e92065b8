//! Shake detection
//!
//! Desktops have no accelerometer, so a shake is rapid side-to-side mouse
//! movement. The motion-ended message fires once the cursor comes to rest
//! after a shake, matching the device's "motion ended" callback.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use std::collections::VecDeque;

use crate::ar::bevy_engine::BevyArEngine;
use crate::ar::controller::DiceController;
use crate::ar::engine::SceneEvents;
use crate::ar::types::{MotionShakeEnded, ShakeSettings};

#[derive(Resource, Debug, Clone)]
pub struct ShakeDetector {
    settings: ShakeSettings,
    clock: f32,
    /// Times of recent direction reversals.
    reversals: VecDeque<f32>,
    last_direction: f32,
    since_motion: f32,
    shaking: bool,
}

impl ShakeDetector {
    pub fn new(settings: ShakeSettings) -> Self {
        Self {
            settings,
            clock: 0.0,
            reversals: VecDeque::new(),
            last_direction: 0.0,
            since_motion: 0.0,
            shaking: false,
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Feed one frame of horizontal cursor motion. Returns `true` when a shake ends.
    pub fn update(&mut self, dt: f32, dx: f32) -> bool {
        self.clock += dt;

        if dx.abs() >= self.settings.min_step_px {
            let direction = dx.signum();
            if self.last_direction != 0.0 && direction != self.last_direction {
                self.reversals.push_back(self.clock);
            }
            self.last_direction = direction;
            self.since_motion = 0.0;
        } else {
            self.since_motion += dt;
        }

        while let Some(&t) = self.reversals.front() {
            if self.clock - t > self.settings.window_secs {
                self.reversals.pop_front();
            } else {
                break;
            }
        }

        if self.reversals.len() >= self.settings.min_reversals {
            self.shaking = true;
        }

        if self.shaking && self.since_motion >= self.settings.settle_secs {
            self.shaking = false;
            self.reversals.clear();
            self.last_direction = 0.0;
            return true;
        }

        false
    }
}

/// System turning mouse shakes into motion-ended messages
pub fn detect_mouse_shake(
    time: Res<Time>,
    motion: Res<AccumulatedMouseMotion>,
    mut detector: ResMut<ShakeDetector>,
    mut shake_events: MessageWriter<MotionShakeEnded>,
) {
    if detector.update(time.delta_secs(), motion.delta.x) {
        shake_events.write(MotionShakeEnded);
    }
}

/// System re-rolling every die when a shake ends
pub fn handle_motion_shake(
    mut shake_events: MessageReader<MotionShakeEnded>,
    mut controller: ResMut<DiceController>,
    mut engine: BevyArEngine,
) {
    for _ in shake_events.read() {
        controller.on_motion_shake(&mut engine);
    }
}

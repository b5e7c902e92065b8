//! Tracking session configuration and lifecycle

use super::PlaneAlignment;

/// Which surfaces the tracking session should look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaneDetection {
    None,
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl PlaneDetection {
    pub fn detects(&self, alignment: PlaneAlignment) -> bool {
        match self {
            PlaneDetection::None => false,
            PlaneDetection::Horizontal => alignment == PlaneAlignment::Horizontal,
            PlaneDetection::Vertical => alignment == PlaneAlignment::Vertical,
            PlaneDetection::Both => true,
        }
    }
}

/// Configuration passed to the engine when the session is (re)started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingConfiguration {
    pub plane_detection: PlaneDetection,
}

impl TrackingConfiguration {
    /// World tracking with horizontal plane detection only.
    pub fn horizontal_planes() -> Self {
        Self {
            plane_detection: PlaneDetection::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Running,
    Paused,
}

/// Tracks the view lifecycle so the engine sees exactly one run/pause per transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLifecycle {
    phase: SessionPhase,
}

impl SessionLifecycle {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Returns `true` when this call is an actual transition to running.
    pub fn begin(&mut self) -> bool {
        if self.phase == SessionPhase::Running {
            return false;
        }
        self.phase = SessionPhase::Running;
        true
    }

    /// Returns `true` when this call is an actual transition to paused.
    pub fn suspend(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.phase = SessionPhase::Paused;
        true
    }
}

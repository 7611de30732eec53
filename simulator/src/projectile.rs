//! Handles the projectile and its flight toward the planet.

use euclid::default::Transform3D;
use tracing::{debug, info};

use crate::camera::{Pose, PoseSource};
use crate::config::SimulationConfig;
use crate::REFERENCE_FPS;

/// Where the projectile is along the approach axis and what it's up to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectileState {
    /// Distance from the planet's center along +z, in render units.
    pub position: f64,
    pub launched: bool,
    /// Once set, `launched` stays set and `position` stops changing.
    pub impacted: bool,
}

impl ProjectileState {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            launched: false,
            impacted: false,
        }
    }

    /// Moving toward the planet right now.
    pub fn in_flight(&self) -> bool {
        self.launched && !self.impacted
    }
}

/// Where a projectile at `position` is after `dt` seconds.
///
/// The step is `axis_scale * speed / planet_radius` per reference frame, read
/// from `config` on every call so speed changes mid-flight apply at once.
pub fn advance_position(
    position: f64,
    dt: f64,
    config: &SimulationConfig,
    launched: bool,
    impacted: bool,
) -> f64 {
    if !launched || impacted || !dt.is_finite() || dt <= 0.0 {
        return position;
    }
    position - config.step_per_reference_frame() * dt * REFERENCE_FPS
}

/// Owns the projectile state. Nothing else writes to it.
#[derive(Clone, Debug)]
pub struct ProjectileKinematics {
    state: ProjectileState,
}

impl ProjectileKinematics {
    pub fn new(start_position: f64) -> Self {
        Self {
            state: ProjectileState::at(start_position),
        }
    }

    pub fn state(&self) -> ProjectileState {
        self.state
    }

    /// Start or pause the flight. Does nothing after impact.
    /// Returns whether the projectile is now launched.
    pub fn toggle_launch(&mut self) -> bool {
        if self.state.impacted {
            debug!("launch toggled after impact, ignoring");
        } else {
            self.state.launched = !self.state.launched;
            info!(
                launched = self.state.launched,
                position = self.state.position,
                "launch toggled"
            );
        }
        self.state.launched
    }

    /// Stop the projectile where it is. A projectile that has hit counts as launched.
    pub fn mark_impacted(&mut self) {
        self.state.launched = true;
        self.state.impacted = true;
    }

    /// Move one frame of `dt` seconds. Returns the new position.
    pub fn advance(&mut self, dt: f64, config: &SimulationConfig) -> f64 {
        self.state.position = advance_position(
            self.state.position,
            dt,
            config,
            self.state.launched,
            self.state.impacted,
        );
        self.state.position
    }

    /// Back to the start, not launched, not impacted.
    pub fn reset(&mut self, start_position: f64) {
        self.state = ProjectileState::at(start_position);
    }

    /// Model transform for the projectile, or `None` once it has hit and is gone.
    pub fn transform(&self, config: &SimulationConfig) -> Option<Pose> {
        if self.state.impacted {
            return None;
        }
        let s = config.scale_factor();
        Some(Transform3D::scale(s, s, s).then(&Transform3D::translation(
            0.0,
            0.0,
            self.state.position,
        )))
    }

    /// Borrow the projectile as something the camera can follow.
    pub fn view<'a>(&'a self, config: &'a SimulationConfig) -> ProjectileView<'a> {
        ProjectileView {
            kinematics: self,
            config,
        }
    }
}

/// Read-only view of the projectile's current pose.
pub struct ProjectileView<'a> {
    kinematics: &'a ProjectileKinematics,
    config: &'a SimulationConfig,
}

impl PoseSource for ProjectileView<'_> {
    fn current_pose(&self) -> Option<Pose> {
        self.kinematics.transform(self.config)
    }
}

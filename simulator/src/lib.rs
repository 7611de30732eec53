//! Handles the simulation of a projectile hitting a planet.
//!
//! Everything runs synchronously once per rendered frame, in a fixed order:
//! clock, kinematics, impact, damage, camera. The renderer reads the
//! returned [`Frame`] and hands back the camera pose it actually used.

pub mod bodies;
pub mod camera;
pub mod clock;
pub mod config;
pub mod damage;
pub mod debris;
pub mod impact;
pub mod projectile;
pub mod readout;

use crate::bodies::Scenery;
use crate::camera::{CameraController, CameraPose, CameraSettings, CameraTarget, Pose};
use crate::clock::{PhysicsClock, Tick};
use crate::config::SimulationConfig;
use crate::damage::DamageState;
use crate::debris::{DebrisField, DebrisSettings};
use crate::impact::ImpactOutcome;
use crate::projectile::{ProjectileKinematics, ProjectileState};
use crate::readout::Readout;

pub use crate::config::ConfigError;

use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Frame rate the per-frame constants were tuned at.
pub const REFERENCE_FPS: f64 = 60.0;

/// Something the control surface asked for. Applied at the start of the next frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Start or pause the flight.
    Launch,
    Reset,
    AttachCamera,
    DetachCamera,
    SetSpeed(f64),
    SetSize(f64),
}

/// Where the camera wants to be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Overview,
    /// Chasing the projectile.
    Attached,
}

/// Everything the renderer needs for one frame. A snapshot; changing it changes nothing.
#[derive(Clone, Debug)]
pub struct Frame {
    pub t: f64,
    pub dt: f64,
    pub projectile_state: ProjectileState,
    /// `None` once the projectile has hit.
    pub projectile: Option<Pose>,
    /// What happened on this frame. Only ever not `None` on the frame of impact.
    pub outcome: ImpactOutcome,
    pub damage: DamageState,
    pub planet: Pose,
    pub satellite: Option<Pose>,
    pub debris: Vec<Pose>,
    pub camera: CameraPose,
    pub camera_mode: CameraMode,
    pub readout: Readout,
}

pub struct Simulation {
    config: SimulationConfig,
    clock: PhysicsClock,
    projectile: ProjectileKinematics,
    damage: DamageState,
    camera: CameraController,
    camera_mode: CameraMode,
    scenery: Scenery,
    debris_settings: DebrisSettings,
    /// Only there after the planet has been destroyed.
    debris: Option<DebrisField>,
    /// Commands waiting for the next frame.
    pending: VecDeque<Command>,
}

impl Simulation {
    pub fn new(
        config: SimulationConfig,
        scenery: Scenery,
        camera: CameraSettings,
        debris_settings: DebrisSettings,
    ) -> Self {
        Simulation {
            projectile: ProjectileKinematics::new(config.start_position()),
            config,
            clock: PhysicsClock::new(),
            damage: DamageState::Intact,
            camera: CameraController::new(camera),
            camera_mode: CameraMode::Overview,
            scenery,
            debris_settings,
            debris: None,
            pending: VecDeque::new(),
        }
    }

    /// Queue a command. It takes effect before anything else in the next frame.
    pub fn queue(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn projectile(&self) -> ProjectileState {
        self.projectile.state()
    }

    pub fn damage(&self) -> DamageState {
        self.damage
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera_mode
    }

    /// The camera pose published on the last frame.
    pub fn camera(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    /// Run one frame.
    ///
    /// `external_ms` is the renderer's clock. `previous_camera` is the camera
    /// pose the renderer used last frame; the new pose eases away from it.
    pub fn frame(&mut self, external_ms: f64, previous_camera: &CameraPose) -> Frame {
        self.apply_pending();

        let Tick { t, dt } = self.clock.tick(external_ms);

        self.projectile.advance(dt, &self.config);

        let outcome = self.check_impact();

        if let Some(debris) = &mut self.debris {
            debris.advance(dt);
        }

        let planet = self.scenery.planet_transform(t);
        let satellite = self.scenery.satellite_transform(&planet, t);
        let debris = match &self.debris {
            Some(field) => field.transforms(&Pose::identity(), t),
            None => Vec::new(),
        };

        let view = self.projectile.view(&self.config);
        let target = match self.camera_mode {
            CameraMode::Overview => CameraTarget::Fixed,
            CameraMode::Attached => CameraTarget::Tracking(&view),
        };
        let camera = self.camera.compute_pose(previous_camera, target, dt);

        Frame {
            t,
            dt,
            projectile_state: self.projectile.state(),
            projectile: self.projectile.transform(&self.config),
            outcome,
            damage: self.damage,
            planet,
            satellite,
            debris,
            camera,
            camera_mode: self.camera_mode,
            readout: Readout::new(&self.config),
        }
    }

    /// Classify the projectile unless it already hit, and damage the planet on contact.
    /// A paused projectile grown through the surface still counts.
    fn check_impact(&mut self) -> ImpactOutcome {
        let state = self.projectile.state();
        if state.impacted {
            return ImpactOutcome::None;
        }

        let outcome = impact::evaluate(state.position, &self.config);
        if outcome == ImpactOutcome::None {
            return outcome;
        }

        self.projectile.mark_impacted();
        self.damage = self.damage.apply(outcome);
        info!(
            ?outcome,
            damage = ?self.damage,
            speed = self.config.projectile_speed(),
            size = self.config.projectile_size(),
            energy = impact::relativistic_energy(
                self.config.projectile_speed(),
                self.config.projectile_size()
            ),
            "impact"
        );

        if self.damage == DamageState::Destroyed {
            self.debris = Some(DebrisField::spawn(
                &self.debris_settings,
                self.config.surface_scale(),
            ));
        }
        outcome
    }

    /// Apply everything queued since the last frame, in order.
    fn apply_pending(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            match command {
                Command::Launch => {
                    self.projectile.toggle_launch();
                }
                Command::Reset => {
                    // Projectile, damage and debris go back together.
                    self.projectile.reset(self.config.start_position());
                    self.damage = DamageState::Intact;
                    self.debris = None;
                    info!("simulation reset");
                }
                Command::AttachCamera => {
                    self.camera_mode = CameraMode::Attached;
                    debug!("camera attached to projectile");
                }
                Command::DetachCamera => {
                    self.camera_mode = CameraMode::Overview;
                    debug!("camera back to overview");
                }
                Command::SetSpeed(speed) => match self.config.set_projectile_speed(speed) {
                    Ok(()) => debug!(speed, "projectile speed changed"),
                    Err(e) => warn!(error = %e, "rejected projectile speed"),
                },
                Command::SetSize(size) => match self.config.set_projectile_size(size) {
                    Ok(()) => debug!(size, "projectile size changed"),
                    Err(e) => warn!(error = %e, "rejected projectile size"),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;

    fn simulation() -> Simulation {
        let planet = Body {
            name: "Earth".to_string(),
            radius: 6_378_100.0,
            color: 0x3669FF,
            outline: 0x56FF2D,
        };
        Simulation::new(
            SimulationConfig::default(),
            Scenery::new(planet, None, 15.0),
            CameraSettings::default(),
            DebrisSettings::default(),
        )
    }

    #[test]
    fn commands_wait_for_the_next_frame() {
        let mut sim = simulation();
        sim.queue(Command::Launch);
        assert!(!sim.projectile().launched);
        let camera = sim.camera();
        sim.frame(0.0, &camera);
        assert!(sim.projectile().launched);
    }

    #[test]
    fn rejected_setter_keeps_the_old_value() {
        let mut sim = simulation();
        sim.queue(Command::SetSpeed(config::SPEED_OF_LIGHT));
        sim.queue(Command::SetSize(-1.0));
        let camera = sim.camera();
        let frame = sim.frame(0.0, &camera);
        assert_eq!(frame.readout.speed, config::DEFAULT_SPEED);
        assert_eq!(frame.readout.size, config::DEFAULT_SIZE);
    }

    #[test]
    fn camera_mode_follows_commands() {
        let mut sim = simulation();
        sim.queue(Command::AttachCamera);
        let camera = sim.camera();
        assert_eq!(sim.frame(0.0, &camera).camera_mode, CameraMode::Attached);
        sim.queue(Command::DetachCamera);
        assert_eq!(sim.frame(16.0, &camera).camera_mode, CameraMode::Overview);
    }

    #[test]
    fn paused_projectile_grown_into_the_planet_hits_it() {
        let planet = Body {
            name: "Earth".to_string(),
            radius: 6_378_100.0,
            color: 0x3669FF,
            outline: 0x56FF2D,
        };
        let config = SimulationConfig::default().with_start_position(25.0).unwrap();
        let mut sim = Simulation::new(
            config,
            Scenery::new(planet, None, 15.0),
            CameraSettings::default(),
            DebrisSettings::default(),
        );
        let camera = sim.camera();
        assert_eq!(sim.frame(0.0, &camera).outcome, ImpactOutcome::None);

        sim.queue(Command::SetSize(6_000_000.0));
        let frame = sim.frame(16.0, &camera);
        assert_eq!(frame.outcome, ImpactOutcome::Destroy);
        assert_eq!(frame.damage, DamageState::Destroyed);
        assert!(frame.projectile_state.launched && frame.projectile_state.impacted);
        assert_eq!(frame.projectile_state.position, 25.0);

        // Only classified once.
        assert_eq!(sim.frame(32.0, &camera).outcome, ImpactOutcome::None);
    }

    #[test]
    fn destruction_spawns_debris_and_reset_clears_it() {
        let mut sim = simulation();
        sim.queue(Command::SetSize(1_000_000.0));
        sim.queue(Command::SetSpeed(10_000_000.0));
        sim.queue(Command::Launch);

        let mut camera = sim.camera();
        let mut ms = 0.0;
        let mut destroyed = None;
        for _ in 0..600 {
            let frame = sim.frame(ms, &camera);
            camera = frame.camera;
            ms += 1000.0 / 60.0;
            if frame.outcome == ImpactOutcome::Destroy {
                destroyed = Some(frame);
                break;
            }
        }
        let frame = destroyed.expect("never hit");
        assert_eq!(frame.damage, DamageState::Destroyed);
        assert!(frame.projectile.is_none());

        let later = sim.frame(ms + 16.0, &camera);
        assert_eq!(later.debris.len(), DebrisSettings::default().count);
        assert_eq!(later.outcome, ImpactOutcome::None);

        sim.queue(Command::Reset);
        let reset = sim.frame(ms + 32.0, &camera);
        assert!(reset.debris.is_empty());
        assert_eq!(reset.damage, DamageState::Intact);
    }
}

//! Lets you put together an impact scene piece by piece.

pub mod star_field;

use euclid::default::{Point3D, Transform3D, Vector3D};

use simulator::bodies::{Body, Scenery};
use simulator::camera::{look_at, CameraSettings, Smoothing};
use simulator::config::{self, SimulationConfig};
use simulator::debris::DebrisSettings;
use simulator::Simulation;

use crate::error::LoadError;
use star_field::{Star, StarField};

/// A finished scene, ready to simulate.
#[derive(Clone, Debug)]
pub struct Scene {
    pub config: SimulationConfig,
    pub scenery: Scenery,
    pub camera: CameraSettings,
    pub debris: DebrisSettings,
    /// For the renderer; the simulation never looks at them.
    pub stars: Vec<Star>,
}

impl Scene {
    /// Split into the simulation and the star field the renderer draws behind it.
    pub fn into_simulation(self) -> (Simulation, Vec<Star>) {
        (
            Simulation::new(self.config, self.scenery, self.camera, self.debris),
            self.stars,
        )
    }
}

/// Use this struct to construct a scene easily.
/// Anything not set keeps the values of the classic Earth impact.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    pub(crate) planet: Body,
    pub(crate) satellite: Option<Body>,
    pub(crate) speed: f64,
    pub(crate) size: f64,
    pub(crate) start_position: f64,
    pub(crate) axis_scale: f64,
    pub(crate) surface_scale: f64,
    pub(crate) threshold: f64,
    pub(crate) eye: Point3D<f64>,
    pub(crate) target: Point3D<f64>,
    pub(crate) up: Vector3D<f64>,
    /// Chase camera offset in the projectile's frame.
    pub(crate) tracking_offset: Vector3D<f64>,
    pub(crate) smoothing: Smoothing,
    pub(crate) debris: DebrisSettings,
    pub(crate) stars: StarField,
}

impl SceneBuilder {
    /// Make a new Builder around a planet.
    pub fn new(planet: Body) -> Self {
        SceneBuilder {
            planet,
            satellite: None,
            speed: config::DEFAULT_SPEED,
            size: config::DEFAULT_SIZE,
            start_position: config::DEFAULT_START_POSITION,
            axis_scale: config::DEFAULT_AXIS_SCALE,
            surface_scale: config::DEFAULT_SURFACE_SCALE,
            threshold: config::DESTRUCTION_THRESHOLD,
            eye: Point3D::new(0.0, 100.0, 450.0),
            target: Point3D::origin(),
            up: Vector3D::new(0.0, 1.0, 0.0),
            tracking_offset: Vector3D::new(0.0, 10.0, 50.0),
            smoothing: Smoothing::default(),
            debris: DebrisSettings::default(),
            stars: StarField::default(),
        }
    }

    pub fn planet(&mut self, planet: Body) -> &mut Self {
        self.planet = planet;
        self
    }

    pub fn satellite(&mut self, satellite: Option<Body>) -> &mut Self {
        self.satellite = satellite;
        self
    }

    /// Speed in m/s and radius in m.
    pub fn projectile(&mut self, speed: f64, size: f64) -> &mut Self {
        self.speed = speed;
        self.size = size;
        self
    }

    pub fn start_position(&mut self, start_position: f64) -> &mut Self {
        self.start_position = start_position;
        self
    }

    pub fn scales(&mut self, axis: f64, surface: f64) -> &mut Self {
        self.axis_scale = axis;
        self.surface_scale = surface;
        self
    }

    pub fn destruction_threshold(&mut self, joules: f64) -> &mut Self {
        self.threshold = joules;
        self
    }

    /// Where the overview camera sits and what it looks at.
    pub fn overview(
        &mut self,
        eye: Point3D<f64>,
        target: Point3D<f64>,
        up: Vector3D<f64>,
    ) -> &mut Self {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self
    }

    pub fn tracking_offset(&mut self, offset: Vector3D<f64>) -> &mut Self {
        self.tracking_offset = offset;
        self
    }

    pub fn smoothing(&mut self, smoothing: Smoothing) -> &mut Self {
        self.smoothing = smoothing;
        self
    }

    pub fn debris(&mut self, debris: DebrisSettings) -> &mut Self {
        self.debris = debris;
        self
    }

    pub fn stars(&mut self, stars: StarField) -> &mut Self {
        self.stars = stars;
        self
    }

    /// Check everything and build the scene.
    pub fn construct(&self) -> Result<Scene, LoadError> {
        let config = SimulationConfig::new(self.planet.radius)?
            .with_scales(self.axis_scale, self.surface_scale)?
            .with_start_position(self.start_position)?
            .with_destruction_threshold(self.threshold)?
            .with_projectile(self.speed, self.size)?;

        let overview = look_at(self.eye, self.target, self.up).ok_or(LoadError::DegenerateCamera)?;
        let offset = self.tracking_offset;
        let camera = CameraSettings {
            overview,
            tracking_offset: Transform3D::translation(offset.x, offset.y, offset.z),
            smoothing: self.smoothing,
        };

        Ok(Scene {
            config,
            scenery: Scenery::new(
                self.planet.clone(),
                self.satellite.clone(),
                config.surface_scale(),
            ),
            camera,
            debris: self.debris,
            stars: self.stars.construct(),
        })
    }
}

//! The tunable numbers of an impact run, and the boundary that keeps them physical.

use thiserror::Error;

/// Speed of light in vacuum, in m/s. Exact.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Slowest projectile the control surface offers.
pub const MIN_SPEED: f64 = 1e4;
/// Fastest projectile allowed. Anything at or past c has no Lorentz factor.
pub const MAX_SPEED: f64 = SPEED_OF_LIGHT - 1.0;

pub const MIN_SIZE: f64 = 1.0;
/// One Earth radius.
pub const MAX_SIZE: f64 = 6_378_100.0;

/// Kinetic energy (J) past which the planet is destroyed instead of cratered.
pub const DESTRUCTION_THRESHOLD: f64 = 1.25e15;

pub const DEFAULT_SPEED: f64 = 100_000.0;
pub const DEFAULT_SIZE: f64 = 250_000.0;
pub const DEFAULT_PLANET_RADIUS: f64 = 6_378_100.0;
/// Render units along the approach axis per planet radius.
pub const DEFAULT_AXIS_SCALE: f64 = 15.0;
/// Visual radius of the planet in render units.
pub const DEFAULT_SURFACE_SCALE: f64 = 15.0;
/// Where the projectile waits before launch, in render units from the planet's center.
pub const DEFAULT_START_POSITION: f64 = 300.0;

/// A value that would send the physics out of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("projectile speed {0} m/s is outside [{min}, {max}]", min = MIN_SPEED, max = MAX_SPEED)]
    SpeedOutOfRange(f64),

    #[error("projectile size {0} m is outside [{min}, {max}]", min = MIN_SIZE, max = MAX_SIZE)]
    SizeOutOfRange(f64),
}

/// Everything the kinematics and the impact evaluator read.
///
/// Fields are private so that every value has gone through a check before the
/// physics sees it. Speed and size can change mid-flight through the setters;
/// the rest is fixed once the scene is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    projectile_speed: f64,
    projectile_size: f64,
    planet_radius: f64,
    destruction_threshold: f64,
    axis_scale: f64,
    surface_scale: f64,
    start_position: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            projectile_speed: DEFAULT_SPEED,
            projectile_size: DEFAULT_SIZE,
            planet_radius: DEFAULT_PLANET_RADIUS,
            destruction_threshold: DESTRUCTION_THRESHOLD,
            axis_scale: DEFAULT_AXIS_SCALE,
            surface_scale: DEFAULT_SURFACE_SCALE,
            start_position: DEFAULT_START_POSITION,
        }
    }
}

impl SimulationConfig {
    /// Default config around a planet of the given physical radius (m).
    pub fn new(planet_radius: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            planet_radius: positive("planet radius", planet_radius)?,
            ..Self::default()
        })
    }

    pub fn with_scales(mut self, axis_scale: f64, surface_scale: f64) -> Result<Self, ConfigError> {
        self.axis_scale = positive("axis scale", axis_scale)?;
        self.surface_scale = positive("surface scale", surface_scale)?;
        Ok(self)
    }

    pub fn with_start_position(mut self, start_position: f64) -> Result<Self, ConfigError> {
        self.start_position = finite("start position", start_position)?;
        Ok(self)
    }

    pub fn with_destruction_threshold(mut self, joules: f64) -> Result<Self, ConfigError> {
        self.destruction_threshold = positive("destruction threshold", joules)?;
        Ok(self)
    }

    pub fn with_projectile(mut self, speed: f64, size: f64) -> Result<Self, ConfigError> {
        self.set_projectile_speed(speed)?;
        self.set_projectile_size(size)?;
        Ok(self)
    }

    /// Accept a new speed, or reject it and keep the old one.
    pub fn set_projectile_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        let speed = finite("projectile speed", speed)?;
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ConfigError::SpeedOutOfRange(speed));
        }
        self.projectile_speed = speed;
        Ok(())
    }

    /// Accept a new size, or reject it and keep the old one.
    pub fn set_projectile_size(&mut self, size: f64) -> Result<(), ConfigError> {
        let size = finite("projectile size", size)?;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::SizeOutOfRange(size));
        }
        self.projectile_size = size;
        Ok(())
    }

    /// Pull a slider value into the speed range. NaN lands on the minimum.
    pub fn clamp_speed(speed: f64) -> f64 {
        if speed.is_nan() {
            MIN_SPEED
        } else {
            speed.max(MIN_SPEED).min(MAX_SPEED)
        }
    }

    /// Pull a slider value into the size range. NaN lands on the minimum.
    pub fn clamp_size(size: f64) -> f64 {
        if size.is_nan() {
            MIN_SIZE
        } else {
            size.max(MIN_SIZE).min(MAX_SIZE)
        }
    }

    pub fn projectile_speed(&self) -> f64 {
        self.projectile_speed
    }

    /// Projectile radius in meters. Also used as its rest mass in kilograms.
    pub fn projectile_size(&self) -> f64 {
        self.projectile_size
    }

    pub fn planet_radius(&self) -> f64 {
        self.planet_radius
    }

    pub fn destruction_threshold(&self) -> f64 {
        self.destruction_threshold
    }

    pub fn axis_scale(&self) -> f64 {
        self.axis_scale
    }

    pub fn surface_scale(&self) -> f64 {
        self.surface_scale
    }

    pub fn start_position(&self) -> f64 {
        self.start_position
    }

    /// Visual radius of the projectile in render units.
    pub fn scale_factor(&self) -> f64 {
        self.axis_scale * self.projectile_size / self.planet_radius
    }

    /// How far the projectile moves in one reference frame (1/60 s), in render units.
    pub fn step_per_reference_frame(&self) -> f64 {
        self.axis_scale * self.projectile_speed / self.planet_radius
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

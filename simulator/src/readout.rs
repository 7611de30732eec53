//! Live numbers for the control panel.

use crate::config::{SimulationConfig, SPEED_OF_LIGHT};
use crate::impact::{classical_energy, lorentz_factor, relativistic_energy};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Readout {
    pub speed: f64,
    pub size: f64,
    /// v/c
    pub fraction_of_c: f64,
    pub lorentz: f64,
    /// Projectile radius as a percentage of the planet's.
    pub percent_of_planet_radius: f64,
    pub classical_energy: f64,
    pub relativistic_energy: f64,
    /// Relativistic energy over the destruction threshold. Above 1 destroys.
    pub energy_ratio: f64,
}

impl Readout {
    pub fn new(config: &SimulationConfig) -> Self {
        let speed = config.projectile_speed();
        let size = config.projectile_size();
        let relativistic = relativistic_energy(speed, size);
        Self {
            speed,
            size,
            fraction_of_c: speed / SPEED_OF_LIGHT,
            lorentz: lorentz_factor(speed),
            percent_of_planet_radius: size / config.planet_radius() * 100.0,
            classical_energy: classical_energy(speed, size),
            relativistic_energy: relativistic,
            energy_ratio: relativistic / config.destruction_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_readout() {
        let readout = Readout::new(&SimulationConfig::default());
        assert!((readout.fraction_of_c - 100_000.0 / SPEED_OF_LIGHT).abs() < 1e-15);
        assert!((readout.percent_of_planet_radius - 3.9196).abs() < 1e-4);
        assert_eq!(readout.classical_energy, 1.25e15);
        assert!(readout.relativistic_energy > readout.classical_energy);
        assert!(readout.lorentz > 1.0);
        assert!(readout.energy_ratio > 1.0);
    }
}

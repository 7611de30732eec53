//! Collision detection and the energy rule that decides what an impact does.

use crate::config::{SimulationConfig, SPEED_OF_LIGHT};

/// What a projectile did to the planet this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImpactOutcome {
    /// Still in flight, no contact.
    None,
    /// Contact, not enough energy to break the planet.
    Crater,
    /// Contact with more energy than the planet can take.
    Destroy,
}

/// `γ - 1` without the cancellation of `1/sqrt(1-β²) - 1` at low speeds.
///
/// Infinite at or past the speed of light.
pub fn gamma_minus_one(speed: f64) -> f64 {
    let beta = speed / SPEED_OF_LIGHT;
    let beta2 = beta * beta;
    if beta2 >= 1.0 {
        return f64::INFINITY;
    }
    let root = (1.0 - beta2).sqrt();
    beta2 / (root * (1.0 + root))
}

/// Lorentz factor `1 / sqrt(1 - (v/c)²)`.
pub fn lorentz_factor(speed: f64) -> f64 {
    1.0 + gamma_minus_one(speed)
}

/// Relativistic kinetic energy `(γ - 1)mc²` in joules.
pub fn relativistic_energy(speed: f64, mass: f64) -> f64 {
    gamma_minus_one(speed) * mass * SPEED_OF_LIGHT * SPEED_OF_LIGHT
}

/// Newtonian kinetic energy `½mv²` in joules.
pub fn classical_energy(speed: f64, mass: f64) -> f64 {
    0.5 * mass * speed * speed
}

/// True once the projectile's leading edge is inside the planet's surface.
pub fn collides(position: f64, scale_factor: f64, surface_scale: f64) -> bool {
    position + scale_factor < surface_scale
}

/// Classify the projectile at `position`.
///
/// Callers only evaluate while the projectile is in flight, so a given
/// impact is classified once.
pub fn evaluate(position: f64, config: &SimulationConfig) -> ImpactOutcome {
    if !collides(position, config.scale_factor(), config.surface_scale()) {
        return ImpactOutcome::None;
    }

    // Size doubles as mass.
    let energy = relativistic_energy(config.projectile_speed(), config.projectile_size());
    if energy > config.destruction_threshold() {
        ImpactOutcome::Destroy
    } else {
        ImpactOutcome::Crater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DESTRUCTION_THRESHOLD, MAX_SPEED, MIN_SPEED};

    #[test]
    fn lorentz_at_rest_is_one() {
        assert_eq!(lorentz_factor(0.0), 1.0);
        assert_eq!(relativistic_energy(0.0, 1e6), 0.0);
    }

    #[test]
    fn lorentz_is_increasing_over_the_speed_range() {
        let mut previous = lorentz_factor(MIN_SPEED);
        assert!(previous >= 1.0);
        let steps = 2000;
        for i in 1..=steps {
            let speed = MIN_SPEED + (MAX_SPEED - MIN_SPEED) * i as f64 / steps as f64;
            let gamma = lorentz_factor(speed);
            assert!(gamma > previous, "not increasing at {} m/s", speed);
            previous = gamma;
        }
        assert!(lorentz_factor(MAX_SPEED).is_finite());
    }

    #[test]
    fn gamma_minus_one_is_increasing_at_low_speed() {
        // Where the naive form loses most of its digits.
        let mut previous = gamma_minus_one(MIN_SPEED);
        for i in 1..100 {
            let g = gamma_minus_one(MIN_SPEED + i as f64);
            assert!(g > previous);
            previous = g;
        }
    }

    #[test]
    fn lorentz_past_c_is_infinite() {
        assert!(lorentz_factor(SPEED_OF_LIGHT).is_infinite());
        assert!(lorentz_factor(2.0 * SPEED_OF_LIGHT).is_infinite());
    }

    #[test]
    fn energy_grows_with_speed_and_size() {
        let base = relativistic_energy(1e5, 1e4);
        assert!(relativistic_energy(1.1e5, 1e4) > base);
        assert!(relativistic_energy(1e5, 1.1e4) > base);
        assert!(relativistic_energy(2e8, 1.0) > relativistic_energy(1.9e8, 1.0));
    }

    #[test]
    fn relativistic_energy_matches_classical_when_slow() {
        let classical = classical_energy(1e4, 1e3);
        let relativistic = relativistic_energy(1e4, 1e3);
        assert!(relativistic > classical);
        assert!((relativistic - classical) / classical < 1e-8);
    }

    #[test]
    fn no_collision_means_none_whatever_the_energy() {
        let mut config = SimulationConfig::default();
        config.set_projectile_speed(MAX_SPEED).unwrap();
        config.set_projectile_size(1e6).unwrap();
        let edge = config.surface_scale() - config.scale_factor();
        assert_eq!(evaluate(edge + 1e-9, &config), ImpactOutcome::None);
        assert_eq!(evaluate(config.surface_scale(), &config), ImpactOutcome::None);
        assert_eq!(evaluate(300.0, &config), ImpactOutcome::None);
        assert_eq!(evaluate(edge - 1e-9, &config), ImpactOutcome::Destroy);
    }

    #[test]
    fn threshold_splits_crater_from_destroy() {
        let mut config = SimulationConfig::default();
        config.set_projectile_speed(1e5).unwrap();
        config.set_projectile_size(1e5).unwrap();
        assert!(relativistic_energy(1e5, 1e5) < DESTRUCTION_THRESHOLD);
        assert_eq!(evaluate(0.0, &config), ImpactOutcome::Crater);

        config.set_projectile_size(1e6).unwrap();
        assert_eq!(evaluate(0.0, &config), ImpactOutcome::Destroy);
    }
}

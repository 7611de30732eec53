//! Debris thrown out when the planet is destroyed.

use euclid::default::{Transform3D, Vector3D};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::bodies::rotation;
use crate::camera::Pose;
use crate::REFERENCE_FPS;

/// How many distinct fragment shapes the renderer has.
pub const FRAGMENT_SHAPES: usize = 7;
/// Radius of the fragment shell before it expands, in fragment-local units.
pub const SHELL_RADIUS: f64 = 6.7;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebrisSettings {
    pub count: usize,
    pub seed: u64,
    /// Added to the shell's displacement every reference frame.
    pub expansion_speed: f64,
}

impl Default for DebrisSettings {
    fn default() -> Self {
        Self {
            count: 40,
            seed: 0,
            expansion_speed: 0.05,
        }
    }
}

/// One piece of the planet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fragment {
    /// Which of the renderer's fragment shapes to draw, `0..FRAGMENT_SHAPES`.
    pub shape: usize,
    /// Fixed random orientation picked when the field spawns.
    tumble: Pose,
    /// Unit direction on the shell.
    direction: Vector3D<f64>,
    /// +1 or -1, which way it spins.
    spin: f64,
}

/// A shell of fragments flying apart from the planet's center.
#[derive(Clone, Debug, PartialEq)]
pub struct DebrisField {
    fragments: Vec<Fragment>,
    /// Shell radius multiplier; starts at 1.
    displacement: f64,
    expansion_speed: f64,
    /// Scale from fragment-local units to render units.
    size: f64,
}

impl DebrisField {
    /// Lay out the fragments on a Fibonacci sphere whose initial radius is
    /// the planet's surface. Same settings give the same field.
    pub fn spawn(settings: &DebrisSettings, surface_scale: f64) -> Self {
        let mut rand = SmallRng::seed_from_u64(settings.seed ^ settings.count as u64);
        let count = settings.count;

        let fragments = (1..=count)
            .map(|i| {
                let i = i as f64;
                let theta = 2.0 * std::f64::consts::PI * i * (1.0 - 5f64.sqrt());
                let phi = (1.0 - 2.0 * i / count as f64).max(-1.0).min(1.0).acos();
                let direction = Vector3D::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                );

                let axis = Vector3D::new(
                    rand.gen_range(-1.0..1.0),
                    rand.gen_range(-1.0..1.0),
                    rand.gen_range(-1.0..1.0),
                );
                let tumble = rotation(rand.gen_range(0.0..std::f64::consts::TAU), axis);

                Fragment {
                    shape: rand.gen_range(0..FRAGMENT_SHAPES),
                    tumble,
                    direction,
                    spin: if i as usize % 2 == 0 { 1.0 } else { -1.0 },
                }
            })
            .collect();

        Self {
            fragments,
            displacement: 1.0,
            expansion_speed: settings.expansion_speed,
            size: surface_scale / SHELL_RADIUS,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Push the shell outward by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.displacement += self.expansion_speed * dt * REFERENCE_FPS;
        }
    }

    /// Model transform of every fragment at time `t`, centered on `center`.
    pub fn transforms(&self, center: &Pose, t: f64) -> Vec<Pose> {
        let base = Transform3D::scale(self.size, self.size, self.size).then(center);
        let reach = SHELL_RADIUS * self.displacement;
        self.fragments
            .iter()
            .map(|fragment| {
                let offset = fragment.direction * reach;
                rotation(fragment.spin * t, Vector3D::new(0.0, 0.0, 1.0))
                    .then(&Transform3D::translation(offset.x, offset.y, offset.z))
                    .then(&fragment.tumble)
                    .then(&base)
            })
            .collect()
    }
}

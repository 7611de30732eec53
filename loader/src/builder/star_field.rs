//! Star field builder

use euclid::default::Point3D;

/// One background star.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Point3D<f64>,
    /// 0 (invisible) to 1 (as bright as it gets).
    pub brightness: f32,
}

/// StarField is a helper to scatter a ton of stars on a sphere around the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StarField {
    pub count: usize,
    pub seed: u64,
    /// Radius of the sky sphere in render units.
    pub radius: f64,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            count: 400,
            seed: 0,
            radius: 900.0,
        }
    }
}

impl StarField {
    /// Scatter the stars. The same field always comes out the same.
    pub fn construct(&self) -> Vec<Star> {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        use rand_distr::{Distribution, Normal};

        // Hash
        let seed = (self.count as u64)
            .wrapping_add(self.radius.to_bits())
            .wrapping_add(self.seed);
        let mut rand = SmallRng::seed_from_u64(seed);
        // Most stars are dim, a few are bright.
        let brightness = match Normal::new(0.45f32, 0.2) {
            Ok(normal) => normal,
            Err(_) => return Vec::new(),
        };

        (0..self.count)
            .map(|_| {
                // Uniform on the sphere: uniform height, uniform angle around.
                let z: f64 = rand.gen_range(-1.0..=1.0);
                let theta = rand.gen_range(0.0..std::f64::consts::TAU);
                let ring = (1.0 - z * z).sqrt();
                Star {
                    pos: Point3D::new(
                        ring * theta.cos() * self.radius,
                        ring * theta.sin() * self.radius,
                        z * self.radius,
                    ),
                    brightness: brightness.sample(&mut rand).max(0.05).min(1.0),
                }
            })
            .collect()
    }
}

//! Handles bodies and such

use euclid::default::{Transform3D, Vector3D};
use euclid::Angle;

use crate::camera::Pose;

/// The representation of a body, like a planet or a moon.
/// Doesn't store where it is; the scenery works that out from the time.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    /// Physical radius in meters.
    pub radius: f64,
    /// Color is stored as 0xRRGGBB
    pub color: u32,
    /// Color is stored as 0xRRGGBB
    pub outline: u32,
}

/// How fast the planet turns on its axis.
pub const SPIN_MULTIPLIER: f64 = 0.25;
/// Satellite orbit radius, in planet radii.
pub const SATELLITE_ORBIT: f64 = 2.0;
/// Satellite size, in planet radii.
pub const SATELLITE_SCALE: f64 = 0.1;

/// Rotation by `angle` radians about `axis`, which needn't be normalized.
/// A zero axis is no rotation at all.
pub fn rotation(angle: f64, axis: Vector3D<f64>) -> Pose {
    let length = axis.length();
    if !(length > f64::EPSILON) || !angle.is_finite() {
        return Transform3D::identity();
    }
    let axis = axis / length;
    Transform3D::rotation(axis.x, axis.y, axis.z, Angle::radians(angle))
}

/// The decorative part of the scene: a spinning planet and maybe a moon.
/// Nothing here feeds back into the impact physics.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenery {
    pub planet: Body,
    pub satellite: Option<Body>,
    /// Visual radius of the planet, in render units.
    pub surface_scale: f64,
}

impl Scenery {
    pub fn new(planet: Body, satellite: Option<Body>, surface_scale: f64) -> Self {
        Self {
            planet,
            satellite,
            surface_scale,
        }
    }

    /// The planet at time `t`: scaled to its visual radius, then tumbling.
    pub fn planet_transform(&self, t: f64) -> Pose {
        let s = self.surface_scale;
        let spin = rotation(
            t * SPIN_MULTIPLIER,
            Vector3D::new(t, t / (SPIN_MULTIPLIER * SPIN_MULTIPLIER), 1.0),
        );
        Transform3D::scale(s, s, s).then(&spin)
    }

    /// The satellite at time `t`, orbiting in the planet's (spinning) frame.
    pub fn satellite_transform(&self, planet: &Pose, t: f64) -> Option<Pose> {
        self.satellite.as_ref()?;
        let wobble = rotation(t, Vector3D::new(0.0, t, 1.0));
        Some(
            Transform3D::scale(SATELLITE_SCALE, SATELLITE_SCALE, SATELLITE_SCALE)
                .then(&wobble)
                .then(&Transform3D::translation(SATELLITE_ORBIT, 0.0, 0.0))
                .then(&wobble)
                .then(planet),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::default::Point3D;

    fn earth() -> Body {
        Body {
            name: "Earth".to_string(),
            radius: 6_378_100.0,
            color: 0x3669FF,
            outline: 0x56FF2D,
        }
    }

    #[test]
    fn planet_keeps_its_size_while_spinning() {
        let scenery = Scenery::new(earth(), None, 15.0);
        for &t in &[0.0, 1.0, 12.5, 300.0] {
            let pose = scenery.planet_transform(t);
            let center = pose.transform_point3d(Point3D::origin()).unwrap();
            assert!(center.to_vector().length() < 1e-9);
            let edge = pose.transform_point3d(Point3D::new(1.0, 0.0, 0.0)).unwrap();
            assert!((edge.to_vector().length() - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn satellite_orbits_at_a_fixed_distance() {
        let scenery = Scenery::new(earth(), Some(earth()), 15.0);
        for &t in &[0.0, 2.0, 40.0] {
            let planet = scenery.planet_transform(t);
            let moon = scenery.satellite_transform(&planet, t).unwrap();
            let center = moon.transform_point3d(Point3D::origin()).unwrap();
            assert!((center.to_vector().length() - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn no_satellite_no_transform() {
        let scenery = Scenery::new(earth(), None, 15.0);
        assert!(scenery
            .satellite_transform(&Transform3D::identity(), 1.0)
            .is_none());
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(
            rotation(1.0, Vector3D::new(0.0, 0.0, 0.0)),
            Transform3D::identity()
        );
    }
}

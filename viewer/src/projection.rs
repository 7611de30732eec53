//! Squashes the 3D scene onto the window.

use euclid::default::{Point3D, Vector3D};
use simulator::camera::{CameraPose, Pose};

/// Vertical field of view, radians.
pub const FOV_Y: f64 = std::f64::consts::FRAC_PI_4;
pub const NEAR: f64 = 0.1;
pub const FAR: f64 = 1000.0;

/// A sphere as it lands on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Disc {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Distance in front of the camera, for sorting.
    pub depth: f64,
}

/// Perspective projection through one camera pose into a `width` x `height` window.
pub struct Projector {
    camera: CameraPose,
    width: f64,
    height: f64,
    /// Focal length in pixels.
    focal: f64,
}

impl Projector {
    pub fn new(camera: CameraPose, width: f32, height: f32) -> Self {
        let height = f64::from(height.max(1.0));
        Self {
            camera,
            width: f64::from(width.max(1.0)),
            height,
            focal: height / 2.0 / (FOV_Y / 2.0).tan(),
        }
    }

    /// Project a world-space point. `None` if it's outside the near/far range.
    pub fn point(&self, world: Point3D<f64>) -> Option<(f32, f32, f64)> {
        let view = self.camera.transform_point3d(world)?;
        let depth = -view.z;
        if !(NEAR..=FAR).contains(&depth) {
            return None;
        }
        let x = self.width / 2.0 + view.x / depth * self.focal;
        let y = self.height / 2.0 - view.y / depth * self.focal;
        Some((x as f32, y as f32, depth))
    }

    /// Project a unit sphere placed by `model`.
    pub fn sphere(&self, model: &Pose) -> Option<Disc> {
        let center = model.transform_point3d(Point3D::origin())?;
        let radius = model
            .transform_vector3d(Vector3D::new(1.0, 0.0, 0.0))
            .length();
        let (x, y, depth) = self.point(center)?;
        Some(Disc {
            x,
            y,
            radius: (radius / depth * self.focal) as f32,
            depth,
        })
    }

    /// Whether a disc overlaps the window at all.
    pub fn visible(&self, disc: &Disc) -> bool {
        let (w, h, r) = (self.width as f32, self.height as f32, disc.radius);
        disc.x + r > 0.0 && disc.x - r <= w && disc.y + r > 0.0 && disc.y - r <= h
    }
}

//! The camera: a fixed overview, or a chase view behind the projectile, with
//! the switch between them eased over several frames.

use euclid::default::{Point3D, Transform3D, Vector3D};
use tracing::trace;

use crate::REFERENCE_FPS;

/// A rigid (possibly scaled) transform in render space.
pub type Pose = Transform3D<f64>;

/// World-to-camera transform.
pub type CameraPose = Pose;

/// Blend factor per frame at the reference frame rate.
pub const DEFAULT_BLEND: f64 = 0.1;

/// Something the camera can follow. It may have no pose right now.
pub trait PoseSource {
    fn current_pose(&self) -> Option<Pose>;
}

/// What the camera looks at this frame. Tracking only borrows the source;
/// the camera never owns or moves what it follows.
#[derive(Copy, Clone)]
pub enum CameraTarget<'a> {
    Fixed,
    Tracking(&'a dyn PoseSource),
}

/// How quickly the camera catches up with where it wants to be.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Smoothing {
    /// Blend this fraction of the remaining distance every frame, whatever
    /// the frame took. Faster displays move the camera faster.
    PerFrame(f64),
    /// Blend `1 - exp(-rate * dt)` of the remaining distance.
    Rate(f64),
}

impl Smoothing {
    /// The rate that blends `per_frame` of the way on each frame at `fps`.
    pub fn matching(per_frame: f64, fps: f64) -> Self {
        let per_frame = per_frame.max(0.0).min(1.0 - f64::EPSILON);
        Smoothing::Rate(-(1.0 - per_frame).ln() * fps)
    }

    /// The interpolation weight for a frame lasting `dt` seconds, in `[0, 1]`.
    pub fn blend(&self, dt: f64) -> f64 {
        match *self {
            Smoothing::PerFrame(factor) => factor.max(0.0).min(1.0),
            Smoothing::Rate(rate) => {
                let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
                1.0 - (-rate.max(0.0) * dt).exp()
            }
        }
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::matching(DEFAULT_BLEND, REFERENCE_FPS)
    }
}

/// Per-scene camera setup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraSettings {
    pub overview: CameraPose,
    /// Where the chase camera sits in the tracked object's local frame.
    pub tracking_offset: Pose,
    pub smoothing: Smoothing,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            overview: look_at(
                Point3D::new(0.0, 100.0, 450.0),
                Point3D::origin(),
                Vector3D::new(0.0, 1.0, 0.0),
            )
            .unwrap_or_else(Transform3D::identity),
            tracking_offset: Transform3D::translation(0.0, 10.0, 50.0),
            smoothing: Smoothing::default(),
        }
    }
}

/// World-to-camera transform for a camera at `eye` looking at `target`.
/// The camera looks down its own -z axis.
///
/// `None` if `eye == target` or `up` is parallel to the view direction.
pub fn look_at(eye: Point3D<f64>, target: Point3D<f64>, up: Vector3D<f64>) -> Option<CameraPose> {
    let back = eye - target;
    if back.length() <= f64::EPSILON {
        return None;
    }
    let back = back.normalize();
    let right = up.cross(back);
    if right.length() <= f64::EPSILON {
        return None;
    }
    let right = right.normalize();
    let up = back.cross(right);

    let camera_to_world = Transform3D::new(
        right.x, right.y, right.z, 0.0, //
        up.x, up.y, up.z, 0.0, //
        back.x, back.y, back.z, 0.0, //
        eye.x, eye.y, eye.z, 1.0,
    );
    camera_to_world.inverse()
}

/// Component-wise linear interpolation; `amount = 0` is `from`, `1` is `to`.
pub fn lerp_pose(from: &Pose, to: &Pose, amount: f64) -> Pose {
    let from = from.to_array();
    let to = to.to_array();
    let mut out = [0.0; 16];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = from[i] + (to[i] - from[i]) * amount;
    }
    Transform3D::from_array(out)
}

/// Largest component-wise difference between two poses.
pub fn pose_distance(a: &Pose, b: &Pose) -> f64 {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .fold(0.0, |max, (x, y)| f64::max(max, (x - y).abs()))
}

/// Owns and updates the published camera pose.
#[derive(Clone, Debug)]
pub struct CameraController {
    settings: CameraSettings,
    pose: CameraPose,
}

impl CameraController {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            pose: settings.overview,
            settings,
        }
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// The pose published on the last frame.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Where the camera would be with no smoothing.
    ///
    /// A tracked source without a pose falls back to the overview for this
    /// frame only; nothing about the missing pose is remembered.
    pub fn desired_pose(&self, target: CameraTarget<'_>) -> CameraPose {
        match target {
            CameraTarget::Fixed => self.settings.overview,
            CameraTarget::Tracking(source) => match source.current_pose() {
                Some(pose) => self
                    .settings
                    .tracking_offset
                    .then(&pose)
                    .inverse()
                    .unwrap_or_else(|| {
                        trace!("tracked pose is singular, holding the overview");
                        self.settings.overview
                    }),
                None => {
                    trace!("tracked source has no pose, holding the overview");
                    self.settings.overview
                }
            },
        }
    }

    /// Move part of the way from `previous` (what the renderer actually used
    /// last frame) toward the desired pose, and publish the result.
    pub fn compute_pose(
        &mut self,
        previous: &CameraPose,
        target: CameraTarget<'_>,
        dt: f64,
    ) -> CameraPose {
        let desired = self.desired_pose(target);
        let amount = self.settings.smoothing.blend(dt);
        self.pose = lerp_pose(previous, &desired, amount);
        self.pose
    }
}

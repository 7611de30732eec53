//! Lets you load a scene from a file.

use serde::Deserialize;

/// A Vector3D or Point3D.
#[derive(Deserialize)]
struct Vec3D(f64, f64, f64);

/// A Body in space
#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Prefab(String), // A pre-made pre-defined Body, or "none"
    Custom {
        name: String,
        radius: f64,
        color: u32,
        #[serde(default)]
        outline: u32,
    },
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Projectile {
    speed: Option<f64>,
    size: Option<f64>,
    start_position: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Scale {
    axis: Option<f64>,
    surface: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Smoothing {
    PerFrame(f64),
    Rate(f64),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Camera {
    eye: Option<Vec3D>,
    target: Option<Vec3D>,
    up: Option<Vec3D>,
    tracking_offset: Option<Vec3D>,
    smoothing: Option<Smoothing>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Debris {
    count: Option<usize>,
    seed: Option<u64>,
    expansion_speed: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Stars {
    count: Option<usize>,
    seed: Option<u64>,
    radius: Option<f64>,
}

/// Serde needs you to define the thing to use it on...
/// Every field is optional; what's missing comes from the base prefab.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawScene {
    /// Which prefab scene to start from. Defaults to `earth_impact`.
    prefab: Option<String>,
    planet: Option<Body>,
    satellite: Option<Body>,
    projectile: Projectile,
    scale: Scale,
    destruction_threshold: Option<f64>,
    camera: Camera,
    debris: Debris,
    stars: Stars,
}

use crate::builder::{Scene, SceneBuilder};
use crate::error::LoadError;
use crate::prefabs;
use euclid::default::{Point3D, Vector3D};
use simulator::{bodies, camera};
use std::path::Path;
use tracing::{debug, info};

/// The scene to start from when a file doesn't name one.
pub const DEFAULT_SCENE: &str = "earth_impact";

/// Parses a scene file and builds it.
pub fn load(contents: String) -> Result<Scene, LoadError> {
    let contents = &*contents;
    let raw: RawScene = json5::from_str(contents)?;
    let builder = apply(raw)?;
    builder.construct()
}

/// Reads and loads a scene file from disk.
pub fn load_file(path: &Path) -> Result<Scene, LoadError> {
    info!(path = %path.display(), "loading scene");
    let contents = std::fs::read_to_string(path)?;
    load(contents)
}

/// Layer the file's values over its base prefab.
fn apply(raw: RawScene) -> Result<SceneBuilder, LoadError> {
    let prefab = raw.prefab.as_deref().unwrap_or(DEFAULT_SCENE);
    debug!(prefab, "base scene");
    let mut builder = get_scene_from_id(prefab)?;

    if let Some(planet) = raw.planet {
        // A scene without a planet has nothing to hit.
        builder.planet = to_body(planet)?.ok_or(LoadError::MissingPlanet)?;
    }
    if let Some(satellite) = raw.satellite {
        builder.satellite = to_body(satellite)?;
    }

    let projectile = raw.projectile;
    if let Some(speed) = projectile.speed {
        builder.speed = speed;
    }
    if let Some(size) = projectile.size {
        builder.size = size;
    }
    if let Some(start) = projectile.start_position {
        builder.start_position = start;
    }
    if let Some(axis) = raw.scale.axis {
        builder.axis_scale = axis;
    }
    if let Some(surface) = raw.scale.surface {
        builder.surface_scale = surface;
    }
    if let Some(threshold) = raw.destruction_threshold {
        builder.threshold = threshold;
    }

    let cam = raw.camera;
    if let Some(eye) = cam.eye {
        builder.eye = to_point(eye);
    }
    if let Some(target) = cam.target {
        builder.target = to_point(target);
    }
    if let Some(up) = cam.up {
        builder.up = to_vector(up);
    }
    if let Some(offset) = cam.tracking_offset {
        builder.tracking_offset = to_vector(offset);
    }
    match cam.smoothing {
        Some(Smoothing::PerFrame(factor)) => {
            builder.smoothing = camera::Smoothing::PerFrame(factor)
        }
        Some(Smoothing::Rate(rate)) => builder.smoothing = camera::Smoothing::Rate(rate),
        None => {}
    }

    if let Some(count) = raw.debris.count {
        builder.debris.count = count;
    }
    if let Some(seed) = raw.debris.seed {
        builder.debris.seed = seed;
    }
    if let Some(expansion_speed) = raw.debris.expansion_speed {
        builder.debris.expansion_speed = expansion_speed;
    }

    if let Some(count) = raw.stars.count {
        builder.stars.count = count;
    }
    if let Some(seed) = raw.stars.seed {
        builder.stars.seed = seed;
    }
    if let Some(radius) = raw.stars.radius {
        builder.stars.radius = radius;
    }

    Ok(builder)
}

fn to_point(v: Vec3D) -> Point3D<f64> {
    Point3D::new(v.0, v.1, v.2)
}

fn to_vector(v: Vec3D) -> Vector3D<f64> {
    Vector3D::new(v.0, v.1, v.2)
}

/// `None` for the special prefab name "none".
fn to_body(body: Body) -> Result<Option<bodies::Body>, LoadError> {
    match body {
        Body::Prefab(id) if id == "none" => Ok(None),
        Body::Prefab(id) => get_body_from_id(&id).map(Some),
        Body::Custom {
            name,
            radius,
            color,
            outline,
        } => Ok(Some(bodies::Body {
            name,
            radius,
            color,
            outline,
        })),
    }
}

macro_rules! maker {
    (
        $kind:ident: $ret:ty; $($name:ident),*
    ) => {
        {
            let mut h: HashMap<String, fn() -> $ret> = HashMap::new();
            $( h.insert(stringify!($name).to_string(), prefabs::$kind::$name); )*
            h
        }
    };
}

use std::collections::HashMap;

lazy_static! {
    static ref BODIES: HashMap<String, fn() -> bodies::Body> = maker![
        bodies: bodies::Body;
        earth,
        luna,
        mars,
        phobos,
        deimos,
        venus,
        mercury,
        jupiter
    ];
    static ref SCENES: HashMap<String, fn() -> SceneBuilder> = maker![
        scenes: SceneBuilder;
        earth_impact,
        mars_impact
    ];
}

/// Gets a premade Body from a string
pub fn get_body_from_id(id: &str) -> Result<bodies::Body, LoadError> {
    BODIES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}

/// Gets a premade scene from a string
pub fn get_scene_from_id(id: &str) -> Result<SceneBuilder, LoadError> {
    SCENES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}

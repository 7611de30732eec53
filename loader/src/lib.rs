//! Loads impact scenes from files and prefabs.
//! The root just re-exports the pieces.

pub mod builder;
pub use builder::star_field::{Star, StarField};
pub use builder::{Scene, SceneBuilder};
pub mod deserialize;
pub mod error;
pub mod prefabs; // prefabs::bodies::whatever
pub use deserialize::*;
pub use error::LoadError;

#[macro_use]
extern crate lazy_static;

//! Things that go wrong when loading a scene.

use simulator::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file isn't valid json5, or doesn't have the right shape.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] json5::Error),

    /// Failed to read the scene file from disk.
    #[error("failed to read scene: {0}")]
    Read(#[from] std::io::Error),

    #[error("no prefab named {0}")]
    UnknownPrefab(String),

    /// `planet: "none"`. Satellites can be left out, the planet can't.
    #[error("a scene needs a planet, got \"none\"")]
    MissingPlanet,

    /// The overview camera can't look where it was told to.
    #[error("overview camera eye, target and up don't make a view")]
    DegenerateCamera,

    /// A value the simulator refuses to run with.
    #[error("invalid scene value: {0}")]
    Invalid(#[from] ConfigError),
}

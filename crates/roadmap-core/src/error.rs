/// Result alias used across the roadmap core.
pub type RoadmapResult<T> = Result<T, RoadmapError>;

/// Failures that can surface while building roadmap geometry or a scene.
///
/// Everything else in the core degrades silently (unknown icons, bad colors,
/// measurements taken before mount).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RoadmapError {
    /// The path description could not be parsed.
    #[error("invalid path description: {0}")]
    InvalidPath(String),

    /// The path parsed but has no drawable length.
    #[error("path has no drawable segments")]
    EmptyPath,

    /// A scene needs at least one level to place waypoints.
    #[error("roadmap needs at least one level")]
    NoLevels,
}

impl RoadmapError {
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

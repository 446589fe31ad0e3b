use thiserror::Error;

/// Rejections from the checked polygon constructors.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },

    #[error("polygon has {got} vertices, limit is {max}")]
    TooManyVertices { got: usize, max: usize },

    #[error("vertex {index} has a non-finite coordinate or bulge")]
    NonFinite { index: usize },

    #[error("vertex {index} is outside the accepted coordinate range")]
    OutOfBounds { index: usize },

    #[error("unsupported polygon document version {0}")]
    UnsupportedVersion(u32),

    #[error("malformed polygon document: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },

    #[error("parameter '{param}' must be positive")]
    NotPositive { param: &'static str },

    #[error("door width range [{min}, {max}] is empty")]
    EmptyDoorRange { min: f64, max: f64 },

    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanupError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Non-fatal outcome the caller should log or display.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupWarning {
    #[error("door collapse would leave {remaining} vertices; boundary kept without door cleanup")]
    DegenerateRebuild { remaining: usize },
}

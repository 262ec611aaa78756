use thiserror::Error;

/// Top-level error type for the Droplet optics crate.
#[derive(Debug, Error)]
pub enum DropletError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Optics(#[from] OpticsError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to optical media.
#[derive(Debug, Error)]
pub enum OpticsError {
    #[error("refractive index {name} = {value} must be finite and positive")]
    InvalidRefractiveIndex { name: &'static str, value: f64 },
}

/// Errors raised while loading a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scene configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`DropletError`].
pub type Result<T> = std::result::Result<T, DropletError>;

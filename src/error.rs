use thiserror::Error;

/// Top-level error type for centerline computations.
#[derive(Debug, Error)]
pub enum CenterLineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to segment geometry.
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

    #[error("zero-length vector")]
    ZeroVector,

    #[error("offset {offset} would collapse arc of radius {radius}")]
    OffsetExceedsRadius { offset: f64, radius: f64 },
}

/// Errors related to composite paths.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path has no segments")]
    Empty,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CenterLineError`].
pub type Result<T> = std::result::Result<T, CenterLineError>;

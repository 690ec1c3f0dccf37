use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoBoxError {
    /// Interval construction with `end < begin`.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Axis index outside `[0, D)` through a checked accessor.
    #[error("Axis {axis} out of bounds for dimension {dim}")]
    AxisOutOfBounds { axis: usize, dim: usize },

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, GeoBoxError>;

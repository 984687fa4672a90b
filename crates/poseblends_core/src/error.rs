use thiserror::Error;

/// Errors surfaced by the driver and the raw-value conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("joint {joint}: parent world matrix is singular, cannot derive a local transform")]
    SingularParentMatrix { joint: usize },

    #[error("unknown model family value {0}, expected 0 (SMPL) or 1 (STAR)")]
    UnknownModelFamily(i16),

    #[error("unknown joint matrix mode value {0}, expected 0 (local), 1 (world) or 2 (world with inverse)")]
    UnknownMatrixMode(i16),
}

pub type Result<T> = std::result::Result<T, DriverError>;

use thiserror::Error;

/// Errors raised by registry operations.
///
/// Validation runs before any mutation, so a returned error always leaves
/// the registry unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Segment name must not be empty")]
    InvalidName,

    #[error("Segment length must be greater than zero, got {0}")]
    InvalidLength(f64),

    #[error("Unknown segment: {0}")]
    SegmentNotFound(String),
}

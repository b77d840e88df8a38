//! Error taxonomy for resampling operations.

use crate::element::ElementKind;

/// Errors that can occur while validating or resampling a grid.
///
/// Every variant is raised before the target buffer is allocated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    #[error("Invalid {name}: expected a positive value, got {value}")]
    InvalidDimension { name: &'static str, value: i64 },

    #[error("Source buffer size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Element kind {0} has no clamping conversion")]
    UnsupportedElementKind(ElementKind),

    #[error("Grid of {width}x{height} with block size {block_size} overflows usize")]
    DimensionOverflow {
        width: usize,
        height: usize,
        block_size: usize,
    },
}

/// Result type alias for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

//! Resampling utilities for volume slice display.
//!
//! Provides nearest-neighbor and bilinear rescaling and axis flipping for
//! flat row-major sample grids with interleaved channels. All operations are
//! pure: the source is only read, and the result is a new buffer (or the
//! source itself when it is already at the target size).

pub mod buffer;
pub mod element;
pub mod error;
pub mod flip;
pub mod grid;
pub mod imaging;
pub mod options;
pub mod scale;

// Re-exports for convenience
pub use buffer::SampleBuffer;
pub use element::{Element, ElementKind};
pub use error::{ResampleError, Result};
pub use flip::{Flip, flip_grid};
pub use grid::GridSize;
pub use options::{BilinearBorder, ResampleOptions};
pub use scale::{
    Interpolation, scale, scale_as, scale_bilinear, scale_bilinear_as, scale_nearest,
    scale_nearest_as,
};

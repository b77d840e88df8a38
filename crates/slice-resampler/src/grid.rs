//! Grid dimensions and flat buffer layout.
//!
//! Grids are stored row-major with `block_size` interleaved channels per cell:
//!
//! ```text
//! data[(y * width + x) * block_size + k]
//! ```

use crate::error::{ResampleError, Result};

/// Width and height of a grid, both guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Create a size, rejecting zero width or height.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        positive("width", width)?;
        positive("height", height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn cells(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Required buffer length for this size with `block_size` channels per cell.
    pub fn buffer_len(&self, block_size: usize) -> Result<usize> {
        positive("block_size", block_size)?;
        self.cells()
            .and_then(|cells| cells.checked_mul(block_size))
            .ok_or(ResampleError::DimensionOverflow {
                width: self.width,
                height: self.height,
                block_size,
            })
    }

    /// Check that `len` is exactly the buffer length for this size.
    pub fn check_len(&self, len: usize, block_size: usize) -> Result<()> {
        let expected = self.buffer_len(block_size)?;
        if len != expected {
            return Err(ResampleError::SizeMismatch {
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}

impl TryFrom<(i64, i64)> for GridSize {
    type Error = ResampleError;

    fn try_from((width, height): (i64, i64)) -> Result<Self> {
        let width = signed_dimension("width", width)?;
        let height = signed_dimension("height", height)?;
        Self::new(width, height)
    }
}

impl TryFrom<(u32, u32)> for GridSize {
    type Error = ResampleError;

    fn try_from((width, height): (u32, u32)) -> Result<Self> {
        Self::try_from((i64::from(width), i64::from(height)))
    }
}

fn positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ResampleError::InvalidDimension { name, value: 0 });
    }
    Ok(())
}

fn signed_dimension(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(ResampleError::InvalidDimension { name, value });
    }
    usize::try_from(value).map_err(|_| ResampleError::InvalidDimension { name, value })
}

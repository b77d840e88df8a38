//! Axis reversal for grids.
//!
//! Flipping both axes is equivalent to a 180-degree rotation.

use tracing::debug;

use crate::error::Result;
use crate::grid::GridSize;
use crate::options::ResampleOptions;

/// Which axes to reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip {
    /// Reverse the order of columns.
    pub x: bool,
    /// Reverse the order of rows.
    pub y: bool,
}

impl Flip {
    pub const NONE: Flip = Flip { x: false, y: false };
    pub const X: Flip = Flip { x: true, y: false };
    pub const Y: Flip = Flip { x: false, y: true };
    pub const BOTH: Flip = Flip { x: true, y: true };

    pub fn is_identity(self) -> bool {
        !self.x && !self.y
    }
}

/// Reverse a grid along the axes selected by `options.flip_x` / `options.flip_y`.
///
/// Target cell `(i, j)` receives source cell `(width-1-i, j)` and/or
/// `(i, height-1-j)`. Cells keep their channel order. The result is always a
/// fresh buffer, including when no flag is set.
pub fn flip_grid<T: Copy>(source: &[T], size: GridSize, options: &ResampleOptions) -> Result<Vec<T>> {
    let block_size = options.block_size;
    size.check_len(source.len(), block_size)?;

    let flip = options.flip();
    if flip.is_identity() {
        debug!(
            width = size.width(),
            height = size.height(),
            "No flip requested, copying grid"
        );
        return Ok(source.to_vec());
    }

    debug!(
        width = size.width(),
        height = size.height(),
        block_size,
        flip_x = flip.x,
        flip_y = flip.y,
        "Flipping grid"
    );

    let row_len = size.width() * block_size;
    let mut target = Vec::with_capacity(source.len());
    for j in 0..size.height() {
        let y = if flip.y { size.height() - 1 - j } else { j };
        let row = &source[y * row_len..][..row_len];

        if flip.x {
            for cell in row.chunks_exact(block_size).rev() {
                target.extend_from_slice(cell);
            }
        } else {
            target.extend_from_slice(row);
        }
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResampleError;

    fn size(width: usize, height: usize) -> GridSize {
        GridSize::new(width, height).unwrap()
    }

    /// Grid with unique corner values.
    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40, other cells 128.
    fn create_corner_grid(width: usize, height: usize) -> Vec<u8> {
        let mut grid = vec![128u8; width * height];
        grid[0] = 10;
        grid[width - 1] = 20;
        grid[(height - 1) * width] = 30;
        grid[height * width - 1] = 40;
        grid
    }

    fn options(flip: Flip) -> ResampleOptions {
        ResampleOptions::new().with_flip(flip)
    }

    #[test]
    fn test_flip_x_reverses_columns() {
        let source = [1u8, 2, 3, 4, 5, 6];
        let result = flip_grid(&source, size(3, 2), &options(Flip::X)).unwrap();
        assert_eq!(result, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_flip_y_reverses_rows() {
        let source = [1u8, 2, 3, 4, 5, 6];
        let result = flip_grid(&source, size(3, 2), &options(Flip::Y)).unwrap();
        assert_eq!(result, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flip_both_corner_values() {
        let (w, h) = (4, 4);
        let result = flip_grid(&create_corner_grid(w, h), size(w, h), &options(Flip::BOTH)).unwrap();

        // Corners swap diagonally
        assert_eq!(result[0], 40);
        assert_eq!(result[w - 1], 30);
        assert_eq!(result[(h - 1) * w], 20);
        assert_eq!(result[h * w - 1], 10);
    }

    #[test]
    fn test_flip_keeps_channel_order_within_cells() {
        let source = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let opts = options(Flip::X).with_block_size(4);
        let result = flip_grid(&source, size(2, 1), &opts).unwrap();
        assert_eq!(result, vec![5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_flip_none_is_fresh_copy() {
        let source = create_corner_grid(5, 3);
        let result = flip_grid(&source, size(5, 3), &options(Flip::NONE)).unwrap();
        assert_eq!(result, source);
        assert!(!std::ptr::eq(result.as_ptr(), source.as_ptr()));
    }

    #[test]
    fn test_flip_is_involution() {
        for flip in [Flip::X, Flip::Y, Flip::BOTH] {
            for (w, h, block_size) in [(1, 1, 1), (5, 7, 1), (4, 3, 3), (6, 2, 4)] {
                let source: Vec<u16> = (0..w * h * block_size).map(|v| v as u16).collect();
                let opts = options(flip).with_block_size(block_size);
                let once = flip_grid(&source, size(w, h), &opts).unwrap();
                let twice = flip_grid(&once, size(w, h), &opts).unwrap();
                assert_eq!(twice, source, "{flip:?} on {w}x{h}x{block_size}");
            }
        }
    }

    #[test]
    fn test_flip_rejects_size_mismatch() {
        let source = [1u8, 2, 3];
        let err = flip_grid(&source, size(2, 2), &options(Flip::X)).unwrap_err();
        assert_eq!(
            err,
            ResampleError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_flip_constants() {
        assert!(Flip::NONE.is_identity());
        assert!(Flip::default().is_identity());
        assert!(!Flip::X.is_identity());
        assert_eq!(Flip::BOTH, Flip { x: true, y: true });
    }
}

//! Resampling configuration.
//!
//! The viewer passes a partial options record; every field falls back to its
//! default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::flip::Flip;

/// How bilinear scaling treats the outermost ring of target cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BilinearBorder {
    /// Leave the first and last target rows and columns zero-initialized.
    #[default]
    Zero,
    /// Interpolate every target cell, including the border ring.
    Extend,
}

/// Options shared by the scale and flip operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleOptions {
    /// Interleaved channels per grid cell (1 for intensity, 4 for RGBA).
    pub block_size: usize,

    /// Representation of values written by the scale operations.
    pub element_kind: ElementKind,

    /// Reverse columns (flip only).
    pub flip_x: bool,

    /// Reverse rows (flip only).
    pub flip_y: bool,

    /// Border ring handling for bilinear scaling.
    pub bilinear_border: BilinearBorder,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            block_size: 1,
            element_kind: ElementKind::Uint8Clamped,
            flip_x: false,
            flip_y: false,
            bilinear_border: BilinearBorder::Zero,
        }
    }
}

impl ResampleOptions {
    /// Create options with the defaults above.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set channels per cell.
    ///
    /// # Panics
    /// Panics if `val` is zero.
    pub fn with_block_size(mut self, val: usize) -> Self {
        assert!(val > 0, "Block size must be positive, got {val}");
        self.block_size = val;
        self
    }

    /// Builder: set output element kind.
    pub fn with_element_kind(mut self, val: ElementKind) -> Self {
        self.element_kind = val;
        self
    }

    /// Builder: set horizontal flip.
    pub fn with_flip_x(mut self, val: bool) -> Self {
        self.flip_x = val;
        self
    }

    /// Builder: set vertical flip.
    pub fn with_flip_y(mut self, val: bool) -> Self {
        self.flip_y = val;
        self
    }

    /// Builder: set both flip flags at once.
    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip_x = flip.x;
        self.flip_y = flip.y;
        self
    }

    /// Builder: set bilinear border handling.
    pub fn with_bilinear_border(mut self, val: BilinearBorder) -> Self {
        self.bilinear_border = val;
        self
    }

    /// Flip flags as a single value.
    pub fn flip(&self) -> Flip {
        Flip {
            x: self.flip_x,
            y: self.flip_y,
        }
    }
}

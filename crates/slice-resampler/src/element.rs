//! Numeric representations of channel values.
//!
//! [`ElementKind`] names a representation at runtime (it is what the viewer
//! sends in its options record), while [`Element`] is the compile-time side:
//! each implementing type knows its kind and how to clamp a blended `f64`
//! back into its own range.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric representation of a single channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Unsigned 8-bit, rounded and clamped to `0..=255`.
    #[default]
    Uint8Clamped,
    /// Unsigned 8-bit with wrap-around stores. Recognized, but no clamping
    /// rule exists for it, so resampling into it is rejected.
    Uint8,
    /// Unsigned 16-bit, rounded and clamped to `0..=65535`.
    Uint16,
    /// Signed 16-bit, rounded and clamped to `-32768..=32767`.
    Int16,
    /// 32-bit float, unclamped.
    Float32,
    /// 64-bit float, unclamped.
    Float64,
}

impl ElementKind {
    /// Returns true if values can be written into this kind.
    pub fn has_conversion(self) -> bool {
        !matches!(self, ElementKind::Uint8)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Uint8Clamped => "uint8_clamped",
            ElementKind::Uint8 => "uint8",
            ElementKind::Uint16 => "uint16",
            ElementKind::Int16 => "int16",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A channel value type the resampler can read and write.
///
/// `from_f64` is the clamp-and-convert rule applied whenever a computed value
/// is stored into a target buffer.
pub trait Element: Copy + Default + Send + Sync + 'static {
    /// Runtime descriptor for this type.
    const KIND: ElementKind;

    fn to_f64(self) -> f64;

    /// Convert a computed value into this representation.
    fn from_f64(value: f64) -> Self;
}

// Integer kinds round half to even and saturate. `NaN as int` is 0.
macro_rules! clamped_integer {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value
                    .round_ties_even()
                    .clamp(f64::from(<$ty>::MIN), f64::from(<$ty>::MAX)) as $ty
            }
        }
    };
}

clamped_integer!(u8, ElementKind::Uint8Clamped);
clamped_integer!(u16, ElementKind::Uint16);
clamped_integer!(i16, ElementKind::Int16);

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float32;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

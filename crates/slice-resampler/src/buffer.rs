//! Runtime-typed sample buffers.
//!
//! The viewer decodes slices into whichever representation the volume uses
//! and names the output representation in [`ResampleOptions::element_kind`].
//! [`SampleBuffer`] carries the source kind at runtime and dispatches once
//! per call into the generic samplers.

use std::borrow::Cow;

use tracing::debug;

use crate::element::{Element, ElementKind};
use crate::error::{ResampleError, Result};
use crate::flip::flip_grid;
use crate::grid::GridSize;
use crate::options::ResampleOptions;
use crate::scale::{Interpolation, scale_as};

/// A flat row-major grid buffer of one element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuffer {
    Uint8Clamped(Vec<u8>),
    Uint16(Vec<u16>),
    Int16(Vec<i16>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Evaluate `$body` with `$data` bound to the inner `Vec` of any variant.
macro_rules! with_samples {
    ($buffer:expr, $data:ident => $body:expr) => {
        match $buffer {
            SampleBuffer::Uint8Clamped($data) => $body,
            SampleBuffer::Uint16($data) => $body,
            SampleBuffer::Int16($data) => $body,
            SampleBuffer::Float32($data) => $body,
            SampleBuffer::Float64($data) => $body,
        }
    };
}

impl SampleBuffer {
    pub fn kind(&self) -> ElementKind {
        match self {
            SampleBuffer::Uint8Clamped(_) => ElementKind::Uint8Clamped,
            SampleBuffer::Uint16(_) => ElementKind::Uint16,
            SampleBuffer::Int16(_) => ElementKind::Int16,
            SampleBuffer::Float32(_) => ElementKind::Float32,
            SampleBuffer::Float64(_) => ElementKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        with_samples!(self, data => data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            SampleBuffer::Uint8Clamped(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            SampleBuffer::Uint16(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<&[i16]> {
        match self {
            SampleBuffer::Int16(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            SampleBuffer::Float32(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            SampleBuffer::Float64(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    /// Copy every sample into an `f64` vector, whatever the kind.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        with_samples!(self, data => data.iter().map(|v| v.to_f64()).collect())
    }

    /// Nearest-neighbor resize into `options.element_kind`.
    pub fn scale_nearest(
        &self,
        size: GridSize,
        target: GridSize,
        options: &ResampleOptions,
    ) -> Result<Cow<'_, SampleBuffer>> {
        self.scale(size, target, options, Interpolation::Nearest)
    }

    /// Bilinear resize into `options.element_kind`.
    pub fn scale_bilinear(
        &self,
        size: GridSize,
        target: GridSize,
        options: &ResampleOptions,
    ) -> Result<Cow<'_, SampleBuffer>> {
        self.scale(size, target, options, Interpolation::Bilinear)
    }

    /// Resize into `options.element_kind` with the given sampling method.
    ///
    /// At equal sizes the buffer is returned borrowed and keeps its own kind,
    /// even if a different kind was requested.
    pub fn scale(
        &self,
        size: GridSize,
        target: GridSize,
        options: &ResampleOptions,
        interpolation: Interpolation,
    ) -> Result<Cow<'_, SampleBuffer>> {
        let kind = options.element_kind;
        if !kind.has_conversion() {
            return Err(ResampleError::UnsupportedElementKind(kind));
        }

        if size == target {
            size.check_len(self.len(), options.block_size)?;
            debug!(
                width = size.width(),
                height = size.height(),
                source_kind = %self.kind(),
                "Buffer already at target size, skipping resize"
            );
            return Ok(Cow::Borrowed(self));
        }

        let scaled = with_samples!(self, data => scale_into(data, size, target, options, interpolation)?);
        Ok(Cow::Owned(scaled))
    }

    /// Reverse the buffer along the axes in `options`. Keeps the source kind.
    pub fn flip(&self, size: GridSize, options: &ResampleOptions) -> Result<SampleBuffer> {
        Ok(with_samples!(self, data => SampleBuffer::from(flip_grid(data, size, options)?)))
    }
}

fn scale_into<S: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
    interpolation: Interpolation,
) -> Result<SampleBuffer> {
    let buffer = match options.element_kind {
        ElementKind::Uint8Clamped => {
            SampleBuffer::Uint8Clamped(scale_as(source, size, target, options, interpolation)?)
        }
        ElementKind::Uint16 => {
            SampleBuffer::Uint16(scale_as(source, size, target, options, interpolation)?)
        }
        ElementKind::Int16 => {
            SampleBuffer::Int16(scale_as(source, size, target, options, interpolation)?)
        }
        ElementKind::Float32 => {
            SampleBuffer::Float32(scale_as(source, size, target, options, interpolation)?)
        }
        ElementKind::Float64 => {
            SampleBuffer::Float64(scale_as(source, size, target, options, interpolation)?)
        }
        kind @ ElementKind::Uint8 => return Err(ResampleError::UnsupportedElementKind(kind)),
    };
    Ok(buffer)
}

impl From<Vec<u8>> for SampleBuffer {
    fn from(data: Vec<u8>) -> Self {
        SampleBuffer::Uint8Clamped(data)
    }
}

impl From<Vec<u16>> for SampleBuffer {
    fn from(data: Vec<u16>) -> Self {
        SampleBuffer::Uint16(data)
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(data: Vec<i16>) -> Self {
        SampleBuffer::Int16(data)
    }
}

impl From<Vec<f32>> for SampleBuffer {
    fn from(data: Vec<f32>) -> Self {
        SampleBuffer::Float32(data)
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(data: Vec<f64>) -> Self {
        SampleBuffer::Float64(data)
    }
}

//! Grid rescaling with nearest-neighbor and bilinear sampling.
//!
//! Both samplers map target cell `t` to source position `t * (source / target)`
//! along each axis. When source and target sizes already match, the typed
//! entry points return the source slice as-is.
//!
//! The output element type is the generic parameter. `options.element_kind`
//! is only consulted by [`SampleBuffer`](crate::SampleBuffer), which picks the
//! type at runtime.

use std::borrow::Cow;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::grid::GridSize;
use crate::options::{BilinearBorder, ResampleOptions};

/// Sampling method for [`scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Nearest,
    Bilinear,
}

/// Scale a grid with the given sampling method.
pub fn scale<'a, T: Element>(
    source: &'a [T],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
    interpolation: Interpolation,
) -> Result<Cow<'a, [T]>> {
    match interpolation {
        Interpolation::Nearest => scale_nearest(source, size, target, options),
        Interpolation::Bilinear => scale_bilinear(source, size, target, options),
    }
}

/// Scale a grid into another element type with the given sampling method.
pub fn scale_as<S: Element, T: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
    interpolation: Interpolation,
) -> Result<Vec<T>> {
    match interpolation {
        Interpolation::Nearest => scale_nearest_as(source, size, target, options),
        Interpolation::Bilinear => scale_bilinear_as(source, size, target, options),
    }
}

/// Resize a grid using nearest-neighbor sampling.
///
/// Each target cell copies all `block_size` channels of the source cell at
/// `(floor(tx * x_ratio), floor(ty * y_ratio))`.
/// Returns the source unchanged if it is already at the target size.
pub fn scale_nearest<'a, T: Element>(
    source: &'a [T],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
) -> Result<Cow<'a, [T]>> {
    let target_len = validate(source.len(), size, target, options.block_size)?;

    if size == target {
        debug!(
            width = size.width(),
            height = size.height(),
            "Grid already at target size, skipping resize"
        );
        return Ok(Cow::Borrowed(source));
    }

    Ok(Cow::Owned(nearest(
        source,
        size,
        target,
        options.block_size,
        target_len,
        |value| value,
    )))
}

/// Nearest-neighbor resize that writes into element type `T`.
///
/// Copied values pass through `T::from_f64`. At equal sizes this is a
/// converting copy.
pub fn scale_nearest_as<S: Element, T: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
) -> Result<Vec<T>> {
    let target_len = validate(source.len(), size, target, options.block_size)?;

    Ok(nearest(
        source,
        size,
        target,
        options.block_size,
        target_len,
        convert::<S, T>,
    ))
}

/// Resize a grid using bilinear interpolation.
///
/// With [`BilinearBorder::Zero`] the first and last target rows and columns
/// are left at `T::default()`; only interior cells are interpolated.
/// Returns the source unchanged if it is already at the target size.
pub fn scale_bilinear<'a, T: Element>(
    source: &'a [T],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
) -> Result<Cow<'a, [T]>> {
    let target_len = validate(source.len(), size, target, options.block_size)?;

    if size == target {
        debug!(
            width = size.width(),
            height = size.height(),
            "Grid already at target size, skipping resize"
        );
        return Ok(Cow::Borrowed(source));
    }

    Ok(Cow::Owned(bilinear(source, size, target, options, target_len)))
}

/// Bilinear resize that writes into element type `T`.
///
/// Blending happens in `f64`; the result is clamped once by `T::from_f64`.
/// At equal sizes this is a converting copy.
pub fn scale_bilinear_as<S: Element, T: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
) -> Result<Vec<T>> {
    let target_len = validate(source.len(), size, target, options.block_size)?;

    if size == target {
        return Ok(source.iter().copied().map(convert::<S, T>).collect());
    }

    Ok(bilinear(source, size, target, options, target_len))
}

/// Check the source length and return the target buffer length.
fn validate(
    source_len: usize,
    size: GridSize,
    target: GridSize,
    block_size: usize,
) -> Result<usize> {
    size.check_len(source_len, block_size)?;
    target.buffer_len(block_size)
}

#[inline]
fn convert<S: Element, T: Element>(value: S) -> T {
    T::from_f64(value.to_f64())
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Source index for each target index: `floor(t * ratio)`, kept inside the grid.
fn nearest_indices(source_len: usize, target_len: usize) -> Vec<usize> {
    let ratio = source_len as f64 / target_len as f64;
    let last = source_len - 1;
    (0..target_len)
        .map(|t| ((t as f64 * ratio).floor() as usize).min(last))
        .collect()
}

fn nearest<S: Element, T: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    block_size: usize,
    target_len: usize,
    convert: impl Fn(S) -> T,
) -> Vec<T> {
    debug!(
        width = size.width(),
        height = size.height(),
        target_width = target.width(),
        target_height = target.height(),
        block_size,
        kind = %T::KIND,
        "Scaling grid with nearest-neighbor sampling"
    );

    let columns = nearest_indices(size.width(), target.width());
    let rows = nearest_indices(size.height(), target.height());
    let source_row_len = size.width() * block_size;

    let mut output = vec![T::default(); target_len];
    for (row, &sy) in output
        .chunks_exact_mut(target.width() * block_size)
        .zip(&rows)
    {
        let source_row = &source[sy * source_row_len..][..source_row_len];
        for (cell, &sx) in row.chunks_exact_mut(block_size).zip(&columns) {
            let source_cell = &source_row[sx * block_size..][..block_size];
            for (dst, &src) in cell.iter_mut().zip(source_cell) {
                *dst = convert(src);
            }
        }
    }

    output
}

/// The two source neighbors of one target index and the blend weight toward `hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    lo: usize,
    hi: usize,
    weight: f64,
}

/// Neighbors are `floor(p)` and `ceil(p)` with `p = t * ratio`, both clamped
/// to the last source index. When they coincide the weight is 0.5.
fn bilinear_taps(source_len: usize, target_len: usize) -> Vec<Tap> {
    let ratio = source_len as f64 / target_len as f64;
    let last = source_len - 1;
    (0..target_len)
        .map(|t| {
            let p = t as f64 * ratio;
            let lo = (p.floor() as usize).min(last);
            let hi = (p.ceil() as usize).min(last);
            let weight = if hi == lo {
                0.5
            } else {
                (p - lo as f64) / (hi - lo) as f64
            };
            Tap { lo, hi, weight }
        })
        .collect()
}

/// Target indices written along one axis.
fn written_range(len: usize, border: BilinearBorder) -> Range<usize> {
    match border {
        BilinearBorder::Zero => 1..len.saturating_sub(1),
        BilinearBorder::Extend => 0..len,
    }
}

fn bilinear<S: Element, T: Element>(
    source: &[S],
    size: GridSize,
    target: GridSize,
    options: &ResampleOptions,
    target_len: usize,
) -> Vec<T> {
    let block_size = options.block_size;
    debug!(
        width = size.width(),
        height = size.height(),
        target_width = target.width(),
        target_height = target.height(),
        block_size,
        kind = %T::KIND,
        border = ?options.bilinear_border,
        "Scaling grid with bilinear interpolation"
    );

    let x_taps = bilinear_taps(size.width(), target.width());
    let y_taps = bilinear_taps(size.height(), target.height());
    let columns = written_range(target.width(), options.bilinear_border);
    let rows = written_range(target.height(), options.bilinear_border);

    let source_row_len = size.width() * block_size;
    let target_row_len = target.width() * block_size;

    let mut output = vec![T::default(); target_len];
    for ty in rows {
        let y_tap = y_taps[ty];
        let top = &source[y_tap.lo * source_row_len..][..source_row_len];
        let bottom = &source[y_tap.hi * source_row_len..][..source_row_len];
        let row = &mut output[ty * target_row_len..][..target_row_len];

        for tx in columns.clone() {
            let x_tap = x_taps[tx];
            let left = x_tap.lo * block_size;
            let right = x_tap.hi * block_size;
            let cell = &mut row[tx * block_size..][..block_size];

            for (k, dst) in cell.iter_mut().enumerate() {
                let upper = lerp(
                    top[left + k].to_f64(),
                    top[right + k].to_f64(),
                    x_tap.weight,
                );
                let lower = lerp(
                    bottom[left + k].to_f64(),
                    bottom[right + k].to_f64(),
                    x_tap.weight,
                );
                *dst = T::from_f64(lerp(upper, lower, y_tap.weight));
            }
        }
    }

    output
}

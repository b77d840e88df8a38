//! Resampling for `image` crate buffers.
//!
//! The channel count of the pixel type is used as the block size, so an
//! `RgbaImage` is resampled as a grid with four channels per cell.

use image::{DynamicImage, ImageBuffer, Pixel};
use tracing::debug;

use crate::element::Element;
use crate::error::{ResampleError, Result};
use crate::flip::{Flip, flip_grid};
use crate::grid::GridSize;
use crate::options::ResampleOptions;
use crate::scale::{Interpolation, scale};

/// Resize an image buffer to `target`.
///
/// `options.block_size` is replaced by the pixel's channel count.
pub fn scale_image<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    target: GridSize,
    interpolation: Interpolation,
    options: &ResampleOptions,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
    P::Subpixel: Element,
{
    let size = GridSize::try_from(img.dimensions())?;
    let options = pixel_options::<P>(options);
    debug!(
        orig_w = size.width(),
        orig_h = size.height(),
        new_width = target.width(),
        new_height = target.height(),
        ?interpolation,
        "Resampling image"
    );

    let data = scale(img.as_raw(), size, target, &options, interpolation)?.into_owned();
    into_image(data, target, options.block_size)
}

/// Reverse an image along the axes selected by `flip`.
pub fn flip_image<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    flip: Flip,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
{
    let size = GridSize::try_from(img.dimensions())?;
    let options = pixel_options::<P>(&ResampleOptions::new().with_flip(flip));
    let data = flip_grid(img.as_raw(), size, &options)?;
    into_image(data, size, options.block_size)
}

/// Resize a [`DynamicImage`], keeping its pixel layout.
///
/// Layouts without a dedicated path are converted to RGBA8 first.
pub fn scale_dynamic(
    img: &DynamicImage,
    target: GridSize,
    interpolation: Interpolation,
    options: &ResampleOptions,
) -> Result<DynamicImage> {
    let scaled = match img {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageLuma16(buf) => {
            DynamicImage::ImageLuma16(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageRgba16(buf) => {
            DynamicImage::ImageRgba16(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageRgb32F(buf) => {
            DynamicImage::ImageRgb32F(scale_image(buf, target, interpolation, options)?)
        }
        DynamicImage::ImageRgba32F(buf) => {
            DynamicImage::ImageRgba32F(scale_image(buf, target, interpolation, options)?)
        }
        other => {
            debug!("No dedicated path for image layout, converting to RGBA8");
            DynamicImage::ImageRgba8(scale_image(
                &other.to_rgba8(),
                target,
                interpolation,
                options,
            )?)
        }
    };
    Ok(scaled)
}

fn pixel_options<P: Pixel>(options: &ResampleOptions) -> ResampleOptions {
    ResampleOptions {
        block_size: usize::from(P::CHANNEL_COUNT),
        ..options.clone()
    }
}

fn into_image<P: Pixel>(
    data: Vec<P::Subpixel>,
    size: GridSize,
    block_size: usize,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    let overflow = || ResampleError::DimensionOverflow {
        width: size.width(),
        height: size.height(),
        block_size,
    };
    let width = u32::try_from(size.width()).map_err(|_| overflow())?;
    let height = u32::try_from(size.height()).map_err(|_| overflow())?;
    let actual = data.len();

    ImageBuffer::from_raw(width, height, data).ok_or(ResampleError::SizeMismatch {
        expected: size.buffer_len(block_size)?,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BilinearBorder;
    use image::{GenericImageView, GrayImage, Luma, Pixel, Rgb, Rgb32FImage, Rgba, RgbaImage};

    /// Create a test image with unique pixel values at corners.
    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn create_corner_image(width: u32, height: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([128]));
        img.put_pixel(0, 0, Luma([10])); // top-left
        img.put_pixel(width - 1, 0, Luma([20])); // top-right
        img.put_pixel(0, height - 1, Luma([30])); // bottom-left
        img.put_pixel(width - 1, height - 1, Luma([40])); // bottom-right
        img
    }

    fn pixel_value(img: &GrayImage, x: u32, y: u32) -> u8 {
        img.get_pixel(x, y).channels()[0]
    }

    fn target(width: usize, height: usize) -> GridSize {
        GridSize::new(width, height).unwrap()
    }

    #[test]
    fn test_scale_image_nearest_upscale() {
        let img = create_corner_image(2, 2);
        let result = scale_image(
            &img,
            target(4, 4),
            Interpolation::Nearest,
            &ResampleOptions::new(),
        )
        .unwrap();

        assert_eq!(result.dimensions(), (4, 4));
        assert_eq!(pixel_value(&result, 1, 1), 10);
        assert_eq!(pixel_value(&result, 2, 1), 20);
        assert_eq!(pixel_value(&result, 1, 2), 30);
        assert_eq!(pixel_value(&result, 3, 3), 40);
    }

    #[test]
    fn test_scale_image_uses_channel_count_as_block_size() {
        let img = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 128])
            }
        });
        // A caller-supplied block size is overridden by the pixel layout
        let options = ResampleOptions::new()
            .with_block_size(1)
            .with_bilinear_border(BilinearBorder::Extend);
        let result = scale_image(&img, target(4, 1), Interpolation::Bilinear, &options).unwrap();

        assert_eq!(result.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(result.get_pixel(1, 0), &Rgba([128, 0, 128, 192]));
        assert_eq!(result.get_pixel(3, 0), &Rgba([0, 0, 255, 128]));
    }

    #[test]
    fn test_scale_image_same_size_is_unchanged() {
        let img = create_corner_image(5, 3);
        let result = scale_image(
            &img,
            target(5, 3),
            Interpolation::Bilinear,
            &ResampleOptions::new(),
        )
        .unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_scale_float_image_bilinear() {
        let img = Rgb32FImage::from_fn(2, 2, |x, _| {
            if x == 0 {
                Rgb([0.0, 1.0, 0.25])
            } else {
                Rgb([1.0, 0.0, 0.75])
            }
        });
        let result = scale_image(
            &img,
            target(4, 4),
            Interpolation::Bilinear,
            &ResampleOptions::new(),
        )
        .unwrap();

        // Border ring stays zero, interior blends
        assert_eq!(result.get_pixel(0, 0), &Rgb([0.0, 0.0, 0.0]));
        assert_eq!(result.get_pixel(1, 1), &Rgb([0.5, 0.5, 0.5]));
        assert_eq!(result.get_pixel(2, 2), &Rgb([1.0, 0.0, 0.75]));
    }

    #[test]
    fn test_flip_image_both_axes_matches_rotate_180() {
        let img = create_corner_image(4, 4);
        let flipped = flip_image(&img, Flip::BOTH).unwrap();

        assert_eq!(flipped.dimensions(), (4, 4));
        assert_eq!(pixel_value(&flipped, 0, 0), 40);
        assert_eq!(pixel_value(&flipped, 3, 0), 30);
        assert_eq!(pixel_value(&flipped, 0, 3), 20);
        assert_eq!(pixel_value(&flipped, 3, 3), 10);
        assert_eq!(flipped, image::imageops::rotate180(&img));
    }

    #[test]
    fn test_flip_image_x_matches_fliph() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let flipped = flip_image(&img, Flip::X).unwrap();
        assert_eq!(flipped, image::imageops::flip_horizontal(&img));
    }

    #[test]
    fn test_flip_image_is_involution() {
        let img = create_corner_image(5, 7);
        let twice = flip_image(&flip_image(&img, Flip::Y).unwrap(), Flip::Y).unwrap();

        for y in 0..7 {
            for x in 0..5 {
                assert_eq!(
                    pixel_value(&img, x, y),
                    pixel_value(&twice, x, y),
                    "Mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_scale_dynamic_keeps_layout() {
        let img = DynamicImage::ImageLuma8(create_corner_image(2, 2));
        let result = scale_dynamic(
            &img,
            target(6, 4),
            Interpolation::Nearest,
            &ResampleOptions::new(),
        )
        .unwrap();

        assert_eq!(result.dimensions(), (6, 4));
        assert!(matches!(result, DynamicImage::ImageLuma8(_)));
        assert_eq!(result.get_pixel(5, 3).0[0], 40);
    }

    #[test]
    fn test_scale_dynamic_converts_unlisted_layout() {
        let img = DynamicImage::ImageRgb16(image::ImageBuffer::from_pixel(2, 2, Rgb([0u16, 0, 0])));
        let result = scale_dynamic(
            &img,
            target(3, 3),
            Interpolation::Nearest,
            &ResampleOptions::new(),
        )
        .unwrap();
        assert!(matches!(result, DynamicImage::ImageRgba8(_)));
        assert_eq!(result.dimensions(), (3, 3));
    }
}

//! Image loader collaborator.

use std::path::Path;

use image::DynamicImage;

use crate::error::{PropGridError, Result};
use crate::raw_image::RawImage;

/// Loads an image file into a [`RawImage`].
///
/// The grid only invokes the loader and renders the result; presenting a
/// file dialog and choosing the path stays with the toolkit layer.
pub trait ImageLoader {
    /// Reads and decodes the file at `path`.
    fn load(&self, path: &Path) -> Result<RawImage>;
}

/// Default loader decoding through the `image` crate.
///
/// Grayscale and RGB sources keep their channel layout (1 and 3 channels);
/// every other decoded format is normalized to RGBA.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskImageLoader;

impl ImageLoader for DiskImageLoader {
    fn load(&self, path: &Path) -> Result<RawImage> {
        let img = image::open(path).map_err(|source| PropGridError::ImageLoad {
            path: path.display().to_string(),
            source,
        })?;
        Ok(raw_from_dynamic(img))
    }
}

/// Converts a decoded image into a [`RawImage`], preserving 1- and
/// 3-channel layouts and normalizing everything else to RGBA.
#[must_use]
pub fn raw_from_dynamic(img: DynamicImage) -> RawImage {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            let (width, height) = gray.dimensions();
            RawImage::new(width, height, 1, gray.into_raw())
        }
        DynamicImage::ImageRgb8(rgb) => {
            let (width, height) = rgb.dimensions();
            RawImage::new(width, height, 3, rgb.into_raw())
        }
        other => {
            let rgba = other.to_rgba8();
            let (width, height) = rgba.dimensions();
            RawImage::new(width, height, 4, rgba.into_raw())
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_luma_keeps_single_channel() {
        let gray = GrayImage::from_pixel(3, 2, Luma([17]));

        let raw = raw_from_dynamic(DynamicImage::ImageLuma8(gray));
        assert_eq!(raw.channels(), 1);
        assert_eq!((raw.width(), raw.height()), (3, 2));
        assert!(raw.is_valid());
    }

    #[test]
    fn test_rgb_keeps_three_channels() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));

        let raw = raw_from_dynamic(DynamicImage::ImageRgb8(rgb));
        assert_eq!(raw.channels(), 3);
        assert!(raw.is_valid());
    }

    #[test]
    fn test_rgba_keeps_four_channels() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));

        let raw = raw_from_dynamic(DynamicImage::ImageRgba8(rgba));
        assert_eq!(raw.channels(), 4);
        assert!(raw.is_valid());
    }

    #[test]
    fn test_other_layouts_normalize_to_rgba() {
        let luma_a =
            image::ImageBuffer::from_pixel(2, 2, LumaA([128, 255]));

        let raw = raw_from_dynamic(DynamicImage::ImageLumaA8(luma_a));
        assert_eq!(raw.channels(), 4);
        assert!(raw.is_valid());
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = DiskImageLoader
            .load(Path::new("/nonexistent/propgrid-test.png"))
            .unwrap_err();
        assert!(matches!(err, PropGridError::ImageLoad { .. }));
    }
}

//! Fixed-size thumbnail rendering for image rows.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, RgbImage, Rgba, RgbaImage};

use crate::raw_image::{ChannelFormat, RawImage};

/// Edge length in pixels of every thumbnail this module produces.
pub const THUMBNAIL_SIZE: u32 = 32;

/// A rendered thumbnail.
///
/// `loaded` tells whether the source image was displayable; when it is
/// `false`, `pixels` holds the solid white placeholder.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// RGBA pixels, always exactly [`THUMBNAIL_SIZE`] × [`THUMBNAIL_SIZE`].
    pub pixels: RgbaImage,
    /// Whether the source image was rendered (as opposed to the placeholder).
    pub loaded: bool,
}

/// Renders a [`THUMBNAIL_SIZE`]² preview of `source`.
///
/// An absent, invalid, or unsupported-channel image yields the white
/// placeholder and `loaded = false`. Otherwise the raw bytes are interpreted
/// per the buffer's channel layout and scaled to exactly the thumbnail size,
/// ignoring aspect ratio, with a smooth resampling filter.
#[must_use]
pub fn render_thumbnail(source: Option<&RawImage>) -> Thumbnail {
    match source.and_then(decode_source) {
        Some(img) => Thumbnail {
            pixels: img
                .resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::CatmullRom)
                .to_rgba8(),
            loaded: true,
        },
        None => Thumbnail {
            pixels: placeholder(),
            loaded: false,
        },
    }
}

/// The solid white fallback shown when no valid image exists.
#[must_use]
pub fn placeholder() -> RgbaImage {
    RgbaImage::from_pixel(THUMBNAIL_SIZE, THUMBNAIL_SIZE, Rgba([255, 255, 255, 255]))
}

fn decode_source(img: &RawImage) -> Option<DynamicImage> {
    if !img.is_valid() {
        return None;
    }

    let (width, height) = (img.width(), img.height());
    let data = img.data().to_vec();
    match img.format()? {
        ChannelFormat::Gray => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        ChannelFormat::Rgb => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        ChannelFormat::Rgba => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    }
}

//! Thumbnail texture management.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use propgrid_core::thumbnail::Thumbnail;

/// Uploads a rendered thumbnail as an egui texture.
///
/// The returned handle owns the GPU-side allocation; dropping it frees the
/// texture, so a row replacing its thumbnail just overwrites the handle.
#[must_use]
pub fn thumbnail_texture(ctx: &Context, name: &str, thumbnail: &Thumbnail) -> TextureHandle {
    let size = [
        thumbnail.pixels.width() as usize,
        thumbnail.pixels.height() as usize,
    ];
    let pixels = ColorImage::from_rgba_unmultiplied(size, thumbnail.pixels.as_raw());
    ctx.load_texture(name, pixels, TextureOptions::LINEAR)
}

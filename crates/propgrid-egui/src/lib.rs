//! egui widget layer for propgrid-rs.
//!
//! The central type is [`AttributeGrid`]: a retained list of property rows
//! (labels, numeric fields bound to sliders, color swatches, combo boxes,
//! image thumbnails) replayed into a two-column [`egui::Grid`] every frame.
//! All callback wiring runs synchronously on the UI thread inside the frame
//! closure; the toolkit-free logic lives in `propgrid-core`.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Thumbnail dimensions fit comfortably in f32
#![allow(clippy::cast_precision_loss)]

pub mod grid;
pub mod panel;
pub mod style;
pub mod texture;

pub use grid::{AttributeGrid, Cell, ColorCallback, ImageCallback, ValueCallback};
pub use panel::build_attribute_panel;
pub use style::GridStyle;
pub use texture::thumbnail_texture;

// Re-export the core types callers need to assemble a grid.
pub use propgrid_core::{
    ActionMap, DiskImageLoader, ImageLoader, LinearRange, PropGridError, RawImage, Result,
};

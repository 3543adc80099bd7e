//! Toolkit-free core for propgrid-rs.
//!
//! This crate provides the logic behind the attribute-grid widgets without
//! touching any UI toolkit:
//! - [`LinearRange`] maps between a bounded continuous value and a slider's
//!   discrete step index
//! - [`render_thumbnail`] converts a raw image buffer into a fixed-size
//!   preview with a defined placeholder fallback
//! - [`ActionMap`] dispatches combo-box selections to callbacks
//! - [`ImageLoader`] is the collaborator that turns a filesystem path into a
//!   [`RawImage`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Step indices are small; float->index casts are range-checked before truncating
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod actions;
pub mod error;
pub mod loader;
pub mod range;
pub mod raw_image;
pub mod thumbnail;

pub use actions::{Action, ActionMap};
pub use error::{PropGridError, Result};
pub use loader::{raw_from_dynamic, DiskImageLoader, ImageLoader};
pub use range::LinearRange;
pub use raw_image::{ChannelFormat, RawImage};
pub use thumbnail::{placeholder, render_thumbnail, Thumbnail, THUMBNAIL_SIZE};

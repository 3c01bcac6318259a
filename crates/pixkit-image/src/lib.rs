#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Bounds-clamped pixel access.
pub mod accessor;

/// Flat sample storage for planar images.
pub mod buffer;

/// Error types for the image module.
pub mod error;

/// Image representation for planar float images.
pub mod image;

pub use crate::accessor::clamp_coord;
pub use crate::buffer::PixelBuffer;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};

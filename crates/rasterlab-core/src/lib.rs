//! rasterlab-core - Image value, channel model, and named image store
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterlab image-processing engine:
//!
//! - [`Image`] - immutable RGB raster value with a per-channel ceiling
//! - [`ImageBuilder`] - mutable staging buffer frozen into an `Image`
//! - [`Rgb`] / [`Channel`] - pixel tuple and channel selectors
//! - [`ImageStore`] - the model: name → image mapping with copy
//!   semantics at every boundary
//!
//! Images are value types: transformations produce new images, and no
//! two images ever share backing storage.

pub mod error;
pub mod image;
pub mod store;

pub use error::{Error, Result};
pub use image::{CHANNELS, Channel, Image, ImageBuilder, Rgb};
pub use store::ImageStore;

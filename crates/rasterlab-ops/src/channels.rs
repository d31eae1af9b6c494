//! Channel split and combine
//!
//! `split` decomposes an image into one viewable component image per
//! channel; `combine` interleaves three source images back into one.
//! Combine inputs must agree on dimensions and channel ceiling.

use crate::color::component;
use crate::error::{OpError, OpResult};
use rasterlab_core::{Channel, Image, Rgb};

/// Split an image into its red, green, and blue component images.
///
/// Each component image replicates the channel across all three of its
/// own channels, so it renders as a grey image.
pub fn split(img: &Image) -> [Image; 3] {
    Channel::ALL.map(|c| component(img, c))
}

/// Combine three images into one: output channel `c` is taken from
/// channel `c` of the corresponding source.
///
/// # Errors
///
/// Returns [`OpError::DimensionMismatch`] if the sources disagree on
/// width or height, and [`OpError::MaxValueMismatch`] if they disagree
/// on channel ceiling.
pub fn combine(red: &Image, green: &Image, blue: &Image) -> OpResult<Image> {
    for other in [green, blue] {
        if !red.sizes_equal(other) {
            return Err(OpError::DimensionMismatch {
                expected: (red.width(), red.height()),
                actual: (other.width(), other.height()),
            });
        }
        if red.max_value() != other.max_value() {
            return Err(OpError::MaxValueMismatch(red.max_value(), other.max_value()));
        }
    }

    Ok(Image::from_fn(red.width(), red.height(), red.max_value(), |x, y| Rgb {
        r: red.pixel_unchecked(x, y).r,
        g: green.pixel_unchecked(x, y).g,
        b: blue.pixel_unchecked(x, y).b,
    })?)
}

//! Mask-constrained application
//!
//! Restricts a transformation to the pixels a mask image selects. The
//! caller runs the transformation over the whole source, then merges:
//! selected positions take the processed pixel, the rest keep the
//! original. A mask pixel selects its position when its luma is at
//! least half the mask's own channel ceiling (white selects).

use crate::color::luma;
use crate::error::{OpError, OpResult};
use rasterlab_core::Image;

/// Merge `processed` over `base` wherever `mask` selects.
///
/// # Errors
///
/// Returns [`OpError::DimensionMismatch`] if `mask` or `processed`
/// differs from `base` in width or height, and
/// [`OpError::MaxValueMismatch`] if `processed` has a different
/// channel ceiling than `base`.
pub fn apply_with_mask(base: &Image, mask: &Image, processed: &Image) -> OpResult<Image> {
    for other in [mask, processed] {
        if !base.sizes_equal(other) {
            return Err(OpError::DimensionMismatch {
                expected: (base.width(), base.height()),
                actual: (other.width(), other.height()),
            });
        }
    }
    if base.max_value() != processed.max_value() {
        return Err(OpError::MaxValueMismatch(
            base.max_value(),
            processed.max_value(),
        ));
    }

    let half = mask.max_value() as f64 / 2.0;
    Ok(Image::from_fn(base.width(), base.height(), base.max_value(), |x, y| {
        if luma(mask.pixel_unchecked(x, y)) >= half {
            processed.pixel_unchecked(x, y)
        } else {
            base.pixel_unchecked(x, y)
        }
    })?)
}

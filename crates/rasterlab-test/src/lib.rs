//! rasterlab-test - Regression test support
//!
//! Provides the [`CheckParams`] accumulator used by the `tests/*_reg`
//! integration tests and a set of deterministic synthetic images. The
//! repository ships no binary test images, so every regression check
//! is a value comparison against images constructed here.

mod params;

pub use params::CheckParams;

use rasterlab_core::{Image, Rgb};

/// A solid image: every pixel equals `fill`.
pub fn solid_image(width: u32, height: u32, max_value: u16, fill: Rgb) -> Image {
    Image::from_fn(width, height, max_value, |_, _| fill).expect("test image shape is valid")
}

/// A diagonal grey gradient: pixel `(x, y)` has value
/// `(x + y) * max_value / (width + height - 2)` on all channels.
pub fn gradient_image(width: u32, height: u32, max_value: u16) -> Image {
    let span = (width + height).saturating_sub(2).max(1) as u64;
    Image::from_fn(width, height, max_value, |x, y| {
        let v = (x + y) as u64 * max_value as u64 / span;
        Rgb::gray(v as u16)
    })
    .expect("test image shape is valid")
}

/// A black/white checkerboard with square cells of `cell` pixels.
pub fn checkerboard_image(width: u32, height: u32, max_value: u16, cell: u32) -> Image {
    let cell = cell.max(1);
    Image::from_fn(width, height, max_value, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgb::gray(0)
        } else {
            Rgb::gray(max_value)
        }
    })
    .expect("test image shape is valid")
}

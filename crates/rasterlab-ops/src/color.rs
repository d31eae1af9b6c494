//! Linear color transforms
//!
//! Greyscale, sepia, and component extraction are all instances of one
//! mechanism: each output pixel is a fixed 3x3 linear combination of
//! the input pixel's channels, rounded and clamped into
//! `[0, max_value]`.

use crate::clamp_round;
use rasterlab_core::{Channel, Image, Rgb};

/// A 3x3 matrix applied to every pixel's `(r, g, b)` column vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

/// Rec. 709 luma weights, replicated into all three output channels.
pub const LUMA: ColorMatrix = ColorMatrix([
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
]);

/// Classic sepia tone matrix.
pub const SEPIA: ColorMatrix = ColorMatrix([
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
]);

/// Rec. 709 luma of a pixel, unrounded.
#[inline]
pub fn luma(p: Rgb) -> f64 {
    0.2126 * p.r as f64 + 0.7152 * p.g as f64 + 0.0722 * p.b as f64
}

/// Apply a color matrix to every pixel.
///
/// Each output channel is rounded to the nearest integer and clamped
/// into `[0, max_value]`, so arbitrary matrices (including ones that
/// would overflow) are safe.
pub fn apply_matrix(img: &Image, m: &ColorMatrix) -> Image {
    let max = img.max_value();
    img.map_pixels(|p| {
        let (r, g, b) = (p.r as f64, p.g as f64, p.b as f64);
        Rgb {
            r: clamp_round(m.0[0][0] * r + m.0[0][1] * g + m.0[0][2] * b, max),
            g: clamp_round(m.0[1][0] * r + m.0[1][1] * g + m.0[1][2] * b, max),
            b: clamp_round(m.0[2][0] * r + m.0[2][1] * g + m.0[2][2] * b, max),
        }
    })
}

/// Convert to greyscale using Rec. 709 luma weighting.
pub fn greyscale(img: &Image) -> Image {
    apply_matrix(img, &LUMA)
}

/// Apply the sepia tone transform.
pub fn sepia(img: &Image) -> Image {
    apply_matrix(img, &SEPIA)
}

/// Extract one channel, replicated into all three output channels so
/// the result is viewable as a grey image.
pub fn component(img: &Image, channel: Channel) -> Image {
    img.map_pixels(|p| Rgb::gray(p.channel(channel)))
}

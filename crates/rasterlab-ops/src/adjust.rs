//! Brightness and levels adjustment
//!
//! Per-channel value remaps. `brighten` adds a signed delta; `levels`
//! fits a quadratic tone curve through three control points and applies
//! it via a lookup table, one entry per representable sample value.

use crate::clamp_round;
use crate::error::{OpError, OpResult};
use rasterlab_core::Image;

/// Add `delta` to every channel of every pixel, clamping at `0` and
/// `max_value` (values never wrap).
pub fn brighten(img: &Image, delta: i32) -> Image {
    let max = img.max_value() as i64;
    let delta = delta as i64;
    img.map_pixels(|p| p.map(|v| (v as i64 + delta).clamp(0, max) as u16))
}

/// Remap channel values through a quadratic curve fitted to
/// `(black, 0)`, `(mid, M/2)`, `(white, M)` where `M = max_value`.
///
/// # Errors
///
/// Returns [`OpError::InvalidParameter`] unless
/// `black < mid < white <= max_value`.
pub fn levels(img: &Image, black: u16, mid: u16, white: u16) -> OpResult<Image> {
    let max = img.max_value();
    if !(black < mid && mid < white && white <= max) {
        return Err(OpError::InvalidParameter(format!(
            "levels require black < mid < white <= {max}, got {black}/{mid}/{white}"
        )));
    }

    let m = max as f64;
    let (xb, xm, xw) = (black as f64, mid as f64, white as f64);
    let (yb, ym, yw) = (0.0, m / 2.0, m);

    // Lagrange form of the quadratic through the three control points.
    let curve = |x: f64| {
        yb * ((x - xm) * (x - xw)) / ((xb - xm) * (xb - xw))
            + ym * ((x - xb) * (x - xw)) / ((xm - xb) * (xm - xw))
            + yw * ((x - xb) * (x - xm)) / ((xw - xb) * (xw - xm))
    };

    let lut: Vec<u16> = (0..=max).map(|v| clamp_round(curve(v as f64), max)).collect();
    Ok(img.map_pixels(|p| p.map(|v| lut[v as usize])))
}

//! Lossy compression by Haar coefficient thresholding
//!
//! Each channel plane is padded to a power-of-two square, run through
//! a 2D Haar transform, and the smallest `percent`% of distinct
//! nonzero coefficient magnitudes (pooled across all channels) are
//! zeroed before the inverse transform. Deterministic for identical
//! input and parameters.

use crate::clamp_round;
use crate::error::{OpError, OpResult};
use rasterlab_core::{CHANNELS, Channel, Image, Rgb};
use std::f64::consts::FRAC_1_SQRT_2;

/// Coefficients this small are float residue, not signal.
const COEF_EPSILON: f64 = 1e-12;

/// Compress an image by zeroing the smallest `percent`% of Haar
/// coefficient magnitudes.
///
/// `percent` 0 keeps every coefficient (identity up to rounding);
/// `percent` 100 zeroes them all (a black image).
///
/// # Errors
///
/// Returns [`OpError::InvalidParameter`] unless `percent` is a finite
/// value in `[0, 100]`.
pub fn compress(img: &Image, percent: f64) -> OpResult<Image> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(OpError::InvalidParameter(format!(
            "compression percentage must be in [0, 100], got {percent}"
        )));
    }

    let (w, h) = (img.width() as usize, img.height() as usize);
    let size = (w.max(h)).next_power_of_two();

    // One padded square plane per channel.
    let mut planes: [Vec<f64>; CHANNELS] = Channel::ALL.map(|c| {
        let mut plane = vec![0.0f64; size * size];
        for y in 0..h {
            for x in 0..w {
                plane[y * size + x] = img.pixel_unchecked(x as u32, y as u32).channel(c) as f64;
            }
        }
        plane
    });

    for plane in &mut planes {
        haar_forward(plane, size);
    }

    if let Some(threshold) = threshold_for(&planes, percent) {
        for plane in &mut planes {
            for c in plane.iter_mut() {
                if c.abs() <= threshold {
                    *c = 0.0;
                }
            }
        }
    }

    for plane in &mut planes {
        haar_inverse(plane, size);
    }

    let max = img.max_value();
    Ok(Image::from_fn(img.width(), img.height(), max, |x, y| {
        let i = y as usize * size + x as usize;
        Rgb {
            r: clamp_round(planes[0][i], max),
            g: clamp_round(planes[1][i], max),
            b: clamp_round(planes[2][i], max),
        }
    })?)
}

/// Pick the magnitude threshold: the `percent`-quantile of the sorted
/// distinct nonzero coefficient magnitudes pooled across all planes.
/// Returns `None` when nothing is to be dropped.
fn threshold_for(planes: &[Vec<f64>; CHANNELS], percent: f64) -> Option<f64> {
    let mut magnitudes: Vec<f64> = planes
        .iter()
        .flatten()
        .map(|c| c.abs())
        .filter(|&m| m > COEF_EPSILON)
        .collect();
    if magnitudes.is_empty() {
        return None;
    }
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup();

    let drop = ((percent / 100.0) * magnitudes.len() as f64).round() as usize;
    if drop == 0 {
        return None;
    }
    Some(magnitudes[drop.min(magnitudes.len()) - 1])
}

/// In-place 2D Haar transform of the top-left `size` x `size` plane.
///
/// At each level the active `n` x `n` corner is transformed row-wise
/// then column-wise with the orthonormal pair
/// `s = (a + b)/sqrt(2)`, `d = (a - b)/sqrt(2)`.
fn haar_forward(plane: &mut [f64], size: usize) {
    let mut scratch = vec![0.0f64; size];
    let mut n = size;
    while n > 1 {
        let half = n / 2;
        for y in 0..n {
            for i in 0..half {
                let a = plane[y * size + 2 * i];
                let b = plane[y * size + 2 * i + 1];
                scratch[i] = (a + b) * FRAC_1_SQRT_2;
                scratch[half + i] = (a - b) * FRAC_1_SQRT_2;
            }
            plane[y * size..y * size + n].copy_from_slice(&scratch[..n]);
        }
        for x in 0..n {
            for i in 0..half {
                let a = plane[(2 * i) * size + x];
                let b = plane[(2 * i + 1) * size + x];
                scratch[i] = (a + b) * FRAC_1_SQRT_2;
                scratch[half + i] = (a - b) * FRAC_1_SQRT_2;
            }
            for (i, &v) in scratch[..n].iter().enumerate() {
                plane[i * size + x] = v;
            }
        }
        n = half;
    }
}

/// Inverse of [`haar_forward`].
fn haar_inverse(plane: &mut [f64], size: usize) {
    let mut scratch = vec![0.0f64; size];
    let mut n = 2;
    while n <= size {
        let half = n / 2;
        for x in 0..n {
            for i in 0..half {
                let s = plane[i * size + x];
                let d = plane[(half + i) * size + x];
                scratch[2 * i] = (s + d) * FRAC_1_SQRT_2;
                scratch[2 * i + 1] = (s - d) * FRAC_1_SQRT_2;
            }
            for (i, &v) in scratch[..n].iter().enumerate() {
                plane[i * size + x] = v;
            }
        }
        for y in 0..n {
            for i in 0..half {
                let s = plane[y * size + i];
                let d = plane[y * size + half + i];
                scratch[2 * i] = (s + d) * FRAC_1_SQRT_2;
                scratch[2 * i + 1] = (s - d) * FRAC_1_SQRT_2;
            }
            plane[y * size..y * size + n].copy_from_slice(&scratch[..n]);
        }
        n *= 2;
    }
}

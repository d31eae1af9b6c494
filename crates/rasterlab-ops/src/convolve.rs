//! Convolution operations
//!
//! Image convolution with odd-sized kernels. The edge policy is zero
//! padding: kernel taps that fall outside the grid contribute nothing.
//! The same policy applies to every kernel, so results are
//! reproducible bit for bit.

use crate::clamp_round;
use crate::error::{OpError, OpResult};
use rasterlab_core::{Image, Rgb};

/// A 2D convolution kernel with odd width and height.
///
/// The anchor is the central element; `data` is row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::InvalidParameter`] if either dimension is
    /// even or zero, or if `data` does not hold `width * height`
    /// values.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> OpResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(OpError::InvalidParameter(format!(
                "kernel dimensions must be odd, got {width}x{height}"
            )));
        }
        if data.len() != (width * height) as usize {
            return Err(OpError::InvalidParameter(format!(
                "kernel data holds {} values, {width}x{height} kernel needs {}",
                data.len(),
                width * height
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// The fixed 3x3 Gaussian blur kernel.
    pub fn gaussian3() -> Self {
        let s = [
            1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
            1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
            1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
        ];
        Kernel::from_slice(3, 3, &s).expect("static kernel is well-formed")
    }

    /// The fixed 5x5 sharpening kernel: outer ring -1/8, inner ring
    /// 1/4, center 1.
    pub fn sharpen5() -> Self {
        let e = -1.0 / 8.0;
        let q = 1.0 / 4.0;
        let s = [
            e, e, e, e, e,
            e, q, q, q, e,
            e, q, 1.0, q, e,
            e, q, q, q, e,
            e, e, e, e, e,
        ];
        Kernel::from_slice(5, 5, &s).expect("static kernel is well-formed")
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at kernel position (kx, ky).
    #[inline]
    pub fn get(&self, kx: u32, ky: u32) -> f64 {
        self.data[(ky * self.width + kx) as usize]
    }
}

/// Convolve an image with a kernel.
///
/// Each channel is convolved independently; out-of-grid taps are
/// skipped (zero padding); each output sample is rounded and clamped
/// into `[0, max_value]`.
pub fn convolve(img: &Image, kernel: &Kernel) -> Image {
    let w = img.width();
    let h = img.height();
    let max = img.max_value();
    let kcx = (kernel.width() / 2) as i64;
    let kcy = (kernel.height() / 2) as i64;

    Image::from_fn(w, h, max, |x, y| {
        let mut sum_r = 0.0f64;
        let mut sum_g = 0.0f64;
        let mut sum_b = 0.0f64;

        for ky in 0..kernel.height() {
            for kx in 0..kernel.width() {
                let sx = x as i64 + kx as i64 - kcx;
                let sy = y as i64 + ky as i64 - kcy;
                if sx < 0 || sy < 0 || sx >= w as i64 || sy >= h as i64 {
                    continue;
                }
                let p = img.pixel_unchecked(sx as u32, sy as u32);
                let k = kernel.get(kx, ky);
                sum_r += p.r as f64 * k;
                sum_g += p.g as f64 * k;
                sum_b += p.b as f64 * k;
            }
        }

        Rgb {
            r: clamp_round(sum_r, max),
            g: clamp_round(sum_g, max),
            b: clamp_round(sum_b, max),
        }
    })
    .expect("source image dimensions are valid")
}

/// Blur with the fixed 3x3 Gaussian kernel.
pub fn blur(img: &Image) -> Image {
    convolve(img, &Kernel::gaussian3())
}

/// Sharpen with the fixed 5x5 kernel.
pub fn sharpen(img: &Image) -> Image {
    convolve(img, &Kernel::sharpen5())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_validation() {
        assert!(Kernel::from_slice(3, 3, &[0.0; 9]).is_ok());
        assert!(Kernel::from_slice(2, 3, &[0.0; 6]).is_err());
        assert!(Kernel::from_slice(3, 0, &[]).is_err());
        assert!(Kernel::from_slice(3, 3, &[0.0; 8]).is_err());
    }

    #[test]
    fn test_identity_kernel() {
        let mut data = [0.0; 9];
        data[4] = 1.0;
        let ident = Kernel::from_slice(3, 3, &data).unwrap();
        let img = Image::from_fn(5, 4, 255, |x, y| Rgb::new(x as u16, y as u16, 7)).unwrap();
        assert_eq!(convolve(&img, &ident), img);
    }

    #[test]
    fn test_blur_interior_of_constant_is_constant() {
        let img = Image::from_fn(5, 5, 255, |_, _| Rgb::gray(100)).unwrap();
        let out = blur(&img);
        // Interior: full kernel support, weights sum to 1.
        assert_eq!(out.pixel(2, 2).unwrap(), Rgb::gray(100));
    }

    #[test]
    fn test_blur_zero_pad_darkens_border() {
        let img = Image::from_fn(5, 5, 255, |_, _| Rgb::gray(100)).unwrap();
        let out = blur(&img);
        // Corner: 4 of 9 taps fall outside and contribute nothing, so
        // the corner is strictly darker than the interior.
        let corner = out.pixel(0, 0).unwrap();
        assert!(corner.r < 100);
        // 100 * (1/4 + 2*1/8 + 1/16) = 56.25 -> 56
        assert_eq!(corner, Rgb::gray(56));
    }

    #[test]
    fn test_sharpen_flat_field_center() {
        let img = Image::from_fn(9, 9, 255, |_, _| Rgb::gray(64)).unwrap();
        let out = sharpen(&img);
        // Kernel sum is 1 over full support, so a flat interior stays put.
        assert_eq!(out.pixel(4, 4).unwrap(), Rgb::gray(64));
    }

    #[test]
    fn test_convolve_clamps_both_ends() {
        // A strongly negative kernel drives values below zero; an
        // amplifying kernel drives them above the ceiling.
        let neg = Kernel::from_slice(1, 1, &[-3.0]).unwrap();
        let amp = Kernel::from_slice(1, 1, &[40.0]).unwrap();
        let img = Image::from_fn(2, 2, 255, |_, _| Rgb::gray(200)).unwrap();
        assert!(convolve(&img, &neg).pixels().all(|p| p == Rgb::gray(0)));
        assert!(convolve(&img, &amp).pixels().all(|p| p == Rgb::gray(255)));
    }

    #[test]
    fn test_channels_convolved_independently() {
        let img = Image::from_fn(3, 3, 255, |_, _| Rgb::new(40, 80, 120)).unwrap();
        let out = blur(&img);
        let p = out.pixel(1, 1).unwrap();
        assert_eq!(p, Rgb::new(40, 80, 120));
    }
}

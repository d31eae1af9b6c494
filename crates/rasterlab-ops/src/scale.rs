//! Downscaling
//!
//! Resolution reduction by block averaging: every destination pixel is
//! the rounded mean of a rectangular source block. Deterministic for
//! identical inputs and target sizes.

use crate::error::{OpError, OpResult};
use rasterlab_core::{Image, Rgb};

/// Downscale an image to `new_width` x `new_height` by block
/// averaging.
///
/// Destination pixel `(dx, dy)` averages the source block spanning
/// `[dx*w/nw, (dx+1)*w/nw)` columns and the analogous rows, with the
/// block widened to at least one pixel.
///
/// # Errors
///
/// Returns [`OpError::InvalidParameter`] if a target dimension is zero
/// or exceeds the source dimension.
pub fn downscale(img: &Image, new_width: u32, new_height: u32) -> OpResult<Image> {
    let (w, h) = (img.width(), img.height());
    if new_width == 0 || new_height == 0 {
        return Err(OpError::InvalidParameter(
            "target dimensions must be > 0".to_string(),
        ));
    }
    if new_width > w || new_height > h {
        return Err(OpError::InvalidParameter(format!(
            "target {new_width}x{new_height} exceeds source {w}x{h}"
        )));
    }

    let (w, h) = (w as u64, h as u64);
    let (nw, nh) = (new_width as u64, new_height as u64);

    Ok(Image::from_fn(new_width, new_height, img.max_value(), |dx, dy| {
        let (dx, dy) = (dx as u64, dy as u64);
        let x0 = dx * w / nw;
        let x1 = ((dx + 1) * w / nw).max(x0 + 1);
        let y0 = dy * h / nh;
        let y1 = ((dy + 1) * h / nh).max(y0 + 1);

        let mut sum = [0u64; 3];
        for sy in y0..y1 {
            for sx in x0..x1 {
                let p = img.pixel_unchecked(sx as u32, sy as u32);
                sum[0] += p.r as u64;
                sum[1] += p.g as u64;
                sum[2] += p.b as u64;
            }
        }
        let count = (x1 - x0) * (y1 - y0);
        Rgb {
            r: ((sum[0] + count / 2) / count) as u16,
            g: ((sum[1] + count / 2) / count) as u16,
            b: ((sum[2] + count / 2) / count) as u16,
        }
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_validation() {
        let img = Image::new(4, 4, 255).unwrap();
        assert!(matches!(
            downscale(&img, 0, 2),
            Err(OpError::InvalidParameter(_))
        ));
        assert!(downscale(&img, 2, 0).is_err());
        assert!(downscale(&img, 5, 4).is_err());
        assert!(downscale(&img, 4, 4).is_ok());
    }

    #[test]
    fn test_downscale_constant_stays_constant() {
        let img = Image::from_fn(10, 8, 255, |_, _| Rgb::new(40, 80, 120)).unwrap();
        for (nw, nh) in [(1, 1), (3, 3), (10, 8), (7, 5)] {
            let out = downscale(&img, nw, nh).unwrap();
            assert_eq!(out.width(), nw);
            assert_eq!(out.height(), nh);
            assert!(out.pixels().all(|p| p == Rgb::new(40, 80, 120)));
        }
    }

    #[test]
    fn test_downscale_block_average() {
        // 2x2 blocks of known values: halving each dimension averages
        // four source pixels per destination pixel.
        let img = Image::from_fn(4, 4, 255, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 { Rgb::gray(100) } else { Rgb::gray(200) }
        })
        .unwrap();
        let out = downscale(&img, 2, 2).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), Rgb::gray(100));
        assert_eq!(out.pixel(1, 0).unwrap(), Rgb::gray(200));
        assert_eq!(out.pixel(0, 1).unwrap(), Rgb::gray(200));
        assert_eq!(out.pixel(1, 1).unwrap(), Rgb::gray(100));
    }

    #[test]
    fn test_downscale_rounds_to_nearest() {
        // Block of 100 and 101 averages to 100.5 -> 101.
        let img = Image::from_fn(2, 1, 255, |x, _| Rgb::gray(100 + x as u16)).unwrap();
        let out = downscale(&img, 1, 1).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), Rgb::gray(101));
    }

    #[test]
    fn test_downscale_identity_size() {
        let img = Image::from_fn(3, 3, 255, |x, y| Rgb::gray((x * 3 + y) as u16)).unwrap();
        assert_eq!(downscale(&img, 3, 3).unwrap(), img);
    }
}

//! Conversion between [`Image`] and the `image` crate's buffers
//!
//! PNG and JPEG decoding/encoding is delegated to the `image` crate;
//! this module translates its `DynamicImage` into the engine's value
//! type and back. 8-bit sources map to `max_value` 255 and 16-bit
//! sources to 65535; any other ceiling has no exact representation in
//! these formats and must be exported as PNM instead.

use crate::error::{IoError, IoResult};
use image::DynamicImage;
use rasterlab_core::Image;

/// Convert a decoded `DynamicImage` into an engine image.
pub fn image_from_dynamic(decoded: DynamicImage) -> IoResult<Image> {
    let deep = matches!(
        decoded,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
    );
    if deep {
        let buf = decoded.to_rgb16();
        let (w, h) = buf.dimensions();
        Image::from_raw(w, h, 65535, buf.into_raw()).map_err(IoError::Core)
    } else {
        let buf = decoded.to_rgb8();
        let (w, h) = buf.dimensions();
        let data = buf.into_raw().into_iter().map(u16::from).collect();
        Image::from_raw(w, h, 255, data).map_err(IoError::Core)
    }
}

/// Convert an engine image into a `DynamicImage` for encoding.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] when `max_value` is neither 255
/// nor 65535; rescaling would change pixel values, so such images are
/// only exportable as PNM.
pub fn dynamic_from_image(img: &Image) -> IoResult<DynamicImage> {
    let (w, h) = (img.width(), img.height());
    match img.max_value() {
        255 => {
            let data: Vec<u8> = img.samples().iter().map(|&v| v as u8).collect();
            image::RgbImage::from_raw(w, h, data)
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(|| IoError::EncodeError("sample buffer size mismatch".to_string()))
        }
        65535 => image::ImageBuffer::from_raw(w, h, img.samples().to_vec())
            .map(DynamicImage::ImageRgb16)
            .ok_or_else(|| IoError::EncodeError("sample buffer size mismatch".to_string())),
        other => Err(IoError::EncodeError(format!(
            "channel ceiling {other} has no exact PNG/JPEG representation; export as PNM"
        ))),
    }
}

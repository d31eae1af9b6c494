//! rasterlab-io - Image loading and exporting
//!
//! The loader/exporter collaborators of the engine. The core only
//! needs four attributes out of a file (width, height, channel
//! ceiling, pixel grid); everything format-specific lives here:
//!
//! - PNM (P3/P6) read and P6 write, implemented in-crate
//! - PNG and JPEG via the `image` crate
//!
//! Formats are chosen by file extension. Every failure surfaces as an
//! [`IoError`]; nothing is silently swallowed.

pub mod convert;
mod error;
pub mod format;
pub mod pnm;

pub use convert::{dynamic_from_image, image_from_dynamic};
pub use error::{IoError, IoResult};
pub use format::ImageFormat;
pub use pnm::{decode_pnm, read_pnm, write_pnm};

use rasterlab_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path, choosing the codec by extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    match ImageFormat::from_path(path)? {
        ImageFormat::Pnm => read_pnm(BufReader::new(File::open(path)?)),
        ImageFormat::Png | ImageFormat::Jpeg => {
            let decoded = image::open(path).map_err(|e| IoError::DecodeError(e.to_string()))?;
            image_from_dynamic(decoded)
        }
    }
}

/// Write an image to a file path, choosing the codec by extension.
///
/// # Errors
///
/// JPEG output requires `max_value` 255 and PNG requires 255 or
/// 65535; other ceilings are only exportable as PNM
/// ([`IoError::EncodeError`]).
pub fn write_image<P: AsRef<Path>>(img: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match ImageFormat::from_path(path)? {
        ImageFormat::Pnm => write_pnm(img, BufWriter::new(File::create(path)?)),
        ImageFormat::Png => dynamic_from_image(img)?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| IoError::EncodeError(e.to_string())),
        ImageFormat::Jpeg => {
            if img.max_value() != 255 {
                return Err(IoError::EncodeError(format!(
                    "JPEG output requires channel ceiling 255, got {}",
                    img.max_value()
                )));
            }
            dynamic_from_image(img)?
                .save_with_format(path, image::ImageFormat::Jpeg)
                .map_err(|e| IoError::EncodeError(e.to_string()))
        }
    }
}

//! Image file format selection

use crate::error::{IoError, IoResult};
use std::path::Path;

/// On-disk image format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable pixmap (P3/P6)
    Pnm,
    /// PNG
    Png,
    /// JFIF JPEG
    Jpeg,
}

impl ImageFormat {
    /// Determine the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for unknown or missing
    /// extensions.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "ppm" | "pnm" => Ok(ImageFormat::Pnm),
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(IoError::UnsupportedFormat(format!(
                "no codec for \"{}\"",
                path.display()
            ))),
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Pnm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("a/b/koala.PPM")).unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("x.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("x.jpeg")).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(ImageFormat::from_path(Path::new("x.tiff")).is_err());
        assert!(ImageFormat::from_path(Path::new("noext")).is_err());
    }
}

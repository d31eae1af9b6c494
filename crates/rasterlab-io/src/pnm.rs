//! PNM (Portable Any Map) format support
//!
//! Reads P3 (ASCII) and P6 (binary) pixmaps; writes P6. Header
//! parsing tolerates `#` comments anywhere whitespace is allowed.
//! Maxval up to 65535 is supported; P6 samples are two bytes
//! big-endian when maxval exceeds 255, per the PNM convention.

use crate::error::{IoError, IoResult};
use rasterlab_core::{CHANNELS, Image};
use std::io::{BufRead, Write};

/// Read a PNM image (P3/P6) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_pnm(&bytes)
}

/// Decode a PNM image from an in-memory byte buffer.
pub fn decode_pnm(bytes: &[u8]) -> IoResult<Image> {
    let mut scan = HeaderScanner::new(bytes);

    let magic = scan.magic()?;
    let width = scan.number("width")?;
    let height = scan.number("height")?;
    let maxval = scan.number("maxval")?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "degenerate dimensions {width}x{height}"
        )));
    }
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("maxval {maxval} out of range")));
    }
    let max = maxval as u16;
    let count = CHANNELS * width as usize * height as usize;

    let samples = match magic {
        Magic::P3 => {
            let mut samples = Vec::with_capacity(count);
            for _ in 0..count {
                samples.push(scan.number("sample")?);
            }
            samples
        }
        Magic::P6 => {
            // Exactly one whitespace byte separates maxval from the
            // raster.
            let raster = scan.raster()?;
            let per_sample = if maxval > 255 { 2 } else { 1 };
            if raster.len() < count * per_sample {
                return Err(IoError::InvalidData(format!(
                    "raster truncated: {} bytes, need {}",
                    raster.len(),
                    count * per_sample
                )));
            }
            if per_sample == 1 {
                raster[..count].iter().map(|&b| b as u32).collect()
            } else {
                raster[..count * 2]
                    .chunks_exact(2)
                    .map(|c| u32::from(u16::from_be_bytes([c[0], c[1]])))
                    .collect()
            }
        }
    };

    if let Some(&v) = samples.iter().find(|&&v| v > maxval) {
        return Err(IoError::InvalidData(format!(
            "sample {v} exceeds maxval {maxval}"
        )));
    }

    let data = samples.into_iter().map(|v| v as u16).collect();
    Image::from_raw(width, height, max, data).map_err(IoError::Core)
}

/// Write an image as binary PNM (P6) to a writer.
///
/// Samples are one byte when `max_value <= 255`, otherwise two bytes
/// big-endian.
pub fn write_pnm<W: Write>(img: &Image, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P6\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.max_value()
    )?;
    if img.max_value() <= 255 {
        let bytes: Vec<u8> = img.samples().iter().map(|&v| v as u8).collect();
        writer.write_all(&bytes)?;
    } else {
        let mut bytes = Vec::with_capacity(img.samples().len() * 2);
        for &v in img.samples() {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        writer.write_all(&bytes)?;
    }
    Ok(())
}

enum Magic {
    P3,
    P6,
}

/// Tokenizer for the PNM header: whitespace-separated fields with `#`
/// comments running to end of line.
struct HeaderScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderScanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        HeaderScanner { bytes, pos: 0 }
    }

    fn magic(&mut self) -> IoResult<Magic> {
        self.skip_separators();
        let tail = &self.bytes[self.pos.min(self.bytes.len())..];
        if tail.starts_with(b"P3") {
            self.pos += 2;
            Ok(Magic::P3)
        } else if tail.starts_with(b"P6") {
            self.pos += 2;
            Ok(Magic::P6)
        } else {
            Err(IoError::DecodeError(
                "missing P3/P6 magic number".to_string(),
            ))
        }
    }

    fn number(&mut self, field: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(IoError::InvalidData(format!("missing {field} field")));
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .expect("digits are valid UTF-8");
        text.parse::<u32>()
            .map_err(|_| IoError::InvalidData(format!("{field} value out of range")))
    }

    /// Consume the single whitespace byte after maxval and return the
    /// remaining raster bytes.
    fn raster(&mut self) -> IoResult<&'a [u8]> {
        if self.pos >= self.bytes.len() || !self.bytes[self.pos].is_ascii_whitespace() {
            return Err(IoError::InvalidData(
                "missing separator before raster".to_string(),
            ));
        }
        self.pos += 1;
        Ok(&self.bytes[self.pos..])
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }
}

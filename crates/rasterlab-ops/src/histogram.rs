//! Histogram computation
//!
//! Per-channel frequency tables over an image. A pure function of the
//! pixel data; rendering lives with the view adapter, not here.

use rasterlab_core::{Channel, Image};

/// Per-channel frequency tables.
///
/// Each table has `max_value + 1` bins; bin `v` counts the pixels
/// whose channel sample equals `v`. Every table sums to
/// `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel frequencies
    pub red: Vec<u64>,
    /// Green channel frequencies
    pub green: Vec<u64>,
    /// Blue channel frequencies
    pub blue: Vec<u64>,
}

impl Histogram {
    /// Frequency table for one channel.
    pub fn channel(&self, c: Channel) -> &[u64] {
        match c {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Number of bins per channel (`max_value + 1`).
    pub fn bins(&self) -> usize {
        self.red.len()
    }

    /// Largest count across all channels and bins.
    pub fn peak(&self) -> u64 {
        Channel::ALL
            .into_iter()
            .flat_map(|c| self.channel(c).iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Compute per-channel frequency tables for an image.
pub fn histogram(img: &Image) -> Histogram {
    let bins = img.max_value() as usize + 1;
    let mut red = vec![0u64; bins];
    let mut green = vec![0u64; bins];
    let mut blue = vec![0u64; bins];

    for p in img.pixels() {
        red[p.r as usize] += 1;
        green[p.g as usize] += 1;
        blue[p.b as usize] += 1;
    }

    Histogram { red, green, blue }
}

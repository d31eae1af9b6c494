//! Histogram view adapter
//!
//! Turns the pure frequency tables from `rasterlab-ops` into a
//! renderable chart image and stores it in the model. The chart is a
//! fixed 256x256 image: white ground, light grid every 16 pixels, one
//! polyline per channel (red, then green, then blue, later channels
//! overwriting earlier ones), counts normalized so the tallest bin
//! spans the full height.

use rasterlab_core::{Channel, Image, ImageBuilder, ImageStore, Result, Rgb};
use rasterlab_ops::{Histogram, histogram};

/// Chart width and height in pixels.
pub const CHART_SIZE: u32 = 256;

const GRID_STEP: u32 = 16;
const GRID_VALUE: u16 = 224;

/// Compute per-channel frequency data for an image.
///
/// A pure function of the pixel data; re-exported here so view code
/// has a single entry point for both computing and rendering.
pub fn calculate_histogram_data(img: &Image) -> Histogram {
    histogram(img)
}

/// Render frequency tables as a fixed-size chart image.
pub fn render_histogram(hist: &Histogram) -> Image {
    let mut b = ImageBuilder::filled(CHART_SIZE, CHART_SIZE, 255, Rgb::gray(255))
        .expect("chart shape is valid");

    for i in (0..CHART_SIZE).step_by(GRID_STEP as usize) {
        for j in 0..CHART_SIZE {
            b.set_pixel(i, j, Rgb::gray(GRID_VALUE)).expect("grid in bounds");
            b.set_pixel(j, i, Rgb::gray(GRID_VALUE)).expect("grid in bounds");
        }
    }

    let columns: [Vec<u64>; 3] = Channel::ALL.map(|c| resample(hist.channel(c)));
    let peak = columns.iter().flatten().copied().max().unwrap_or(0);
    if peak == 0 {
        return b.into();
    }

    for (channel, column) in Channel::ALL.into_iter().zip(&columns) {
        let color = match channel {
            Channel::Red => Rgb::new(255, 0, 0),
            Channel::Green => Rgb::new(0, 255, 0),
            Channel::Blue => Rgb::new(0, 0, 255),
        };
        let mut prev_y = None;
        for (x, &count) in column.iter().enumerate() {
            let h = (count * (CHART_SIZE as u64 - 1) / peak) as u32;
            let y = CHART_SIZE - 1 - h;
            // Connect to the previous column with a vertical span so
            // the polyline has no gaps.
            let (lo, hi) = match prev_y {
                Some(p) if p < y => (p, y),
                Some(p) => (y, p),
                None => (y, y),
            };
            for yy in lo..=hi {
                b.set_pixel(x as u32, yy, color).expect("polyline in bounds");
            }
            prev_y = Some(y);
        }
    }

    b.into()
}

/// Map a frequency table of any bin count onto `CHART_SIZE` columns.
///
/// Wide tables sum the bins each column covers; narrow tables
/// replicate each bin across its columns.
fn resample(bins: &[u64]) -> Vec<u64> {
    let n = bins.len() as u64;
    let w = CHART_SIZE as u64;
    (0..w)
        .map(|c| {
            let lo = (c * n / w) as usize;
            let hi = (((c + 1) * n / w) as usize).max(lo + 1);
            bins[lo..hi.min(bins.len())].iter().sum()
        })
        .collect()
}

/// Resolve `image_name` from the store, render its histogram, and
/// store the chart under `dest_name`.
///
/// # Errors
///
/// Returns [`rasterlab_core::Error::ImageNotFound`] when `image_name`
/// is absent; the store is untouched in that case.
pub fn generate_and_store_histogram(
    store: &mut ImageStore,
    image_name: &str,
    dest_name: &str,
) -> Result<()> {
    let img = store.get(image_name)?;
    let chart = render_histogram(&calculate_histogram_data(&img));
    store.insert(dest_name, chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Error;

    #[test]
    fn test_chart_shape() {
        let img = Image::from_fn(10, 10, 255, |x, _| Rgb::gray(x as u16 * 25)).unwrap();
        let chart = render_histogram(&calculate_histogram_data(&img));
        assert_eq!(chart.width(), CHART_SIZE);
        assert_eq!(chart.height(), CHART_SIZE);
        assert_eq!(chart.max_value(), 255);
    }

    #[test]
    fn test_solid_image_peak_column() {
        // All mass in one bin: that column must reach the top row and
        // carry the blue polyline (drawn last, all channels agree).
        let img = Image::from_fn(4, 4, 255, |_, _| Rgb::gray(100)).unwrap();
        let chart = render_histogram(&calculate_histogram_data(&img));
        assert_eq!(chart.pixel(100, 0).unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_render_is_deterministic() {
        let img = Image::from_fn(9, 9, 255, |x, y| Rgb::new(x as u16 * 20, y as u16 * 20, 50)).unwrap();
        let hist = calculate_histogram_data(&img);
        assert_eq!(render_histogram(&hist), render_histogram(&hist));
    }

    #[test]
    fn test_narrow_table_resampling() {
        // max_value 3 -> 4 bins spread over 256 columns.
        let img = Image::from_fn(2, 2, 3, |x, y| Rgb::gray((x + y) as u16)).unwrap();
        let chart = render_histogram(&calculate_histogram_data(&img));
        assert_eq!(chart.width(), CHART_SIZE);
    }

    #[test]
    fn test_generate_and_store() {
        let mut store = ImageStore::new();
        store
            .insert("src", Image::from_fn(4, 4, 255, |_, _| Rgb::gray(7)).unwrap())
            .unwrap();
        generate_and_store_histogram(&mut store, "src", "chart").unwrap();
        let chart = store.get("chart").unwrap();
        assert_eq!(chart.width(), CHART_SIZE);
    }

    #[test]
    fn test_generate_missing_source() {
        let mut store = ImageStore::new();
        let err = generate_and_store_histogram(&mut store, "ghost", "chart").unwrap_err();
        assert!(matches!(err, Error::ImageNotFound(_)));
        assert!(!store.contains("chart"));
    }
}

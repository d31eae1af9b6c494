//! Transformation catalogue regression test
//!
//! Exercises the catalogue invariants over deterministic and seeded
//! random images: clamp ranges, histogram totals, split/combine round
//! trips, and dimension checks.

use rand::{Rng, RngExt, SeedableRng, rngs::StdRng};
use rasterlab_core::{Channel, Image, Rgb};
use rasterlab_ops::{
    apply_with_mask, blur, brighten, combine, compress, downscale, greyscale, histogram, levels,
    sepia, sharpen, split,
};
use rasterlab_test::{CheckParams, checkerboard_image, gradient_image, solid_image};

fn random_image(rng: &mut StdRng, w: u32, h: u32, max: u16) -> Image {
    Image::from_fn(w, h, max, |_, _| {
        Rgb::new(
            rng.random_range(0..=max),
            rng.random_range(0..=max),
            rng.random_range(0..=max),
        )
    })
    .unwrap()
}

fn in_range(img: &Image) -> bool {
    let max = img.max_value();
    img.pixels()
        .all(|p| Channel::ALL.into_iter().all(|c| p.channel(c) <= max))
}

#[test]
fn catalogue_reg() {
    let mut rp = CheckParams::new("catalogue");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    // --- Clamp property over random images, several ceilings ---
    for &max in &[1u16, 255, 1023] {
        let img = random_image(&mut rng, 9, 7, max);
        for out in [
            greyscale(&img),
            sepia(&img),
            blur(&img),
            sharpen(&img),
            brighten(&img, 1_000_000),
            brighten(&img, -1_000_000),
        ] {
            rp.check("output stays within channel ceiling", in_range(&out));
            rp.check("output keeps source dimensions", img.sizes_equal(&out));
        }
    }

    // --- Histogram totals ---
    let img = random_image(&mut rng, 13, 11, 255);
    let hist = histogram(&img);
    let n = (img.width() * img.height()) as f64;
    for c in Channel::ALL {
        let total: u64 = hist.channel(c).iter().sum();
        rp.compare_values(n, total as f64, 0.0);
    }

    // --- Split/combine round trip ---
    for _ in 0..4 {
        let img = random_image(&mut rng, 8, 6, 255);
        let [r, g, b] = split(&img);
        let rebuilt = combine(&r, &g, &b).expect("components share geometry");
        rp.check("combine(split(img)) == img", rebuilt == img);
    }

    // --- Levels endpoints on a gradient ---
    let grad = gradient_image(16, 16, 255);
    let adjusted = levels(&grad, 0, 128, 255).expect("valid control points");
    rp.compare_values(0.0, adjusted.pixel(0, 0).unwrap().r as f64, 0.0);
    rp.compare_values(255.0, adjusted.pixel(15, 15).unwrap().r as f64, 0.0);

    // --- Downscale of a solid image at several targets ---
    let flat = solid_image(12, 9, 255, Rgb::new(33, 66, 99));
    for (nw, nh) in [(1, 1), (4, 3), (12, 9)] {
        let down = downscale(&flat, nw, nh).expect("valid target size");
        rp.check(
            "downscaled solid image keeps its color",
            down.pixels().all(|p| p == Rgb::new(33, 66, 99)),
        );
    }

    // --- Compression determinism and range ---
    let img = random_image(&mut rng, 10, 10, 255);
    let once = compress(&img, 35.0).unwrap();
    let twice = compress(&img, 35.0).unwrap();
    rp.check("compression is deterministic", once == twice);
    rp.check("compressed output stays in range", in_range(&once));

    // --- Masked application only touches selected pixels ---
    let base = random_image(&mut rng, 8, 8, 255);
    let mask = checkerboard_image(8, 8, 255, 1);
    let merged = apply_with_mask(&base, &mask, &greyscale(&base)).unwrap();
    let mut agree = true;
    for y in 0..8 {
        for x in 0..8 {
            let selected = mask.pixel(x, y).unwrap().r == 255;
            let expected = if selected {
                greyscale(&base).pixel(x, y).unwrap()
            } else {
                base.pixel(x, y).unwrap()
            };
            agree &= merged.pixel(x, y).unwrap() == expected;
        }
    }
    rp.check("mask merge matches per-pixel selection", agree);

    assert!(rp.cleanup(), "catalogue regression test failed");
}

//! PNM I/O regression test
//!
//! Round-trips images through on-disk PNM files and checks the error
//! paths for unsupported extensions.

use rasterlab_core::Rgb;
use rasterlab_io::{IoError, read_image, write_image};
use rasterlab_test::{CheckParams, gradient_image, solid_image};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rasterlab-{}-{}", std::process::id(), name))
}

#[test]
fn pnmio_reg() {
    let mut rp = CheckParams::new("pnmio");

    // --- P6 round trip, 8-bit ceiling ---
    let img = gradient_image(17, 9, 255);
    let path = scratch_path("grad.ppm");
    write_image(&img, &path).expect("write ppm");
    let back = read_image(&path).expect("read ppm");
    rp.check("8-bit ppm round trip", back == img);
    std::fs::remove_file(&path).ok();

    // --- P6 round trip, 16-bit ceiling ---
    let img = gradient_image(5, 5, 65535);
    let path = scratch_path("deep.ppm");
    write_image(&img, &path).expect("write 16-bit ppm");
    let back = read_image(&path).expect("read 16-bit ppm");
    rp.check("16-bit ppm round trip", back == img);
    std::fs::remove_file(&path).ok();

    // --- Odd ceilings still export as PNM ---
    let img = solid_image(3, 3, 1023, Rgb::new(1000, 0, 512));
    let path = scratch_path("odd.ppm");
    write_image(&img, &path).expect("write maxval-1023 ppm");
    let back = read_image(&path).expect("read maxval-1023 ppm");
    rp.check("non-standard ceiling survives pnm", back == img);
    rp.compare_values(1023.0, back.max_value() as f64, 0.0);
    std::fs::remove_file(&path).ok();

    // --- Unsupported extension is rejected, not swallowed ---
    let err = read_image(scratch_path("image.tiff")).unwrap_err();
    rp.check(
        "unknown extension yields UnsupportedFormat",
        matches!(err, IoError::UnsupportedFormat(_)),
    );

    // --- Missing file surfaces the underlying I/O error ---
    let err = read_image(scratch_path("nonexistent.ppm")).unwrap_err();
    rp.check("missing file yields Io", matches!(err, IoError::Io(_)));

    assert!(rp.cleanup(), "pnm io regression test failed");
}

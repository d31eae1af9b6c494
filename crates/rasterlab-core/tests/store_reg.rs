//! Image store regression test
//!
//! Verifies the copy discipline at every store boundary: retrieved
//! images are independent of the stored entry and of each other, and
//! failed lookups never fabricate a default image.

use rasterlab_core::{Error, ImageStore, Rgb};
use rasterlab_test::{CheckParams, gradient_image, solid_image};

#[test]
fn store_reg() {
    let mut rp = CheckParams::new("store");
    let mut store = ImageStore::new();

    // --- Stored then retrieved unmodified: equal, never aliased ---
    let img = gradient_image(8, 8, 255);
    store.insert("grad", img.clone()).unwrap();
    let copy = store.get("grad").unwrap();
    rp.check("retrieved image equals stored image", copy == img);
    rp.check(
        "retrieved image has its own storage",
        copy.samples().as_ptr() != store.get("grad").unwrap().samples().as_ptr(),
    );

    // --- Mutating a derived copy must not leak into the store ---
    let brightened = copy.map_pixels(|p| p.map(|v| v.saturating_add(40)));
    rp.check(
        "store entry unchanged after deriving from a copy",
        store.get("grad").unwrap() == img && brightened != img,
    );

    // --- Unknown name is a not-found outcome, not a default image ---
    rp.check(
        "missing name yields ImageNotFound",
        matches!(store.get("missing"), Err(Error::ImageNotFound(_))),
    );

    // --- Re-insert under the same name supersedes ---
    let replacement = solid_image(2, 2, 255, Rgb::gray(9));
    store.insert("grad", replacement.clone()).unwrap();
    rp.check(
        "re-insert replaces the entry",
        store.get("grad").unwrap() == replacement,
    );
    rp.compare_values(1.0, store.len() as f64, 0.0);

    // --- Clone independence at the image level ---
    let a = gradient_image(5, 5, 1023);
    let b = a.clone();
    rp.check("clone equal in every attribute", a == b && a.max_value() == b.max_value());
    rp.check(
        "clone backed by independent storage",
        a.samples().as_ptr() != b.samples().as_ptr(),
    );

    assert!(rp.cleanup(), "store regression test failed");
}

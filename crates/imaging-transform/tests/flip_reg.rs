//! Flip regression test
//!
//! A negative destination extent mirrors that axis. Scaling to `(-w, h)`
//! must equal scaling to `(w, h)` and flipping left-right, for every
//! resampler, alpha setting and border.

use imaging_core::{Border, Image};
use imaging_test::{RegParams, xorshift_image};
use imaging_transform::{ScaleOptions, flip_horizontal, flip_vertical, rotate_180, scale};

const SIZES: [(i32, i32); 5] = [(50, 30), (10, 8), (23, 17), (40, 9), (9, 40)];

fn source(border: Border) -> Image {
    xorshift_image(23, 17, true, 99)
        .expect("source")
        .with_border(border)
}

#[test]
fn flip_reg() {
    let mut rp = RegParams::new("flip");

    let options = [
        ScaleOptions::default(),
        ScaleOptions::default().with_alpha(false),
        ScaleOptions::sampling(),
    ];
    for border in [Border::default(), Border::new(3, 2, 1, 4)] {
        let pixs = source(border);
        for opts in &options {
            for (dw, dh) in SIZES {
                let plain = scale(&pixs, dw, dh, opts).expect("scale");
                let mirrored_x = scale(&pixs, -dw, dh, opts).expect("scale -x");
                let mirrored_y = scale(&pixs, dw, -dh, opts).expect("scale -y");
                let mirrored_xy = scale(&pixs, -dw, -dh, opts).expect("scale -x -y");

                rp.compare_images(&flip_horizontal(&plain).expect("flip lr"), &mirrored_x);
                rp.compare_images(&flip_vertical(&plain).expect("flip tb"), &mirrored_y);
                rp.compare_images(&rotate_180(&plain).expect("rotate"), &mirrored_xy);
            }
        }
    }

    assert!(rp.cleanup(), "flip regression test failed");
}

#[test]
fn flip_helpers_reg() {
    let mut rp = RegParams::new("flip_helpers");

    let pixs = source(Border::new(3, 2, 1, 4));
    let w = pixs.width();
    let h = pixs.height();

    // --- Test 1: horizontal flip moves (x, y) to (w-1-x, y) ---
    let lr = flip_horizontal(&pixs).expect("flip lr");
    let ok = (0..h).all(|y| (0..w).all(|x| lr.get_pixel(w - 1 - x, y) == pixs.get_pixel(x, y)));
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(2.0, lr.border().left as f64, 0.0);
    rp.compare_values(3.0, lr.border().right as f64, 0.0);

    // --- Test 2: vertical flip moves (x, y) to (x, h-1-y) ---
    let tb = flip_vertical(&pixs).expect("flip tb");
    let ok = (0..h).all(|y| (0..w).all(|x| tb.get_pixel(x, h - 1 - y) == pixs.get_pixel(x, y)));
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(4.0, tb.border().top as f64, 0.0);

    // --- Test 3: flipping twice is the identity ---
    rp.compare_images(&pixs, &flip_horizontal(&lr).expect("flip lr twice"));
    rp.compare_images(&pixs, &flip_vertical(&tb).expect("flip tb twice"));
    let twice = rotate_180(&rotate_180(&pixs).expect("rotate")).expect("rotate twice");
    rp.compare_images(&pixs, &twice);
    rp.compare_values(1.0, if twice.border() == pixs.border() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: alpha is copied verbatim ---
    rp.compare_values(1.0, if lr.has_alpha() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "flip_helpers regression test failed");
}

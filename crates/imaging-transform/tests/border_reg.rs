//! Border (nine-slice) regression test
//!
//! With a border set, the edge bands are copied 1:1 whenever the
//! destination holds both of them, so the four corners of the result are
//! the source corners whatever the scale factor.

use imaging_core::{Border, Region};
use imaging_test::{RegParams, xorshift_image};
use imaging_transform::{ScaleOptions, scale};

const W: u32 = 20;
const H: u32 = 20;
const EDGE: u32 = 4;
const CENTER: u32 = 0xff336699;

#[test]
fn border_reg() {
    let mut rp = RegParams::new("border");

    let mut pixs = xorshift_image(W, H, true, 0x1234567)
        .expect("source")
        .with_border(Border::uniform(EDGE))
        .into_mut();
    pixs.fill_region(
        Region::new(EDGE as i32, EDGE as i32, (W - 2 * EDGE) as i32, (H - 2 * EDGE) as i32),
        CENTER,
    );
    let pixs: imaging_core::Image = pixs.into();

    for (dw, dh) in [(50, 30), (14, 12), (8, 8), (30, 12), (12, 30), (20, 20), (9, 40)] {
        for opts in [ScaleOptions::default(), ScaleOptions::sampling()] {
            let out = scale(&pixs, dw as i32, dh as i32, &opts).expect("scale");
            let mut corners_ok = true;
            for cy in 0..EDGE {
                for cx in 0..EDGE {
                    for (sx, dx) in [(cx, cx), (W - EDGE + cx, dw - EDGE + cx)] {
                        for (sy, dy) in [(cy, cy), (H - EDGE + cy, dh - EDGE + cy)] {
                            corners_ok &= out.get_pixel(dx, dy) == pixs.get_pixel(sx, sy);
                        }
                    }
                }
            }
            eprintln!("  {}x{} antialias={}: corners {}", dw, dh, opts.antialias, corners_ok);
            rp.compare_values(1.0, if corners_ok { 1.0 } else { 0.0 }, 0.0);
        }
    }

    // --- a magnified uniform center stays uniform ---
    // (the last few interior columns blend with the trailing border)
    let out = scale(&pixs, 60, 60, &ScaleOptions::default()).expect("scale");
    let uniform = (EDGE..48).all(|y| (EDGE..48).all(|x| out.get_pixel(x, y) == Some(CENTER)));
    rp.compare_values(1.0, if uniform { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "border regression test failed");
}

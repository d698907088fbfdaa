//! Region scaling regression test
//!
//! Cropped-region scaling must equal the matching window of scaling the
//! whole image by the same factor, and scaling onto part of an image must
//! clip to the destination and leave every other pixel alone.

use imaging_core::{Image, Region};
use imaging_test::{RegParams, xorshift_image};
use imaging_transform::{ScaleOptions, scale, scale_onto, scale_region};

const BACKGROUND: u32 = 0x11111111;

fn window(img: &Image, x: u32, y: u32, w: u32, h: u32) -> Vec<u32> {
    (y..y + h)
        .flat_map(|row| img.row(row)[x as usize..(x + w) as usize].to_vec())
        .collect()
}

fn matches(expected: &[u32], actual: &[u32]) -> f64 {
    if expected == actual { 1.0 } else { 0.0 }
}

#[test]
fn region_reg() {
    let mut rp = RegParams::new("region");

    let pixs = xorshift_image(64, 64, true, 0x9E3779B9).expect("source");
    let crop = Region::new(16, 16, 32, 32);

    // --- Test 1: a cropped scale is a window of the full scale ---
    for opts in [ScaleOptions::default(), ScaleOptions::sampling()] {
        for (dw, dh) in [(48, 48), (-48, 48), (48, -48), (20, 12), (-20, -12)] {
            let part = scale_region(&pixs, crop, dw, dh, &opts).expect("scale_region");
            let (fw, fh) = (dw.unsigned_abs() * 2, dh.unsigned_abs() * 2);
            let full = scale(&pixs, dw.signum() * fw as i32, dh.signum() * fh as i32, &opts)
                .expect("scale");
            let mut fx = 16 * dw.unsigned_abs() / 32;
            let mut fy = 16 * dh.unsigned_abs() / 32;
            if dw < 0 {
                fx = fw - fx - dw.unsigned_abs();
            }
            if dh < 0 {
                fy = fh - fy - dh.unsigned_abs();
            }
            let expected = window(&full, fx, fy, part.width(), part.height());
            rp.compare_values(1.0, matches(&expected, part.data()), 0.0);
        }
    }

    // --- Test 2: pinned checksums of an unaligned crop ---
    let odd = Region::new(5, 7, 50, 40);
    let out = scale_region(&pixs, odd, 30, 30, &ScaleOptions::default()).expect("crop");
    rp.compare_checksum(2960818187, &out);
    let out = scale_region(&pixs, odd, -30, 45, &ScaleOptions::default()).expect("crop");
    rp.compare_checksum(3663502160, &out);

    // --- Test 3: invalid regions are rejected ---
    let opts = ScaleOptions::default();
    for bad in [
        Region::new(-1, 0, 10, 10),
        Region::new(60, 0, 10, 10),
        Region::new(0, 0, 0, 10),
        Region::new(0, 0, 10, -3),
    ] {
        let rejected = scale_region(&pixs, bad, 10, 10, &opts).is_err();
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "region regression test failed");
}

#[test]
fn scale_onto_reg() {
    let mut rp = RegParams::new("scale_onto");

    let pixs = xorshift_image(64, 64, true, 0x9E3779B9).expect("source");
    let whole = Region::full(64, 64);
    let opts = ScaleOptions::default();

    // (source region, destination rectangle, reference scale)
    let cases = [
        (whole, Region::new(30, -10, 40, 40)),
        (whole, Region::new(-5, -5, -20, 30)),
        (Region::new(16, 16, 32, 32), Region::new(10, 10, 48, 48)),
    ];

    for (src_region, dst_region) in cases {
        let mut dst = Image::new(50, 50).expect("dest").into_mut();
        dst.fill(BACKGROUND);
        scale_onto(&mut dst, &pixs, src_region, dst_region, &opts).expect("scale_onto");
        let dst: Image = dst.into();

        let reference = scale_region(&pixs, src_region, dst_region.w, dst_region.h, &opts)
            .expect("reference");
        let (rx, ry) = (dst_region.x, dst_region.y);
        let (rw, rh) = (dst_region.w.abs(), dst_region.h.abs());

        let mut inside_ok = true;
        let mut outside_ok = true;
        for y in 0..50i32 {
            for x in 0..50i32 {
                let actual = dst.get_pixel(x as u32, y as u32);
                let (lx, ly) = (x - rx, y - ry);
                if (0..rw).contains(&lx) && (0..rh).contains(&ly) {
                    inside_ok &= actual == reference.get_pixel(lx as u32, ly as u32);
                } else {
                    outside_ok &= actual == Some(BACKGROUND);
                }
            }
        }
        rp.compare_values(1.0, if inside_ok { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if outside_ok { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(0.0, if dst.has_alpha() { 1.0 } else { 0.0 }, 0.0);
    }

    // --- rectangle entirely outside: nothing changes ---
    let mut dst = Image::new(50, 50).expect("dest").into_mut();
    dst.fill(BACKGROUND);
    scale_onto(&mut dst, &pixs, whole, Region::new(50, 0, 10, 10), &opts).expect("scale_onto");
    let untouched = dst.data().iter().all(|&p| p == BACKGROUND);
    rp.compare_values(1.0, if untouched { 1.0 } else { 0.0 }, 0.0);

    // --- zero-sized rectangle is an error ---
    let zero = scale_onto(&mut dst, &pixs, whole, Region::new(0, 0, 0, 10), &opts);
    rp.compare_values(1.0, if zero.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "scale_onto regression test failed");
}

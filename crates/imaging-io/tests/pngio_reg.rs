//! PNG I/O regression test
//!
//! Lossless write/read of ARGB images through files and memory.

use imaging_io::{ImageFormat, detect_format, read_image, read_image_mem, write_image, write_image_mem};
use imaging_test::{RegParams, gradient_image, regout_dir, xorshift_image};
use std::fs;

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    let images = [
        ("rgb_noise", xorshift_image(33, 21, false, 0x2545F491).expect("noise")),
        ("argb_noise", xorshift_image(33, 21, true, 0x9E3779B9).expect("noise")),
        ("gradient", gradient_image(64, 48, true).expect("gradient")),
    ];

    for (name, pix) in &images {
        // --- file round trip ---
        let path = format!("{}/pngio_{}.png", outdir, name);
        write_image(pix, &path, ImageFormat::Png).expect("write png");
        rp.compare_values(
            1.0,
            if detect_format(&path).expect("detect") == ImageFormat::Png { 1.0 } else { 0.0 },
            0.0,
        );
        let back = read_image(&path).expect("read png");
        rp.compare_images(pix, &back);
        rp.compare_values(
            if pix.has_alpha() { 1.0 } else { 0.0 },
            if back.has_alpha() { 1.0 } else { 0.0 },
            0.0,
        );
        eprintln!("  {}: {}x{} crc32 {}", name, back.width(), back.height(), back.crc32());

        // --- memory round trip ---
        let bytes = write_image_mem(pix, ImageFormat::Png).expect("encode");
        let back = read_image_mem(&bytes).expect("decode");
        rp.compare_checksum(pix.crc32(), &back);
    }

    // --- unknown data is rejected ---
    rp.compare_values(1.0, if read_image_mem(b"GIF89a").is_err() { 1.0 } else { 0.0 }, 0.0);
    let unknown = write_image_mem(&images[0].1, ImageFormat::Unknown);
    rp.compare_values(1.0, if unknown.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pngio regression test failed");
}

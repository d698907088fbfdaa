//! Pixel-buffer checksums
//!
//! Scaled outputs are pinned by the CRC32 of their pixel bytes, taken in
//! memory order of little-endian 32-bit words. The CRC is the standard
//! reflected CRC-32 (polynomial `0xEDB88320`) used by zlib and PNG.

use super::Image;

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut out = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            if (c & 1) != 0 {
                c = 0xEDB8_8320_u32 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        out[n] = c;
        n += 1;
    }
    out
}

fn update_crc(mut crc: u32, bytes: impl Iterator<Item = u8>) -> u32 {
    for byte in bytes {
        let i = (crc ^ u32::from(byte)) as u8 as usize;
        crc = CRC_TABLE[i] ^ (crc >> 8);
    }
    crc
}

/// CRC32 of a pixel slice, each pixel fed as 4 little-endian bytes.
pub fn crc32(pixels: &[u32]) -> u32 {
    update_crc(u32::MAX, pixels.iter().flat_map(|p| p.to_le_bytes())) ^ u32::MAX
}

impl Image {
    /// CRC32 of the pixel data.
    pub fn crc32(&self) -> u32 {
        crc32(self.data())
    }
}

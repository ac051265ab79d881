#![allow(dead_code)]

use region_detector::image::Image;

/// Background `0` with a filled square of `value`.
pub fn square_on_background(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    side: usize,
    value: u8,
) -> Image<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Image::new(width, height, 0u8);
    img.fill_rect(x0, y0, x0 + side, y0 + side, value);
    img
}

/// "U" whose two arms only meet in the bottom stroke.
pub fn u_shape(value: u8) -> Image<u8> {
    let mut img = Image::new(12, 10, 0u8);
    img.fill_rect(2, 1, 4, 8, value);
    img.fill_rect(8, 1, 10, 8, value);
    img.fill_rect(2, 8, 10, 9, value);
    img
}

/// Square ring of `ring` around a hole of `hole`, on background `0`.
pub fn nested_rings(ring: u8, hole: u8) -> Image<u8> {
    let mut img = Image::new(20, 20, 0u8);
    img.fill_rect(3, 3, 17, 17, ring);
    img.fill_rect(7, 7, 13, 13, hole);
    img
}

/// Deterministic pseudo-random labels in `0..levels`.
///
/// Uses a 64-bit LCG so that the images are stable across platforms.
pub fn noise_labels(width: usize, height: usize, levels: u8, seed: u64) -> Image<u8> {
    assert!(levels > 0, "need at least one level");
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        data.push(((state >> 33) % levels as u64) as u8);
    }
    Image::from_vec(width, height, data).expect("buffer matches dimensions")
}

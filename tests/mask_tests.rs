// Host-side tests for text-mask sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod mask {
    include!("../src/mask.rs");
}

use glam::Vec2;
use mask::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Transparent `w` x `h` RGBA buffer with the given pixels set to `alpha`.
fn buffer_with(w: usize, h: usize, pixels: &[(usize, usize, u8)]) -> Vec<u8> {
    let mut buf = vec![0u8; w * h * 4];
    for &(x, y, a) in pixels {
        let i = (y * w + x) * 4;
        buf[i..i + 3].copy_from_slice(&[255, 255, 255]);
        buf[i + 3] = a;
    }
    buf
}

fn sorted(mut v: Vec<Vec2>) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = v.drain(..).map(|p| (p.x as u32, p.y as u32)).collect();
    out.sort_unstable();
    out
}

#[test]
fn font_scales_with_viewport() {
    assert_eq!(mask_font(600.0), "bold 100px Arial");
}

#[test]
fn only_alpha_strictly_above_threshold_is_sampled() {
    let buf = buffer_with(8, 8, &[(0, 0, 151), (4, 0, 150), (0, 4, 255), (4, 4, 10)]);
    let pts = sample_opaque(&buf, 8, 8, 4, 150);
    assert_eq!(pts, vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0)]);
}

#[test]
fn pixels_off_the_stride_grid_are_ignored() {
    let buf = buffer_with(8, 8, &[(1, 0, 255), (3, 3, 255), (4, 5, 255)]);
    assert!(sample_opaque(&buf, 8, 8, 4, 150).is_empty());
}

#[test]
fn scan_is_row_major() {
    let buf = buffer_with(8, 8, &[(4, 0, 200), (0, 4, 200), (4, 4, 200), (0, 0, 200)]);
    let pts = sample_opaque(&buf, 8, 8, 4, 150);
    assert_eq!(
        pts,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 4.0),
        ]
    );
}

#[test]
fn fully_opaque_buffer_yields_grid_count() {
    let (w, h) = (40, 20);
    let buf = vec![255u8; w * h * 4];
    let pts = sample_opaque(&buf, w, h, 4, 150);
    assert_eq!(pts.len(), (w / 4) * (h / 4));
}

#[test]
fn short_buffer_is_tolerated() {
    let mut buf = vec![255u8; 8 * 8 * 4];
    buf.truncate(8 * 4 * 4);
    let pts = sample_opaque(&buf, 8, 8, 4, 150);
    assert_eq!(pts, vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0)]);
}

#[test]
fn zero_stride_behaves_like_one() {
    let buf = vec![255u8; 2 * 2 * 4];
    assert_eq!(sample_opaque(&buf, 2, 2, 0, 150).len(), 4);
}

#[test]
fn shuffle_is_a_permutation() {
    let buf = vec![255u8; 64 * 64 * 4];
    let pts = sample_opaque(&buf, 64, 64, 4, 150);
    let mut shuffled = pts.clone();
    let mut rng = StdRng::seed_from_u64(7);
    shuffle_targets(&mut shuffled, &mut rng);

    assert_eq!(shuffled.len(), pts.len());
    assert_ne!(shuffled, pts, "256 points should not keep their order");
    assert_eq!(sorted(shuffled), sorted(pts));
}

#[test]
fn shuffle_is_reproducible_with_same_seed() {
    let pts: Vec<Vec2> = (0..50).map(|i| Vec2::new(i as f32, 0.0)).collect();
    let mut a = pts.clone();
    let mut b = pts;
    shuffle_targets(&mut a, &mut StdRng::seed_from_u64(3));
    shuffle_targets(&mut b, &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
}

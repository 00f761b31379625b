use crate::constants::{FONT_SIZE_DIVISOR, MASK_FONT_FAMILY};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

// Text-mask sampling over a raw RGBA buffer (row-major, 4 bytes per pixel).

/// Canvas font string for a mask rendered into a `size` x `size` buffer.
pub fn mask_font(size: f32) -> String {
    format!("bold {}px {}", size / FONT_SIZE_DIVISOR, MASK_FONT_FAMILY)
}

/// Collect every `stride`-th pixel (on both axes) whose alpha is above `threshold`.
///
/// Pixels that fall outside a short buffer are skipped.
pub fn sample_opaque(
    rgba: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    threshold: u8,
) -> Vec<Vec2> {
    let stride = stride.max(1);
    let mut out = Vec::new();
    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            let alpha = (y * width + x) * 4 + 3;
            match rgba.get(alpha) {
                Some(&a) if a > threshold => out.push(Vec2::new(x as f32, y as f32)),
                Some(_) => {}
                None => return out,
            }
        }
    }
    out
}

/// Uniform swap-based permutation of the target pool.
#[inline]
pub fn shuffle_targets<R: Rng + ?Sized>(targets: &mut [Vec2], rng: &mut R) {
    targets.shuffle(rng);
}

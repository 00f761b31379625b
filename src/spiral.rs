use crate::constants::{EDGE_MARGIN, GOLDEN_ANGLE};
use glam::Vec2;

/// Square drawing area inscribed in the browser window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: f32,
}

impl Viewport {
    pub fn new(size: f32) -> Self {
        Self {
            size: size.max(0.0),
        }
    }

    /// Largest square fitting a `width` x `height` window.
    pub fn square(width: f32, height: f32) -> Self {
        Self::new(width.min(height))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size * 0.5)
    }

    /// Outer radius of the spiral; never negative on tiny windows.
    #[inline]
    pub fn max_radius(&self) -> f32 {
        (self.size * 0.5 - EDGE_MARGIN).max(0.0)
    }

    /// Backing pixel size for offscreen rasterization.
    #[inline]
    pub fn pixel_size(&self) -> u32 {
        self.size.floor() as u32
    }
}

#[inline]
pub fn spiral_angle(index: usize) -> f64 {
    (index as f64 + 0.5) * GOLDEN_ANGLE
}

#[inline]
pub fn spiral_radius(index: usize, count: usize, max_radius: f32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let frac = (index as f64 + 0.5) / count as f64;
    frac.sqrt() * max_radius as f64
}

/// Home position of dot `index` out of `count` on the phyllotaxis spiral.
pub fn spiral_point(index: usize, count: usize, viewport: Viewport) -> Vec2 {
    let r = spiral_radius(index, count, viewport.max_radius());
    let theta = spiral_angle(index);
    let c = viewport.center();
    Vec2::new(
        (c.x as f64 + r * theta.cos()) as f32,
        (c.y as f64 + r * theta.sin()) as f32,
    )
}

/// Full deterministic layout; identical inputs always give identical points.
pub fn spiral_layout(count: usize, viewport: Viewport) -> Vec<Vec2> {
    (0..count)
        .map(|i| spiral_point(i, count, viewport))
        .collect()
}

use crate::constants::{MAGNET_LIFT_PX, MAGNET_PULL, SMOOTHING_ALPHA, TILT_DIVISOR};
use crate::smoothing::approach;
use glam::Vec2;

/// Smoothed 3D tilt of a panel, in degrees (`x` = rotateX, `y` = rotateY).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub current: Vec2,
    pub target: Vec2,
}

impl Tilt {
    /// Aim at a pointer given relative to the panel's top-left corner.
    pub fn aim(&mut self, local: Vec2, panel_size: Vec2) {
        let from_center = local - panel_size * 0.5;
        self.target = Vec2::new(-from_center.y, from_center.x) / TILT_DIVISOR;
    }

    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn step(&mut self) {
        self.current = approach(self.current, self.target, SMOOTHING_ALPHA);
    }

    pub fn css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.current.x, self.current.y
        )
    }
}

/// Offset pulling the button toward the pointer.
#[inline]
pub fn magnetic_offset(pointer: Vec2, button_center: Vec2) -> Vec2 {
    (pointer - button_center) * MAGNET_PULL
}

pub fn magnetic_css(offset: Vec2) -> String {
    format!(
        "translate({}px, {}px) translateZ({}px)",
        offset.x, offset.y, MAGNET_LIFT_PX
    )
}

pub fn magnetic_rest_css() -> String {
    format!("translate(0,0) translateZ({}px)", MAGNET_LIFT_PX)
}

use glam::Vec2;

/// Move `current` a fixed fraction `alpha` of the remaining distance toward `target`.
///
/// Repeated application decays the error geometrically by `(1 - alpha)` per step.
#[inline]
pub fn approach(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    current + (target - current) * alpha
}

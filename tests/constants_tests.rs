// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factor_is_a_fraction() {
    assert!(SMOOTHING_ALPHA > 0.0 && SMOOTHING_ALPHA < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sampling_parameters_are_sane() {
    assert!(SAMPLE_STRIDE >= 1);
    assert!(FONT_SIZE_DIVISOR > 1.0);
    assert_eq!(ALPHA_THRESHOLD, 150);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_geometry_is_positive() {
    assert!(DOT_COUNT > 0);
    assert!(DOT_RADIUS > 0.0);
    assert!(EDGE_MARGIN > DOT_RADIUS);
}

#[test]
fn highlight_differs_from_base_color() {
    assert_ne!(BASE_COLOR, TEXT_COLOR);
    for c in [BASE_COLOR, TEXT_COLOR, MASK_FILL] {
        assert!(c.starts_with('#'));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_tuning_is_positive() {
    assert!(CARD_ORBIT_RADIUS > 0.0);
    assert!(CARD_STEP_DEG > 0.0 && CARD_STEP_DEG * CARD_VISIBLE_SPAN as f32 <= 90.0);
    assert!(SWIPE_THRESHOLD_PX > 0.0);
    assert!(!AUTOPLAY_INTERVAL.is_zero());
    assert!(TILT_DIVISOR > 0.0);
    assert!(MAGNET_PULL > 0.0 && MAGNET_PULL < 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

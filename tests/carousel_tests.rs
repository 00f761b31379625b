// Host-side tests for carousel placement, swipes and autoplay.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod carousel {
    include!("../src/carousel.rs");
}

use carousel::*;
use std::time::Duration;

#[test]
fn current_card_faces_front() {
    let t = card_transform(2, 2);
    assert_eq!(t.angle_deg, 0.0);
    assert!(t.x.abs() < 1e-4);
    assert!(t.z.abs() < 1e-4);
    assert_eq!(t.opacity, 1.0);
    assert_eq!(t.css(), "translateX(0px) translateZ(0px) rotateY(0deg)");
}

#[test]
fn neighbours_sit_on_the_arc() {
    let right = card_transform(3, 2);
    assert_eq!(right.angle_deg, 30.0);
    assert!((right.x - 250.0).abs() < 1e-2);
    assert!((right.z - (500.0 * 30f32.to_radians().cos() - 500.0)).abs() < 1e-2);

    let left = card_transform(1, 2);
    assert_eq!(left.angle_deg, -30.0);
    assert!((left.x + 250.0).abs() < 1e-2);
    assert!((left.z - right.z).abs() < 1e-4);
}

#[test]
fn cards_beyond_three_steps_are_hidden() {
    assert_eq!(card_transform(3, 0).opacity, 1.0);
    assert_eq!(card_transform(4, 0).opacity, 0.0);
    assert_eq!(card_transform(0, 4).opacity, 0.0);
    assert_eq!(card_transform(1, 4).opacity, 1.0);
}

#[test]
fn go_to_wraps_both_ways() {
    let mut c = Carousel::new(5);
    c.prev();
    assert_eq!(c.current(), 4);
    c.next();
    assert_eq!(c.current(), 0);
    c.go_to(12);
    assert_eq!(c.current(), 2);
    c.go_to(-6);
    assert_eq!(c.current(), 4);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    c.next();
    c.go_to(-3);
    assert_eq!(c.current(), 0);
    assert!(c.transforms().is_empty());
}

#[test]
fn transforms_cover_every_card() {
    let mut c = Carousel::new(7);
    c.go_to(3);
    let ts = c.transforms();
    assert_eq!(ts.len(), 7);
    assert_eq!(ts[3].angle_deg, 0.0);
    assert_eq!(ts[0].angle_deg, -90.0);
    assert_eq!(ts[6].angle_deg, 90.0);
}

#[test]
fn mouse_drag_right_goes_back() {
    let mut c = Carousel::new(5);
    c.go_to(2);
    let mut s = SwipeTracker::default();
    s.press(100.0);
    s.drag_to(180.0);
    assert!(s.is_dragging());
    let outcome = s.release();
    assert_eq!(outcome, SwipeOutcome::Previous);
    outcome.apply(&mut c);
    assert_eq!(c.current(), 1);
    assert_eq!(s.delta(), 0.0);
    assert!(!s.is_dragging());
}

#[test]
fn mouse_move_without_press_is_ignored() {
    let mut s = SwipeTracker::default();
    s.drag_to(500.0);
    assert_eq!(s.delta(), 0.0);
    assert_eq!(s.release(), SwipeOutcome::Stay);
}

#[test]
fn short_drag_stays() {
    let mut s = SwipeTracker::default();
    s.press(100.0);
    s.drag_to(150.0);
    assert_eq!(s.release(), SwipeOutcome::Stay);
    s.press(100.0);
    s.drag_to(50.0);
    assert_eq!(s.release(), SwipeOutcome::Stay);
}

#[test]
fn touch_swipe_left_goes_forward() {
    let mut c = Carousel::new(3);
    let mut s = SwipeTracker::default();
    s.touch_start(300.0);
    s.touch_move(200.0);
    s.release().apply(&mut c);
    assert_eq!(c.current(), 1);
}

#[test]
fn autoplay_advances_every_interval() {
    let mut a = Autoplay::new(Duration::from_millis(4000));
    assert!(!a.tick(Duration::from_millis(3999)));
    assert!(a.tick(Duration::from_millis(1)));
    assert!(!a.tick(Duration::from_millis(3000)));
    assert!(a.tick(Duration::from_millis(1500)));
    // phase kept: 500 ms carried over
    assert!(a.tick(Duration::from_millis(3500)));
}

#[test]
fn autoplay_long_gap_advances_once() {
    let mut a = Autoplay::default();
    assert!(a.tick(Duration::from_secs(60)));
    assert!(!a.tick(Duration::from_millis(16)));
    assert!(!a.tick(Duration::from_millis(3900)));
    assert!(a.tick(Duration::from_millis(100)));
}

#[test]
fn autoplay_pause_and_fresh_resume() {
    let mut a = Autoplay::default();
    assert!(!a.tick(Duration::from_millis(3000)));
    a.pause();
    assert!(a.is_paused());
    assert!(!a.tick(Duration::from_secs(60)));
    a.resume();
    assert!(!a.tick(Duration::from_millis(1500)));
    assert!(a.tick(Duration::from_millis(2500)));
}

#[test]
fn total_reports_card_count() {
    assert_eq!(Carousel::new(6).total(), 6);
    assert_eq!(Carousel::new(0).total(), 0);
}

#[test]
fn swipe_outcome_offsets_step_the_index() {
    assert_eq!(SwipeOutcome::Previous.offset(), -1);
    assert_eq!(SwipeOutcome::Next.offset(), 1);
    assert_eq!(SwipeOutcome::Stay.offset(), 0);

    let mut c = Carousel::new(4);
    let start = c.current() as i64;
    c.go_to(start + SwipeOutcome::Previous.offset());
    assert_eq!(c.current(), 3);
    SwipeOutcome::Stay.apply(&mut c);
    assert_eq!(c.current(), 3);
    SwipeOutcome::Next.apply(&mut c);
    assert_eq!(c.current(), 0);
}

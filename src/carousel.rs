use crate::constants::{
    AUTOPLAY_INTERVAL, CARD_ORBIT_RADIUS, CARD_STEP_DEG, CARD_VISIBLE_SPAN, SWIPE_THRESHOLD_PX,
};
use std::time::Duration;

/// Placement of one card on the carousel arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub x: f32,
    pub z: f32,
    pub angle_deg: f32,
    pub opacity: f32,
}

impl CardTransform {
    pub fn css(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) rotateY({}deg)",
            self.x, self.z, self.angle_deg
        )
    }
}

/// Cards sit on a circle of `CARD_ORBIT_RADIUS` facing the viewer, one
/// `CARD_STEP_DEG` apart, with the current card at the front.
pub fn card_transform(card: usize, current: usize) -> CardTransform {
    let offset = card as i64 - current as i64;
    let angle_deg = offset as f32 * CARD_STEP_DEG;
    let rad = angle_deg.to_radians();
    CardTransform {
        x: rad.sin() * CARD_ORBIT_RADIUS,
        z: rad.cos() * CARD_ORBIT_RADIUS - CARD_ORBIT_RADIUS,
        angle_deg,
        opacity: if offset.abs() > CARD_VISIBLE_SPAN {
            0.0
        } else {
            1.0
        },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to `index`, wrapping in both directions.
    pub fn go_to(&mut self, index: i64) {
        if self.total == 0 {
            return;
        }
        self.current = index.rem_euclid(self.total as i64) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    pub fn transforms(&self) -> Vec<CardTransform> {
        (0..self.total)
            .map(|i| card_transform(i, self.current))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Previous,
    Next,
    Stay,
}

impl SwipeOutcome {
    /// Index step implied by the gesture.
    pub fn offset(self) -> i64 {
        match self {
            SwipeOutcome::Previous => -1,
            SwipeOutcome::Next => 1,
            SwipeOutcome::Stay => 0,
        }
    }

    pub fn apply(self, carousel: &mut Carousel) {
        carousel.go_to(carousel.current() as i64 + self.offset());
    }
}

/// Horizontal drag/swipe accumulator shared by mouse and touch input.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    dragging: bool,
    start_x: f32,
    delta: f32,
}

impl SwipeTracker {
    /// Mouse button pressed on the stage.
    pub fn press(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
    }

    /// Mouse moved anywhere; ignored unless a drag is active.
    pub fn drag_to(&mut self, x: f32) {
        if self.dragging {
            self.delta = x - self.start_x;
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = x;
    }

    pub fn touch_move(&mut self, x: f32) {
        self.delta = x - self.start_x;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// End the gesture: a rightward swipe goes back, a leftward one forward.
    pub fn release(&mut self) -> SwipeOutcome {
        self.dragging = false;
        let outcome = if self.delta > SWIPE_THRESHOLD_PX {
            SwipeOutcome::Previous
        } else if self.delta < -SWIPE_THRESHOLD_PX {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Stay
        };
        self.delta = 0.0;
        outcome
    }
}

/// Fixed-interval auto advance, paused while hovered.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    paused: bool,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL)
    }
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    /// Accumulate `dt`; true when an advance is due.
    ///
    /// At most one advance per call, so a long frame gap (hidden tab) does
    /// not replay every missed interval.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused || self.interval.is_zero() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed = if self.elapsed >= self.interval * 2 {
            Duration::ZERO
        } else {
            self.elapsed - self.interval
        };
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Restart with a full interval before the next advance.
    pub fn resume(&mut self) {
        self.paused = false;
        self.elapsed = Duration::ZERO;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

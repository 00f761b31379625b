use std::time::Duration;

/// Tuning constants for the page effects.
///
/// These express intended behavior (smoothing factors, thresholds, geometry)
/// and keep magic numbers out of the effect code.
// Golden angle pi * (3 - sqrt 5) in radians
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

// Particle field
pub const DOT_COUNT: usize = 1800;
pub const DOT_RADIUS: f32 = 2.0;
pub const EDGE_MARGIN: f32 = 40.0; // gap between outermost dot and viewport edge

// Exponential smoothing factor per frame (new = old + (target - old) * α)
pub const SMOOTHING_ALPHA: f32 = 0.08;

// Dot colors
pub const BASE_COLOR: &str = "#00ff88";
pub const TEXT_COLOR: &str = "#00ffaa";

// Text mask rasterization and sampling
pub const DEFAULT_TEXT: &str = "PORTFOLIO";
pub const MASK_FILL: &str = "#fff";
pub const MASK_FONT_FAMILY: &str = "Arial";
pub const FONT_SIZE_DIVISOR: f32 = 6.0; // font px = viewport / divisor
pub const SAMPLE_STRIDE: usize = 4; // pixels between samples on both axes
pub const ALPHA_THRESHOLD: u8 = 150; // samples must be strictly above

// Carousel
pub const CARD_ORBIT_RADIUS: f32 = 500.0;
pub const CARD_STEP_DEG: f32 = 30.0;
pub const CARD_VISIBLE_SPAN: i64 = 3; // cards further than this from current are hidden
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

// Tilt panels
pub const TILT_DIVISOR: f32 = 18.0; // px of pointer offset per degree of tilt
pub const MAGNET_PULL: f32 = 0.15;
pub const MAGNET_LIFT_PX: f32 = 80.0;

// Intersection ratio that counts as visible
pub const REVEAL_THRESHOLD: f64 = 0.2;

// DOM anchors
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const FIELD_ID: &str = "spiralSVG";
pub const TIMELINE_ID: &str = "timeline";
pub const FILL_PATH_ID: &str = "fillPath";
pub const TIMELINE_REVEAL_SELECTOR: &str = ".timeline-card, .timeline-image";
pub const TIMELINE_REVEAL_CLASS: &str = "show";
pub const CAROUSEL_STAGE_ID: &str = "xenorArcStage";
pub const CAROUSEL_CARD_SELECTOR: &str = ".xenor-arc-card";
pub const CAROUSEL_PREV_SELECTOR: &str = ".xenor-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".xenor-next";
pub const CAROUSEL_PAGINATION_ID: &str = "xenorPagination";
pub const CAROUSEL_DOT_CLASS: &str = "xenor-dot";
pub const ACTIVE_CLASS: &str = "active";
pub const PANEL_SELECTOR: &str = ".fdp-interactive-panel";
pub const PANEL_VISIBLE_CLASS: &str = "fdp-visible";
pub const MAGNETIC_BUTTON_SELECTOR: &str = ".fdp-magnetic-button";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

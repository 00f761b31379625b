// Scroll-driven stroke fill for the timeline path.

/// How far the timeline has been scrolled through, in [0, 1].
///
/// `top`/`bottom`/`height` are the timeline's bounding rect in viewport
/// coordinates; `viewport_height` is the window's inner height.
pub fn scroll_progress(top: f32, bottom: f32, height: f32, viewport_height: f32) -> f32 {
    let progress = if top <= 0.0 && bottom >= viewport_height {
        let span = height - viewport_height;
        if span > 0.0 {
            top.abs() / span
        } else {
            0.0
        }
    } else if top > 0.0 {
        0.0
    } else if bottom < viewport_height {
        1.0
    } else {
        0.0
    };
    progress.clamp(0.0, 1.0)
}

/// `stroke-dashoffset` that reveals `progress` of a path of `path_length`.
#[inline]
pub fn dash_offset(path_length: f32, progress: f32) -> f32 {
    path_length * (1.0 - progress)
}

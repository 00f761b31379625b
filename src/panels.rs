use crate::constants::MAGNETIC_BUTTON_SELECTOR;
use crate::dom;
use crate::tilt::{self, Tilt};
use glam::Vec2;
use web_sys as web;

/// Tilting panel with an optional magnetic button.
pub struct TiltPanel {
    pub element: web::Element,
    pub tilt: Tilt,
    button: Option<web::Element>,
}

impl TiltPanel {
    pub fn new(element: web::Element) -> Self {
        let button = element
            .query_selector(MAGNETIC_BUTTON_SELECTOR)
            .ok()
            .flatten();
        Self {
            element,
            tilt: Tilt::default(),
            button,
        }
    }

    /// Pointer moved over the panel, in client coordinates.
    pub fn pointer_move(&mut self, client: Vec2) {
        let bounds = self.element.get_bounding_client_rect();
        let origin = Vec2::new(bounds.left() as f32, bounds.top() as f32);
        let size = Vec2::new(bounds.width() as f32, bounds.height() as f32);
        self.tilt.aim(client - origin, size);

        if let Some(button) = &self.button {
            let r = button.get_bounding_client_rect();
            let center = Vec2::new(
                (r.left() + r.width() / 2.0) as f32,
                (r.top() + r.height() / 2.0) as f32,
            );
            let offset = tilt::magnetic_offset(client, center);
            dom::set_style(button, "transform", &tilt::magnetic_css(offset));
        }
    }

    pub fn pointer_leave(&mut self) {
        self.tilt.release();
        if let Some(button) = &self.button {
            dom::set_style(button, "transform", &tilt::magnetic_rest_css());
        }
    }

    pub fn tick(&mut self) {
        self.tilt.step();
        dom::set_style(&self.element, "transform", &self.tilt.css());
    }

    pub fn disable_transition(&self) {
        dom::set_style(&self.element, "transition", "none");
    }
}

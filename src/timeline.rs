use crate::constants::{FILL_PATH_ID, TIMELINE_ID};
use crate::dom;
use crate::scroll;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Timeline whose SVG path stroke fills as the page scrolls through it.
pub struct TimelineFill {
    timeline: web::Element,
    path: web::SvgGeometryElement,
    path_length: f32,
}

impl TimelineFill {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let timeline = document.get_element_by_id(TIMELINE_ID)?;
        let path = document
            .get_element_by_id(FILL_PATH_ID)?
            .dyn_into::<web::SvgGeometryElement>()
            .ok()?;
        let path_length = path.get_total_length();
        let fill = Self {
            timeline,
            path,
            path_length,
        };
        let len = path_length.to_string();
        fill.set_path_style("stroke-dasharray", &len);
        fill.set_path_style("stroke-dashoffset", &len);
        Some(fill)
    }

    fn set_path_style(&self, property: &str, value: &str) {
        dom::set_style(&self.path, property, value);
    }

    pub fn update(&self, window: &web::Window) {
        let rect = self.timeline.get_bounding_client_rect();
        let (_, viewport_h) = dom::window_inner_size(window);
        let progress = scroll::scroll_progress(
            rect.top() as f32,
            rect.bottom() as f32,
            rect.height() as f32,
            viewport_h,
        );
        let offset = scroll::dash_offset(self.path_length, progress);
        self.set_path_style("stroke-dashoffset", &offset.to_string());
    }
}

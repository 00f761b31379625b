use crate::dom;
use crate::scene::SpiralScene;
use crate::timeline::TimelineFill;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the timeline path fill in step with scrolling and resizing.
pub fn wire_timeline(window: &web::Window, fill: Rc<TimelineFill>) {
    fill.update(window);
    for event in ["scroll", "resize"] {
        let fill = fill.clone();
        let wnd = window.clone();
        dom::listen(window, event, move |_: web::Event| fill.update(&wnd));
    }
}

/// Regenerate the spiral and its text targets whenever the window resizes.
pub fn wire_spiral_resize(window: &web::Window, scene: Rc<RefCell<SpiralScene>>) {
    let wnd = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        if let Err(e) = scene.borrow_mut().regenerate(&wnd) {
            log::error!("[spiral] regenerate error: {:?}", e);
        }
    });
}

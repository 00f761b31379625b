use crate::dom;
use crate::gallery::CarouselView;
use crate::panels::TiltPanel;
use crate::particles::InteractionMode;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hovering the field morphs the spiral into text; leaving restores it.
pub fn wire_field_hover(field: &web::Element, mode: Rc<RefCell<InteractionMode>>) {
    let mode_enter = mode.clone();
    dom::listen(field, "pointerenter", move |_: web::PointerEvent| {
        mode_enter.borrow_mut().enter();
        log::debug!("[spiral] text mode");
    });
    dom::listen(field, "pointerleave", move |_: web::PointerEvent| {
        mode.borrow_mut().leave();
        log::debug!("[spiral] spiral mode");
    });
}

#[derive(Clone)]
pub struct CarouselWiring {
    pub view: Rc<RefCell<CarouselView>>,
    pub prev_button: Option<web::Element>,
    pub next_button: Option<web::Element>,
    pub dots: Vec<web::Element>,
}

pub fn wire_carousel(w: CarouselWiring) {
    wire_carousel_buttons(&w);
    wire_carousel_mouse(&w);
    wire_carousel_touch(&w);
    wire_carousel_autoplay_pause(&w);
}

fn wire_carousel_buttons(w: &CarouselWiring) {
    if let Some(prev) = &w.prev_button {
        let view = w.view.clone();
        dom::add_click_listener(prev, move || view.borrow_mut().prev());
    }
    if let Some(next) = &w.next_button {
        let view = w.view.clone();
        dom::add_click_listener(next, move || view.borrow_mut().next());
    }
    for (i, dot) in w.dots.iter().enumerate() {
        let view = w.view.clone();
        dom::add_click_listener(dot, move || view.borrow_mut().go_to(i as i64));
    }
}

fn wire_carousel_mouse(w: &CarouselWiring) {
    let stage = w.view.borrow().stage.clone();

    let view = w.view.clone();
    dom::listen(&stage, "mousedown", move |ev: web::MouseEvent| {
        let mut v = view.borrow_mut();
        v.swipe.press(ev.client_x() as f32);
        dom::set_style(&v.stage, "cursor", "grabbing");
    });

    let Some(window) = web::window() else {
        return;
    };

    let view = w.view.clone();
    dom::listen(&window, "mouseup", move |_: web::MouseEvent| {
        let mut v = view.borrow_mut();
        dom::set_style(&v.stage, "cursor", "grab");
        v.release_swipe();
    });

    let view = w.view.clone();
    dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
        view.borrow_mut().swipe.drag_to(ev.client_x() as f32);
    });
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().item(0).map(|t| t.client_x() as f32)
}

fn wire_carousel_touch(w: &CarouselWiring) {
    let stage = w.view.borrow().stage.clone();

    let view = w.view.clone();
    dom::listen(&stage, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            view.borrow_mut().swipe.touch_start(x);
        }
    });

    let view = w.view.clone();
    dom::listen(&stage, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            view.borrow_mut().swipe.touch_move(x);
        }
    });

    let view = w.view.clone();
    dom::listen(&stage, "touchend", move |_: web::TouchEvent| {
        view.borrow_mut().release_swipe();
    });
}

fn wire_carousel_autoplay_pause(w: &CarouselWiring) {
    let stage = w.view.borrow().stage.clone();

    let view = w.view.clone();
    dom::listen(&stage, "mouseenter", move |_: web::MouseEvent| {
        view.borrow_mut().autoplay.pause();
    });

    let view = w.view.clone();
    dom::listen(&stage, "mouseleave", move |_: web::MouseEvent| {
        view.borrow_mut().autoplay.resume();
    });
}

pub fn wire_panel(panel: Rc<RefCell<TiltPanel>>) {
    let element = panel.borrow().element.clone();

    let panel_move = panel.clone();
    dom::listen(&element, "mousemove", move |ev: web::MouseEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        panel_move.borrow_mut().pointer_move(client);
    });

    dom::listen(&element, "mouseleave", move |_: web::MouseEvent| {
        panel.borrow_mut().pointer_leave();
    });
}

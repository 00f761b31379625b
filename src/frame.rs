use crate::gallery::CarouselView;
use crate::panels::TiltPanel;
use crate::particles::InteractionMode;
use crate::scene::SpiralScene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything advanced once per display refresh.
pub struct FrameContext {
    pub scene: Option<Rc<RefCell<SpiralScene>>>,
    pub mode: Rc<RefCell<InteractionMode>>,
    pub carousel: Option<Rc<RefCell<CarouselView>>>,
    pub panels: Vec<Rc<RefCell<TiltPanel>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(scene) = &self.scene {
            let mode = *self.mode.borrow();
            scene.borrow_mut().tick(mode);
        }

        for panel in &self.panels {
            panel.borrow_mut().tick();
        }

        if let Some(carousel) = &self.carousel {
            carousel.borrow_mut().tick(dt);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

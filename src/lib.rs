#![cfg(target_arch = "wasm32")]
use crate::config::FieldConfig;
use crate::constants::*;
use crate::particles::InteractionMode;
use crate::reveal::RevealPolicy;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod gallery;
mod mask;
mod panels;
mod particles;
mod render;
mod reveal;
mod scene;
mod scroll;
mod smoothing;
mod spiral;
mod tilt;
mod timeline;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mode = Rc::new(RefCell::new(InteractionMode::default()));
    let scene = init_spiral(&window, &document, &mode);
    init_timeline(&window, &document);
    init_reveal(&document);
    let carousel = init_carousel(&document);
    let panels = init_panels(&window, &document);

    // Spiral, panel tilt and carousel autoplay share one requestAnimationFrame loop
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        mode,
        carousel,
        panels,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn init_spiral(
    window: &web::Window,
    document: &web::Document,
    mode: &Rc<RefCell<InteractionMode>>,
) -> Option<Rc<RefCell<scene::SpiralScene>>> {
    let Some(svg) = document.get_element_by_id(FIELD_ID) else {
        log::warn!("[spiral] missing #{}", FIELD_ID);
        return None;
    };
    let config = FieldConfig::default().with_overrides(
        svg.get_attribute("data-text").as_deref(),
        svg.get_attribute("data-dots").as_deref(),
        svg.get_attribute("data-dot-radius").as_deref(),
    );
    let mut scene = scene::SpiralScene::new(svg, config);
    if let Err(e) = scene.regenerate(window) {
        log::error!("[spiral] init error: {:?}", e);
        return None;
    }
    events::wire_field_hover(scene.svg(), mode.clone());

    let scene = Rc::new(RefCell::new(scene));
    events::wire_spiral_resize(window, scene.clone());
    Some(scene)
}

fn init_timeline(window: &web::Window, document: &web::Document) {
    match timeline::TimelineFill::from_document(document) {
        Some(fill) => events::wire_timeline(window, Rc::new(fill)),
        None => log::warn!(
            "[timeline] missing #{} or #{}, path fill disabled",
            TIMELINE_ID,
            FILL_PATH_ID
        ),
    }
}

fn init_reveal(document: &web::Document) {
    let cards = dom::query_all(document, TIMELINE_REVEAL_SELECTOR);
    if let Err(e) = events::observe_reveal(&cards, TIMELINE_REVEAL_CLASS, RevealPolicy::Toggle) {
        log::warn!("[reveal] timeline observer error: {:?}", e);
    }
    let panels = dom::query_all(document, PANEL_SELECTOR);
    if let Err(e) = events::observe_reveal(&panels, PANEL_VISIBLE_CLASS, RevealPolicy::Sticky) {
        log::warn!("[reveal] panel observer error: {:?}", e);
    }
}

fn init_carousel(document: &web::Document) -> Option<Rc<RefCell<gallery::CarouselView>>> {
    let Some(mut view) = gallery::CarouselView::from_document(document) else {
        log::warn!("[carousel] missing #{} or cards", CAROUSEL_STAGE_ID);
        return None;
    };
    let dots = view.build_pagination(document);
    view.layout();
    log::info!("[carousel] cards={}", view.card_count());

    let view = Rc::new(RefCell::new(view));
    events::wire_carousel(events::CarouselWiring {
        view: view.clone(),
        prev_button: dom::query_one(document, CAROUSEL_PREV_SELECTOR),
        next_button: dom::query_one(document, CAROUSEL_NEXT_SELECTOR),
        dots,
    });
    Some(view)
}

fn init_panels(
    window: &web::Window,
    document: &web::Document,
) -> Vec<Rc<RefCell<panels::TiltPanel>>> {
    let reduced_motion = dom::prefers_reduced_motion(window, REDUCED_MOTION_QUERY);
    let panels: Vec<_> = dom::query_all(document, PANEL_SELECTOR)
        .into_iter()
        .map(|el| {
            let panel = panels::TiltPanel::new(el);
            if reduced_motion {
                panel.disable_transition();
            }
            let panel = Rc::new(RefCell::new(panel));
            events::wire_panel(panel.clone());
            panel
        })
        .collect();
    log::info!(
        "[panels] count={} reduced_motion={}",
        panels.len(),
        reduced_motion
    );
    panels
}

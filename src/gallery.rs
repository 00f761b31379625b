use crate::carousel::{Autoplay, Carousel, SwipeTracker};
use crate::constants::{
    ACTIVE_CLASS, CAROUSEL_CARD_SELECTOR, CAROUSEL_DOT_CLASS, CAROUSEL_PAGINATION_ID,
    CAROUSEL_STAGE_ID,
};
use crate::dom;
use std::time::Duration;
use web_sys as web;

/// Carousel bound to its stage, cards and pagination dots.
pub struct CarouselView {
    pub stage: web::Element,
    pub swipe: SwipeTracker,
    pub autoplay: Autoplay,
    carousel: Carousel,
    cards: Vec<web::Element>,
    dots: Vec<web::Element>,
}

impl CarouselView {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        let stage = document.get_element_by_id(CAROUSEL_STAGE_ID)?;
        let cards = dom::query_all(document, CAROUSEL_CARD_SELECTOR);
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            stage,
            swipe: SwipeTracker::default(),
            autoplay: Autoplay::default(),
            carousel: Carousel::new(cards.len()),
            cards,
            dots: Vec::new(),
        })
    }

    /// Create one pagination dot per card; returns them for click wiring.
    pub fn build_pagination(&mut self, document: &web::Document) -> Vec<web::Element> {
        let Some(container) = document.get_element_by_id(CAROUSEL_PAGINATION_ID) else {
            log::warn!("[carousel] missing #{}", CAROUSEL_PAGINATION_ID);
            return Vec::new();
        };
        self.dots = (0..self.cards.len())
            .filter_map(|_| {
                let dot = document.create_element("span").ok()?;
                dot.set_class_name(CAROUSEL_DOT_CLASS);
                container.append_child(&dot).ok()?;
                Some(dot)
            })
            .collect();
        self.dots.clone()
    }

    pub fn go_to(&mut self, index: i64) {
        self.carousel.go_to(index);
        log::debug!("[carousel] index={}", self.carousel.current());
        self.layout();
    }

    pub fn next(&mut self) {
        self.go_to(self.carousel.current() as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.carousel.current() as i64 - 1);
    }

    /// Finish a drag or swipe and move if it went far enough.
    pub fn release_swipe(&mut self) {
        match self.swipe.release().offset() {
            0 => self.layout(),
            step => self.go_to(self.carousel.current() as i64 + step),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.autoplay.tick(dt) {
            self.next();
        }
    }

    pub fn layout(&self) {
        for (card, t) in self.cards.iter().zip(self.carousel.transforms()) {
            dom::set_style(card, "transform", &t.css());
            dom::set_style(card, "opacity", &t.opacity.to_string());
        }
        let current = self.carousel.current();
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, i == current);
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.carousel.total()
    }
}

use crate::config::FieldConfig;
use crate::constants::{ALPHA_THRESHOLD, SAMPLE_STRIDE};
use crate::dom;
use crate::mask;
use crate::particles::{InteractionMode, ParticleField};
use crate::render::{self, DotLayer};
use crate::spiral::Viewport;
use glam::Vec2;
use web_sys as web;

/// Particle spiral bound to its SVG element.
pub struct SpiralScene {
    pub config: FieldConfig,
    field: ParticleField,
    layer: DotLayer,
}

impl SpiralScene {
    pub fn new(svg: web::Element, config: FieldConfig) -> Self {
        Self {
            field: ParticleField::new(0, Viewport::new(0.0)),
            layer: DotLayer::new(svg),
            config,
        }
    }

    /// Rebuild particles, circles and text targets for the current window size.
    pub fn regenerate(&mut self, window: &web::Window) -> anyhow::Result<()> {
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let (w, h) = dom::window_inner_size(window);
        let viewport = Viewport::square(w, h);

        let targets = match sample_text_targets(&document, &self.config.text, viewport) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[mask] text sampling failed, staying on spiral: {:?}", e);
                Vec::new()
            }
        };
        self.field
            .regenerate(self.config.dot_count, viewport, targets);
        self.layer
            .rebuild(&document, &self.field, self.config.dot_radius)?;

        log::info!(
            "[spiral] generation={} size={:.0} dots={} targets={}",
            self.field.generation(),
            viewport.size,
            self.field.len(),
            self.field.targets().len()
        );
        if self.field.untargeted() > 0 {
            log::warn!(
                "[mask] {} dots have no text target and keep their spiral home",
                self.field.untargeted()
            );
        }
        Ok(())
    }

    pub fn tick(&mut self, mode: InteractionMode) {
        self.field.step(mode);
        self.layer.sync(&self.field);
    }

    #[inline]
    pub fn svg(&self) -> &web::Element {
        self.layer.svg()
    }
}

fn sample_text_targets(
    document: &web::Document,
    text: &str,
    viewport: Viewport,
) -> anyhow::Result<Vec<Vec2>> {
    let rgba = render::rasterize_text(document, text, viewport)?;
    let px = viewport.pixel_size() as usize;
    let mut targets = mask::sample_opaque(&rgba, px, px, SAMPLE_STRIDE, ALPHA_THRESHOLD);
    mask::shuffle_targets(&mut targets, &mut rand::thread_rng());
    Ok(targets)
}

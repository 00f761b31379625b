use crate::constants::{BASE_COLOR, SMOOTHING_ALPHA, TEXT_COLOR};
use crate::smoothing::approach;
use crate::spiral::{spiral_layout, Viewport};
use glam::Vec2;

/// Hover-driven display mode of the particle field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Spiral,
    Text,
}

impl InteractionMode {
    /// Pointer entered the field container.
    #[inline]
    pub fn enter(&mut self) {
        *self = InteractionMode::Text;
    }

    /// Pointer left the field container.
    #[inline]
    pub fn leave(&mut self) {
        *self = InteractionMode::Spiral;
    }

    #[inline]
    pub fn is_text(self) -> bool {
        self == InteractionMode::Text
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Displayed position, moved every frame.
    pub position: Vec2,
    /// Spiral position, fixed for the lifetime of a generation.
    pub home: Vec2,
    /// Whether the last step steered toward a text target.
    pub highlighted: bool,
}

impl Particle {
    fn at_home(home: Vec2) -> Self {
        Self {
            position: home,
            home,
            highlighted: false,
        }
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        if self.highlighted {
            TEXT_COLOR
        } else {
            BASE_COLOR
        }
    }
}

/// Particles of one viewport generation plus their index-aligned text targets.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    targets: Vec<Vec2>,
    viewport: Viewport,
    generation: u64,
}

impl ParticleField {
    pub fn new(count: usize, viewport: Viewport) -> Self {
        Self {
            particles: spiral_layout(count, viewport)
                .into_iter()
                .map(Particle::at_home)
                .collect(),
            targets: Vec::new(),
            viewport,
            generation: 0,
        }
    }

    /// Replace every particle and the target pool for a new viewport.
    pub fn regenerate(&mut self, count: usize, viewport: Viewport, targets: Vec<Vec2>) {
        let generation = self.generation + 1;
        *self = Self::new(count, viewport);
        self.targets = targets;
        self.generation = generation;
    }

    /// Text target when in text mode and one exists at `index`, else the spiral home.
    pub fn target_for(&self, index: usize, mode: InteractionMode) -> Option<Vec2> {
        let p = self.particles.get(index)?;
        Some(self.text_target(index, mode).unwrap_or(p.home))
    }

    #[inline]
    fn text_target(&self, index: usize, mode: InteractionMode) -> Option<Vec2> {
        if mode.is_text() {
            self.targets.get(index).copied()
        } else {
            None
        }
    }

    /// Advance every particle one frame toward its current target.
    pub fn step(&mut self, mode: InteractionMode) {
        for i in 0..self.particles.len() {
            let text = self.text_target(i, mode);
            let p = &mut self.particles[i];
            let target = text.unwrap_or(p.home);
            p.position = approach(p.position, target, SMOOTHING_ALPHA);
            p.highlighted = text.is_some();
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Particles with no text target this generation.
    pub fn untargeted(&self) -> usize {
        self.particles.len().saturating_sub(self.targets.len())
    }
}

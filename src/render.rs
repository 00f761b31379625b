use crate::constants::{BASE_COLOR, MASK_FILL, SVG_NS};
use crate::mask;
use crate::particles::ParticleField;
use crate::spiral::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One SVG `<circle>` per particle, index-aligned with the field.
pub struct DotLayer {
    svg: web::Element,
    dots: Vec<web::Element>,
}

impl DotLayer {
    pub fn new(svg: web::Element) -> Self {
        Self {
            svg,
            dots: Vec::new(),
        }
    }

    #[inline]
    pub fn svg(&self) -> &web::Element {
        &self.svg
    }

    /// Drop every existing circle and create fresh ones at the field's home positions.
    pub fn rebuild(
        &mut self,
        document: &web::Document,
        field: &ParticleField,
        dot_radius: f32,
    ) -> anyhow::Result<()> {
        self.svg.set_inner_html("");
        self.dots.clear();

        let size = field.viewport().size;
        let view_box = format!("0 0 {} {}", size, size);
        _ = self.svg.set_attribute("viewBox", &view_box);
        _ = self.svg.set_attribute("width", "100%");
        _ = self.svg.set_attribute("height", "100%");

        let r = dot_radius.to_string();
        self.dots.reserve(field.len());
        for p in field.particles() {
            let circle = document
                .create_element_ns(Some(SVG_NS), "circle")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = circle.set_attribute("cx", &p.home.x.to_string());
            _ = circle.set_attribute("cy", &p.home.y.to_string());
            _ = circle.set_attribute("r", &r);
            _ = circle.set_attribute("fill", BASE_COLOR);
            self.svg
                .append_child(&circle)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            self.dots.push(circle);
        }
        Ok(())
    }

    /// Write displayed positions and colors of the current frame.
    pub fn sync(&self, field: &ParticleField) {
        for (dot, p) in self.dots.iter().zip(field.particles()) {
            _ = dot.set_attribute("cx", &p.position.x.to_string());
            _ = dot.set_attribute("cy", &p.position.y.to_string());
            _ = dot.set_attribute("fill", p.color());
        }
    }
}

/// Render `text` centered on an offscreen `size` x `size` canvas and return its RGBA bytes.
pub fn rasterize_text(
    document: &web::Document,
    text: &str,
    viewport: Viewport,
) -> anyhow::Result<Vec<u8>> {
    let px = viewport.pixel_size();
    if px == 0 {
        return Ok(Vec::new());
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(px);
    canvas.set_height(px);

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let center = viewport.center();
    ctx.set_fill_style_str(MASK_FILL);
    ctx.set_font(&mask::mask_font(viewport.size));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, center.x as f64, center.y as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let image = ctx
        .get_image_data(0.0, 0.0, px as f64, px as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(image.data().0)
}

//! Browser canvas backend
//!
//! Maps `Surface` calls onto `CanvasRenderingContext2d`. Per-call failures are
//! not actionable mid-frame, so they are dropped.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::paint::{Paint, Rgba};
use super::surface::{Surface, TextStyle};

/// `Surface` backed by a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Get the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(gradient) => {
                let fill = self.ctx.create_linear_gradient(
                    gradient.start.x as f64,
                    gradient.start.y as f64,
                    gradient.end.x as f64,
                    gradient.end.y as f64,
                );
                for (offset, color) in &gradient.stops {
                    if let Err(e) = fill.add_color_stop(*offset, &color.to_css()) {
                        log::warn!("Bad gradient stop {}: {:?}", offset, e);
                    }
                }
                self.ctx.set_fill_style_canvas_gradient(&fill);
            }
        }
    }

    fn set_shadow(&mut self, color: Rgba, blur: f32) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            rotation as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(style.align.as_str());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use floorsketch_shared::Surface;

pub const LINE_WIDTH: f64 = 1.0;

/// A [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let surface = Self { canvas, ctx };
        surface.prepare_context();
        Ok(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // Assigning the canvas size resets the context, so this runs after
    // every resize as well.
    fn prepare_context(&self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.set_line_width(LINE_WIDTH);
        // Half-pixel offset keeps 1px lines crisp.
        let _ = self.ctx.translate(0.5, 0.5);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.round().max(0.0) as u32);
        self.canvas.set_height(height.round().max(0.0) as u32);
        self.prepare_context();
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.restore();
    }

    fn set_stroke_colour(&mut self, colour: &str) {
        self.ctx.set_stroke_style_str(colour);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

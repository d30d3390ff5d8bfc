#![forbid(unsafe_code)]

//! [`DrawSurface`] over a 2D canvas context.

use glyphgrid_render::{DrawSurface, ProbeFont, RowPaint};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

/// Draw surface backed by a `<canvas>` 2D context.
///
/// All drawing state lives in the context, so the trait's `&self`
/// methods need no interior mutability of their own. Assigning the
/// canvas `width`/`height` attributes resets the context's font and
/// transform; the pipeline re-establishes both after every resize.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font: ProbeFont,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, font: ProbeFont) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, font })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub(crate) fn font(&self) -> &ProbeFont {
        &self.font
    }

    fn gradient_for(
        &self,
        y: f64,
        width: f64,
        paint: &RowPaint,
    ) -> Result<CanvasGradient, JsValue> {
        let gradient = self.ctx.create_linear_gradient(0.0, y, width, y);
        for stop in &paint.stops {
            gradient.add_color_stop(stop.offset as f32, &stop.color.css())?;
        }
        Ok(gradient)
    }
}

impl DrawSurface for CanvasSurface {
    fn surface_size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn set_surface_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn reset_text_style(&self) {
        self.ctx.set_font(&self.font.css());
        self.ctx.set_text_baseline("hanging");
        self.ctx.set_text_align("left");
    }

    fn measure_text(&self, text: &str) -> f64 {
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => 0.0,
        }
    }

    fn apply_scale(&self, x_scale: f64, y_scale: f64) {
        if self.ctx.scale(x_scale, y_scale).is_err() {
            tracing::warn!(target: "glyphgrid", x_scale, y_scale, "canvas scale rejected");
        }
    }

    fn clear(&self) {
        let (width, height) = self.surface_size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_row(&self, text: &str, y: f64, width: f64, paint: &RowPaint) {
        let style = match self.gradient_for(y, width, paint) {
            Ok(style) => style,
            Err(_) => {
                tracing::warn!(target: "glyphgrid", y, "row gradient construction failed");
                return;
            }
        };
        self.ctx.set_fill_style_canvas_gradient(&style);
        if self.ctx.fill_text(text, 0.0, y).is_err() {
            tracing::warn!(target: "glyphgrid", y, "row text draw failed");
        }
    }
}

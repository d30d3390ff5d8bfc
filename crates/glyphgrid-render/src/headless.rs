//! Recording surface for tests.
//!
//! [`HeadlessSurface`] implements [`DrawSurface`] by logging every
//! call in order. Tests drive the real pipeline against it and assert
//! on the recorded sequence instead of pixels.

#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};

use crate::surface::{DrawSurface, RowPaint};

/// One recorded backend operation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Resize { width: f64, height: f64 },
    ResetTextStyle,
    Scale { x: f64, y: f64 },
    Clear,
    FillRow { text: String, y: f64, width: f64, paint: RowPaint },
}

/// Draw surface that records instead of drawing.
///
/// `measure_text` reports a fixed per-glyph advance so geometry stays
/// deterministic.
#[derive(Debug)]
pub struct HeadlessSurface {
    size: Cell<(f64, f64)>,
    glyph_width: f64,
    calls: RefCell<Vec<SurfaceCall>>,
}

impl HeadlessSurface {
    /// Surface with an 8px glyph advance.
    pub fn new() -> Self {
        Self::with_glyph_width(8.0)
    }

    pub fn with_glyph_width(glyph_width: f64) -> Self {
        Self {
            size: Cell::new((0.0, 0.0)),
            glyph_width,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Text and baseline of every recorded row draw, in order.
    pub fn fill_rows(&self) -> Vec<(String, f64)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::FillRow { text, y, .. } => Some((text.clone(), *y)),
                _ => None,
            })
            .collect()
    }

    /// Most recently applied scale, if any.
    pub fn last_scale(&self) -> Option<(f64, f64)> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::Scale { x, y } => Some((*x, *y)),
                _ => None,
            })
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for HeadlessSurface {
    fn surface_size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn set_surface_size(&self, width: f64, height: f64) {
        self.size.set((width, height));
        self.calls
            .borrow_mut()
            .push(SurfaceCall::Resize { width, height });
    }

    fn reset_text_style(&self) {
        self.calls.borrow_mut().push(SurfaceCall::ResetTextStyle);
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.glyph_width
    }

    fn apply_scale(&self, x_scale: f64, y_scale: f64) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::Scale { x: x_scale, y: y_scale });
    }

    fn clear(&self) {
        self.calls.borrow_mut().push(SurfaceCall::Clear);
    }

    fn fill_row(&self, text: &str, y: f64, width: f64, paint: &RowPaint) {
        self.calls.borrow_mut().push(SurfaceCall::FillRow {
            text: text.to_string(),
            y,
            width,
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let surface = HeadlessSurface::new();
        surface.set_surface_size(80.0, 64.0);
        surface.reset_text_style();
        surface.apply_scale(1.5, 1.0);
        surface.clear();

        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::Resize { width: 80.0, height: 64.0 },
                SurfaceCall::ResetTextStyle,
                SurfaceCall::Scale { x: 1.5, y: 1.0 },
                SurfaceCall::Clear,
            ]
        );
        assert_eq!(surface.surface_size(), (80.0, 64.0));
        assert_eq!(surface.last_scale(), Some((1.5, 1.0)));
    }

    #[test]
    fn measure_text_uses_fixed_advance() {
        let surface = HeadlessSurface::with_glyph_width(2.0);
        assert_eq!(surface.measure_text("abcd"), 8.0);
        assert_eq!(surface.measure_text(""), 0.0);
    }
}

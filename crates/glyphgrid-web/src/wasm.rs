#![forbid(unsafe_code)]

//! `wasm-bindgen` export of the assembled grid.

use std::rc::Rc;

use glyphgrid_core::{Color, DiagnosticSink, TracingSink};
use glyphgrid_render::{GlyphGrid, ProbeFont, ViewportSource};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSurface;
use crate::probe::DomCellMetrics;
use crate::viewport::WindowViewport;

fn parse_color(color: Option<String>) -> Color {
    color
        .as_deref()
        .and_then(Color::from_hex)
        .unwrap_or(Color::Default)
}

/// JS-facing glyph grid bound to a `<canvas>`.
///
/// Colors cross the boundary as CSS hex strings (`#rgb` or
/// `#rrggbb`); anything else, or no color at all, falls back to the
/// default foreground. Out-of-range writes are clamped and logged via
/// `tracing` rather than thrown.
#[wasm_bindgen]
pub struct GlyphGridWeb {
    grid: GlyphGrid<CanvasSurface>,
}

#[wasm_bindgen]
impl GlyphGridWeb {
    /// Bind a `cols` x `rows` grid to `canvas`, measure the cell box,
    /// and size the canvas for the current window.
    ///
    /// Throws when the grid is empty or the probe font measures to a
    /// degenerate cell box.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, cols: u16, rows: u16) -> Result<GlyphGridWeb, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let surface = Rc::new(CanvasSurface::new(canvas, ProbeFont::default())?);
        let metrics = DomCellMetrics::new(Rc::clone(&surface));
        let viewport = Rc::new(WindowViewport::new(window)) as Rc<dyn ViewportSource>;
        let sink = Rc::new(TracingSink) as Rc<dyn DiagnosticSink>;

        let grid = GlyphGrid::with_sink(surface, viewport, &metrics, cols, rows, sink)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self { grid })
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    /// Write one glyph. Only the first char of `glyph` is used; an
    /// empty string writes a blank.
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: &str, color: Option<String>) {
        let glyph = glyph.chars().next().unwrap_or(' ');
        self.grid.set_cell(x, y, glyph, parse_color(color));
    }

    /// Write a string left to right from `(x, y)`.
    #[wasm_bindgen(js_name = setString)]
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, color: Option<String>) {
        self.grid.set_string(x, y, text, parse_color(color));
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Redraw the whole grid; returns the frame stats as JSON.
    pub fn render(&mut self) -> String {
        self.grid.render().to_json()
    }

    /// Stop tracking window size changes. The grid keeps drawing at
    /// its last geometry; JS callers use this before discarding the
    /// instance early.
    pub fn detach(&mut self) {
        self.grid.detach();
    }
}

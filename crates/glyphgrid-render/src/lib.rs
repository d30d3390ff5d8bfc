//! Render pipeline for the glyph grid.
//!
//! This crate turns a [`GridBuffer`] of colored glyphs into drawing
//! calls against a host-provided [`DrawSurface`], keeping the surface
//! sized and scaled to the host viewport. The entry point is
//! [`GlyphGrid`], which wires together the collaborators:
//!
//! - [`CellMetrics`] measures the character cell box once at setup.
//! - [`ViewportSource`] reports the viewport size and notifies on
//!   changes; the grid re-derives its geometry on every notification.
//! - [`DrawSurface`] receives the resize, scale, clear, and row draw
//!   calls.
//!
//! Everything is single-threaded; hosts and tests share state through
//! `Rc` and interior mutability.

#![forbid(unsafe_code)]

pub mod events;
pub mod headless;
pub mod metrics;
pub mod renderer;
pub mod report;
pub mod scale;
pub mod surface;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glyphgrid_core::{Color, DiagnosticSink, GridBuffer, NullSink};

pub use crate::events::{SyntheticViewport, ViewportSource, ViewportSubscription};
pub use crate::headless::{HeadlessSurface, SurfaceCall};
pub use crate::metrics::{CellBox, CellMetrics, FixedCellMetrics, MetricsError, ProbeFont};
pub use crate::renderer::row_paint;
pub use crate::report::RenderStats;
pub use crate::scale::{ScalingEngine, SurfaceGeometry, surface_geometry};
pub use crate::surface::{DrawSurface, GradientStop, RowPaint};

/// Failure to assemble a [`GlyphGrid`].
#[derive(Debug)]
pub enum SetupError {
    /// A grid needs at least one column and one row.
    EmptyGrid { cols: u16, rows: u16 },
    /// Cell calibration failed; nothing can be laid out.
    Metrics(MetricsError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { cols, rows } => {
                write!(f, "grid must be at least 1x1, got {cols}x{rows}")
            }
            Self::Metrics(err) => write!(f, "cell calibration failed: {err}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Metrics(err) => Some(err),
            Self::EmptyGrid { .. } => None,
        }
    }
}

impl From<MetricsError> for SetupError {
    fn from(err: MetricsError) -> Self {
        Self::Metrics(err)
    }
}

/// A fixed-size colored glyph grid bound to a drawing surface.
///
/// Construction measures the cell box, sizes the surface for the
/// current viewport, and subscribes to viewport changes; the
/// subscription is dropped with the grid. Writes go through the
/// embedded [`GridBuffer`]; [`render`](Self::render) redraws the whole
/// buffer.
pub struct GlyphGrid<S: DrawSurface + 'static> {
    surface: Rc<S>,
    buffer: GridBuffer,
    engine: Rc<RefCell<ScalingEngine>>,
    subscription: Option<ViewportSubscription>,
}

impl<S: DrawSurface + 'static> GlyphGrid<S> {
    /// Assemble a grid with out-of-range writes reported to `sink`.
    pub fn with_sink(
        surface: Rc<S>,
        viewport: Rc<dyn ViewportSource>,
        metrics: &dyn CellMetrics,
        cols: u16,
        rows: u16,
        sink: Rc<dyn DiagnosticSink>,
    ) -> Result<Self, SetupError> {
        if cols == 0 || rows == 0 {
            return Err(SetupError::EmptyGrid { cols, rows });
        }
        let cell = metrics.measure_cell_box()?;

        let buffer = GridBuffer::with_sink(cols, rows, sink);
        let mut engine = ScalingEngine::new(cell, cols, rows);

        let (width, height) = viewport.dimensions();
        engine.recompute(surface.as_ref(), width, height);
        let engine = Rc::new(RefCell::new(engine));

        let subscription = {
            let surface = Rc::clone(&surface);
            let engine = Rc::clone(&engine);
            let source = Rc::clone(&viewport);
            viewport.subscribe(Box::new(move || {
                let (width, height) = source.dimensions();
                engine
                    .borrow_mut()
                    .recompute(surface.as_ref(), width, height);
            }))
        };

        tracing::debug!(
            target: "glyphgrid",
            cols,
            rows,
            cell_width = cell.width,
            cell_height = cell.height,
            "glyph grid attached"
        );

        Ok(Self { surface, buffer, engine, subscription: Some(subscription) })
    }

    /// Assemble a grid that swallows write diagnostics.
    pub fn new(
        surface: Rc<S>,
        viewport: Rc<dyn ViewportSource>,
        metrics: &dyn CellMetrics,
        cols: u16,
        rows: u16,
    ) -> Result<Self, SetupError> {
        Self::with_sink(surface, viewport, metrics, cols, rows, Rc::new(NullSink))
    }

    pub fn cols(&self) -> u16 {
        self.buffer.cols()
    }

    pub fn rows(&self) -> u16 {
        self.buffer.rows()
    }

    pub fn buffer(&self) -> &GridBuffer {
        &self.buffer
    }

    /// Measured cell box the layout is calibrated to.
    pub fn cell_box(&self) -> CellBox {
        self.engine.borrow().cell_box()
    }

    /// Scale factors currently applied to the surface.
    pub fn scale(&self) -> (f64, f64) {
        self.engine.borrow().scale()
    }

    /// Write one glyph. Out-of-range coordinates clamp to the nearest
    /// edge and are reported through the diagnostic sink.
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        self.buffer.set_cell(x, y, glyph, color);
    }

    /// Write a string left to right from `(x, y)`.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.buffer.set_string(x, y, text, color);
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Redraw the whole buffer and report frame stats.
    pub fn render(&self) -> RenderStats {
        let cell = self.engine.borrow().cell_box();
        renderer::render(self.surface.as_ref(), &self.buffer, cell)
    }

    /// Stop listening for viewport changes. The grid keeps rendering
    /// at its last computed geometry.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<S: DrawSurface + 'static> fmt::Debug for GlyphGrid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphGrid")
            .field("cols", &self.buffer.cols())
            .field("rows", &self.buffer.rows())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

//! Viewport-to-grid scaling.
//!
//! The grid has a fixed logical size (`cols` x `rows` cells at the
//! measured cell box). The surface it draws on tracks the host
//! viewport, but never shrinks below the grid's own footprint. A
//! non-uniform scale transform then stretches the logical grid to
//! exactly fill the physical surface, so each axis scales
//! independently and glyphs distort rather than clip.

#![forbid(unsafe_code)]

use crate::metrics::CellBox;
use crate::surface::DrawSurface;

/// Output of one geometry pass: the physical surface size and the
/// scale factors that map the logical grid onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub physical_width: f64,
    pub physical_height: f64,
    pub x_scale: f64,
    pub y_scale: f64,
}

/// Compute surface size and scale for a viewport.
///
/// The physical size is the viewport clamped below by the grid's
/// minimum footprint, `trunc(cols * cell.width)` by
/// `trunc(rows * cell.height)`. The scale on each axis is the ratio of
/// cells that fit in the physical extent to the logical cell count,
/// with the fit count floored to whole cells. Fractional leftover
/// space beyond the last whole cell is therefore absorbed by the
/// scale, not left as a margin.
pub fn surface_geometry(
    viewport_width: f64,
    viewport_height: f64,
    cell: CellBox,
    cols: u16,
    rows: u16,
) -> SurfaceGeometry {
    let logical_width = f64::from(cols);
    let logical_height = f64::from(rows);

    let min_width = (logical_width * cell.width).trunc();
    let min_height = (logical_height * cell.height).trunc();

    let physical_width = sanitize(viewport_width).max(min_width);
    let physical_height = sanitize(viewport_height).max(min_height);

    let cols_that_fit = (physical_width / cell.width).floor();
    let rows_that_fit = (physical_height / cell.height).floor();

    SurfaceGeometry {
        physical_width,
        physical_height,
        x_scale: cols_that_fit / logical_width,
        y_scale: rows_that_fit / logical_height,
    }
}

/// Treat non-finite or negative viewport extents as absent, letting
/// the minimum footprint win.
fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 { extent } else { 0.0 }
}

/// Owns the scaling state and pushes geometry changes to the surface.
///
/// `recompute` runs once at setup and again on every viewport
/// notification. The order matters: resizing may reset the backend's
/// text style and transform, so both are re-established afterwards.
#[derive(Debug)]
pub struct ScalingEngine {
    cell: CellBox,
    cols: u16,
    rows: u16,
    x_scale: f64,
    y_scale: f64,
}

impl ScalingEngine {
    /// `cell` must already be validated non-degenerate by the caller.
    pub fn new(cell: CellBox, cols: u16, rows: u16) -> Self {
        Self { cell, cols, rows, x_scale: 1.0, y_scale: 1.0 }
    }

    pub fn cell_box(&self) -> CellBox {
        self.cell
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }

    /// Minimum surface footprint the grid needs, in pixels.
    pub fn min_surface(&self) -> (f64, f64) {
        (
            (f64::from(self.cols) * self.cell.width).trunc(),
            (f64::from(self.rows) * self.cell.height).trunc(),
        )
    }

    /// Recompute geometry for the given viewport and apply it:
    /// resize the surface, restore the calibration text style, then
    /// install the fresh scale transform.
    pub fn recompute(
        &mut self,
        surface: &dyn DrawSurface,
        viewport_width: f64,
        viewport_height: f64,
    ) {
        let geometry = surface_geometry(
            viewport_width,
            viewport_height,
            self.cell,
            self.cols,
            self.rows,
        );

        surface.set_surface_size(geometry.physical_width, geometry.physical_height);
        surface.reset_text_style();
        surface.apply_scale(geometry.x_scale, geometry.y_scale);

        self.x_scale = geometry.x_scale;
        self.y_scale = geometry.y_scale;

        tracing::trace!(
            target: "glyphgrid",
            width = geometry.physical_width,
            height = geometry.physical_height,
            x_scale = geometry.x_scale,
            y_scale = geometry.y_scale,
            "surface geometry recomputed"
        );
    }
}

//! Drawing surface abstraction.
//!
//! The renderer never talks to a concrete backend. It drives a
//! [`DrawSurface`], which a host implements over whatever it draws on:
//! a 2D canvas context on the web, or [`HeadlessSurface`] in tests.
//!
//! [`HeadlessSurface`]: crate::headless::HeadlessSurface

#![forbid(unsafe_code)]

use glyphgrid_core::Color;

/// One color stop of a row gradient, at a normalized horizontal
/// `offset` in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Fill style for one rendered row.
///
/// Stops come in pairs: each cell contributes two stops of the same
/// color at its leading and trailing edge, so the gradient degenerates
/// into flat per-cell color bands with hard transitions between them.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPaint {
    pub stops: Vec<GradientStop>,
}

impl RowPaint {
    /// True when every stop carries the same color, i.e. the row could
    /// be filled with a solid style instead of a gradient.
    pub fn is_uniform(&self) -> bool {
        match self.stops.split_first() {
            Some((first, rest)) => rest.iter().all(|s| s.color == first.color),
            None => true,
        }
    }
}

/// Backend drawing operations the render pipeline needs.
///
/// All methods take `&self`: hosts are expected to use interior
/// mutability (a recorded call log, a canvas context handle). The
/// pipeline is single-threaded and never calls back into itself, so
/// implementations do not need to guard against reentrancy.
pub trait DrawSurface {
    /// Current physical size of the surface in pixels.
    fn surface_size(&self) -> (f64, f64);

    /// Resize the physical surface. Resizing may reset transient
    /// drawing state (font, transform) on some backends; the pipeline
    /// always re-establishes both afterwards.
    fn set_surface_size(&self, width: f64, height: f64);

    /// Restore the calibration text style (font, baseline, alignment)
    /// used when the cell box was measured.
    fn reset_text_style(&self);

    /// Width of `text` in pixels under the current text style.
    fn measure_text(&self, text: &str) -> f64;

    /// Replace the current transform with a non-uniform scale.
    fn apply_scale(&self, x_scale: f64, y_scale: f64);

    /// Clear the whole surface.
    fn clear(&self);

    /// Draw one row of text at logical baseline `y`, painted with
    /// `paint` spanning `width` logical pixels from the left edge.
    fn fill_row(&self, text: &str, y: f64, width: f64, paint: &RowPaint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_paint_is_uniform() {
        let paint = RowPaint { stops: Vec::new() };
        assert!(paint.is_uniform());
    }

    #[test]
    fn mixed_stops_are_not_uniform() {
        let paint = RowPaint {
            stops: vec![
                GradientStop { offset: 0.0, color: Color::Default },
                GradientStop { offset: 0.5, color: Color::rgb(255, 0, 0) },
            ],
        };
        assert!(!paint.is_uniform());
    }
}

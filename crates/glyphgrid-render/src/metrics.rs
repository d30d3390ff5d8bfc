//! Cell box calibration.
//!
//! The grid is monospaced by construction: every cell occupies the same
//! box, measured once at setup from a probe glyph. A degenerate box
//! (zero or negative on either axis) would collapse all of the scaling
//! math, so measurement is fallible and setup refuses to proceed on
//! failure.

#![forbid(unsafe_code)]

use std::fmt;

/// Font used for calibration and row drawing. The size is deliberately
/// tiny; the scale transform blows each cell up to its on-screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeFont {
    pub px: f64,
    pub family: String,
}

impl ProbeFont {
    /// CSS shorthand for this font, e.g. `"normal 2px monospace"`.
    pub fn css(&self) -> String {
        format!("normal {}px {}", self.px, self.family)
    }
}

impl Default for ProbeFont {
    fn default() -> Self {
        Self { px: 2.0, family: "monospace".to_string() }
    }
}

/// Measured dimensions of one character cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub width: f64,
    pub height: f64,
}

impl CellBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A box that cannot tile the surface: non-positive or non-finite
    /// on either axis.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
    }
}

/// Failure to establish a usable cell box.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// The probe produced a box with a non-positive or non-finite axis.
    Degenerate { width: f64, height: f64 },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => write!(
                f,
                "degenerate cell box {width}x{height}: both axes must be positive"
            ),
        }
    }
}

impl std::error::Error for MetricsError {}

/// Source of the cell box measurement.
///
/// The web host probes the DOM; tests use [`FixedCellMetrics`].
pub trait CellMetrics {
    fn measure_cell_box(&self) -> Result<CellBox, MetricsError>;
}

/// Test double reporting a fixed cell box.
#[derive(Debug, Clone, Copy)]
pub struct FixedCellMetrics {
    cell: CellBox,
}

impl FixedCellMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { cell: CellBox::new(width, height) }
    }
}

impl CellMetrics for FixedCellMetrics {
    fn measure_cell_box(&self) -> Result<CellBox, MetricsError> {
        if self.cell.is_degenerate() {
            return Err(MetricsError::Degenerate {
                width: self.cell.width,
                height: self.cell.height,
            });
        }
        Ok(self.cell)
    }
}

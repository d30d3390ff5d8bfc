#![forbid(unsafe_code)]

//! Glyph grid buffer: the logical `cols × rows` cell matrix.
//!
//! The buffer owns a flat vector of cells indexed by `(row, col)` and is the
//! only mutable state in the system. Writes clamp out-of-range coordinates
//! to the nearest valid index and report the violation through the
//! diagnostic sink; they never fail.

use crate::cell::{Cell, Color};
use crate::diag::{DiagnosticSink, NullSink};
use std::fmt;
use std::rc::Rc;
use unicode_width::UnicodeWidthChar;

/// Fixed-size logical glyph grid.
///
/// Cells are stored in row-major order (`index = row * cols + col`) and
/// pre-filled with [`Cell::BLANK`], so a read of an unwritten slot is always
/// defined. Dimensions are fixed for the buffer's lifetime.
pub struct GridBuffer {
    cells: Vec<Cell>,
    cols: u16,
    rows: u16,
    sink: Rc<dyn DiagnosticSink>,
}

impl GridBuffer {
    /// Create a new buffer filled with blank cells, discarding diagnostics.
    ///
    /// # Panics
    ///
    /// Panics if `cols` or `rows` is 0.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_sink(cols, rows, Rc::new(NullSink))
    }

    /// Create a new buffer that reports boundary violations to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `cols` or `rows` is 0.
    #[must_use]
    pub fn with_sink(cols: u16, rows: u16, sink: Rc<dyn DiagnosticSink>) -> Self {
        assert!(cols > 0, "cols must be > 0");
        assert!(rows > 0, "rows must be > 0");
        let len = (cols as usize) * (rows as usize);
        Self {
            cells: vec![Cell::BLANK; len],
            cols,
            rows,
            sink,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get the cell at `(row, col)`.
    ///
    /// Returns `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get a slice of cells for the given row.
    ///
    /// Returns `None` if `row` is out of bounds.
    #[must_use]
    pub fn row_cells(&self, row: u16) -> Option<&[Cell]> {
        if row < self.rows {
            let start = (row as usize) * (self.cols as usize);
            let end = start + (self.cols as usize);
            Some(&self.cells[start..end])
        } else {
            None
        }
    }

    /// Reset every cell to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::BLANK;
        }
    }

    /// Write one cell, clamping out-of-range coordinates.
    ///
    /// Each out-of-range axis is clamped to the nearest valid index and
    /// reported through the sink; the write then proceeds at the clamped
    /// position, replacing any prior value. No render is triggered.
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        let col = self.clamp_axis(x, y, x, self.cols, "x");
        let row = self.clamp_axis(x, y, y, self.rows, "y");

        // Monospace layout assumes one column per glyph; anything else will
        // silently break row alignment on the surface, so flag it here.
        if glyph.width() != Some(1) {
            self.sink.report(&format!(
                "Glyph {glyph:?} at ({x}, {y}) is not a single-column character"
            ));
        }

        let idx = self.index(row, col);
        self.cells[idx] = Cell::new(glyph, color);
    }

    /// Write a string one character at a time, left to right.
    ///
    /// Equivalent to `set_cell(x + i, y, text[i], color)` for each char `i`,
    /// with each write individually subject to clamping. A string whose tail
    /// extends past the grid width is reported once; the tail characters
    /// then clamp into the last column, each overwriting the previous one.
    pub fn set_string(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let len = text.chars().count() as i64;
        if len > 0 && i64::from(x) + len - 1 >= i64::from(self.cols) {
            self.sink.report(&format!(
                "Text {text:?} drawn at ({x}, {y}) exceeds grid width {}",
                self.cols
            ));
        }

        for (i, glyph) in text.chars().enumerate() {
            let cx = i64::from(x) + i as i64;
            // Saturate rather than wrap for pathological offsets near i32
            // bounds; the clamp below lands on the same edge column anyway.
            let cx = cx.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            self.set_cell(cx, y, glyph, color);
        }
    }

    #[inline]
    fn index(&self, row: u16, col: u16) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// Clamp one coordinate into `0..limit`, reporting a violation.
    fn clamp_axis(&self, x: i32, y: i32, value: i32, limit: u16, axis: &str) -> u16 {
        if value < 0 {
            self.sink
                .report(&format!("Invalid coordinates ({x}, {y}): {axis} must be >= 0"));
            0
        } else if value >= i32::from(limit) {
            self.sink.report(&format!(
                "Invalid coordinates ({x}, {y}): {axis} must be < {limit}"
            ));
            limit - 1
        } else {
            value as u16
        }
    }
}

impl fmt::Debug for GridBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridBuffer")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::MemorySink;

    fn grid_with_sink(cols: u16, rows: u16) -> (GridBuffer, Rc<MemorySink>) {
        let sink = Rc::new(MemorySink::new());
        let grid = GridBuffer::with_sink(cols, rows, sink.clone());
        (grid, sink)
    }

    #[test]
    fn new_grid_is_blank() {
        let grid = GridBuffer::new(4, 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 3);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.cell(row, col), Some(&Cell::BLANK));
            }
        }
    }

    #[test]
    fn set_cell_writes_one_slot() {
        let (mut grid, sink) = grid_with_sink(4, 3);
        grid.set_cell(2, 1, 'A', Color::rgb(255, 0, 0));

        assert_eq!(grid.cell(1, 2), Some(&Cell::new('A', Color::rgb(255, 0, 0))));
        // No other cell changed.
        for row in 0..3 {
            for col in 0..4 {
                if (row, col) != (1, 2) {
                    assert_eq!(grid.cell(row, col), Some(&Cell::BLANK));
                }
            }
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn set_cell_replaces_wholesale() {
        let mut grid = GridBuffer::new(2, 1);
        grid.set_cell(0, 0, 'A', Color::rgb(1, 1, 1));
        grid.set_cell(0, 0, 'B', Color::Default);
        assert_eq!(grid.cell(0, 0), Some(&Cell::new('B', Color::Default)));
    }

    #[test]
    fn negative_x_clamps_to_zero() {
        let (mut grid, sink) = grid_with_sink(4, 3);
        grid.set_cell(-1, 0, 'A', Color::Default);
        assert_eq!(grid.cell(0, 0), Some(&Cell::new('A', Color::Default)));
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("x must be >= 0"));
    }

    #[test]
    fn overlarge_x_clamps_to_last_column() {
        let (mut grid, sink) = grid_with_sink(4, 3);
        grid.set_cell(4, 0, 'A', Color::Default);
        assert_eq!(grid.cell(0, 3), Some(&Cell::new('A', Color::Default)));
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("x must be < 4"));
    }

    #[test]
    fn both_axes_out_of_range_report_twice() {
        let (mut grid, sink) = grid_with_sink(4, 3);
        grid.set_cell(-5, 99, 'A', Color::Default);
        assert_eq!(grid.cell(2, 0), Some(&Cell::new('A', Color::Default)));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn clamp_low_equals_in_range_write() {
        let mut clamped = GridBuffer::new(4, 3);
        let mut direct = GridBuffer::new(4, 3);
        clamped.set_cell(-1, 0, 'A', Color::rgb(9, 9, 9));
        direct.set_cell(0, 0, 'A', Color::rgb(9, 9, 9));
        assert_eq!(clamped.cell(0, 0), direct.cell(0, 0));
    }

    #[test]
    fn clamp_high_equals_in_range_write() {
        let mut clamped = GridBuffer::new(4, 3);
        let mut direct = GridBuffer::new(4, 3);
        clamped.set_cell(4, 0, 'A', Color::rgb(9, 9, 9));
        direct.set_cell(3, 0, 'A', Color::rgb(9, 9, 9));
        assert_eq!(clamped.cell(0, 3), direct.cell(0, 3));
    }

    #[test]
    fn set_string_writes_left_to_right() {
        let mut grid = GridBuffer::new(10, 1);
        grid.set_string(2, 0, "HI", Color::rgb(0, 0, 255));
        assert_eq!(grid.cell(0, 2).unwrap().glyph, 'H');
        assert_eq!(grid.cell(0, 3).unwrap().glyph, 'I');
        assert_eq!(grid.cell(0, 1), Some(&Cell::BLANK));
        assert_eq!(grid.cell(0, 4), Some(&Cell::BLANK));
    }

    #[test]
    fn set_string_matches_per_char_set_cell() {
        let mut via_string = GridBuffer::new(10, 2);
        let mut via_cells = GridBuffer::new(10, 2);
        via_string.set_string(3, 1, "abc", Color::rgb(5, 6, 7));
        for (i, g) in "abc".chars().enumerate() {
            via_cells.set_cell(3 + i as i32, 1, g, Color::rgb(5, 6, 7));
        }
        for col in 0..10 {
            assert_eq!(via_string.cell(1, col), via_cells.cell(1, col));
        }
    }

    #[test]
    fn overflowing_string_truncates_by_overwrite() {
        let (mut grid, sink) = grid_with_sink(10, 1);
        grid.set_string(8, 0, "HELLO", Color::rgb(0, 0, 255));

        assert_eq!(grid.cell(0, 8).unwrap().glyph, 'H');
        // 'E' lands in column 9, then 'L', 'L', 'O' each clamp there and
        // overwrite; the last one wins.
        assert_eq!(grid.cell(0, 9).unwrap().glyph, 'O');
        // One overflow notice plus one clamp report per out-of-range char.
        let overflow: Vec<_> = sink
            .messages()
            .into_iter()
            .filter(|m| m.contains("exceeds grid width"))
            .collect();
        assert_eq!(overflow.len(), 1);
    }

    #[test]
    fn exact_fit_string_reports_nothing() {
        let (mut grid, sink) = grid_with_sink(5, 1);
        grid.set_string(0, 0, "WIDTH", Color::Default);
        assert!(sink.is_empty());
        assert_eq!(grid.cell(0, 4).unwrap().glyph, 'H');
    }

    #[test]
    fn empty_string_is_a_no_op() {
        let (mut grid, sink) = grid_with_sink(3, 1);
        grid.set_string(99, 0, "", Color::Default);
        assert!(sink.is_empty());
        assert_eq!(grid.cell(0, 2), Some(&Cell::BLANK));
    }

    #[test]
    fn wide_glyph_is_stored_but_reported() {
        let (mut grid, sink) = grid_with_sink(3, 1);
        grid.set_cell(0, 0, '漢', Color::Default);
        assert_eq!(grid.cell(0, 0).unwrap().glyph, '漢');
        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].contains("single-column"));
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut grid = GridBuffer::new(3, 2);
        grid.set_string(0, 0, "abc", Color::rgb(1, 2, 3));
        grid.clear();
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(grid.cell(row, col), Some(&Cell::BLANK));
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let grid = GridBuffer::new(3, 2);
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 3), None);
        assert_eq!(grid.row_cells(2), None);
        assert_eq!(grid.row_cells(1).map(<[Cell]>::len), Some(3));
    }
}

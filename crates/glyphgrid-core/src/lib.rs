#![forbid(unsafe_code)]

//! Host-agnostic data model for the glyph grid.
//!
//! This crate owns the pieces of the system that do not touch a drawing
//! surface: the [`Cell`] and [`Color`] value types, the clamped-write
//! [`GridBuffer`], and the [`DiagnosticSink`] boundary through which invalid
//! coordinate input is reported. Everything that needs a host capability
//! (measurement, scaling, drawing, viewport events) lives in
//! `glyphgrid-render` and `glyphgrid-web`.

pub mod cell;
pub mod diag;
pub mod grid;

pub use cell::{Cell, Color};
pub use diag::{DiagnosticSink, MemorySink, NullSink, TracingSink};
pub use grid::GridBuffer;

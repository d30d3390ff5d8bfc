#![forbid(unsafe_code)]

//! Web host for the glyph grid.
//!
//! This crate is intentionally host-specific (web/WASM). It binds the
//! render pipeline's collaborator traits to the browser:
//! - [`DrawSurface`] over a 2D `<canvas>` context,
//! - [`CellMetrics`] via a DOM text probe,
//! - [`ViewportSource`] over `window` resize and orientation events,
//!
//! and exports the assembled grid to JS through `wasm-bindgen`.
//!
//! [`DrawSurface`]: glyphgrid_render::DrawSurface
//! [`CellMetrics`]: glyphgrid_render::CellMetrics
//! [`ViewportSource`]: glyphgrid_render::ViewportSource

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod probe;
#[cfg(target_arch = "wasm32")]
mod viewport;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use probe::DomCellMetrics;
#[cfg(target_arch = "wasm32")]
pub use viewport::WindowViewport;
#[cfg(target_arch = "wasm32")]
pub use wasm::GlyphGridWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct GlyphGridWeb;

#[cfg(not(target_arch = "wasm32"))]
impl GlyphGridWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

#![forbid(unsafe_code)]

//! DOM cell box probe.

use std::rc::Rc;

use glyphgrid_render::{CellBox, CellMetrics, DrawSurface, MetricsError, ProbeFont};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::canvas::CanvasSurface;

/// Measures the character cell box from the live page.
///
/// Width comes from the canvas context itself (`measure_text("M")`
/// under the probe font, which is exact for a monospaced family).
/// Height cannot be read from a 2D context, so it is probed in the
/// DOM: a hidden span of `"Hg"` in the probe font next to a zero-size
/// inline block aligned to the bottom; the vertical distance between
/// the two is the line height. The probe nodes are removed before
/// returning.
pub struct DomCellMetrics {
    surface: Rc<CanvasSurface>,
}

impl DomCellMetrics {
    pub fn new(surface: Rc<CanvasSurface>) -> Self {
        Self { surface }
    }

    fn probe_line_height(&self, font: &ProbeFont) -> Result<f64, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let container = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        let span = document.create_element("span")?.dyn_into::<HtmlElement>()?;
        let block = document.create_element("div")?.dyn_into::<HtmlElement>()?;

        span.set_text_content(Some("Hg"));
        span.style().set_property("font", &font.css())?;
        block.style().set_property("display", "inline-block")?;
        block.style().set_property("width", "1px")?;
        block.style().set_property("height", "0px")?;
        block.style().set_property("vertical-align", "bottom")?;

        container.append_child(&span)?;
        container.append_child(&block)?;
        body.append_child(&container)?;

        let height =
            block.get_bounding_client_rect().top() - span.get_bounding_client_rect().top();

        body.remove_child(&container)?;
        Ok(height)
    }
}

impl CellMetrics for DomCellMetrics {
    fn measure_cell_box(&self) -> Result<CellBox, MetricsError> {
        self.surface.reset_text_style();
        let width = self.surface.measure_text("M");
        let height = self
            .probe_line_height(self.surface.font())
            .unwrap_or(0.0);

        let cell = CellBox::new(width, height);
        if cell.is_degenerate() {
            return Err(MetricsError::Degenerate { width, height });
        }
        tracing::debug!(target: "glyphgrid", width, height, "cell box probed");
        Ok(cell)
    }
}

#![forbid(unsafe_code)]

//! [`ViewportSource`] over the browser window.

use glyphgrid_render::{ViewportSource, ViewportSubscription};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

const EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// Window-backed viewport. Dimensions are the window inner size;
/// subscriptions hook both `resize` and `orientationchange`, since
/// some mobile browsers fire only the latter on rotation.
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

impl ViewportSource for WindowViewport {
    fn dimensions(&self) -> (f64, f64) {
        (
            Self::extent(self.window.inner_width()),
            Self::extent(self.window.inner_height()),
        )
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> ViewportSubscription {
        let handler = Closure::<dyn Fn()>::new(move || listener());

        let mut hooked = Vec::with_capacity(EVENTS.len());
        for event in EVENTS {
            match self
                .window
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                Ok(()) => hooked.push(event),
                Err(_) => {
                    tracing::warn!(target: "glyphgrid", event, "viewport listener rejected");
                }
            }
        }

        let window = self.window.clone();
        ViewportSubscription::new(move || {
            for event in &hooked {
                let _ = window
                    .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
            }
            drop(handler);
        })
    }
}

//! WASM entry point.
//!
//! The browser drives the app: JavaScript forwards DOM events and the
//! `requestAnimationFrame` clock, and replays the painted draw commands on
//! a canvas. Routing goes through the History API via [`crate::router`].

use crate::app::SiteApp;
use cuarzo_core::{Event, Size};
use wasm_bindgen::prelude::*;

/// Browser-facing wrapper around [`SiteApp`].
#[wasm_bindgen]
pub struct WebApp {
    app: SiteApp,
}

#[wasm_bindgen]
impl WebApp {
    /// Create the app for the given canvas size.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        console_error_panic_hook::set_once();
        let mut app = SiteApp::new(Size::new(width, height));
        // Pick up the path the document was loaded on.
        app.sync_route();
        Self { app }
    }

    /// Forward a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.app.handle_event(&Event::Resize {
            size: Size::new(width, height),
        });
    }

    /// Forward a click in canvas coordinates.
    pub fn click(&mut self, x: f32, y: f32) {
        self.app.handle_event(&Event::click(x, y));
    }

    /// Forward a wheel/scroll delta.
    pub fn scroll(&mut self, delta_y: f32) {
        self.app.handle_event(&Event::Scroll { delta_y });
    }

    /// Navigate to a path (pushes a History API entry).
    pub fn navigate(&mut self, path: &str) {
        self.app.navigate(path);
    }

    /// Re-read the route after a popstate event.
    pub fn sync_route(&mut self) {
        self.app.sync_route();
    }

    /// The current route path.
    #[must_use]
    pub fn pathname(&self) -> String {
        self.app.pathname()
    }

    /// Advance one animation frame; `now_ms` is the
    /// `requestAnimationFrame` timestamp. Returns whether a repaint is
    /// needed.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        self.app.frame(now_ms / 1000.0);
        self.app.needs_paint()
    }

    /// Paint and return the frame's draw commands as JSON.
    #[must_use]
    pub fn paint_json(&mut self) -> String {
        serde_json::to_string(&self.app.paint()).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

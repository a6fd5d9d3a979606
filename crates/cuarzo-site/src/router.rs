//! Client-side routing over the site's five fixed pages.
//!
//! In WASM the router sits on the browser's History API; in native builds
//! (and tests) it keeps an in-memory history with the same semantics.

use std::sync::Mutex;

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page
    Home,
    /// Company page ("Quienes Somos")
    QuienesSomos,
    /// Services page ("Servicios")
    Servicios,
    /// Certifications page ("Certificaciones")
    Certificaciones,
    /// Contact page ("Contacto")
    Contacto,
}

/// The fixed route table.
///
/// Unknown paths fall back to the home page: the deployed site serves the
/// application shell for any path, so there is no separate not-found
/// surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    /// All pages in navigation order.
    pub const PAGES: [Page; 5] = [
        Page::Home,
        Page::QuienesSomos,
        Page::Servicios,
        Page::Certificaciones,
        Page::Contacto,
    ];

    /// Resolve a path to a page. Query strings and fragments are ignored.
    #[must_use]
    pub fn page_for(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/quienes-somos" => Page::QuienesSomos,
            "/servicios" => Page::Servicios,
            "/certificaciones" => Page::Certificaciones,
            "/contacto" => Page::Contacto,
            _ => Page::Home,
        }
    }

    /// The canonical path for a page.
    #[must_use]
    pub const fn path_for(page: Page) -> &'static str {
        match page {
            Page::Home => "/",
            Page::QuienesSomos => "/quienes-somos",
            Page::Servicios => "/servicios",
            Page::Certificaciones => "/certificaciones",
            Page::Contacto => "/contacto",
        }
    }
}

/// History-backed router.
///
/// In WASM, this interfaces with the browser's history.pushState/replaceState.
/// In non-WASM (tests), this uses an in-memory implementation.
#[derive(Debug)]
pub struct HistoryRouter {
    /// In-memory state for non-WASM environments
    #[cfg(not(target_arch = "wasm32"))]
    state: Mutex<RouterState>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct RouterState {
    current: String,
    history: Vec<String>,
    history_index: usize,
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRouter {
    /// Create a new router at the root path.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                state: Mutex::new(RouterState {
                    current: "/".to_string(),
                    history: vec!["/".to_string()],
                    history_index: 0,
                }),
            }
        }
    }

    /// Get the current pathname.
    #[must_use]
    pub fn pathname(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            self.pathname_wasm()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.state
                .lock()
                .map(|s| s.current.clone())
                .unwrap_or_else(|_| "/".to_string())
        }
    }

    /// Navigate to a new route, adding to history.
    pub fn push(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            self.push_wasm(path);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                // Truncate forward history if we're not at the end
                let idx = state.history_index;
                if idx < state.history.len().saturating_sub(1) {
                    state.history.truncate(idx + 1);
                }
                state.current = path.to_string();
                state.history.push(path.to_string());
                state.history_index = state.history.len() - 1;
            }
        }
    }

    /// Replace the current route without adding to history.
    pub fn replace(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            self.replace_wasm(path);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                state.current = path.to_string();
                let idx = state.history_index;
                if let Some(entry) = state.history.get_mut(idx) {
                    *entry = path.to_string();
                }
            }
        }
    }

    /// Go back in history.
    pub fn back(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.back_wasm();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                if state.history_index > 0 {
                    state.history_index -= 1;
                    state.current = state.history[state.history_index].clone();
                }
            }
        }
    }

    /// Go forward in history.
    pub fn forward(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.forward_wasm();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                if state.history_index < state.history.len().saturating_sub(1) {
                    state.history_index += 1;
                    state.current = state.history[state.history_index].clone();
                }
            }
        }
    }

    /// Get the history length.
    #[must_use]
    pub fn history_len(&self) -> usize {
        #[cfg(target_arch = "wasm32")]
        {
            self.history_len_wasm()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.state.lock().map(|s| s.history.len()).unwrap_or(0)
        }
    }

    /// The page for the current pathname.
    #[must_use]
    pub fn current_page(&self) -> Page {
        RouteTable::page_for(&self.pathname())
    }

    // WASM implementations
    #[cfg(target_arch = "wasm32")]
    fn pathname_wasm(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn push_wasm(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn replace_wasm(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn back_wasm(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn forward_wasm(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.forward();
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn history_len_wasm(&self) -> usize {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.length().ok())
            .unwrap_or(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // RouteTable Tests
    // =========================================================================

    #[test]
    fn test_route_table_fixed_paths() {
        assert_eq!(RouteTable::page_for("/"), Page::Home);
        assert_eq!(RouteTable::page_for("/quienes-somos"), Page::QuienesSomos);
        assert_eq!(RouteTable::page_for("/servicios"), Page::Servicios);
        assert_eq!(
            RouteTable::page_for("/certificaciones"),
            Page::Certificaciones
        );
        assert_eq!(RouteTable::page_for("/contacto"), Page::Contacto);
    }

    #[test]
    fn test_route_table_unknown_falls_back_to_home() {
        assert_eq!(RouteTable::page_for("/no-existe"), Page::Home);
        assert_eq!(RouteTable::page_for(""), Page::Home);
    }

    #[test]
    fn test_route_table_ignores_query_and_hash() {
        assert_eq!(RouteTable::page_for("/servicios?utm=x"), Page::Servicios);
        assert_eq!(RouteTable::page_for("/contacto#form"), Page::Contacto);
    }

    #[test]
    fn test_route_table_trailing_slash() {
        assert_eq!(RouteTable::page_for("/servicios/"), Page::Servicios);
    }

    #[test]
    fn test_route_table_round_trip() {
        for page in RouteTable::PAGES {
            assert_eq!(RouteTable::page_for(RouteTable::path_for(page)), page);
        }
    }

    // =========================================================================
    // HistoryRouter Tests
    // =========================================================================

    #[test]
    fn test_router_new() {
        let router = HistoryRouter::new();
        assert_eq!(router.pathname(), "/");
        assert_eq!(router.current_page(), Page::Home);
    }

    #[test]
    fn test_router_push() {
        let router = HistoryRouter::new();
        router.push("/servicios");
        assert_eq!(router.pathname(), "/servicios");
        assert_eq!(router.current_page(), Page::Servicios);
    }

    #[test]
    fn test_router_multiple_push() {
        let router = HistoryRouter::new();
        router.push("/quienes-somos");
        router.push("/servicios");
        router.push("/contacto");
        assert_eq!(router.pathname(), "/contacto");
        assert_eq!(router.history_len(), 4); // Initial + 3 pushes
    }

    #[test]
    fn test_router_replace() {
        let router = HistoryRouter::new();
        router.push("/servicios");
        router.replace("/certificaciones");
        assert_eq!(router.pathname(), "/certificaciones");
        assert_eq!(router.history_len(), 2); // Replace doesn't add
    }

    #[test]
    fn test_router_back_and_forward() {
        let router = HistoryRouter::new();
        router.push("/servicios");
        router.push("/contacto");
        router.back();
        assert_eq!(router.pathname(), "/servicios");
        router.forward();
        assert_eq!(router.pathname(), "/contacto");
    }

    #[test]
    fn test_router_back_at_start() {
        let router = HistoryRouter::new();
        router.back(); // Should not panic
        assert_eq!(router.pathname(), "/");
    }

    #[test]
    fn test_router_history_truncation() {
        let router = HistoryRouter::new();
        router.push("/quienes-somos");
        router.push("/servicios");
        router.back();
        router.push("/contacto"); // Truncates the /servicios entry
        assert_eq!(router.pathname(), "/contacto");
        router.forward(); // Should not go anywhere
        assert_eq!(router.pathname(), "/contacto");
    }
}

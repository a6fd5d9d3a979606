//! Brand palette for the site.

use cuarzo_core::Color;

/// The site's color palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Navigation header background
    pub nav: Color,
    /// Accent (teal) used for lines, bars, and highlights
    pub accent: Color,
    /// Footer / dark heading color
    pub footer: Color,
    /// Page background
    pub surface: Color,
    /// Body text on the surface
    pub text: Color,
    /// Muted body text on the surface
    pub text_muted: Color,
    /// Text on the navigation background
    pub on_nav: Color,
}

impl Theme {
    /// The Cuarzo 24 brand palette.
    #[must_use]
    pub fn cuarzo() -> Self {
        let hex = |code: &str| Color::from_hex(code).expect("theme hex literals are valid");
        Self {
            nav: hex("#0f2e4c"),
            accent: hex("#2ec4b6"),
            footer: hex("#16364f"),
            surface: Color::WHITE,
            text: hex("#1f2937"),
            text_muted: hex("#4b5563"),
            on_nav: Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::cuarzo()
    }
}

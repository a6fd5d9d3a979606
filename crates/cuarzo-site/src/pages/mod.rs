//! Page content as widget trees.

mod certificaciones;
mod contacto;
mod home;
mod quienes_somos;
mod servicios;

use crate::router::Page;
use crate::theme::Theme;
use cuarzo_core::Widget;

/// Build the widget tree for a page.
///
/// Every navigation builds a fresh tree, so scroll-triggered entrances and
/// the energy metric re-arm on each visit.
#[must_use]
pub fn build(page: Page, theme: &Theme) -> Box<dyn Widget> {
    match page {
        Page::Home => home::build(theme),
        Page::QuienesSomos => quienes_somos::build(theme),
        Page::Servicios => servicios::build(theme),
        Page::Certificaciones => certificaciones::build(theme),
        Page::Contacto => contacto::build(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteTable;
    use cuarzo_core::{Constraints, Rect};

    #[test]
    fn test_every_page_builds_and_lays_out() {
        let theme = Theme::cuarzo();
        for page in RouteTable::PAGES {
            let mut tree = build(page, &theme);
            let size = tree.measure(Constraints::fixed_width(1024.0));
            assert!(size.height > 0.0, "{page:?} has content");
            tree.layout(Rect::new(0.0, 0.0, 1024.0, size.height));
        }
    }

    #[test]
    fn test_rebuild_produces_fresh_tree() {
        let theme = Theme::cuarzo();
        let mut first = build(Page::Servicios, &theme);
        let mut second = build(Page::Servicios, &theme);

        // Animating one tree must not affect the other.
        let observer = cuarzo_core::AlwaysVisible;
        first.layout(Rect::new(0.0, 0.0, 1024.0, 4000.0));
        second.layout(Rect::new(0.0, 0.0, 1024.0, 4000.0));
        assert!(first.animate(&observer, 0.0, 0.0));
        assert!(second.animate(&observer, 0.0, 0.0));
    }
}

//! Fixed navigation header with active-link highlight and a mobile menu.

use cuarzo_core::{
    widget::{FontWeight, LayoutResult, TextStyle},
    AccessibleRole, Canvas, Color, Constraints, EasedValue, Easing, Event, Key, MenuMessage,
    MenuState, Point, Rect, Size, State, Transform2D, TypeId, VisibilityObserver, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// One entry in the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Stable identifier
    pub id: String,
    /// Visible label
    pub label: String,
    /// Route the link navigates to
    pub href: String,
}

impl NavSection {
    /// Create a section.
    #[must_use]
    pub fn new(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Message emitted when a navigation link is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkClicked {
    /// Route of the selected link
    pub href: String,
}

/// Fixed site header: brand, section links with an accent underline on the
/// active one, and a collapsible menu below the breakpoint.
///
/// The header slides in from above on mount. The active-link rule matches
/// the site's routes: `/` is active only on the exact root path, every
/// other link is active for any path under its prefix.
pub struct NavBar {
    sections: Vec<NavSection>,
    active_path: String,
    menu: MenuState,
    entrance: EasedValue,
    brand: String,
    bar_height: f32,
    accent_height: f32,
    item_height: f32,
    background: Color,
    accent: Color,
    foreground: Color,
    compact: bool,
    bounds: Rect,
    link_bounds: Vec<Rect>,
    menu_button_bounds: Rect,
}

impl NavBar {
    /// Viewport width below which the link row collapses into a menu.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    /// Create a header with the given sections.
    #[must_use]
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self {
            sections,
            active_path: "/".to_string(),
            menu: MenuState::default(),
            entrance: EasedValue::new(0.0, 1.0, 0.6).with_easing(Easing::CubicOut),
            brand: "CUARZO 24".to_string(),
            bar_height: 64.0,
            accent_height: 4.0,
            item_height: 44.0,
            background: Color::new(0.06, 0.18, 0.30, 1.0),
            accent: Color::new(0.18, 0.77, 0.71, 1.0),
            foreground: Color::WHITE,
            compact: false,
            bounds: Rect::default(),
            link_bounds: Vec::new(),
            menu_button_bounds: Rect::default(),
        }
    }

    /// The site's standard five sections.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            NavSection::new("home", "Home", "/"),
            NavSection::new("quienes-somos", "Quienes Somos", "/quienes-somos"),
            NavSection::new("servicios", "Servicios", "/servicios"),
            NavSection::new("certificaciones", "Certificaciones", "/certificaciones"),
            NavSection::new("contacto", "Contacto", "/contacto"),
        ])
    }

    /// Set the brand label.
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set header colors.
    #[must_use]
    pub const fn colors(mut self, background: Color, accent: Color, foreground: Color) -> Self {
        self.background = background;
        self.accent = accent;
        self.foreground = foreground;
        self
    }

    /// The sections shown in the header.
    #[must_use]
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Update the active route used for link highlighting.
    pub fn set_active_path(&mut self, path: &str) {
        self.active_path = path.to_string();
    }

    /// Whether a link is highlighted for the current route.
    ///
    /// `/` matches only the exact root; other hrefs match by prefix.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.active_path == "/"
        } else {
            self.active_path.starts_with(href)
        }
    }

    /// Whether the collapsible menu is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu.open
    }

    /// Toggle the collapsible menu.
    pub fn toggle_menu(&mut self) {
        self.menu.update(MenuMessage::Toggle);
    }

    /// Close the collapsible menu.
    pub fn close_menu(&mut self) {
        self.menu.update(MenuMessage::Close);
    }

    /// Total painted height: bar, accent line, and the open menu panel.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        let menu_height = if self.compact && self.menu.open {
            self.item_height * self.sections.len() as f32
        } else {
            0.0
        };
        self.bar_height + self.accent_height + menu_height
    }

    fn link_style(&self, active: bool) -> TextStyle {
        TextStyle {
            size: 14.0,
            color: if active {
                self.foreground
            } else {
                self.foreground.with_alpha(0.8)
            },
            weight: FontWeight::Medium,
            ..Default::default()
        }
    }

    fn hit_link(&self, position: Point) -> Option<&NavSection> {
        self.link_bounds
            .iter()
            .zip(&self.sections)
            .find(|(bounds, _)| bounds.contains_point(&position))
            .map(|(_, section)| section)
    }
}

impl Widget for NavBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.max_width, self.total_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.compact = bounds.width < Self::COMPACT_BREAKPOINT;
        self.link_bounds.clear();

        if self.compact {
            // Square menu button at the right edge of the bar.
            self.menu_button_bounds = Rect::new(
                bounds.right() - self.bar_height,
                bounds.y,
                self.bar_height,
                self.bar_height,
            );
            // Open menu items stack below the accent line.
            if self.menu.open {
                let top = bounds.y + self.bar_height + self.accent_height;
                for i in 0..self.sections.len() {
                    self.link_bounds.push(Rect::new(
                        bounds.x,
                        top + i as f32 * self.item_height,
                        bounds.width,
                        self.item_height,
                    ));
                }
            }
        } else {
            self.menu_button_bounds = Rect::default();
            // Brand takes the left slot; links flow after it.
            let mut x = bounds.x + 180.0;
            for section in &self.sections {
                let width = section.label.chars().count() as f32 * 14.0 * 0.6 + 24.0;
                self.link_bounds
                    .push(Rect::new(x, bounds.y, width, self.bar_height));
                x += width + 8.0;
            }
        }

        LayoutResult {
            size: Size::new(bounds.width, self.total_height()),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        // Entrance: the whole header slides down from above.
        let slide = (1.0 - self.entrance.value() as f32) * -(self.bar_height + self.accent_height);
        let moved = slide < 0.0;
        if moved {
            canvas.push_transform(Transform2D::translate(0.0, slide));
        }

        let bar = Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, self.bar_height);
        canvas.fill_rect(bar, self.background);

        let brand_style = TextStyle {
            size: 18.0,
            color: self.foreground,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        canvas.draw_text(
            &self.brand,
            Point::new(self.bounds.x + 24.0, self.bounds.y + 22.0),
            &brand_style,
        );

        if self.compact {
            // Menu icon: three lines, or a cross when open.
            let button = self.menu_button_bounds;
            let center = button.center();
            let half = 9.0;
            if self.menu.open {
                canvas.draw_line(
                    Point::new(center.x - half, center.y - half),
                    Point::new(center.x + half, center.y + half),
                    self.foreground,
                    2.0,
                );
                canvas.draw_line(
                    Point::new(center.x - half, center.y + half),
                    Point::new(center.x + half, center.y - half),
                    self.foreground,
                    2.0,
                );
            } else {
                for i in 0..3 {
                    let y = center.y + (i as f32 - 1.0) * 6.0;
                    canvas.draw_line(
                        Point::new(center.x - half, y),
                        Point::new(center.x + half, y),
                        self.foreground,
                        2.0,
                    );
                }
            }
        } else {
            for (section, bounds) in self.sections.iter().zip(&self.link_bounds) {
                let active = self.is_active(&section.href);
                let is_contact = section.id == "contacto";

                if is_contact {
                    canvas.fill_rounded_rect(bounds.inset(8.0), 2.0, self.foreground);
                }
                let style = if is_contact {
                    TextStyle {
                        size: 14.0,
                        color: self.background,
                        weight: FontWeight::Medium,
                        ..Default::default()
                    }
                } else {
                    self.link_style(active)
                };
                canvas.draw_text(
                    &section.label,
                    Point::new(bounds.x + 12.0, bounds.y + 24.0),
                    &style,
                );

                // Accent underline marks the active section.
                if active && !is_contact {
                    canvas.fill_rect(
                        Rect::new(bounds.x + 12.0, bounds.bottom() - 10.0, bounds.width - 24.0, 2.0),
                        self.foreground,
                    );
                }
            }
        }

        // Accent line under the bar.
        canvas.fill_rect(
            Rect::new(
                self.bounds.x,
                self.bounds.y + self.bar_height,
                self.bounds.width,
                self.accent_height,
            ),
            self.accent,
        );

        // Open menu panel.
        if self.compact && self.menu.open {
            for (section, bounds) in self.sections.iter().zip(&self.link_bounds) {
                canvas.fill_rect(*bounds, self.background);
                let active = self.is_active(&section.href);
                if active {
                    canvas.fill_rect(*bounds, self.foreground.with_alpha(0.1));
                }
                canvas.draw_text(
                    &section.label,
                    Point::new(bounds.x + 24.0, bounds.y + 14.0),
                    &self.link_style(active),
                );
            }
        }

        if moved {
            canvas.pop_transform();
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::Click { position, .. } => {
                if self.compact && self.menu_button_bounds.contains_point(position) {
                    self.toggle_menu();
                    return None;
                }
                if let Some(section) = self.hit_link(*position) {
                    let href = section.href.clone();
                    self.close_menu();
                    return Some(Box::new(NavLinkClicked { href }));
                }
                None
            }
            Event::KeyDown { key: Key::Escape } => {
                self.close_menu();
                None
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn animate(&mut self, _observer: &dyn VisibilityObserver, _now: f64, dt: f64) -> bool {
        if self.entrance.is_complete() {
            return false;
        }
        self.entrance.update(dt);
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Menu
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuarzo_core::{AlwaysVisible, DrawCommand, RecordingCanvas};

    fn desktop_nav() -> NavBar {
        let mut nav = NavBar::standard();
        nav.layout(Rect::new(0.0, 0.0, 1024.0, 68.0));
        nav
    }

    fn mobile_nav() -> NavBar {
        let mut nav = NavBar::standard();
        nav.layout(Rect::new(0.0, 0.0, 375.0, 68.0));
        nav
    }

    // ===== Active link tests =====

    #[test]
    fn test_root_active_only_on_exact_match() {
        let mut nav = NavBar::standard();
        nav.set_active_path("/");
        assert!(nav.is_active("/"));

        nav.set_active_path("/servicios");
        assert!(!nav.is_active("/"));
    }

    #[test]
    fn test_section_active_by_prefix() {
        let mut nav = NavBar::standard();
        nav.set_active_path("/servicios");
        assert!(nav.is_active("/servicios"));
        assert!(!nav.is_active("/contacto"));

        nav.set_active_path("/servicios/mantenimiento");
        assert!(nav.is_active("/servicios"));
    }

    // ===== Menu state tests =====

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = NavBar::standard();
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_menu_button_click_toggles() {
        let mut nav = mobile_nav();
        let center = nav.menu_button_bounds.center();
        nav.event(&Event::click(center.x, center.y));
        assert!(nav.is_menu_open());
        nav.event(&Event::click(center.x, center.y));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut nav = mobile_nav();
        nav.toggle_menu();
        nav.event(&Event::KeyDown { key: Key::Escape });
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_open_menu_link_click_navigates_and_closes() {
        let mut nav = mobile_nav();
        nav.toggle_menu();
        nav.layout(Rect::new(0.0, 0.0, 375.0, 300.0));

        // Third menu item: Servicios.
        let y = nav.bar_height + nav.accent_height + 2.5 * nav.item_height;
        let message = nav.event(&Event::click(100.0, y));
        let clicked = message
            .expect("link click emits a message")
            .downcast::<NavLinkClicked>()
            .expect("message is NavLinkClicked");
        assert_eq!(clicked.href, "/servicios");
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_desktop_link_click_navigates() {
        let mut nav = desktop_nav();
        let bounds = nav.link_bounds[2];
        let center = bounds.center();
        let message = nav.event(&Event::click(center.x, center.y));
        let clicked = message
            .expect("link click emits a message")
            .downcast::<NavLinkClicked>()
            .expect("message is NavLinkClicked");
        assert_eq!(clicked.href, "/servicios");
    }

    // ===== Layout tests =====

    #[test]
    fn test_compact_below_breakpoint() {
        let nav = mobile_nav();
        assert!(nav.compact);
        let nav = desktop_nav();
        assert!(!nav.compact);
    }

    #[test]
    fn test_total_height_includes_open_menu() {
        let mut nav = mobile_nav();
        let closed = nav.total_height();
        nav.toggle_menu();
        assert_eq!(nav.total_height(), closed + 5.0 * nav.item_height);
    }

    // ===== Paint tests =====

    #[test]
    fn test_paint_draws_all_section_labels() {
        let mut nav = desktop_nav();
        nav.set_active_path("/servicios");
        // Finish the entrance so commands are not transform-wrapped.
        nav.animate(&AlwaysVisible, 1.0, 1.0);

        let mut canvas = RecordingCanvas::new();
        nav.paint(&mut canvas);

        let texts: Vec<&str> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        for label in ["Home", "Quienes Somos", "Servicios", "Certificaciones", "Contacto"] {
            assert!(texts.contains(&label), "missing label {label}");
        }
    }

    #[test]
    fn test_paint_entrance_wraps_in_transform() {
        let mut nav = desktop_nav();
        let mut canvas = RecordingCanvas::new();
        nav.animate(&AlwaysVisible, 0.1, 0.1);
        nav.paint(&mut canvas);
        assert!(matches!(&canvas.commands()[0], DrawCommand::Group { .. }));
    }

    #[test]
    fn test_entrance_settles() {
        let mut nav = desktop_nav();
        assert!(nav.animate(&AlwaysVisible, 0.3, 0.3));
        assert!(nav.animate(&AlwaysVisible, 0.6, 0.3));
        assert!(!nav.animate(&AlwaysVisible, 0.9, 0.3));
    }
}

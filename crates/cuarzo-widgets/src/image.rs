//! Image widget: full-bleed background blocks with an overlay scrim.

use cuarzo_core::{
    widget::LayoutResult, AccessibleRole, Canvas, Color, Constraints, Event, Rect, Size, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// How the image fills its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageFit {
    /// Scale to cover the bounds, cropping overflow
    #[default]
    Cover,
    /// Scale to fit entirely inside the bounds
    Contain,
    /// Stretch to the exact bounds
    Fill,
}

/// Image widget.
///
/// Used by the pages as hero/background blocks: a fixed-height band showing
/// an asset, optionally darkened by an overlay scrim so foreground text
/// stays readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Asset path or URL
    source: String,
    /// Alternative text for accessibility
    alt: String,
    /// Fit mode
    fit: ImageFit,
    /// Overlay scrim painted above the image (None = no overlay)
    overlay: Option<Color>,
    /// Fixed height of the block
    height: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Image {
    /// Create a new image block.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: String::new(),
            fit: ImageFit::Cover,
            overlay: None,
            height: 320.0,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the alternative text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Set the fit mode.
    #[must_use]
    pub const fn fit(mut self, fit: ImageFit) -> Self {
        self.fit = fit;
        self
    }

    /// Darken the image with an overlay scrim.
    #[must_use]
    pub fn overlay(mut self, color: Color) -> Self {
        self.overlay = Some(color);
        self
    }

    /// Set the block height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The asset path.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Widget for Image {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.height * 16.0 / 9.0
        };
        constraints.constrain(Size::new(width, self.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(&self.source, self.bounds);
        if let Some(overlay) = self.overlay {
            canvas.fill_rect(self.bounds, overlay);
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        if self.alt.is_empty() {
            None
        } else {
            Some(&self.alt)
        }
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuarzo_core::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_image_measure_fills_width() {
        let image = Image::new("assets/servicios-1.jpg").height(400.0);
        let size = image.measure(Constraints::loose(Size::new(800.0, 10_000.0)));
        assert_eq!(size, Size::new(800.0, 400.0));
    }

    #[test]
    fn test_image_paint_without_overlay() {
        let mut image = Image::new("assets/servicios-1.jpg");
        image.layout(Rect::new(0.0, 0.0, 800.0, 320.0));

        let mut canvas = RecordingCanvas::new();
        image.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);

        match &canvas.commands()[0] {
            DrawCommand::Image { source, bounds } => {
                assert_eq!(source, "assets/servicios-1.jpg");
                assert_eq!(bounds.width, 800.0);
            }
            _ => panic!("Expected Image command"),
        }
    }

    #[test]
    fn test_image_paint_overlay_above_image() {
        let mut image =
            Image::new("assets/servicios-2.jpg").overlay(Color::BLACK.with_alpha(0.4));
        image.layout(Rect::new(0.0, 0.0, 800.0, 320.0));

        let mut canvas = RecordingCanvas::new();
        image.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(&canvas.commands()[1], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_image_accessible_name() {
        let image = Image::new("x.jpg").alt("Equipo técnico en obra");
        assert_eq!(image.accessible_name(), Some("Equipo técnico en obra"));
        assert_eq!(image.accessible_role(), AccessibleRole::Image);
    }
}

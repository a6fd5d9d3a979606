//! Text widget for displaying text content.

use cuarzo_core::{
    widget::{FontStyle, FontWeight, LayoutResult, TextStyle},
    AccessibleRole, Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Text widget for displaying styled text.
#[derive(Clone, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    content: String,
    /// Text color
    color: Color,
    /// Font size in pixels
    font_size: f32,
    /// Font weight
    font_weight: FontWeight,
    /// Font style
    font_style: FontStyle,
    /// Line height multiplier
    line_height: f32,
    /// Maximum width before wrapping (None = no wrapping)
    max_width: Option<f32>,
    /// Whether this text is a heading
    heading: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create new text widget.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: Color::BLACK,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            line_height: 1.4,
            max_width: None,
            heading: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set font style.
    #[must_use]
    pub const fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    /// Set line height multiplier.
    #[must_use]
    pub const fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Set maximum width for text wrapping.
    #[must_use]
    pub const fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Mark this text as a heading for accessibility.
    #[must_use]
    pub const fn heading(mut self) -> Self {
        self.heading = true;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Estimate text size (simplified - real implementation would use font
    /// metrics).
    fn estimate_size(&self, max_width: f32) -> Size {
        // Simplified: assume ~0.6 em width per character
        let char_width = self.font_size * 0.6;
        let line_height = self.font_size * self.line_height;

        if self.content.is_empty() {
            return Size::new(0.0, line_height);
        }

        let total_width = self.content.chars().count() as f32 * char_width;

        if let Some(max_w) = self.max_width {
            let effective_max = max_w.min(max_width);
            if total_width > effective_max && effective_max > 0.0 {
                let lines = (total_width / effective_max).ceil();
                return Size::new(effective_max, lines * line_height);
            }
        }

        Size::new(total_width.min(max_width), line_height)
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let size = self.estimate_size(constraints.max_width);
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
            style: self.font_style,
        };

        canvas.draw_text(&self.content, self.bounds.origin(), &style);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None // Text is not interactive
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.heading {
            AccessibleRole::Heading
        } else {
            AccessibleRole::Generic
        }
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
    fn test_text_new() {
        let text = Text::new("Mantenimiento");
        assert_eq!(text.content(), "Mantenimiento");
    }

    #[test]
    fn test_text_builder() {
        let text = Text::new("Energía")
            .font_size(24.0)
            .font_weight(FontWeight::Semibold)
            .color(Color::WHITE)
            .heading()
            .with_test_id("section-title");

        assert_eq!(text.accessible_role(), AccessibleRole::Heading);
        assert_eq!(text.test_id(), Some("section-title"));
    }

    #[test]
    fn test_text_measure_single_line() {
        let text = Text::new("hola").font_size(10.0);
        let size = text.measure(Constraints::loose(Size::new(1000.0, 1000.0)));
        // 4 chars * 6.0 estimated width
        assert_eq!(size.width, 24.0);
        assert_eq!(size.height, 14.0);
    }

    #[test]
    fn test_text_measure_wraps_at_max_width() {
        let text = Text::new("a".repeat(100)).font_size(10.0).max_width(120.0);
        let size = text.measure(Constraints::loose(Size::new(1000.0, 1000.0)));
        assert_eq!(size.width, 120.0);
        assert!(size.height > 14.0);
    }

    #[test]
    fn test_text_measure_empty() {
        let text = Text::new("");
        let size = text.measure(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size.width, 0.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn test_text_paint() {
        let mut text = Text::new("100%").font_size(40.0);
        text.layout(Rect::new(10.0, 20.0, 100.0, 48.0));

        let mut canvas = RecordingCanvas::new();
        text.paint(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                assert_eq!(content, "100%");
                assert_eq!(position.x, 10.0);
                assert_eq!(position.y, 20.0);
                assert_eq!(style.size, 40.0);
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_text_not_interactive() {
        let mut text = Text::new("x");
        assert!(!text.is_interactive());
        assert!(text.event(&Event::click(0.0, 0.0)).is_none());
    }
}

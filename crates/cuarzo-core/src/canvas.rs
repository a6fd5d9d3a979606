//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to the browser canvas)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity_stack.clear();
        self.transform_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the effective opacity (product of the opacity stack).
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.iter().product()
    }

    /// Record a command, wrapping it in the active transform and opacity.
    fn push_command(&mut self, command: DrawCommand) {
        let transform = self.current_transform();
        let command = if transform.is_identity() {
            command
        } else {
            command.with_transform(transform)
        };

        let alpha = self.current_opacity();
        let command = if alpha < 1.0 {
            command.with_opacity(alpha)
        } else {
            command
        };

        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_command(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push_command(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.push_command(DrawCommand::Rect {
            bounds: rect,
            radius: crate::CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle {
                color,
                width,
                ..Default::default()
            }),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.push_command(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push_command(DrawCommand::line(
            from,
            to,
            StrokeStyle {
                color,
                width,
                ..Default::default()
            },
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push_command(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_image(&mut self, source: &str, bounds: Rect) {
        self.push_command(DrawCommand::Image {
            source: source.to_string(),
            bounds,
        });
    }

    fn push_opacity(&mut self, alpha: f32) {
        self.opacity_stack.push(alpha.clamp(0.0, 1.0));
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        // Nested transforms compose with the one already in effect.
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Canvas as _;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_recording_canvas_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(canvas.command_count(), 1);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => assert_eq!(style.fill, Some(Color::WHITE)),
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_draw_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("88%", Point::new(5.0, 5.0), &TextStyle::default());

        match &canvas.commands()[0] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "88%"),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_recording_canvas_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_recording_canvas_opacity_wraps_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_opacity(0.5);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.pop_opacity();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        match &canvas.commands()[0] {
            DrawCommand::Opacity { alpha, .. } => assert_eq!(*alpha, 0.5),
            _ => panic!("Expected Opacity wrapper"),
        }
        assert!(matches!(&canvas.commands()[1], DrawCommand::Rect { .. }));
    }

    #[test]
    fn test_recording_canvas_nested_opacity_multiplies() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_opacity(0.5);
        canvas.push_opacity(0.5);
        assert!((canvas.current_opacity() - 0.25).abs() < 1e-6);
        canvas.pop_opacity();
        canvas.pop_opacity();
        assert_eq!(canvas.current_opacity(), 1.0);
    }

    #[test]
    fn test_recording_canvas_transform_wraps_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(0.0, 16.0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.pop_transform();

        match &canvas.commands()[0] {
            DrawCommand::Group { transform, .. } => {
                assert_eq!(transform.apply(Point::ORIGIN), Point::new(0.0, 16.0));
            }
            _ => panic!("Expected Group wrapper"),
        }
    }

    #[test]
    fn test_recording_canvas_nested_transforms_compose() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(Transform2D::translate(10.0, 0.0));
        canvas.push_transform(Transform2D::translate(0.0, 5.0));
        let t = canvas.current_transform();
        assert_eq!(t.apply(Point::ORIGIN), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_recording_canvas_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_opacity(0.5);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.current_opacity(), 1.0);
    }
}

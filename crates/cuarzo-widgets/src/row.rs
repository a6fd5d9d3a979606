//! Row widget for horizontal layout.

use cuarzo_core::{
    widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, VisibilityObserver,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Alignment along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MainAxisAlignment {
    /// Pack children at the start
    #[default]
    Start,
    /// Center children
    Center,
    /// Pack children at the end
    End,
}

/// Alignment along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrossAxisAlignment {
    /// Align to the start edge
    Start,
    /// Center on the cross axis
    #[default]
    Center,
    /// Align to the end edge
    End,
}

/// Row widget for horizontal layout of children.
#[derive(Serialize, Deserialize)]
pub struct Row {
    /// Main axis (horizontal) alignment
    main_axis_alignment: MainAxisAlignment,
    /// Cross axis (vertical) alignment
    cross_axis_alignment: CrossAxisAlignment,
    /// Gap between children
    gap: f32,
    /// Children widgets
    #[serde(skip)]
    children: Vec<Box<dyn Widget>>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment: CrossAxisAlignment::Center,
            gap: 0.0,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set main axis alignment.
    #[must_use]
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    /// Set cross axis alignment.
    #[must_use]
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Set gap between children.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }
}

impl Widget for Row {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut total_width = 0.0f32;
        let mut max_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_size = child.measure(Constraints::new(
                0.0,
                (constraints.max_width - total_width).max(0.0),
                0.0,
                constraints.max_height,
            ));
            total_width += child_size.width;
            max_height = max_height.max(child_size.height);

            if i < self.children.len() - 1 {
                total_width += self.gap;
            }
        }

        constraints.constrain(Size::new(total_width, max_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        if self.children.is_empty() {
            return LayoutResult { size: Size::ZERO };
        }

        let mut child_sizes: Vec<Size> = Vec::with_capacity(self.children.len());
        let mut content_width = 0.0f32;

        for child in &self.children {
            let size = child.measure(Constraints::loose(bounds.size()));
            content_width += size.width;
            child_sizes.push(size);
        }
        content_width += self.gap * (self.children.len() - 1) as f32;

        let remaining = (bounds.width - content_width).max(0.0);
        let mut x = match self.main_axis_alignment {
            MainAxisAlignment::Start => bounds.x,
            MainAxisAlignment::Center => bounds.x + remaining / 2.0,
            MainAxisAlignment::End => bounds.x + remaining,
        };

        for (child, size) in self.children.iter_mut().zip(&child_sizes) {
            let y = match self.cross_axis_alignment {
                CrossAxisAlignment::Start => bounds.y,
                CrossAxisAlignment::Center => bounds.y + (bounds.height - size.height) / 2.0,
                CrossAxisAlignment::End => bounds.y + bounds.height - size.height,
            };
            child.layout(Rect::new(x, y, size.width, size.height));
            x += size.width + self.gap;
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for child in &mut self.children {
            if let Some(message) = child.event(event) {
                return Some(message);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn animate(&mut self, observer: &dyn VisibilityObserver, now: f64, dt: f64) -> bool {
        let mut changed = false;
        for child in &mut self.children {
            changed |= child.animate(observer, now, dt);
        }
        changed
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
    use crate::text::Text;

    #[test]
    fn test_row_empty() {
        let row = Row::new();
        let size = row.measure(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_row_measure_sums_widths() {
        let row = Row::new()
            .gap(10.0)
            .child(Text::new("ab").font_size(10.0))
            .child(Text::new("cd").font_size(10.0));
        let size = row.measure(Constraints::loose(Size::new(1000.0, 100.0)));
        // Two 12px texts plus one 10px gap
        assert_eq!(size.width, 34.0);
    }

    #[test]
    fn test_row_layout_positions_children() {
        let mut row = Row::new()
            .gap(10.0)
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .child(Text::new("ab").font_size(10.0))
            .child(Text::new("cd").font_size(10.0));
        row.layout(Rect::new(0.0, 0.0, 1000.0, 100.0));

        assert_eq!(row.children()[0].bounds().x, 0.0);
        assert_eq!(row.children()[1].bounds().x, 22.0);
        assert_eq!(row.children()[0].bounds().y, 0.0);
    }

    #[test]
    fn test_row_layout_end_alignment() {
        let mut row = Row::new()
            .main_axis_alignment(MainAxisAlignment::End)
            .child(Text::new("ab").font_size(10.0));
        row.layout(Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(row.children()[0].bounds().x, 88.0);
    }
}

//! Column widget for vertical layout.

use cuarzo_core::{
    widget::LayoutResult, Canvas, Constraints, Event, Rect, Size, TypeId, VisibilityObserver,
    Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::row::{CrossAxisAlignment, MainAxisAlignment};

/// Column widget for vertical layout of children.
#[derive(Serialize, Deserialize)]
pub struct Column {
    /// Main axis (vertical) alignment
    main_axis_alignment: MainAxisAlignment,
    /// Cross axis (horizontal) alignment
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

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    /// Create a new empty column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment: CrossAxisAlignment::Start,
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

impl Widget for Column {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut max_width = 0.0f32;
        let mut total_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_size = child.measure(Constraints::new(
                0.0,
                constraints.max_width,
                0.0,
                (constraints.max_height - total_height).max(0.0),
            ));
            max_width = max_width.max(child_size.width);
            total_height += child_size.height;

            if i < self.children.len() - 1 {
                total_height += self.gap;
            }
        }

        constraints.constrain(Size::new(max_width, total_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        if self.children.is_empty() {
            return LayoutResult { size: Size::ZERO };
        }

        let mut child_sizes: Vec<Size> = Vec::with_capacity(self.children.len());
        let mut content_height = 0.0f32;

        for child in &self.children {
            let size = child.measure(Constraints::new(
                0.0,
                bounds.width,
                0.0,
                f32::INFINITY,
            ));
            content_height += size.height;
            child_sizes.push(size);
        }
        content_height += self.gap * (self.children.len() - 1) as f32;

        let remaining = (bounds.height - content_height).max(0.0);
        let mut y = match self.main_axis_alignment {
            MainAxisAlignment::Start => bounds.y,
            MainAxisAlignment::Center => bounds.y + remaining / 2.0,
            MainAxisAlignment::End => bounds.y + remaining,
        };

        for (child, size) in self.children.iter_mut().zip(&child_sizes) {
            let x = match self.cross_axis_alignment {
                CrossAxisAlignment::Start => bounds.x,
                CrossAxisAlignment::Center => bounds.x + (bounds.width - size.width) / 2.0,
                CrossAxisAlignment::End => bounds.x + bounds.width - size.width,
            };
            child.layout(Rect::new(x, y, size.width, size.height));
            y += size.height + self.gap;
        }

        // Report the content extent so document flow can size the scroll
        // range from it.
        self.bounds = Rect::new(bounds.x, bounds.y, bounds.width, content_height);
        LayoutResult {
            size: Size::new(bounds.width, content_height),
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

//! Container widget for layout grouping.

use cuarzo_core::{
    widget::LayoutResult, Canvas, Color, Constraints, Event, Rect, Size, TypeId,
    VisibilityObserver, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Container widget for grouping and styling children.
///
/// Children overlay each other within the padded bounds; the container
/// paints an optional background behind them.
#[derive(Serialize, Deserialize)]
pub struct Container {
    /// Background color
    background: Option<Color>,
    /// Corner radius for rounded corners
    corner_radius: f32,
    /// Padding (all sides)
    padding: f32,
    /// Minimum height constraint
    min_height: Option<f32>,
    /// Maximum width constraint
    max_width: Option<f32>,
    /// Children widgets
    #[serde(skip)]
    children: Vec<Box<dyn Widget>>,
    /// Test ID for this widget
    test_id_value: Option<String>,
    /// Cached bounds after layout
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            background: None,
            corner_radius: 0.0,
            padding: 0.0,
            min_height: None,
            max_width: None,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl Container {
    /// Create a new empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set uniform padding on all sides.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set minimum height.
    #[must_use]
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Set maximum width.
    #[must_use]
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }
}

impl Widget for Container {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let inner_max_width = self
            .max_width
            .map_or(constraints.max_width, |w| w.min(constraints.max_width));
        let inner = Constraints::new(
            0.0,
            (inner_max_width - 2.0 * self.padding).max(0.0),
            0.0,
            (constraints.max_height - 2.0 * self.padding).max(0.0),
        );

        let mut content = Size::ZERO;
        for child in &self.children {
            let child_size = child.measure(inner);
            content = Size::new(
                content.width.max(child_size.width),
                content.height.max(child_size.height),
            );
        }

        let mut size = Size::new(
            content.width + 2.0 * self.padding,
            content.height + 2.0 * self.padding,
        );
        if let Some(min_height) = self.min_height {
            size.height = size.height.max(min_height);
        }
        constraints.constrain(size)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let inner = bounds.inset(self.padding);

        for child in &mut self.children {
            let size = child.measure(Constraints::loose(inner.size()));
            child.layout(Rect::new(inner.x, inner.y, size.width, size.height));
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(background) = self.background {
            if self.corner_radius > 0.0 {
                canvas.fill_rounded_rect(self.bounds, self.corner_radius, background);
            } else {
                canvas.fill_rect(self.bounds, background);
            }
        }
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

//! Reveal wrapper: fades content in the first time it scrolls into view.

use cuarzo_core::{
    widget::LayoutResult, Canvas, Constraints, EasedValue, Easing, Event, Rect, Size,
    Transform2D, TypeId, ViewTrigger, VisibilityObserver, Widget,
};
use std::any::Any;

/// Wraps a subtree and plays a fade-up entrance the first time it becomes
/// visible: opacity 0 → 1 while sliding up from a small offset.
///
/// Like the metric counter, the entrance runs at most once per mount and
/// ignores later viewport exits and re-entries. Until the trigger fires the
/// content is not painted at all.
pub struct Reveal {
    /// Wrapped children
    children: Vec<Box<dyn Widget>>,
    /// Fires once at the visibility threshold
    trigger: ViewTrigger,
    /// Entrance progress, 0 → 1
    fade: EasedValue,
    /// Initial downward offset in pixels
    offset: f32,
    /// Cached bounds
    bounds: Rect,
}

impl Reveal {
    /// Default visibility threshold for reveals (a quarter of the block).
    pub const DEFAULT_THRESHOLD: f32 = 0.25;

    /// Wrap a widget with the default 0.6 s fade-up.
    #[must_use]
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            children: vec![Box::new(child)],
            trigger: ViewTrigger::new(Self::DEFAULT_THRESHOLD),
            fade: EasedValue::new(0.0, 1.0, 0.6).with_easing(Easing::CubicOut),
            offset: 32.0,
            bounds: Rect::default(),
        }
    }

    /// Set the entrance duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.fade.duration = seconds.max(0.0);
        self
    }

    /// Delay the entrance after the trigger, in seconds. Used to stagger
    /// items in a list.
    #[must_use]
    pub fn delay(mut self, seconds: f64) -> Self {
        self.fade = self.fade.with_delay(seconds);
        self
    }

    /// Set the initial downward offset in pixels.
    #[must_use]
    pub const fn offset(mut self, pixels: f32) -> Self {
        self.offset = pixels;
        self
    }

    /// Set the visibility threshold in [0.0, 1.0].
    #[must_use]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.trigger = ViewTrigger::new(threshold);
        self
    }

    /// Whether the entrance has been triggered.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Current entrance opacity in [0.0, 1.0].
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.trigger.has_fired() {
            self.fade.value()
        } else {
            0.0
        }
    }
}

impl Widget for Reveal {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.children
            .first()
            .map_or(Size::ZERO, |child| child.measure(constraints))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let mut size = bounds.size();
        if let Some(child) = self.children.first_mut() {
            size = child.layout(bounds).size;
        }
        self.bounds = Rect::new(bounds.x, bounds.y, size.width, size.height);
        LayoutResult { size }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let opacity = self.opacity();
        if opacity <= 0.0 {
            return;
        }

        let slide = self.offset * (1.0 - opacity as f32);
        let moved = slide > 0.0;
        if moved {
            canvas.push_transform(Transform2D::translate(0.0, slide));
        }
        canvas.push_opacity(opacity as f32);
        for child in &self.children {
            child.paint(canvas);
        }
        canvas.pop_opacity();
        if moved {
            canvas.pop_transform();
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

        self.trigger.check(observer, self.bounds);
        if self.trigger.has_fired() && !self.fade.is_complete() {
            self.fade.update(dt);
            changed = true;
        }

        for child in &mut self.children {
            changed |= child.animate(observer, now, dt);
        }
        changed
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

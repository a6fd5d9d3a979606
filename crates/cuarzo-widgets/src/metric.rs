//! Animated percentage metric with a progress bar.

use cuarzo_core::{
    widget::{FontWeight, LayoutResult, TextStyle},
    AccessibleRole, Canvas, Color, Constraints, CountUp, Event, Point, Rect, Size, TypeId,
    ViewTrigger, VisibilityObserver, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A percentage metric that counts up from 0 to a target value the first
/// time it scrolls into view, next to a thin bar that fills along with it.
///
/// The count runs once per mount: scrolling away and back does not restart
/// it. The displayed number follows the target wherever it goes, while the
/// bar caps at 100% of its track — a target above 100 reads "140%" over a
/// full bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDisplay {
    /// Caption below the number
    label: String,
    /// Count-up interpolation state
    #[serde(skip, default = "default_counter")]
    counter: CountUp,
    /// Fires once at the visibility threshold
    #[serde(skip)]
    trigger: ViewTrigger,
    /// Target value, kept for serialization
    target: f64,
    /// Color of the numeric value
    value_color: Color,
    /// Color of the bar fill
    fill_color: Color,
    /// Color of the bar track
    track_color: Color,
    /// Color of the caption
    label_color: Color,
    /// Font size of the numeric value
    value_font_size: f32,
    /// Font size of the caption
    label_font_size: f32,
    /// Height of the bar
    bar_height: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

fn default_counter() -> CountUp {
    CountUp::new(0.0)
}

impl MetricDisplay {
    /// Create a metric counting toward `target` percent.
    #[must_use]
    pub fn new(target: f64, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            counter: CountUp::new(target),
            trigger: ViewTrigger::default(),
            target,
            value_color: Color::BLACK,
            fill_color: Color::new(0.18, 0.77, 0.71, 1.0),
            track_color: Color::new(0.18, 0.77, 0.71, 0.3),
            label_color: Color::BLACK,
            value_font_size: 44.0,
            label_font_size: 18.0,
            bar_height: 3.0,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Seconds to wait after the visibility trigger before counting starts.
    #[must_use]
    pub fn delay(mut self, seconds: f64) -> Self {
        self.counter = self.counter.with_delay(seconds);
        self
    }

    /// Override the count duration.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.counter = self.counter.with_duration(seconds);
        self
    }

    /// Set the color of the numeric value.
    #[must_use]
    pub const fn value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    /// Set the bar fill color.
    #[must_use]
    pub const fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the bar track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the caption color.
    #[must_use]
    pub const fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The caption text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The interpolation target.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// The rounded value currently displayed.
    #[must_use]
    pub const fn display_value(&self) -> i64 {
        self.counter.display_value()
    }

    /// The bar fill fraction in [0.0, 1.0].
    #[must_use]
    pub fn bar_fraction(&self) -> f64 {
        self.counter.bar_fraction()
    }

    /// Whether the count has started.
    #[must_use]
    pub const fn is_triggered(&self) -> bool {
        self.counter.is_triggered()
    }

    /// Whether the count has finished.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.counter.is_complete()
    }

    fn value_line_height(&self) -> f32 {
        self.value_font_size * 1.2
    }

    fn label_line_height(&self) -> f32 {
        self.label_font_size * 1.4
    }

    /// Estimated width of the value text at its widest (the target).
    fn value_text_width(&self) -> f32 {
        let digits = format!("{}%", self.target.round() as i64).len();
        digits as f32 * self.value_font_size * 0.6
    }
}

impl Widget for MetricDisplay {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            320.0
        };
        let height = self.value_line_height() + 12.0 + self.label_line_height();
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let value_style = TextStyle {
            size: self.value_font_size,
            color: self.value_color,
            weight: FontWeight::Semibold,
            ..Default::default()
        };
        canvas.draw_text(
            &format!("{}%", self.counter.display_value()),
            self.bounds.origin(),
            &value_style,
        );

        // Bar sits to the right of the number, aligned to its baseline.
        let bar_x = self.bounds.x + self.value_text_width() + 12.0;
        let bar_y = self.bounds.y + self.value_line_height() - self.bar_height;
        let bar_width = (self.bounds.right() - bar_x).max(0.0);

        let track = Rect::new(bar_x, bar_y, bar_width, self.bar_height);
        canvas.fill_rounded_rect(track, self.bar_height / 2.0, self.track_color);

        let fill_width = bar_width * self.counter.bar_fraction() as f32;
        if fill_width > 0.0 {
            let fill = Rect::new(bar_x, bar_y, fill_width, self.bar_height);
            canvas.fill_rounded_rect(fill, self.bar_height / 2.0, self.fill_color);
        }

        let label_style = TextStyle {
            size: self.label_font_size,
            color: self.label_color,
            weight: FontWeight::Medium,
            ..Default::default()
        };
        canvas.draw_text(
            &self.label,
            Point::new(self.bounds.x, self.bounds.y + self.value_line_height() + 12.0),
            &label_style,
        );
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

    fn animate(&mut self, observer: &dyn VisibilityObserver, now: f64, dt: f64) -> bool {
        let _ = dt;
        let mut changed = false;

        if self.trigger.check(observer, self.bounds) {
            self.counter.trigger(now);
            changed = true;
        }

        if self.counter.is_triggered() && !self.counter.is_complete() {
            changed |= self.counter.tick(now).is_some();
        }

        changed
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
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
    use cuarzo_core::{AlwaysVisible, DrawCommand, RecordingCanvas, ViewportObserver};

    fn laid_out(metric: MetricDisplay) -> MetricDisplay {
        let mut metric = metric;
        metric.layout(Rect::new(0.0, 600.0, 480.0, 80.0));
        metric
    }

    #[test]
    fn test_metric_starts_at_zero() {
        let metric = MetricDisplay::new(100.0, "Respeto al medio ambiente");
        assert_eq!(metric.display_value(), 0);
        assert!(!metric.is_triggered());
    }

    #[test]
    fn test_metric_triggers_when_visible() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        assert!(metric.animate(&AlwaysVisible, 0.0, 0.0));
        assert!(metric.is_triggered());
        assert_eq!(metric.display_value(), 0);
    }

    #[test]
    fn test_metric_does_not_trigger_off_screen() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        // Viewport well above the metric's bounds.
        let observer = ViewportObserver::new(Rect::new(0.0, 0.0, 480.0, 400.0));
        assert!(!metric.animate(&observer, 0.0, 0.0));
        assert!(!metric.is_triggered());
        assert_eq!(metric.display_value(), 0);
    }

    #[test]
    fn test_metric_counts_to_target() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        metric.animate(&AlwaysVisible, 0.0, 0.0);

        metric.animate(&AlwaysVisible, 0.6, 0.6);
        assert_eq!(metric.display_value(), 88);

        metric.animate(&AlwaysVisible, 1.2, 0.6);
        assert_eq!(metric.display_value(), 100);
        assert!(metric.is_complete());
        assert!((metric.bar_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_delay_holds_zero() {
        let mut metric = laid_out(MetricDisplay::new(50.0, "x").delay(0.5));
        metric.animate(&AlwaysVisible, 0.0, 0.0);

        assert!(!metric.animate(&AlwaysVisible, 0.3, 0.3));
        assert_eq!(metric.display_value(), 0);

        metric.animate(&AlwaysVisible, 2.0, 1.7);
        assert_eq!(metric.display_value(), 50);
    }

    #[test]
    fn test_metric_no_restart_on_reentry() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        let mut observer = ViewportObserver::new(Rect::new(0.0, 560.0, 480.0, 400.0));

        metric.animate(&observer, 0.0, 0.0);
        metric.animate(&observer, 1.2, 1.2);
        assert_eq!(metric.display_value(), 100);

        // Scroll away, then back: the count must stay finished.
        observer.set_viewport(Rect::new(0.0, 0.0, 480.0, 400.0));
        metric.animate(&observer, 2.0, 0.8);
        observer.set_viewport(Rect::new(0.0, 560.0, 480.0, 400.0));
        let changed = metric.animate(&observer, 3.0, 1.0);
        assert!(!changed);
        assert_eq!(metric.display_value(), 100);
    }

    #[test]
    fn test_metric_idle_frames_report_no_change() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        metric.animate(&AlwaysVisible, 0.0, 0.0);
        metric.animate(&AlwaysVisible, 2.0, 2.0);

        assert!(!metric.animate(&AlwaysVisible, 2.016, 0.016));
        assert!(!metric.animate(&AlwaysVisible, 2.032, 0.016));
    }

    #[test]
    fn test_metric_paint_value_and_label() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "Respeto al medio ambiente"));
        metric.animate(&AlwaysVisible, 0.0, 0.0);
        metric.animate(&AlwaysVisible, 0.6, 0.6);

        let mut canvas = RecordingCanvas::new();
        metric.paint(&mut canvas);

        let texts: Vec<&str> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["88%", "Respeto al medio ambiente"]);
    }

    #[test]
    fn test_metric_paint_bar_fill_tracks_value() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));
        metric.animate(&AlwaysVisible, 0.0, 0.0);
        metric.animate(&AlwaysVisible, 0.6, 0.6);

        let mut canvas = RecordingCanvas::new();
        metric.paint(&mut canvas);

        // Command order: value text, track, fill, label text.
        let bars: Vec<&Rect> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { bounds, .. } => Some(bounds),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 2);
        let expected = bars[0].width * 0.875;
        assert!((bars[1].width - expected).abs() < 0.5);
    }

    #[test]
    fn test_metric_paint_before_trigger_has_empty_bar() {
        let mut metric = laid_out(MetricDisplay::new(100.0, "x"));

        let mut canvas = RecordingCanvas::new();
        metric.paint(&mut canvas);

        let bars = canvas
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(bars, 1, "only the track is painted at zero");
    }

    #[test]
    fn test_metric_target_above_100_caps_bar_not_text() {
        let mut metric = laid_out(MetricDisplay::new(140.0, "x"));
        metric.animate(&AlwaysVisible, 0.0, 0.0);
        metric.animate(&AlwaysVisible, 2.0, 2.0);
        assert_eq!(metric.display_value(), 140);
        assert!((metric.bar_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_metric_accessibility() {
        let metric = MetricDisplay::new(100.0, "Respeto al medio ambiente");
        assert_eq!(metric.accessible_role(), AccessibleRole::ProgressBar);
        assert_eq!(
            metric.accessible_name(),
            Some("Respeto al medio ambiente")
        );
    }
}

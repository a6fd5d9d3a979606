//! Value animation: easing curves and time-driven interpolation.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => Self::ease_out_quad(t),
            Self::EaseInOut => Self::ease_in_out_quad(t),
            Self::CubicOut => Self::ease_out_cubic(t),
            Self::CubicInOut => Self::ease_in_out_cubic(t),
        }
    }

    fn ease_out_quad(t: f64) -> f64 {
        (1.0 - t).mul_add(-(1.0 - t), 1.0)
    }

    fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
        }
    }

    fn ease_out_cubic(t: f64) -> f64 {
        1.0 - (1.0 - t).powi(3)
    }

    fn ease_in_out_cubic(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
        }
    }
}

// =============================================================================
// EasedValue - Duration-Based Animated Value
// =============================================================================

/// An easing-based animated value driven by frame deltas.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds (excluding the delay)
    pub duration: f64,
    /// Time to wait before interpolation starts
    pub delay: f64,
    /// Elapsed time including the delay window
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set a start delay in seconds. The value holds at `from` until the
    /// delay has elapsed.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.to - self.from).mul_add(self.easing.apply(self.progress()), self.from)
    }

    /// Progress from 0.0 to 1.0 (0.0 while the delay is running).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let active = (self.elapsed - self.delay).max(0.0);
        if self.duration > 0.0 {
            (active / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.delay + self.duration);
    }
}

// =============================================================================
// CountUp - Animated Metric Counter
// =============================================================================

/// Default duration of a metric count-up, in seconds.
pub const COUNT_UP_DURATION: f64 = 1.2;

/// A percentage counter that animates from 0 to a target with an ease-out
/// cubic curve, publishing the rounded value only when it changes.
///
/// The counter is timestamp-driven: [`CountUp::trigger`] captures the start
/// time, and each [`CountUp::tick`] recomputes the interpolated value from
/// the current clock. Triggering is one-shot — later calls are ignored, so a
/// counter never restarts within its lifetime.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    duration: f64,
    delay: f64,
    started_at: Option<f64>,
    current: f64,
    display: i64,
    completed: bool,
}

impl CountUp {
    /// Create a counter toward the given target.
    ///
    /// The target is captured once and never revalidated; negative or
    /// out-of-range values interpolate as given.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration: COUNT_UP_DURATION,
            delay: 0.0,
            started_at: None,
            current: 0.0,
            display: 0,
            completed: false,
        }
    }

    /// Set the animation duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the delay before interpolation starts, in seconds.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Start the run at the given timestamp. Only the first call has any
    /// effect.
    pub fn trigger(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Whether the run has been started.
    #[must_use]
    pub const fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the run has reached its target.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// The interpolation target.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// The delay before interpolation starts.
    #[must_use]
    pub const fn delay(&self) -> f64 {
        self.delay
    }

    /// The current interpolated value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.current
    }

    /// The rounded value last published for display.
    #[must_use]
    pub const fn display_value(&self) -> i64 {
        self.display
    }

    /// The bar fill fraction: the current value clamped to [0, 100], over
    /// 100. Unlike the displayed text, the bar never exceeds its track.
    #[must_use]
    pub fn bar_fraction(&self) -> f64 {
        self.current.clamp(0.0, 100.0) / 100.0
    }

    /// Recompute the value for the given timestamp.
    ///
    /// Returns `Some(display)` when the rounded value changed and the
    /// display should be updated, `None` otherwise — including before the
    /// trigger and during the delay window.
    pub fn tick(&mut self, now: f64) -> Option<i64> {
        let started_at = self.started_at?;
        let active = now - started_at - self.delay;
        if active < 0.0 {
            return None;
        }

        let progress = if self.duration > 0.0 {
            Easing::CubicOut.apply(active / self.duration)
        } else {
            1.0
        };
        self.current = self.target * progress;
        if active >= self.duration {
            self.completed = true;
        }

        let rounded = self.current.round() as i64;
        if rounded == self.display {
            None
        } else {
            self.display = rounded;
            Some(rounded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Easing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_linear() {
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert!((Easing::Linear.apply(-0.5) - 0.0).abs() < 0.001);
        assert!((Easing::Linear.apply(1.5) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_easing_ease_out_above_linear_at_midpoint() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::CubicOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_easing_cubic_out_formula() {
        // 1 - (1 - 0.5)^3 = 0.875
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicOut,
            Easing::CubicInOut,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() < 1e-9);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_ease_out_cubic_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Easing::CubicOut.apply(lo) <= Easing::CubicOut.apply(hi));
        }

        #[test]
        fn prop_ease_out_cubic_no_overshoot(t in -1.0f64..2.0) {
            let v = Easing::CubicOut.apply(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    // -------------------------------------------------------------------------
    // EasedValue tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_eased_value_new() {
        let eased = EasedValue::new(0.0, 100.0, 1.0);
        assert!((eased.value() - 0.0).abs() < 0.001);
        assert!(!eased.is_complete());
    }

    #[test]
    fn test_eased_value_complete() {
        let mut eased = EasedValue::new(0.0, 100.0, 1.0);
        eased.update(2.0);
        assert!(eased.is_complete());
        assert!((eased.value() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_eased_value_holds_during_delay() {
        let mut eased = EasedValue::new(0.0, 1.0, 0.6).with_delay(0.5);
        eased.update(0.4);
        assert!((eased.value() - 0.0).abs() < 1e-9);
        assert!((eased.progress() - 0.0).abs() < 1e-9);
        assert!(!eased.is_complete());

        eased.update(0.7);
        assert!(eased.value() > 0.0);
        eased.update(1.0);
        assert!(eased.is_complete());
    }

    #[test]
    fn test_eased_value_zero_duration() {
        let eased = EasedValue::new(0.0, 100.0, 0.0);
        assert!((eased.value() - 100.0).abs() < 0.001);
    }

    // -------------------------------------------------------------------------
    // CountUp tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_count_up_initial_state() {
        let counter = CountUp::new(100.0);
        assert!(!counter.is_triggered());
        assert!(!counter.is_complete());
        assert_eq!(counter.display_value(), 0);
        assert_eq!(counter.value(), 0.0);
    }

    #[test]
    fn test_count_up_no_updates_before_trigger() {
        let mut counter = CountUp::new(100.0);
        assert!(counter.tick(10.0).is_none());
        assert_eq!(counter.display_value(), 0);
    }

    #[test]
    fn test_count_up_midpoint_value() {
        // target=100, duration=1.2: at t=0.6, progress = 1-(1-0.5)^3 = 0.875
        let mut counter = CountUp::new(100.0);
        counter.trigger(0.0);

        assert!(counter.tick(0.0).is_none());
        assert_eq!(counter.display_value(), 0);

        let published = counter.tick(0.6);
        assert_eq!(published, Some(88));
        assert!((counter.value() - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_count_up_completes_at_target() {
        let mut counter = CountUp::new(100.0);
        counter.trigger(0.0);
        counter.tick(1.2);
        assert!(counter.is_complete());
        assert_eq!(counter.display_value(), 100);
        assert!((counter.bar_fraction() - 1.0).abs() < 1e-9);

        // Ticks past the end hold the final value.
        assert!(counter.tick(5.0).is_none());
        assert_eq!(counter.display_value(), 100);
    }

    #[test]
    fn test_count_up_delay_holds_at_zero() {
        let mut counter = CountUp::new(50.0).with_delay(0.5);
        counter.trigger(0.0);

        assert!(counter.tick(0.2).is_none());
        assert!(counter.tick(0.49).is_none());
        assert_eq!(counter.display_value(), 0);

        assert!(counter.tick(0.8).is_some());
        assert!(counter.display_value() > 0);
    }

    #[test]
    fn test_count_up_trigger_is_one_shot() {
        let mut counter = CountUp::new(100.0);
        counter.trigger(0.0);
        counter.tick(0.6);
        let mid = counter.display_value();

        // A second trigger must not restart the run.
        counter.trigger(0.6);
        counter.tick(0.61);
        assert!(counter.display_value() >= mid);
    }

    #[test]
    fn test_count_up_publishes_only_on_rounded_change() {
        let mut counter = CountUp::new(100.0);
        counter.trigger(0.0);

        counter.tick(0.6);
        // A tiny step that doesn't move the rounded value publishes nothing.
        assert!(counter.tick(0.6 + 1e-7).is_none());
    }

    #[test]
    fn test_count_up_display_exceeds_100_but_bar_caps() {
        let mut counter = CountUp::new(140.0);
        counter.trigger(0.0);
        counter.tick(2.0);
        assert_eq!(counter.display_value(), 140);
        assert!((counter.bar_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_up_negative_target_interpolates() {
        let mut counter = CountUp::new(-40.0);
        counter.trigger(0.0);
        counter.tick(2.0);
        assert_eq!(counter.display_value(), -40);
        assert!((counter.bar_fraction() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_up_zero_duration_jumps_to_target() {
        let mut counter = CountUp::new(75.0).with_duration(0.0);
        counter.trigger(0.0);
        assert_eq!(counter.tick(0.0), Some(75));
        assert!(counter.is_complete());
    }

    proptest! {
        #[test]
        fn prop_count_up_reaches_rounded_target(target in 0.0f64..10_000.0) {
            let mut counter = CountUp::new(target);
            counter.trigger(0.0);
            counter.tick(COUNT_UP_DURATION + 1.0);
            prop_assert_eq!(counter.display_value(), target.round() as i64);
        }

        #[test]
        fn prop_count_up_monotonic_non_decreasing(
            target in 0.0f64..1_000.0,
            steps in proptest::collection::vec(0.001f64..0.1, 1..60),
        ) {
            let mut counter = CountUp::new(target);
            counter.trigger(0.0);

            let mut now = 0.0;
            let mut last = counter.value();
            for dt in steps {
                now += dt;
                counter.tick(now);
                prop_assert!(counter.value() >= last);
                prop_assert!(counter.value() <= target);
                last = counter.value();
            }
        }

        #[test]
        fn prop_count_up_never_publishes_same_value_twice(
            steps in proptest::collection::vec(0.0001f64..0.05, 1..100),
        ) {
            let mut counter = CountUp::new(100.0);
            counter.trigger(0.0);

            let mut now = 0.0;
            let mut last_published = None;
            for dt in steps {
                now += dt;
                if let Some(published) = counter.tick(now) {
                    prop_assert_ne!(Some(published), last_published);
                    last_published = Some(published);
                }
            }
        }
    }
}

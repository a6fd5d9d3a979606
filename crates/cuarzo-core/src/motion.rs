//! Frame scheduling and viewport visibility.
//!
//! Both concerns are modeled as capability traits so the site can run
//! against the browser's `requestAnimationFrame` / scroll position in
//! production and against deterministic, synchronously-driven fakes in
//! tests.

use crate::geometry::Rect;

// =============================================================================
// Frame Scheduling
// =============================================================================

/// A frame callback: receives the frame timestamp in seconds and returns
/// whether it wants another frame.
pub type FrameCallback = Box<dyn FnMut(f64) -> bool>;

/// Token returned by [`FrameScheduler::schedule`]; cancelling it guarantees
/// the callback never fires again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelToken(u64);

impl CancelToken {
    /// Create a token from a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Capability trait for driving per-frame callbacks.
pub trait FrameScheduler {
    /// Register a callback to run on every frame until it returns false or
    /// is cancelled.
    fn schedule(&mut self, callback: FrameCallback) -> CancelToken;

    /// Unregister a callback. Cancelling an unknown or already-finished
    /// token is a no-op.
    fn cancel(&mut self, token: CancelToken);
}

/// Deterministic scheduler for tests and native builds.
///
/// Frames do not run on their own; each [`ManualFrameScheduler::advance`]
/// call moves the clock forward and fires every registered callback once,
/// in registration order. Time is strictly monotonic.
#[derive(Default)]
pub struct ManualFrameScheduler {
    next_id: u64,
    now: f64,
    callbacks: Vec<(CancelToken, FrameCallback)>,
}

impl ManualFrameScheduler {
    /// Create a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current clock value in seconds.
    #[must_use]
    pub const fn now(&self) -> f64 {
        self.now
    }

    /// Number of callbacks still registered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.callbacks.len()
    }

    /// Advance the clock by `dt` seconds and run one frame.
    ///
    /// Callbacks that return false are dropped and never fire again.
    pub fn advance(&mut self, dt: f64) {
        self.now += dt.max(0.0);
        let now = self.now;

        let mut callbacks = std::mem::take(&mut self.callbacks);
        callbacks.retain_mut(|(_, callback)| callback(now));
        // Callbacks scheduled from inside a frame start on the next frame.
        callbacks.append(&mut self.callbacks);
        self.callbacks = callbacks;
    }

    /// Run `frames` frames of `dt` seconds each.
    pub fn run(&mut self, frames: usize, dt: f64) {
        for _ in 0..frames {
            self.advance(dt);
        }
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn schedule(&mut self, callback: FrameCallback) -> CancelToken {
        let token = CancelToken::new(self.next_id);
        self.next_id += 1;
        self.callbacks.push((token, callback));
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        self.callbacks.retain(|(t, _)| *t != token);
    }
}

// =============================================================================
// Viewport Visibility
// =============================================================================

/// Capability trait for querying how much of a region is visible.
pub trait VisibilityObserver {
    /// Fraction of `bounds` currently inside the visible viewport, in
    /// [0.0, 1.0]. Empty bounds report 0.0.
    fn visible_fraction(&self, bounds: Rect) -> f32;
}

/// Observer backed by a concrete viewport rectangle in document coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ViewportObserver {
    viewport: Rect,
}

impl ViewportObserver {
    /// Create an observer for the given viewport.
    #[must_use]
    pub const fn new(viewport: Rect) -> Self {
        Self { viewport }
    }

    /// Move the viewport (scrolling, resizing).
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// The current viewport rectangle.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }
}

impl VisibilityObserver for ViewportObserver {
    fn visible_fraction(&self, bounds: Rect) -> f32 {
        let area = bounds.area();
        if area <= 0.0 {
            return 0.0;
        }
        bounds
            .intersection(&self.viewport)
            .map_or(0.0, |overlap| overlap.area() / area)
    }
}

/// Observer that reports everything as fully visible. Useful in test
/// environments where no layout/scroll pass runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl VisibilityObserver for AlwaysVisible {
    fn visible_fraction(&self, _bounds: Rect) -> f32 {
        1.0
    }
}

// =============================================================================
// ViewTrigger - Fire Once On Entry
// =============================================================================

/// Fires exactly once, the first time the observed region reaches the
/// visibility threshold. Later exits and re-entries are ignored.
#[derive(Debug, Clone, Copy)]
pub struct ViewTrigger {
    threshold: f32,
    fired: bool,
}

impl ViewTrigger {
    /// The default visibility threshold: 30% of the region's area.
    pub const DEFAULT_THRESHOLD: f32 = 0.3;

    /// Create a trigger with the given threshold in [0.0, 1.0].
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Whether the trigger has already fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }

    /// Check visibility and fire if the threshold is reached for the first
    /// time. Returns true only on the firing call.
    pub fn check(&mut self, observer: &dyn VisibilityObserver, bounds: Rect) -> bool {
        if self.fired {
            return false;
        }
        if observer.visible_fraction(bounds) >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}

impl Default for ViewTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

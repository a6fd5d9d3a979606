//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create constraints with a fixed width and unbounded height.
    ///
    /// This is the document-flow case: page content fills the window width
    /// and grows downward as far as it needs.
    #[must_use]
    pub fn fixed_width(width: f32) -> Self {
        Self::new(width, width, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Check if width is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Check if height is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Deflate constraints by uniform padding on all sides.
    #[must_use]
    pub fn deflate(&self, padding: f32) -> Self {
        Self::new(
            (self.min_width - 2.0 * padding).max(0.0),
            (self.max_width - 2.0 * padding).max(0.0),
            (self.min_height - 2.0 * padding).max(0.0),
            (self.max_height - 2.0 * padding).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(100.0, 50.0));
        assert!(c.is_tight());
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_constraints_loose() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert!(!c.is_tight());
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(10.0, 10.0));
        assert_eq!(c.constrain(Size::new(200.0, 10.0)), Size::new(100.0, 10.0));
    }

    #[test]
    fn test_constraints_fixed_width() {
        let c = Constraints::fixed_width(800.0);
        assert!(c.has_bounded_width());
        assert!(!c.has_bounded_height());
        let s = c.constrain(Size::new(100.0, 4000.0));
        assert_eq!(s.width, 800.0);
        assert_eq!(s.height, 4000.0);
    }

    #[test]
    fn test_constraints_deflate() {
        let c = Constraints::new(10.0, 100.0, 10.0, 100.0).deflate(10.0);
        assert_eq!(c.min_width, 0.0);
        assert_eq!(c.max_width, 80.0);
        assert_eq!(c.max_height, 80.0);
    }

    #[test]
    fn test_constraints_deflate_never_negative() {
        let c = Constraints::loose(Size::new(10.0, 10.0)).deflate(20.0);
        assert_eq!(c.max_width, 0.0);
        assert_eq!(c.max_height, 0.0);
    }
}

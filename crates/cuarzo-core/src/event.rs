//! Input events delivered to widgets.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Right button
    Right,
    /// Middle button
    Middle,
}

/// Keyboard key (subset used by the site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Arrow up
    ArrowUp,
    /// Arrow down
    ArrowDown,
    /// A printable character
    Char(char),
}

/// Input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer click.
    Click {
        /// Position in document coordinates
        position: Point,
        /// Which button was pressed
        button: MouseButton,
    },
    /// Pointer movement.
    MouseMove {
        /// Position in document coordinates
        position: Point,
    },
    /// Key press.
    KeyDown {
        /// The pressed key
        key: Key,
    },
    /// Scroll by a vertical delta (positive = down).
    Scroll {
        /// Vertical delta in pixels
        delta_y: f32,
    },
    /// Window/viewport resized.
    Resize {
        /// New viewport size
        size: Size,
    },
}

impl Event {
    /// Create a left-button click event.
    #[must_use]
    pub fn click(x: f32, y: f32) -> Self {
        Self::Click {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// The pointer position, if this event carries one.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Click { position, .. } | Self::MouseMove { position } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_helper() {
        let e = Event::click(10.0, 20.0);
        assert_eq!(e.position(), Some(Point::new(10.0, 20.0)));
        match e {
            Event::Click { button, .. } => assert_eq!(button, MouseButton::Left),
            _ => panic!("Expected click"),
        }
    }

    #[test]
    fn test_position_absent_for_scroll() {
        let e = Event::Scroll { delta_y: 120.0 };
        assert!(e.position().is_none());
    }

    #[test]
    fn test_event_serde_round_trip() {
        let e = Event::KeyDown { key: Key::Escape };
        let json = serde_json::to_string(&e).expect("serializes");
        let back: Event = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, e);
    }
}

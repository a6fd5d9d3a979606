//! Core types and traits for the Cuarzo site framework.
//!
//! This crate provides the foundations the widget and site crates build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Value animation: [`Easing`], [`EasedValue`], [`CountUp`]
//! - Frame scheduling and visibility: [`FrameScheduler`], [`VisibilityObserver`]
//! - Events and Elm-style state: [`Event`], [`State`], [`Command`]

mod animation;
mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
mod motion;
mod state;
pub mod widget;

pub use animation::{CountUp, EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, Shadow, StrokeStyle, Transform2D};
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use motion::{
    AlwaysVisible, CancelToken, FrameCallback, FrameScheduler, ManualFrameScheduler, ViewTrigger,
    ViewportObserver, VisibilityObserver,
};
pub use state::{Command, MenuMessage, MenuState, State, Store};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};

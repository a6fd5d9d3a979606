//! Widget implementations for the Cuarzo site.

pub mod column;
pub mod container;
pub mod image;
pub mod metric;
pub mod nav_bar;
pub mod reveal;
pub mod row;
pub mod text;

pub use column::Column;
pub use container::Container;
pub use image::{Image, ImageFit};
pub use metric::MetricDisplay;
pub use nav_bar::{NavBar, NavLinkClicked, NavSection};
pub use reveal::Reveal;
pub use row::{CrossAxisAlignment, MainAxisAlignment, Row};
pub use text::Text;

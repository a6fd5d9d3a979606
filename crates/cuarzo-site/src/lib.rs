//! Marketing site for Cuarzo 24 S.A.
//!
//! A canvas-rendered single-page site: five routed pages, a fixed
//! navigation header, scroll-triggered entrances, and the animated energy
//! metric on the services page. Native builds drive frames through
//! [`cuarzo_core::ManualFrameScheduler`]; the WASM build is driven by the
//! browser's animation-frame loop.

pub mod app;
pub mod pages;
pub mod router;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use app::{SiteApp, SiteRunner};
pub use router::{HistoryRouter, Page, RouteTable};
pub use theme::Theme;

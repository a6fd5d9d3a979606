//! Application shell: wires the router, header, pages, and frame loop.

use crate::pages;
use crate::router::{HistoryRouter, Page};
use crate::theme::Theme;
use cuarzo_core::{
    CancelToken, Canvas, Command, Constraints, DrawCommand, Event, FrameScheduler,
    ManualFrameScheduler, Point, Rect, RecordingCanvas, Size, Transform2D, ViewportObserver,
    Widget,
};
use cuarzo_widgets::{NavBar, NavLinkClicked};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Height of the fixed header: bar plus accent line.
const HEADER_OFFSET: f32 = 68.0;

/// The running site: current page, fixed header, scroll position.
///
/// Content is laid out in document coordinates starting below the header;
/// the viewport (and with it every visibility trigger) follows the scroll
/// position. Navigating rebuilds the page tree, which re-arms all
/// scroll-triggered animations, and resets the scroll to the top.
pub struct SiteApp {
    router: HistoryRouter,
    theme: Theme,
    nav: NavBar,
    page: Page,
    content: Box<dyn Widget>,
    window: Size,
    scroll_y: f32,
    content_height: f32,
    last_frame: Option<f64>,
    needs_paint: bool,
}

impl SiteApp {
    /// Create the app for a window size, mounted on the router's current
    /// route.
    #[must_use]
    pub fn new(window: Size) -> Self {
        let theme = Theme::cuarzo();
        let router = HistoryRouter::new();
        let page = router.current_page();
        let mut nav = NavBar::standard().colors(theme.nav, theme.accent, theme.on_nav);
        nav.set_active_path(&router.pathname());
        let content = pages::build(page, &theme);

        let mut app = Self {
            router,
            theme,
            nav,
            page,
            content,
            window,
            scroll_y: 0.0,
            content_height: 0.0,
            last_frame: None,
            needs_paint: true,
        };
        app.relayout();
        app
    }

    /// The current page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The current route path.
    #[must_use]
    pub fn pathname(&self) -> String {
        self.router.pathname()
    }

    /// The current scroll offset.
    #[must_use]
    pub const fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Total document height including the header band.
    #[must_use]
    pub const fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Whether the last change has not been painted yet.
    #[must_use]
    pub const fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// The fixed navigation header.
    #[must_use]
    pub const fn nav(&self) -> &NavBar {
        &self.nav
    }

    /// The current page's widget tree.
    #[must_use]
    pub fn content(&self) -> &dyn Widget {
        self.content.as_ref()
    }

    /// The visible region in document coordinates.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.window.width, self.window.height)
    }

    /// Navigate to a path, pushing a history entry. Every route change also
    /// scrolls back to the top.
    pub fn navigate(&mut self, path: &str) {
        self.run_command(Command::batch([
            Command::Navigate {
                route: path.to_string(),
            },
            Command::ScrollToTop,
        ]));
    }

    /// Go back in history.
    pub fn back(&mut self) {
        self.router.back();
        self.sync_route();
    }

    /// Go forward in history.
    pub fn forward(&mut self) {
        self.router.forward();
        self.sync_route();
    }

    /// Re-read the route from the router (browser popstate).
    pub fn sync_route(&mut self) {
        let page = self.router.current_page();
        if page == self.page {
            self.nav.set_active_path(&self.router.pathname());
        } else {
            self.mount(page);
            self.run_command(Command::ScrollToTop);
        }
    }

    /// Execute a state command.
    fn run_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.run_command(command);
                }
            }
            Command::Navigate { route } => {
                self.router.push(&route);
                self.mount(self.router.current_page());
            }
            Command::ScrollToTop => {
                self.scroll_y = 0.0;
                self.needs_paint = true;
            }
        }
    }

    /// Handle an input event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Resize { size } => {
                self.window = *size;
                self.relayout();
                return;
            }
            Event::Scroll { delta_y } => {
                self.scroll_y += delta_y;
                self.clamp_scroll();
                self.needs_paint = true;
                return;
            }
            _ => {}
        }

        // The header is fixed, so screen coordinates hit it directly.
        if let Some(message) = self.nav.event(event) {
            if let Ok(clicked) = message.downcast::<NavLinkClicked>() {
                self.navigate(&clicked.href);
                return;
            }
        } else {
            // A menu toggle changes the header's hit targets.
            self.nav
                .layout(Rect::new(0.0, 0.0, self.window.width, HEADER_OFFSET));
        }

        // Content lives in document coordinates: shift pointer events by the
        // scroll offset.
        let translated = match event {
            Event::Click { position, button } => Event::Click {
                position: Point::new(position.x, position.y + self.scroll_y),
                button: *button,
            },
            Event::MouseMove { position } => Event::MouseMove {
                position: Point::new(position.x, position.y + self.scroll_y),
            },
            other => other.clone(),
        };
        self.content.event(&translated);
        self.needs_paint = true;
    }

    /// Advance one frame. Returns true if anything changed.
    pub fn frame(&mut self, now: f64) -> bool {
        let dt = self.last_frame.map_or(0.0, |last| (now - last).max(0.0));
        self.last_frame = Some(now);

        let observer = ViewportObserver::new(self.viewport());
        let mut changed = self.nav.animate(&observer, now, dt);
        changed |= self.content.animate(&observer, now, dt);
        if changed {
            self.needs_paint = true;
        }
        changed
    }

    /// Paint the visible frame and clear the dirty flag.
    pub fn paint(&mut self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();

        canvas.fill_rect(Rect::from_size(self.window), self.theme.surface);

        canvas.push_transform(Transform2D::translate(0.0, -self.scroll_y));
        self.content.paint(&mut canvas);
        canvas.pop_transform();

        // Fixed header paints above the scrolled content.
        self.nav.paint(&mut canvas);

        self.needs_paint = false;
        canvas.take_commands()
    }

    fn mount(&mut self, page: Page) {
        self.page = page;
        self.content = pages::build(page, &self.theme);
        self.nav.set_active_path(&self.router.pathname());
        self.nav.close_menu();
        self.relayout();
    }

    fn relayout(&mut self) {
        self.nav
            .layout(Rect::new(0.0, 0.0, self.window.width, HEADER_OFFSET));

        let size = self
            .content
            .measure(Constraints::fixed_width(self.window.width));
        let result = self
            .content
            .layout(Rect::new(0.0, HEADER_OFFSET, self.window.width, size.height));
        self.content_height = result.size.height + HEADER_OFFSET;

        self.clamp_scroll();
        self.needs_paint = true;
    }

    fn clamp_scroll(&mut self) {
        let max = (self.content_height - self.window.height).max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, max);
    }
}

/// Owns a [`SiteApp`] together with the frame scheduler driving it.
///
/// The repeating frame callback is registered with a [`CancelToken`];
/// stopping the runner (or dropping it) cancels the token, after which no
/// tick can reach the app again.
pub struct SiteRunner {
    scheduler: ManualFrameScheduler,
    app: Rc<RefCell<SiteApp>>,
    frame_token: Option<CancelToken>,
}

impl SiteRunner {
    /// Create a stopped runner.
    #[must_use]
    pub fn new(window: Size) -> Self {
        Self {
            scheduler: ManualFrameScheduler::new(),
            app: Rc::new(RefCell::new(SiteApp::new(window))),
            frame_token: None,
        }
    }

    /// Register the repeating frame callback.
    pub fn start(&mut self) {
        if self.frame_token.is_some() {
            return;
        }
        let app = Rc::clone(&self.app);
        self.frame_token = Some(self.scheduler.schedule(Box::new(move |now| {
            app.borrow_mut().frame(now);
            true
        })));
    }

    /// Cancel the frame callback. Pending ticks never reach the app again.
    pub fn stop(&mut self) {
        if let Some(token) = self.frame_token.take() {
            self.scheduler.cancel(token);
        }
    }

    /// Whether the frame callback is registered.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.frame_token.is_some()
    }

    /// Drive one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.scheduler.advance(dt);
    }

    /// Borrow the app.
    ///
    /// # Panics
    ///
    /// Panics if called while a frame is being driven.
    #[must_use]
    pub fn app(&self) -> Ref<'_, SiteApp> {
        self.app.borrow()
    }

    /// Borrow the app mutably.
    ///
    /// # Panics
    ///
    /// Panics if called while a frame is being driven.
    #[must_use]
    pub fn app_mut(&self) -> RefMut<'_, SiteApp> {
        self.app.borrow_mut()
    }
}

impl Drop for SiteRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

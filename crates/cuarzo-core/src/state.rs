//! State management for the site.
//!
//! Implements the Elm Architecture pattern for predictable state management:
//! `State + Message → (State, Command)`.

use serde::{Deserialize, Serialize};

/// Application state trait.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command for side effects (navigation, scrolling).
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Commands for side effects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command>),
    /// Navigate to a route
    Navigate {
        /// Route path
        route: String,
    },
    /// Scroll the document back to the top
    ScrollToTop,
}

impl Command {
    /// Create a batch of commands.
    #[must_use]
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Header menu state: the mobile navigation drawer's open flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MenuState {
    /// Whether the mobile menu is open
    pub open: bool,
}

/// Messages for the header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// Toggle the menu open/closed
    Toggle,
    /// Close the menu (selecting a link, pressing Escape)
    Close,
}

impl State for MenuState {
    type Message = MenuMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            MenuMessage::Toggle => self.open = !self.open,
            MenuMessage::Close => self.open = false,
        }
        Command::None
    }
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Store manages a piece of state and notifies subscribers on change.
pub struct Store<S: State> {
    state: S,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State> Store<S> {
    /// Create a new store with initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Get current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch a message to update state.
    pub fn dispatch(&mut self, msg: S::Message) -> Command {
        let cmd = self.state.update(msg);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        cmd
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let mut state = MenuState::default();
        assert!(!state.open);
        state.update(MenuMessage::Toggle);
        assert!(state.open);
        state.update(MenuMessage::Toggle);
        assert!(!state.open);
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let mut state = MenuState { open: true };
        state.update(MenuMessage::Close);
        assert!(!state.open);
        state.update(MenuMessage::Close);
        assert!(!state.open);
    }

    #[test]
    fn test_command_none() {
        assert!(Command::None.is_none());
        assert!(Command::default().is_none());
    }

    #[test]
    fn test_command_batch() {
        let cmd = Command::batch([
            Command::Navigate {
                route: "/servicios".to_string(),
            },
            Command::ScrollToTop,
        ]);
        match cmd {
            Command::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_menu_state_serialization() {
        let state = MenuState { open: true };
        let json = serde_json::to_string(&state).expect("serializes");
        let loaded: MenuState = serde_json::from_str(&json).expect("deserializes");
        assert!(loaded.open);
    }

    #[test]
    fn test_store_dispatch_notifies_subscribers() {
        use std::sync::atomic::{AtomicI32, Ordering};
        use std::sync::Arc;

        let call_count = Arc::new(AtomicI32::new(0));
        let call_count_clone = call_count.clone();

        let mut store = Store::new(MenuState::default());
        store.subscribe(move |_| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(MenuMessage::Toggle);
        store.dispatch(MenuMessage::Close);

        assert_eq!(call_count.load(Ordering::SeqCst), 2);
        assert!(!store.state().open);
    }
}

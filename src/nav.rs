//! Routes and navigation
//!
//! Clients never touch the browser location directly; they ask a
//! [`Navigator`] to move to a [`Route`]. The browser front end implements it
//! over `window.location`, the terminal front end and tests use
//! [`RecordingNavigator`].

use parking_lot::Mutex;
use std::sync::Arc;

/// Client-side routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Credential form. Never guarded.
    Login,
    /// Chat window. Guarded.
    Chat,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Chat => "/",
        }
    }

    /// Map a location path to a route. Unknown paths are treated as the
    /// protected chat route so they stay behind the guard.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            _ => Route::Chat,
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Moves the user between routes.
pub trait Navigator {
    /// Full navigation to `route`, discarding in-memory view state.
    fn navigate(&self, route: Route);

    /// Replace the current entry with `route`. Defaults to a full navigation.
    fn replace(&self, route: Route) {
        self.navigate(route);
    }
}

/// Navigator that only records where it was sent. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to, oldest first.
    pub fn visits(&self) -> Vec<Route> {
        self.visits.lock().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visits.lock().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "Navigate");
        self.visits.lock().push(route);
    }
}

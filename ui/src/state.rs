//! Global application state

use crate::api::GlooBackend;
use campus_chat::types::{ClientError, Result};
use campus_chat::{
    AuthClient, AuthGuard, ChatClient, ClientConfig, HistoryPolicy, KeyValueStore, Navigator,
    Route, TokenStore,
};
use gloo_storage::{LocalStorage, Storage};

/// Session storage in `window.localStorage`, as plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|w| w.location())
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        if let Some(location) = Self::location() {
            if let Err(e) = location.set_href(route.path()) {
                tracing::error!("Navigation to {} failed: {:?}", route.path(), e);
            }
        }
    }

    fn replace(&self, route: Route) {
        if let Some(location) = Self::location() {
            if let Err(e) = location.replace(route.path()) {
                tracing::error!("Navigation to {} failed: {:?}", route.path(), e);
            }
        }
    }
}

pub type Auth = AuthClient<GlooBackend, BrowserStore, BrowserNavigator>;
pub type Chat = ChatClient<GlooBackend, BrowserStore, BrowserNavigator>;
pub type Guard = AuthGuard<GlooBackend, BrowserStore, BrowserNavigator>;

/// Clients shared through context.
#[derive(Clone)]
pub struct AppClients {
    pub auth: Auth,
    pub chat: Chat,
    pub guard: Guard,
    pub history: HistoryPolicy,
}

impl AppClients {
    /// The API URL is fixed at build time from `NEXT_PUBLIC_API_URL`.
    pub fn new() -> Self {
        let config = ClientConfig::default()
            .with_api_url_override(option_env!("NEXT_PUBLIC_API_URL").map(str::to_string));

        let auth = AuthClient::new(
            config.api_url(),
            GlooBackend,
            TokenStore::new(BrowserStore),
            BrowserNavigator,
        );

        Self {
            chat: ChatClient::new(auth.clone()),
            guard: AuthGuard::new(auth.clone(), config.guard_policy),
            history: config.history_policy(),
            auth,
        }
    }
}

impl Default for AppClients {
    fn default() -> Self {
        Self::new()
    }
}

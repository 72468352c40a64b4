//! # campus-chat - Campus assistant client
//!
//! Client-side logic for a campus chat assistant: signing in against the
//! campus API, keeping the session, guarding protected views and exchanging
//! chat messages.
//!
//! ## Overview
//!
//! The crate is front-end neutral. Everything that touches the outside world
//! sits behind a small trait:
//!
//! - [`HttpBackend`] - form and JSON POSTs (`reqwest` natively, `gloo-net` in
//!   the browser)
//! - [`KeyValueStore`] - session persistence (memory, a JSON file, or browser
//!   local storage)
//! - [`Navigator`] - moving between the login and chat views
//!
//! On top of those, [`AuthClient`], [`AuthGuard`] and [`ChatClient`] implement
//! the protocol, and [`LoginView`] / [`ChatView`] hold the state a screen
//! renders. The `campus-chat` binary and the Leptos app in `ui/` are thin
//! shells over these.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use campus_chat::{
//!     AuthClient, ChatClient, ChatView, HistoryPolicy, MemoryStore, RecordingNavigator,
//!     ReqwestBackend, TokenStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> campus_chat::Result<()> {
//!     let auth = AuthClient::new(
//!         "http://localhost:8000",
//!         ReqwestBackend::new(),
//!         TokenStore::new(MemoryStore::new()),
//!         RecordingNavigator::new(),
//!     );
//!
//!     let session = auth.login("admin", "admin123").await?;
//!     auth.store().save(&session)?;
//!
//!     let chat = ChatClient::new(auth);
//!     let mut view = ChatView::new(HistoryPolicy::default());
//!     view.set_input("Qual o horário da biblioteca?");
//!     if let Some(reply) = view.send(&chat).await {
//!         println!("{}", reply.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `native` | `reqwest` backend, file store and the `campus-chat` binary (default) |
//!
//! Build with `default-features = false` for `wasm32-unknown-unknown`.
//!
//! ## Modules
//!
//! - [`auth`] - Login, token checks and the route guard
//! - [`chat`] - Chat requests and reply parsing
//! - [`http`] - HTTP backend abstraction
//! - [`nav`] - Routes and navigation
//! - [`store`] - Session persistence
//! - [`types`] - Wire types, messages and errors
//! - [`utils`] - Configuration
//! - [`views`] - Login and chat view state

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Sign-in, token validity and the route guard.
pub mod auth;
/// Chat client and reply normalization.
pub mod chat;
/// Terminal front end.
#[cfg(feature = "native")]
pub mod cli;
/// HTTP backend abstraction.
pub mod http;
/// Routes and navigation.
pub mod nav;
/// Session persistence.
pub mod store;
/// Core types (users, messages, errors).
pub mod types;
/// Configuration.
pub mod utils;
/// Front-end-neutral view controllers.
pub mod views;

// Re-export commonly used types
pub use auth::{AuthClient, AuthGuard, GuardPolicy, GuardState};
pub use chat::ChatClient;
#[cfg(feature = "native")]
pub use http::native::ReqwestBackend;
pub use http::{HttpBackend, HttpResponse};
pub use nav::{Navigator, RecordingNavigator, Route};
#[cfg(feature = "native")]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore, TokenStore};
pub use types::{ClientError, DeliveryState, Message, MessageRole, Result, Session, User};
pub use utils::ClientConfig;
pub use views::{ChatView, HistoryPolicy, LoginView};

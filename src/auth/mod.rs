//! Client-side authentication
//!
//! This module provides the session half of the client: signing in against
//! the backend, inspecting the stored bearer token, and gating protected
//! routes.
//!
//! # Module Structure
//!
//! - [`auth::client`](crate::auth::client) - login, logout, token validity
//! - [`auth::jwt`](crate::auth::jwt) - unverified decoding of token claims
//! - [`auth::guard`](crate::auth::guard) - route gate for protected views
//!
//! # Trust Model
//!
//! Nothing here verifies a signature. The token's `exp` claim is only read
//! to avoid sending requests the server will certainly reject; the server
//! remains the authority and answers 401 when it disagrees.
//!
//! # Usage
//!
//! ```rust,ignore
//! use campus_chat::auth::AuthClient;
//!
//! let auth = AuthClient::new(config.api_url(), http, store, navigator);
//! let session = auth.login("admin", "admin123").await?;
//! auth.store().save(&session)?;
//! ```

/// Login, logout and token validity.
pub mod client;
/// Route gate for protected views.
pub mod guard;
/// Unverified JWT claim decoding.
pub mod jwt;

pub use client::{AuthClient, LOGIN_PATH};
pub use guard::{AuthGuard, GuardPolicy, GuardState, RECHECK_DELAY};

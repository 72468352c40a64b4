use super::jwt;
use crate::http::HttpBackend;
use crate::nav::{Navigator, Route};
use crate::store::{KeyValueStore, TokenStore};
use crate::types::{ClientError, ErrorDetail, LoginResponse, Result, Session};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "/auth/login";

const LOGIN_FALLBACK_ERROR: &str = "Login failed";

/// Signs users in and out.
///
/// Owns the transport, the token store and the navigator so that every
/// component reaching the backend shares the same session state.
#[derive(Debug, Clone)]
pub struct AuthClient<H, K, N> {
    api_url: String,
    http: H,
    store: TokenStore<K>,
    navigator: N,
}

impl<H, K, N> AuthClient<H, K, N>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    pub fn new(api_url: impl Into<String>, http: H, store: TokenStore<K>, navigator: N) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            http,
            store,
            navigator,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute URL for an endpoint path such as `/chat`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn store(&self) -> &TokenStore<K> {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Exchange credentials for a session.
    ///
    /// Credentials are trimmed and sent form-encoded. The session is returned,
    /// not persisted; the caller decides when to save it.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let username = username.trim();
        let url = self.endpoint(LOGIN_PATH);
        info!(username, "Signing in");

        let resp = self
            .http
            .post_form(&url, &[("username", username), ("password", password.trim())])
            .await?;

        if !resp.is_success() {
            let detail = serde_json::from_str::<ErrorDetail>(&resp.body)
                .ok()
                .and_then(|d| d.message())
                .unwrap_or_else(|| LOGIN_FALLBACK_ERROR.to_string());
            warn!(username, status = resp.status, "Login rejected: {}", detail);
            return Err(ClientError::Auth(detail));
        }

        let body: LoginResponse = resp.json()?;
        Ok(body.into())
    }

    /// Whether the stored token is still usable.
    ///
    /// Decodes the expiry claim without verifying the signature. An
    /// undecodable or expired token logs the user out. No stored token simply
    /// returns `false`.
    pub fn is_token_valid(&self) -> bool {
        self.is_token_valid_at(Utc::now())
    }

    pub fn is_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        let Some(token) = self.store.token() else {
            return false;
        };

        if jwt::is_expired_at(&token, now) {
            info!("Stored token is expired or unreadable");
            self.logout();
            return false;
        }
        true
    }

    /// Expiry of the stored token, if there is one and it decodes.
    pub fn token_expiry(&self) -> Option<DateTime<Utc>> {
        let token = self.store.token()?;
        jwt::expires_at(&token).ok()
    }

    /// Clear the session and go to the login view. Safe to call repeatedly.
    pub fn logout(&self) {
        info!("Signing out");
        self.store.clear();
        self.navigator.navigate(Route::Login);
    }

    /// Send the user to the login view without touching the session.
    pub fn redirect_to_login(&self) {
        self.navigator.replace(Route::Login);
    }

    /// Send the user to the chat view.
    pub fn redirect_to_chat(&self) {
        self.navigator.replace(Route::Chat);
    }
}

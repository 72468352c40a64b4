use crate::auth::AuthClient;
use crate::http::HttpBackend;
use crate::nav::{Navigator, Route};
use crate::store::KeyValueStore;
use crate::types::{ClientError, Result, Session};
use tracing::info;

/// Shown instead of the raw error when the server could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str = "Could not connect to the server.";

const MISSING_FIELDS_MESSAGE: &str = "Username and password are required.";

/// Credentials captured from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Text to show inline for a failed login.
pub fn login_error_message(err: &ClientError) -> String {
    if err.is_connectivity() {
        NETWORK_ERROR_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    username: String,
    password: String,
    show_password: bool,
    is_loading: bool,
    error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Inline error from the last submit, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Leave for the chat view if a token is already stored.
    ///
    /// Returns whether a redirect was issued.
    pub fn on_mount<H, K, N>(&self, auth: &AuthClient<H, K, N>) -> bool
    where
        H: HttpBackend,
        K: KeyValueStore,
        N: Navigator,
    {
        if auth.store().token().is_some() {
            auth.redirect_to_chat();
            return true;
        }
        false
    }

    /// Lock the form and hand out the credentials to send.
    ///
    /// Returns `None` while a submit is already in flight, or when a field is
    /// blank (setting the inline error).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_loading {
            return None;
        }
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.is_loading = true;
        self.error = None;
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Persist the session and go to chat, or show the error inline.
    ///
    /// Returns whether the login went through.
    pub fn complete_submit<H, K, N>(
        &mut self,
        auth: &AuthClient<H, K, N>,
        result: Result<Session>,
    ) -> bool
    where
        H: HttpBackend,
        K: KeyValueStore,
        N: Navigator,
    {
        self.is_loading = false;

        let saved = result.and_then(|session| {
            auth.store().save(&session)?;
            Ok(session)
        });

        match saved {
            Ok(session) => {
                info!(username = %session.user.username, "Signed in");
                auth.navigator().navigate(Route::Chat);
                true
            }
            Err(e) => {
                self.error = Some(login_error_message(&e));
                false
            }
        }
    }

    /// Run a full submit against `auth`.
    pub async fn submit<H, K, N>(&mut self, auth: &AuthClient<H, K, N>) -> bool
    where
        H: HttpBackend,
        K: KeyValueStore,
        N: Navigator,
    {
        let Some(creds) = self.begin_submit() else {
            return false;
        };
        let result = auth.login(&creds.username, &creds.password).await;
        self.complete_submit(auth, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::stub::StubBackend;
    use crate::nav::RecordingNavigator;
    use crate::store::{MemoryStore, TokenStore};

    type Client = AuthClient<StubBackend, MemoryStore, RecordingNavigator>;

    fn auth(http: StubBackend) -> Client {
        AuthClient::new(
            "http://api.test",
            http,
            TokenStore::new(MemoryStore::new()),
            RecordingNavigator::new(),
        )
    }

    fn filled() -> LoginView {
        let mut view = LoginView::new();
        view.set_username("admin");
        view.set_password("admin123");
        view
    }

    #[test]
    fn test_begin_submit_locks_form() {
        let mut view = filled();
        let creds = view.begin_submit().expect("should begin");
        assert_eq!(creds.username, "admin");
        assert!(view.is_loading());

        // Double submit while in flight is ignored.
        assert_eq!(view.begin_submit(), None);
    }

    #[test]
    fn test_blank_fields_are_rejected_inline() {
        let mut view = LoginView::new();
        view.set_username("admin");
        assert_eq!(view.begin_submit(), None);
        assert_eq!(view.error(), Some(MISSING_FIELDS_MESSAGE));
        assert!(!view.is_loading());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut view = LoginView::new();
        view.begin_submit();
        assert!(view.error().is_some());

        view.set_username("admin");
        view.set_password("admin123");
        view.begin_submit().unwrap();
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_connectivity_errors_get_friendly_text() {
        assert_eq!(
            login_error_message(&ClientError::Network("dns".into())),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            login_error_message(&ClientError::Auth("Incorrect username or password".into())),
            "Incorrect username or password"
        );
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut view = LoginView::new();
        assert!(!view.show_password());
        view.toggle_password_visibility();
        assert!(view.show_password());
    }

    #[tokio::test]
    async fn test_submit_success_persists_and_navigates() {
        let auth = auth(StubBackend::new().reply(
            200,
            serde_json::json!({
                "access_token": "t1",
                "token_type": "bearer",
                "user": { "username": "admin", "name": "Admin", "email": "a@x.com", "role": "staff" }
            }),
        ));
        let mut view = filled();

        assert!(view.submit(&auth).await);
        assert_eq!(auth.store().token().as_deref(), Some("t1"));
        assert_eq!(auth.store().user().map(|u| u.email), Some(Some("a@x.com".to_string())));
        assert_eq!(auth.navigator().last(), Some(Route::Chat));
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_submit_rejection_shows_detail_and_stores_nothing() {
        let auth = auth(StubBackend::new().reply(
            401,
            serde_json::json!({ "detail": "Incorrect username or password" }),
        ));
        let mut view = filled();

        assert!(!view.submit(&auth).await);
        assert_eq!(view.error(), Some("Incorrect username or password"));
        assert!(auth.store().inner().is_empty());
        assert!(auth.navigator().visits().is_empty());
    }

    #[test]
    fn test_mount_redirects_when_token_exists() {
        let auth = auth(StubBackend::new());
        let view = LoginView::new();
        assert!(!view.on_mount(&auth));

        auth.store()
            .save(&Session {
                token: "t1".into(),
                user: crate::types::User {
                    username: "admin".into(),
                    name: None,
                    email: None,
                    role: "staff".into(),
                },
            })
            .unwrap();
        assert!(view.on_mount(&auth));
        assert_eq!(auth.navigator().last(), Some(Route::Chat));
    }
}

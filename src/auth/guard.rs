use super::AuthClient;
use crate::http::HttpBackend;
use crate::nav::{Navigator, Route};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Delay before a front end re-runs the guard after the first check, to
/// tolerate a session write landing just after a login navigation.
pub const RECHECK_DELAY: Duration = Duration::from_millis(100);

/// What a protected route is allowed to require of the stored session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardPolicy {
    /// Token and user profile are present. Expiry is left for the server to
    /// enforce with a 401.
    #[default]
    Presence,
    /// Token and user are present and the token's expiry claim has not
    /// passed.
    Unexpired,
}

/// Result of a guard check, driving what the wrapper renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    /// No check has run yet. Render a placeholder.
    #[default]
    Checking,
    /// Render the protected children.
    Granted,
    /// A redirect to login was issued. Render a placeholder.
    Redirecting,
}

impl GuardState {
    pub fn renders_children(self) -> bool {
        matches!(self, GuardState::Granted)
    }
}

/// Client-side gate for protected routes.
///
/// This is a presentation guard only; it never talks to the server.
#[derive(Debug, Clone)]
pub struct AuthGuard<H, K, N> {
    auth: AuthClient<H, K, N>,
    policy: GuardPolicy,
}

impl<H, K, N> AuthGuard<H, K, N>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    pub fn new(auth: AuthClient<H, K, N>, policy: GuardPolicy) -> Self {
        Self { auth, policy }
    }

    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Run one check for `route`. Call on every render pass and once more
    /// after [`RECHECK_DELAY`].
    ///
    /// The login route always passes so an unauthenticated user is never
    /// bounced away from the only page that can fix it.
    pub fn check(&self, route: Route) -> GuardState {
        if !route.is_protected() {
            return GuardState::Granted;
        }

        if !self.auth.store().has_session() {
            debug!(path = route.path(), "No session, redirecting to login");
            self.auth.redirect_to_login();
            return GuardState::Redirecting;
        }

        // An invalid token logs out, which already navigates to login.
        if self.policy == GuardPolicy::Unexpired && !self.auth.is_token_valid() {
            return GuardState::Redirecting;
        }

        GuardState::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::tests::make_token;
    use crate::http::stub::StubBackend;
    use crate::nav::RecordingNavigator;
    use crate::store::{MemoryStore, TokenStore, TOKEN_KEY};
    use crate::types::{Session, User};
    use chrono::Utc;

    fn guard(policy: GuardPolicy) -> AuthGuard<StubBackend, MemoryStore, RecordingNavigator> {
        let auth = AuthClient::new(
            "http://api.test",
            StubBackend::new(),
            TokenStore::new(MemoryStore::new()),
            RecordingNavigator::new(),
        );
        AuthGuard::new(auth, policy)
    }

    fn sign_in(guard: &AuthGuard<StubBackend, MemoryStore, RecordingNavigator>, token: &str) {
        guard
            .auth
            .store()
            .save(&Session {
                token: token.to_string(),
                user: User {
                    username: "admin".into(),
                    name: Some("Admin".into()),
                    email: None,
                    role: "staff".into(),
                },
            })
            .unwrap();
    }

    #[test]
    fn test_login_route_is_never_guarded() {
        let guard = guard(GuardPolicy::Presence);
        assert_eq!(guard.check(Route::Login), GuardState::Granted);
        assert!(guard.auth.navigator().visits().is_empty());
    }

    #[test]
    fn test_missing_session_redirects() {
        let guard = guard(GuardPolicy::Presence);
        assert_eq!(guard.check(Route::Chat), GuardState::Redirecting);
        assert_eq!(guard.auth.navigator().last(), Some(Route::Login));
    }

    #[test]
    fn test_token_without_user_redirects() {
        let guard = guard(GuardPolicy::Presence);
        guard.auth.store().inner().set(TOKEN_KEY, "t1").unwrap();
        assert_eq!(guard.check(Route::Chat), GuardState::Redirecting);
    }

    #[test]
    fn test_presence_policy_accepts_opaque_token() {
        let guard = guard(GuardPolicy::Presence);
        sign_in(&guard, "t1");
        assert_eq!(guard.check(Route::Chat), GuardState::Granted);
    }

    #[test]
    fn test_presence_policy_accepts_expired_token() {
        let guard = guard(GuardPolicy::Presence);
        let expired = make_token(serde_json::json!({ "exp": Utc::now().timestamp() - 60 }));
        sign_in(&guard, &expired);
        assert_eq!(guard.check(Route::Chat), GuardState::Granted);
    }

    #[test]
    fn test_unexpired_policy_rejects_expired_token() {
        let guard = guard(GuardPolicy::Unexpired);
        let expired = make_token(serde_json::json!({ "exp": Utc::now().timestamp() - 60 }));
        sign_in(&guard, &expired);

        assert_eq!(guard.check(Route::Chat), GuardState::Redirecting);
        assert!(!guard.auth.store().has_session());
        assert_eq!(guard.auth.navigator().visits(), vec![Route::Login]);
    }

    #[test]
    fn test_unexpired_policy_accepts_live_token() {
        let guard = guard(GuardPolicy::Unexpired);
        let live = make_token(serde_json::json!({ "exp": Utc::now().timestamp() + 600 }));
        sign_in(&guard, &live);
        assert_eq!(guard.check(Route::Chat), GuardState::Granted);
    }

    #[test]
    fn test_recheck_picks_up_late_session_write() {
        let guard = guard(GuardPolicy::Presence);
        assert_eq!(guard.check(Route::Chat), GuardState::Redirecting);

        sign_in(&guard, "t1");
        assert_eq!(guard.check(Route::Chat), GuardState::Granted);
    }

    #[test]
    fn test_state_rendering() {
        assert_eq!(GuardState::default(), GuardState::Checking);
        assert!(!GuardState::Checking.renders_children());
        assert!(GuardState::Granted.renders_children());
        assert!(!GuardState::Redirecting.renders_children());
    }
}

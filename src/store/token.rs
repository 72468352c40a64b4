use super::KeyValueStore;
use crate::types::{ClientError, Result, Session, User};
use tracing::{debug, warn};

/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user_data";

/// Typed view of the session entries in a [`KeyValueStore`].
///
/// Token and user are written and cleared together. A user entry that no
/// longer parses is discarded on read.
#[derive(Debug, Clone)]
pub struct TokenStore<K> {
    kv: K,
}

impl<K: KeyValueStore> TokenStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Persist a session, replacing any previous one.
    ///
    /// If either write fails both entries are cleared, so the store never
    /// holds one without the other.
    pub fn save(&self, session: &Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| ClientError::Storage(format!("Failed to serialize user: {}", e)))?;

        let written = self
            .kv
            .set(TOKEN_KEY, &session.token)
            .and_then(|_| self.kv.set(USER_KEY, &user_json));
        if let Err(e) = written {
            warn!("Failed to save session: {}", e);
            self.clear();
            return Err(e);
        }

        debug!(username = %session.user.username, "Session saved");
        Ok(())
    }

    /// Load the stored session, if both entries are present and valid.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { token, user })
    }

    /// The stored bearer token.
    pub fn token(&self) -> Option<String> {
        self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored user profile.
    ///
    /// A corrupt entry is logged, removed, and reported as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.kv.get(USER_KEY)?;
        match parse_user(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding stored user profile: {}", e);
                if let Err(e) = self.kv.remove(USER_KEY) {
                    warn!("Failed to remove corrupt user profile: {}", e);
                }
                None
            }
        }
    }

    /// True when both a token and a readable user profile are stored.
    pub fn has_session(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    /// Remove both entries. Failures are logged, never raised.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.kv.remove(key) {
                warn!(key, "Failed to clear stored entry: {}", e);
            }
        }
        debug!("Session cleared");
    }

    /// The backing key-value store.
    pub fn inner(&self) -> &K {
        &self.kv
    }
}

fn parse_user(raw: &str) -> Result<User> {
    serde_json::from_str(raw).map_err(|e| ClientError::StorageParse(format!("{}: {}", USER_KEY, e)))
}

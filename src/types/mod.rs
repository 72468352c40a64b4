use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============= Session Types =============

/// Profile of the signed-in user, as returned by the login endpoint and
/// persisted next to the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl User {
    /// Name to greet the user with; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// A bearer token paired with the profile it authorizes.
///
/// Token and user are always written and cleared together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// ============= Auth Wire Types =============

/// Successful `POST /auth/login` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.access_token,
            user: resp.user,
        }
    }
}

/// Error body returned by the backend on non-2xx responses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects instead, so it is kept loosely typed.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// Human-readable detail message, if the server sent one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::String(_) | serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ============= Chat Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Delivery lifecycle of a message in the chat view.
///
/// User messages start `Pending` and become `Delivered` or `Failed` once the
/// request resolves. Assistant replies are `Delivered`; in-band error
/// bubbles are `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryState {
    Pending,
    Delivered,
    Failed,
}

/// Message in the chat view. Lives in memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    pub delivery: DeliveryState,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::User, DeliveryState::Pending)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::Assistant, DeliveryState::Delivered)
    }

    /// Synthetic assistant message carrying an error in-band.
    pub fn failure(error: &ClientError) -> Self {
        Self::new(
            format!("Error: {}", error),
            MessageRole::Assistant,
            DeliveryState::Failed,
        )
    }

    fn new(content: impl Into<String>, role: MessageRole, delivery: DeliveryState) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            role,
            timestamp: Utc::now(),
            delivery,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.delivery == DeliveryState::Failed
    }
}

/// Prior turn sent along with a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

/// `POST /chat` body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Normalized reply from the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub content: String,
    pub conversation_id: Option<String>,
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Login rejected; carries the server's detail or a generic fallback.
    #[error("{0}")]
    Auth(String),

    /// The chat endpoint answered 401. The session has been cleared.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// A protected call was attempted without a stored session.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Non-2xx response other than a login rejection or a 401.
    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not what we expected.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A persisted entry could not be decoded.
    #[error("Corrupt stored data: {0}")]
    StorageParse(String),

    /// The persistent store could not be written.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the server could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

use super::reply::normalize_reply;
use crate::auth::AuthClient;
use crate::http::HttpBackend;
use crate::nav::Navigator;
use crate::store::KeyValueStore;
use crate::types::{ChatReply, ChatRequest, ClientError, HistoryEntry, Result};
use tracing::{debug, warn};

/// Chat endpoint, relative to the API base URL.
pub const CHAT_PATH: &str = "/chat";

/// Sends chat messages on behalf of the signed-in user.
#[derive(Debug, Clone)]
pub struct ChatClient<H, K, N> {
    auth: AuthClient<H, K, N>,
}

impl<H, K, N> ChatClient<H, K, N>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    pub fn new(auth: AuthClient<H, K, N>) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &AuthClient<H, K, N> {
        &self.auth
    }

    /// Send one message and wait for the assistant's reply.
    ///
    /// Fails before any network call when `content` is blank or when no
    /// session is stored. A 401 signs the user out.
    pub async fn send(
        &self,
        content: &str,
        conversation_id: Option<&str>,
        history: Option<&[HistoryEntry]>,
    ) -> Result<ChatReply> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ClientError::Validation("Message is empty".to_string()));
        }

        let Some(token) = self.auth.store().token() else {
            warn!("Chat send attempted without a session");
            self.auth.redirect_to_login();
            return Err(ClientError::NotAuthenticated);
        };

        let request = ChatRequest {
            content: content.to_string(),
            conversation_id: conversation_id.map(str::to_string),
            history: history.filter(|h| !h.is_empty()).map(<[_]>::to_vec),
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ClientError::Validation(format!("Failed to serialize request: {}", e)))?;

        debug!(
            chars = request.content.len(),
            conversation_id = ?request.conversation_id,
            history = request.history.as_ref().map_or(0, Vec::len),
            "Sending chat message"
        );

        let resp = self
            .auth
            .http()
            .post_json(&self.auth.endpoint(CHAT_PATH), &body, Some(&token))
            .await?;

        if resp.status == 401 {
            warn!("Chat request unauthorized, signing out");
            self.auth.logout();
            return Err(ClientError::SessionExpired);
        }

        if !resp.is_success() {
            return Err(ClientError::Http {
                status: resp.status,
                body: resp.body,
            });
        }

        normalize_reply(&resp.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::stub::StubBackend;
    use crate::nav::{RecordingNavigator, Route};
    use crate::store::{MemoryStore, TokenStore};
    use crate::types::{MessageRole, Session, User};

    fn client(http: StubBackend, signed_in: bool) -> ChatClient<StubBackend, MemoryStore, RecordingNavigator> {
        let store = TokenStore::new(MemoryStore::new());
        if signed_in {
            store
                .save(&Session {
                    token: "t1".into(),
                    user: User {
                        username: "admin".into(),
                        name: None,
                        email: None,
                        role: "staff".into(),
                    },
                })
                .unwrap();
        }
        ChatClient::new(AuthClient::new(
            "http://api.test",
            http,
            store,
            RecordingNavigator::new(),
        ))
    }

    #[tokio::test]
    async fn test_send_builds_canonical_request() {
        let http = StubBackend::new().reply(200, serde_json::json!({ "response": "09h-18h" }));
        let client = client(http.clone(), true);
        let history = vec![HistoryEntry {
            role: MessageRole::User,
            content: "oi".into(),
        }];

        let reply = client
            .send("  Qual o horário da biblioteca?  ", Some("c1"), Some(&history))
            .await
            .expect("should send");
        assert_eq!(reply.content, "09h-18h");

        let req = &http.requests()[0];
        assert_eq!(req.url, "http://api.test/chat");
        assert_eq!(req.bearer.as_deref(), Some("t1"));
        assert_eq!(
            req.json,
            Some(serde_json::json!({
                "content": "Qual o horário da biblioteca?",
                "conversation_id": "c1",
                "history": [{ "role": "user", "content": "oi" }]
            }))
        );
    }

    #[tokio::test]
    async fn test_empty_history_is_omitted() {
        let http = StubBackend::new().reply(200, serde_json::json!({ "content": "ok" }));
        let client = client(http.clone(), true);

        client.send("hi", None, Some(&[])).await.unwrap();
        assert_eq!(
            http.requests()[0].json,
            Some(serde_json::json!({ "content": "hi" }))
        );
    }

    #[tokio::test]
    async fn test_blank_message_never_hits_network() {
        let http = StubBackend::new();
        let client = client(http.clone(), true);

        let err = client.send(" \n\t", None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_without_session_is_rejected_locally() {
        let http = StubBackend::new();
        let client = client(http.clone(), false);

        let err = client.send("hi", None, None).await.unwrap_err();
        assert_eq!(err, ClientError::NotAuthenticated);
        assert!(http.requests().is_empty());
        assert_eq!(client.auth().navigator().last(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_unauthorized_signs_out() {
        let http = StubBackend::new().reply(401, serde_json::json!({ "detail": "expired" }));
        let client = client(http, true);

        let err = client.send("hi", None, None).await.unwrap_err();
        assert_eq!(err, ClientError::SessionExpired);
        assert!(client.auth().store().inner().is_empty());
        assert_eq!(client.auth().navigator().last(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let http = StubBackend::new().reply_text(503, "upstream unavailable");
        let client = client(http, true);

        let err = client.send("hi", None, None).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Http {
                status: 503,
                body: "upstream unavailable".into()
            }
        );
        // Only a 401 ends the session.
        assert!(client.auth().store().has_session());
    }

    #[tokio::test]
    async fn test_success_without_answer_is_malformed() {
        let http = StubBackend::new().reply(200, serde_json::json!({ "ok": true }));
        let err = client(http, true).send("hi", None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }
}

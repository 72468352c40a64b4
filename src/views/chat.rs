use crate::chat::ChatClient;
use crate::http::HttpBackend;
use crate::nav::Navigator;
use crate::store::{KeyValueStore, TokenStore};
use crate::types::{ChatReply, DeliveryState, HistoryEntry, Message, Result};
use tracing::warn;

/// How much prior conversation to send with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    pub enabled: bool,
    /// Maximum number of prior messages sent.
    pub limit: usize,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            limit: 20,
        }
    }
}

/// A send that has been committed to the view and awaits its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    /// Id of the optimistic user message.
    pub message_id: String,
    pub content: String,
    pub conversation_id: Option<String>,
    pub history: Option<Vec<HistoryEntry>>,
}

/// Chat window state: the message list, the input box and the loading flag.
///
/// `Idle -> Sending -> Idle`. While sending, further sends are refused.
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    messages: Vec<Message>,
    input: String,
    is_loading: bool,
    conversation_id: Option<String>,
    history: HistoryPolicy,
    user_name: Option<String>,
}

impl ChatView {
    pub fn new(history: HistoryPolicy) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Read the signed-in user's display name from `store`.
    pub fn load_user<K: KeyValueStore>(&mut self, store: &TokenStore<K>) {
        self.user_name = store.user().map(|u| u.display_name().to_string());
    }

    /// Display name for the header and the empty-state greeting.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }

    /// Enter sends; Shift+Enter inserts a newline.
    pub fn submits_on(key: &str, shift: bool) -> bool {
        key == "Enter" && !shift
    }

    /// Commit the current input as a user message.
    ///
    /// Appends the message as `Pending`, clears the input and sets the
    /// loading flag. Returns `None`, changing nothing, when sending is
    /// disabled.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.can_send() {
            return None;
        }

        let content = self.input.trim().to_string();
        let history = self.history_entries();
        let message = Message::user(content.clone());
        let pending = PendingSend {
            message_id: message.id.clone(),
            content,
            conversation_id: self.conversation_id.clone(),
            history,
        };

        self.messages.push(message);
        self.input.clear();
        self.is_loading = true;
        Some(pending)
    }

    /// Record the outcome of `pending` and return the appended assistant
    /// message.
    ///
    /// Failures are appended in-band as a `Failed` assistant message, and the
    /// user message they answer is marked `Failed` too.
    pub fn complete_send(&mut self, pending: PendingSend, result: Result<ChatReply>) -> &Message {
        self.is_loading = false;

        let state = if result.is_ok() {
            DeliveryState::Delivered
        } else {
            DeliveryState::Failed
        };
        if let Some(sent) = self
            .messages
            .iter_mut()
            .find(|m| m.id == pending.message_id)
        {
            sent.delivery = state;
        }

        let reply = match result {
            Ok(reply) => {
                if reply.conversation_id.is_some() {
                    self.conversation_id = reply.conversation_id;
                }
                Message::assistant(reply.content)
            }
            Err(e) => {
                warn!("Chat send failed: {}", e);
                Message::failure(&e)
            }
        };

        self.messages.push(reply);
        &self.messages[self.messages.len() - 1]
    }

    /// Send the current input through `client`.
    ///
    /// Returns the assistant message appended on resolution, or `None` when
    /// sending was disabled.
    pub async fn send<H, K, N>(&mut self, client: &ChatClient<H, K, N>) -> Option<&Message>
    where
        H: HttpBackend,
        K: KeyValueStore,
        N: Navigator,
    {
        let pending = self.begin_send()?;
        let result = client
            .send(
                &pending.content,
                pending.conversation_id.as_deref(),
                pending.history.as_deref(),
            )
            .await;
        Some(self.complete_send(pending, result))
    }

    /// Forget the conversation: messages, conversation id and input.
    pub fn new_conversation(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.input.clear();
    }

    /// The last `limit` delivered messages, oldest first.
    fn history_entries(&self) -> Option<Vec<HistoryEntry>> {
        if !self.history.enabled || self.history.limit == 0 {
            return None;
        }

        let delivered: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.delivery == DeliveryState::Delivered)
            .collect();
        let start = delivered.len().saturating_sub(self.history.limit);
        let entries: Vec<HistoryEntry> = delivered[start..]
            .iter()
            .map(|m| HistoryEntry::from(*m))
            .collect();

        (!entries.is_empty()).then_some(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthClient;
    use crate::http::stub::StubBackend;
    use crate::nav::{RecordingNavigator, Route};
    use crate::store::{MemoryStore, TokenStore};
    use crate::types::{ClientError, MessageRole, Session, User};

    type Client = ChatClient<StubBackend, MemoryStore, RecordingNavigator>;

    fn client(http: StubBackend) -> Client {
        let store = TokenStore::new(MemoryStore::new());
        store
            .save(&Session {
                token: "t1".into(),
                user: User {
                    username: "admin".into(),
                    name: Some("Admin".into()),
                    email: None,
                    role: "staff".into(),
                },
            })
            .unwrap();
        ChatClient::new(AuthClient::new(
            "http://api.test",
            http,
            store,
            RecordingNavigator::new(),
        ))
    }

    fn reply(content: &str) -> ChatReply {
        ChatReply {
            content: content.into(),
            conversation_id: None,
        }
    }

    #[test]
    fn test_begin_send_is_optimistic() {
        let mut view = ChatView::default();
        view.set_input("  Qual o horário da biblioteca?  ");

        let pending = view.begin_send().expect("should begin");
        assert_eq!(pending.content, "Qual o horário da biblioteca?");
        assert_eq!(view.messages().len(), 1);
        assert_eq!(view.messages()[0].role, MessageRole::User);
        assert_eq!(view.messages()[0].delivery, DeliveryState::Pending);
        assert_eq!(view.messages()[0].id, pending.message_id);
        assert_eq!(view.input(), "");
        assert!(view.is_loading());
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        for input in ["", "   ", "\n\t "] {
            let mut view = ChatView::default();
            view.set_input(input);
            assert!(!view.can_send());
            assert_eq!(view.begin_send(), None);
            assert!(view.messages().is_empty());
            assert!(!view.is_loading());
        }
    }

    #[test]
    fn test_send_disabled_while_loading() {
        let mut view = ChatView::default();
        view.set_input("first");
        view.begin_send().unwrap();

        view.set_input("second");
        assert!(!view.can_send());
        assert_eq!(view.begin_send(), None);
        assert_eq!(view.messages().len(), 1);
        // The typed text survives the refused send.
        assert_eq!(view.input(), "second");
    }

    #[test]
    fn test_complete_send_success() {
        let mut view = ChatView::default();
        view.set_input("hi");
        let pending = view.begin_send().unwrap();

        let msg = view.complete_send(pending, Ok(reply("hello"))).clone();
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.content, "hello");
        assert_eq!(msg.delivery, DeliveryState::Delivered);
        assert_eq!(view.messages()[0].delivery, DeliveryState::Delivered);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_complete_send_failure_is_in_band() {
        let mut view = ChatView::default();
        view.set_input("hi");
        let pending = view.begin_send().unwrap();

        let msg = view
            .complete_send(
                pending,
                Err(ClientError::Http {
                    status: 500,
                    body: "boom".into(),
                }),
            )
            .clone();
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.delivery, DeliveryState::Failed);
        assert_eq!(msg.content, "Error: Request failed with status 500: boom");
        assert_eq!(view.messages()[0].delivery, DeliveryState::Failed);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_conversation_id_is_remembered() {
        let mut view = ChatView::default();
        view.set_input("hi");
        let pending = view.begin_send().unwrap();
        assert_eq!(pending.conversation_id, None);
        view.complete_send(
            pending,
            Ok(ChatReply {
                content: "hello".into(),
                conversation_id: Some("c1".into()),
            }),
        );

        view.set_input("again");
        let pending = view.begin_send().unwrap();
        assert_eq!(pending.conversation_id.as_deref(), Some("c1"));

        // A reply without an id keeps the current one.
        view.complete_send(pending, Ok(reply("ok")));
        assert_eq!(view.conversation_id(), Some("c1"));

        view.new_conversation();
        assert_eq!(view.conversation_id(), None);
        assert!(view.messages().is_empty());
    }

    #[test]
    fn test_history_skips_failures_and_respects_limit() {
        let mut view = ChatView::new(HistoryPolicy {
            enabled: true,
            limit: 2,
        });

        view.set_input("one");
        let p = view.begin_send().unwrap();
        assert_eq!(p.history, None);
        view.complete_send(p, Ok(reply("uno")));

        view.set_input("two");
        let p = view.begin_send().unwrap();
        view.complete_send(p, Err(ClientError::Network("down".into())));

        view.set_input("three");
        let p = view.begin_send().unwrap();
        let history = p.history.clone().expect("history");
        assert_eq!(
            history,
            vec![
                HistoryEntry {
                    role: MessageRole::User,
                    content: "one".into()
                },
                HistoryEntry {
                    role: MessageRole::Assistant,
                    content: "uno".into()
                },
            ]
        );
    }

    #[test]
    fn test_history_disabled() {
        let mut view = ChatView::new(HistoryPolicy {
            enabled: false,
            limit: 20,
        });
        view.set_input("one");
        let p = view.begin_send().unwrap();
        view.complete_send(p, Ok(reply("uno")));

        view.set_input("two");
        assert_eq!(view.begin_send().unwrap().history, None);
    }

    #[test]
    fn test_user_name_comes_from_store_and_survives_new_conversation() {
        let client = client(StubBackend::new());
        let mut view = ChatView::default();
        assert_eq!(view.user_name(), None);

        view.load_user(client.auth().store());
        assert_eq!(view.user_name(), Some("Admin"));

        view.new_conversation();
        assert_eq!(view.user_name(), Some("Admin"));

        client.auth().store().clear();
        view.load_user(client.auth().store());
        assert_eq!(view.user_name(), None);
    }

    #[test]
    fn test_enter_key_rule() {
        assert!(ChatView::submits_on("Enter", false));
        assert!(!ChatView::submits_on("Enter", true));
        assert!(!ChatView::submits_on("a", false));
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let http = StubBackend::new().reply(200, serde_json::json!({ "response": "09h-18h" }));
        let client = client(http.clone());
        let mut view = ChatView::default();
        view.set_input("Qual o horário da biblioteca?");

        let content = view.send(&client).await.map(|m| m.content.clone());
        assert_eq!(content.as_deref(), Some("09h-18h"));

        let roles: Vec<_> = view.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
        assert_eq!(http.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_send_blank_makes_no_request() {
        let http = StubBackend::new();
        let client = client(http.clone());
        let mut view = ChatView::default();
        view.set_input("   ");

        assert!(view.send(&client).await.is_none());
        assert!(view.messages().is_empty());
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_unauthorized_appends_error_and_signs_out() {
        let http = StubBackend::new().reply_text(401, "");
        let client = client(http);
        let mut view = ChatView::default();
        view.set_input("hi");

        let failed = view.send(&client).await.map(|m| m.is_failed());
        assert_eq!(failed, Some(true));
        assert_eq!(view.messages().len(), 2);
        assert!(!client.auth().store().has_session());
        assert_eq!(client.auth().navigator().last(), Some(Route::Login));
    }
}

//! `send` and `chat` commands

use super::output::Output;
use crate::auth::{AuthGuard, GuardState};
use crate::chat::ChatClient;
use crate::http::HttpBackend;
use crate::nav::{Navigator, Route};
use crate::store::KeyValueStore;
use crate::views::{ChatView, HistoryPolicy};
use anyhow::{anyhow, bail};
use std::io::BufRead;

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    NewConversation,
    Message(String),
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => ReplCommand::Empty,
            "/quit" | "/exit" => ReplCommand::Quit,
            "/new" => ReplCommand::NewConversation,
            text => ReplCommand::Message(text.to_string()),
        }
    }
}

fn ensure_signed_in<H, K, N>(guard: &AuthGuard<H, K, N>) -> anyhow::Result<()>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    if guard.check(Route::Chat) != GuardState::Granted {
        bail!("Not signed in. Run `campus-chat login` first.");
    }
    Ok(())
}

/// Send one message and print the assistant's reply.
pub async fn send<H, K, N>(
    client: &ChatClient<H, K, N>,
    guard: &AuthGuard<H, K, N>,
    history: HistoryPolicy,
    message: &str,
    output: &Output,
) -> anyhow::Result<()>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    ensure_signed_in(guard)?;

    let mut view = ChatView::new(history);
    view.set_input(message);
    let reply = view
        .send(client)
        .await
        .ok_or_else(|| anyhow!("Message is empty"))?;

    output.message(reply);
    if reply.is_failed() {
        bail!("Message was not delivered");
    }
    Ok(())
}

/// Interactive chat loop. Ends on `/quit`, end of input, or when the session
/// is lost.
pub async fn run<H, K, N>(
    client: &ChatClient<H, K, N>,
    guard: &AuthGuard<H, K, N>,
    history: HistoryPolicy,
    output: &Output,
) -> anyhow::Result<()>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    ensure_signed_in(guard)?;

    let mut view = ChatView::new(history);
    view.load_user(client.auth().store());
    if let Some(name) = view.user_name() {
        output.banner(name);
    }
    output.info("Type /new to start a new conversation, /quit to exit");
    output.newline();

    let stdin = std::io::stdin();

    loop {
        output.prompt();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            output.newline();
            break;
        }

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::NewConversation => {
                view.new_conversation();
                output.info("Started a new conversation");
            }
            ReplCommand::Message(text) => {
                view.set_input(text);
                let Some(pending) = view.begin_send() else {
                    continue;
                };
                output.typing();
                let result = client
                    .send(
                        &pending.content,
                        pending.conversation_id.as_deref(),
                        pending.history.as_deref(),
                    )
                    .await;
                output.message(view.complete_send(pending, result));

                if !client.auth().store().has_session() {
                    output.warning("Your session has ended. Run `campus-chat login` to sign in again.");
                    break;
                }
            }
        }
    }

    Ok(())
}

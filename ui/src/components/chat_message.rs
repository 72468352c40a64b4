//! Chat message component

use campus_chat::{DeliveryState, Message, MessageRole};
use leptos::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let bubble = match (message.role, message.delivery) {
        (MessageRole::Assistant, DeliveryState::Failed) => {
            "bg-red-50 border border-red-300 text-red-700 rounded-bl-none"
        }
        (MessageRole::Assistant, _) => "bg-white border text-gray-800 rounded-bl-none",
        (MessageRole::User, DeliveryState::Delivered) => "bg-blue-600 text-white rounded-br-none",
        (MessageRole::User, _) => "bg-blue-600/70 text-white rounded-br-none",
    };
    let content_html = render_markdown(&message.content);

    view! {
        <div class=format!(
            "flex items-start gap-4 message-appear {}",
            if is_user { "justify-end" } else { "justify-start" }
        )>
            {(!is_user).then(|| view! {
                <img src="/assets/logo.png" alt="Assistant" class="w-10 h-10 rounded-full border" />
            })}

            <div class=format!(
                "flex flex-col gap-1 max-w-2xl {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!("px-5 py-3 rounded-2xl shadow-sm {}", bubble)>
                    <div class="prose prose-sm max-w-none break-words" inner_html=content_html></div>
                </div>

                <span class="text-xs text-gray-400">
                    {message.timestamp.format("%H:%M").to_string()}
                    {(is_user && message.is_failed()).then_some(" · not delivered")}
                </span>
            </div>

            {is_user.then(|| view! {
                <div class="w-10 h-10 rounded-full bg-gray-200 flex items-center justify-center">
                    "👤"
                </div>
            })}
        </div>
    }
}

/// Markdown to HTML. Raw HTML in the source is shown as text, never injected.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

//! Chat page - main conversation interface

use crate::components::{ChatInput, ChatMessage, Header, TypingIndicator};
use crate::state::AppClients;
use campus_chat::ChatView;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let clients = expect_context::<AppClients>();
    let mut view = ChatView::new(clients.history);
    view.load_user(clients.auth.store());
    let user_name = view.user_name().map(str::to_string);
    let chat = RwSignal::new(view);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    Effect::new(move |_| {
        chat.track();
        scroll_to_bottom();
    });

    let send_message = move || {
        let Some(pending) = chat.try_update(|c| c.begin_send()).flatten() else {
            return;
        };
        let client = clients.chat.clone();
        spawn_local(async move {
            let result = client
                .send(
                    &pending.content,
                    pending.conversation_id.as_deref(),
                    pending.history.as_deref(),
                )
                .await;
            chat.update(|c| {
                c.complete_send(pending, result);
            });
        });
    };

    let is_loading = Signal::derive(move || chat.with(|c| c.is_loading()));

    view! {
        <Title text="Campus Assistant" />
        <div class="flex flex-col h-screen bg-gray-100">
            <Header user_name=user_name.clone() />

            <main class="flex-1 overflow-y-auto p-6">
                <div class="max-w-4xl mx-auto space-y-6">
                    <Show
                        when=move || chat.with(|c| !c.messages().is_empty())
                        fallback=move || {
                            let user_name = user_name.clone().unwrap_or_default();
                            view! {
                                <div class="text-center text-gray-500 mt-20">
                                    <h2 class="text-2xl font-semibold mb-2">
                                        {format!("Welcome, {}!", user_name)}
                                    </h2>
                                    <p>"Ask a question about the campus to get started."</p>
                                </div>
                            }
                        }
                    >
                        <div class="flex justify-end">
                            <button
                                on:click=move |_| chat.update(|c| c.new_conversation())
                                disabled=move || is_loading.get()
                                class="btn btn-ghost text-sm"
                            >
                                "New conversation"
                            </button>
                        </div>
                    </Show>

                    <For
                        each=move || chat.with(|c| c.messages().to_vec())
                        key=|msg| (msg.id.clone(), msg.delivery)
                        children=|msg| view! { <ChatMessage message=msg /> }
                    />

                    <Show when=move || is_loading.get()>
                        <TypingIndicator />
                    </Show>

                    <div node_ref=messages_end_ref></div>
                </div>
            </main>

            <ChatInput
                value=Signal::derive(move || chat.with(|c| c.input().to_string()))
                on_input=move |text| chat.update(|c| c.set_input(text))
                on_submit=send_message
                disabled=is_loading
                placeholder="Type your message... (Shift+Enter for a new line)"
            />
        </div>
    }
}

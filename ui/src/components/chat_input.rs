//! Chat input component

use campus_chat::ChatView;
use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

/// Message box. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn ChatInput(
    /// Current input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every edit
    on_input: impl Fn(String) + 'static,
    /// Called when the user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether a reply is pending
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Type your message...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Grow with the content up to a cap.
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let height = el.scroll_height().min(200);
            let _ = el.set_attribute("style", &format!("height: {}px; max-height: 200px;", height));
        }
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ChatView::submits_on(&ev.key(), ev.shift_key()) {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <footer class="p-4 bg-white border-t">
            <div class="max-w-4xl mx-auto flex items-end gap-3">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        on_input(event_target_value(&ev));
                        resize_textarea();
                    }
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="flex-1 px-4 py-3 border rounded-2xl resize-none
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>

                <button
                    on:click=move |_| on_submit()
                    disabled=move || disabled.get() || is_empty.get()
                    class="w-11 h-11 bg-blue-600 hover:bg-blue-700 text-white rounded-full
                           flex items-center justify-center transition-transform active:scale-90
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="w-5 h-5"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <line x1="22" y1="2" x2="11" y2="13"></line>
                        <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                    </svg>
                </button>
            </div>
        </footer>
    }
}

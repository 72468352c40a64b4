//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1.5">
            <span class="w-2.5 h-2.5 bg-gray-400 rounded-full dot-bounce-1"></span>
            <span class="w-2.5 h-2.5 bg-gray-400 rounded-full dot-bounce-2"></span>
            <span class="w-2.5 h-2.5 bg-gray-400 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(#[prop(default = "w-5 h-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-blue-600", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
            ></path>
        </svg>
    }
}

/// Shown in the assistant's column while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 justify-start message-appear">
            <img src="/assets/logo.png" alt="Assistant" class="w-10 h-10 rounded-full border" />
            <div class="bg-white border px-5 py-3 rounded-2xl rounded-bl-none">
                <LoadingDots />
            </div>
        </div>
    }
}

/// Placeholder rendered while the guard checks or redirects
#[component]
pub fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="flex flex-col items-center gap-4">
                <LoadingSpinner size="w-10 h-10" />
                <p class="text-gray-500">"Checking your session..."</p>
            </div>
        </div>
    }
}

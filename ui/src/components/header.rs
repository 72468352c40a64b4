//! Header component

use crate::state::AppClients;
use leptos::prelude::*;

/// Top bar with the signed-in user's name and a sign-out button.
#[component]
pub fn Header(user_name: Option<String>) -> impl IntoView {
    let clients = expect_context::<AppClients>();
    let auth = clients.auth.clone();

    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-4xl mx-auto px-4 flex items-center justify-between">
                <div class="logo">
                    <img src="/assets/logo.png" alt="Campus logo" class="logo-image" />
                    <h1 class="text-xl font-semibold">"Campus Assistant"</h1>
                </div>

                {user_name.map(|name| {
                    let auth = auth.clone();
                    view! {
                        <nav class="flex items-center gap-4">
                            <span class="text-sm text-[var(--text-secondary)]">
                                {name}
                            </span>
                            <button on:click=move |_| auth.logout() class="btn btn-ghost">
                                "Sign Out"
                            </button>
                        </nav>
                    }
                })}
            </div>
        </header>
    }
}

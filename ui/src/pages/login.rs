//! Login page

use crate::state::AppClients;
use campus_chat::LoginView;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

/// Sign-in form. Leaves for the chat right away if a token is stored.
#[component]
pub fn LoginPage() -> impl IntoView {
    let clients = expect_context::<AppClients>();
    let form = RwSignal::new(LoginView::new());

    {
        let auth = clients.auth.clone();
        Effect::new(move |_| {
            form.with_untracked(|f| f.on_mount(&auth));
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(creds) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let auth = clients.auth.clone();
        spawn_local(async move {
            let result = auth.login(&creds.username, &creds.password).await;
            form.update(|f| {
                f.complete_submit(&auth, result);
            });
        });
    };

    let is_loading = move || form.with(|f| f.is_loading());
    let show_password = move || form.with(|f| f.show_password());

    view! {
        <Title text="Sign in - Campus Assistant" />
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="w-full max-w-md px-4">
                <div class="auth-card">
                    <div class="auth-header">
                        <img src="/assets/logo.png" alt="Campus logo" class="auth-logo" />
                        <h1 class="auth-title">"Campus Assistant"</h1>
                        <p class="auth-subtitle">"Sign in with your campus account"</p>
                    </div>

                    <Show when=move || form.with(|f| f.error().is_some())>
                        <div class="mb-6 p-4 bg-red-50 border border-red-300 rounded-lg text-red-700 text-sm">
                            {move || form.with(|f| f.error().unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <form on:submit=on_submit class="auth-form">
                        <div class="auth-input-group">
                            <label class="auth-label">"Username"</label>
                            <input
                                type="text"
                                autocomplete="username"
                                prop:value=move || form.with(|f| f.username().to_string())
                                on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                                required=true
                                class="input"
                            />
                        </div>

                        <div class="auth-input-group">
                            <label class="auth-label">"Password"</label>
                            <div class="relative">
                                <input
                                    type=move || if show_password() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    prop:value=move || form.with(|f| f.password().to_string())
                                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                    required=true
                                    class="input pr-16"
                                />
                                <button
                                    type="button"
                                    on:click=move |_| form.update(|f| f.toggle_password_visibility())
                                    class="absolute right-3 top-1/2 -translate-y-1/2 text-xs text-gray-500"
                                >
                                    {move || if show_password() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>

                        <button type="submit" disabled=is_loading class="btn btn-primary w-full py-3">
                            {move || if is_loading() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

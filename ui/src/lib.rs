//! Campus Assistant chat UI - Leptos frontend
//!
//! Browser shell over `campus-chat`: local storage for the session, `fetch`
//! for HTTP and full-page navigation between `/login` and `/`.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::Protected;
use pages::{chat::ChatPage, login::LoginPage};
use state::AppClients;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppClients::new());

    view! {
        <Router>
            <main class="min-h-screen bg-gray-100 text-gray-800">
                <Protected>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/") view=ChatPage />
                    </Routes>
                </Protected>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a href="/" class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium">
                    "Back to chat"
                </a>
            </div>
        </div>
    }
}

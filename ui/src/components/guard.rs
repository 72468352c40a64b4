//! Route guard wrapper

use crate::components::GuardPlaceholder;
use crate::state::AppClients;
use campus_chat::auth::RECHECK_DELAY;
use campus_chat::{GuardState, Route};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Renders `children` only while the guard grants the current route.
///
/// Checks on every location change and once more after a short delay, in
/// case the session lands in storage just after navigation.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let clients = expect_context::<AppClients>();
    let location = use_location();
    let state = RwSignal::new(GuardState::Checking);
    // Dropping a `Timeout` cancels it.
    let recheck = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let route = Route::from_path(&location.pathname.get());
        state.set(clients.guard.check(route));

        let guard = clients.guard.clone();
        let timeout = Timeout::new(RECHECK_DELAY.as_millis() as u32, move || {
            state.set(guard.check(route));
        });
        recheck.update_value(|slot| *slot = Some(timeout));
    });

    on_cleanup(move || {
        recheck.try_update_value(|slot| {
            slot.take();
        });
    });

    view! {
        <Show
            when=move || state.get().renders_children()
            fallback=|| view! { <GuardPlaceholder /> }
        >
            {children()}
        </Show>
    }
}

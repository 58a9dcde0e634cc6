//! Access-denied screen shown after a 403 or a failed role check.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::util::redirect;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let query = use_query_map();
    let attempted = move || query.get().get("returnUrl").unwrap_or_default();

    view! {
        <section class="status-page">
            <h1>"Access denied"</h1>
            <p>"Your role does not grant access to this section."</p>
            <Show when=move || !attempted().is_empty()>
                <p class="status-page__detail">{move || format!("Attempted: {}", attempted())}</p>
            </Show>
            <A href=redirect::DEFAULT_LANDING>"Back to the dashboard"</A>
        </section>
    }
}

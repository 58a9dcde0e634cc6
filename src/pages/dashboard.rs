//! Dashboard page — the authenticated landing route.

use leptos::prelude::*;

use crate::net::types::NotificationStats;
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::ANY_ROLE), session);

    let stats = RwSignal::new(None::<NotificationStats>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            // Errors here already went through the centralized reaction;
            // the dashboard simply shows no counters.
            if let Ok(fetched) = crate::net::api::fetch_notification_stats(session).await {
                stats.set(Some(fetched));
            }
        });
    }

    let greeting = move || {
        session
            .user_signal()
            .get()
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.full_name))
    };
    let unread = move || stats.get().map(|s| s.unread_count).unwrap_or_default();

    view! {
        <section class="dashboard-page">
            <h1>{greeting}</h1>
            <Show when=move || stats.get().is_some()>
                <p class="dashboard-page__stats">
                    {move || format!("{} unread notifications", unread())}
                </p>
            </Show>
        </section>
    }
}

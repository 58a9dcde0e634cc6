//! Notification management screen, reachable by every authenticated role.

use leptos::prelude::*;

use crate::net::types::{NotificationItem, NotificationStats};
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

const PAGE_SIZE: u32 = 20;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireAuth, session);

    let items = RwSignal::new(Vec::<NotificationItem>::new());
    let stats = RwSignal::new(None::<NotificationStats>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_notifications(session, 0, PAGE_SIZE).await {
                Ok(list) => items.set(list),
                Err(err) => error.set(Some(err.user_message())),
            }
            if let Ok(fetched) = crate::net::api::fetch_notification_stats(session).await {
                stats.set(Some(fetched));
            }
            loading.set(false);
        });
    };
    #[cfg(feature = "hydrate")]
    reload();

    let on_mark_all_read = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::mark_notifications_read(session, Vec::new()).await {
                    Ok(()) => reload(),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
    };
    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_notification(session, id).await {
                    Ok(()) => reload(),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let unread_line = move || {
        stats
            .get()
            .map(|s| format!("{} unread of {}", s.unread_count, s.total_notifications))
            .unwrap_or_default()
    };

    view! {
        <section class="management-page">
            <h1>"Notifications"</h1>
            <div class="management-page__actions">
                <span class="management-page__stats">{unread_line}</span>
                <button class="btn" on:click=on_mark_all_read>"Mark all read"</button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <ul class="notification-list">
                    <For
                        each=move || items.get()
                        key=|item| item.id
                        children=move |item| {
                            let id = item.id.unwrap_or_default();
                            let row_class =
                                if item.is_read { "notification-list__item" } else { "notification-list__item notification-list__item--unread" };
                            view! {
                                <li class=row_class>
                                    <span class="notification-list__title">{item.title.clone()}</span>
                                    <span class="notification-list__message">{item.message.clone()}</span>
                                    <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

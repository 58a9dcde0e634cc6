//! User administration screen (admin only).

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::ADMIN_ONLY), session);

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users(session).await {
                Ok(list) => users.set(list),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };
    #[cfg(feature = "hydrate")]
    reload();

    let on_toggle = move |id: i64, active: bool| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_user_status(session, id, active).await {
                    Ok(_) => reload(),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, active);
        }
    };
    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(session, id).await {
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

    view! {
        <section class="management-page">
            <h1>"Users"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Email"</th>
                            <th>"Name"</th>
                            <th>"Role"</th>
                            <th>"Active"</th>
                            <th>"Verification"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id
                            children=move |user| {
                                let id = user.id;
                                let active = user.active;
                                view! {
                                    <tr>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.full_name.clone()}</td>
                                        <td>{user.role.to_string()}</td>
                                        <td>{if active { "yes" } else { "no" }}</td>
                                        <td>{format!("{:?}", user.verification_status)}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_toggle(id, !active)>
                                                {if active { "Deactivate" } else { "Activate" }}
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

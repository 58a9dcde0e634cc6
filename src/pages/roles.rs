//! Role and permission administration screen (admin only).

use leptos::prelude::*;

use crate::net::types::RoleDefinition;
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

const PAGE_SIZE: u32 = 20;

#[component]
pub fn RolesPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::ADMIN_ONLY), session);

    let roles = RwSignal::new(Vec::<RoleDefinition>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_roles(session, 0, PAGE_SIZE).await {
                Ok(page) => roles.set(page.content),
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
                match crate::net::api::toggle_role_status(session, id, active).await {
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

    view! {
        <section class="management-page">
            <h1>"Roles"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Display name"</th>
                            <th>"Permissions"</th>
                            <th>"Users"</th>
                            <th>"Active"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || roles.get()
                            key=|role| role.id
                            children=move |role| {
                                let id = role.id.unwrap_or_default();
                                let active = role.active;
                                view! {
                                    <tr>
                                        <td>{role.name.clone()}</td>
                                        <td>{role.display_name.clone()}</td>
                                        <td>{role.permissions.len()}</td>
                                        <td>{role.user_count.unwrap_or_default()}</td>
                                        <td>{if active { "yes" } else { "no" }}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_toggle(id, !active)>
                                                {if active { "Deactivate" } else { "Activate" }}
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

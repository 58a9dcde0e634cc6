//! Skill-type taxonomy administration screen (admin only).

use leptos::prelude::*;

use crate::net::types::SkillType;
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

const PAGE_SIZE: u32 = 20;

#[component]
pub fn SkillTypesPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::ADMIN_ONLY), session);

    let skill_types = RwSignal::new(Vec::<SkillType>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let reload = move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_skill_types(session, 0, PAGE_SIZE).await {
                Ok(page) => skill_types.set(page.content),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };
    #[cfg(feature = "hydrate")]
    reload();

    let on_toggle = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_skill_type_status(session, id).await {
                    Ok(_) => reload(),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };
    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_skill_type(session, id).await {
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
            <h1>"Skill types"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Active"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || skill_types.get()
                            key=|skill_type| skill_type.id
                            children=move |skill_type| {
                                let id = skill_type.id.unwrap_or_default();
                                let active = skill_type.is_active;
                                view! {
                                    <tr>
                                        <td>{skill_type.name.clone()}</td>
                                        <td>{skill_type.description.clone().unwrap_or_default()}</td>
                                        <td>{if active { "yes" } else { "no" }}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_toggle(id)>
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

//! Offer management screens: list, detail, and a thin status editor.
//!
//! Accessible to admins and recruiters; the detail and edit routes take
//! the offer id as a path parameter.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::{JobOffer, OfferStatus};
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

const PAGE_SIZE: u32 = 20;

#[cfg(feature = "hydrate")]
fn offer_id_param() -> Option<i64> {
    leptos_router::hooks::use_params_map()
        .get_untracked()
        .get("id")
        .and_then(|raw| raw.parse().ok())
}

#[component]
pub fn OffersListPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::OFFER_MANAGERS), session);

    let offers = RwSignal::new(Vec::<JobOffer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_offers(session, 0, PAGE_SIZE).await {
                Ok(page) => offers.set(page.content),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    }

    view! {
        <section class="management-page">
            <h1>"Job offers"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Company"</th>
                            <th>"Status"</th>
                            <th>"Applications"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || offers.get()
                            key=|offer| offer.id
                            children=|offer| {
                                let id = offer.id.unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{offer.title.clone()}</td>
                                        <td>{offer.company_name.clone()}</td>
                                        <td>{offer.status.as_str()}</td>
                                        <td>{offer.applications_count}</td>
                                        <td>
                                            <A href=format!("/offers-list-management/{id}")>"View"</A>
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

#[component]
pub fn OfferDetailPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::OFFER_MANAGERS), session);

    let offer = RwSignal::new(None::<JobOffer>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = offer_id_param() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_offer(session, id).await {
                    Ok(fetched) => offer.set(Some(fetched)),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
    }

    view! {
        <section class="management-page">
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || offer.get().is_some() fallback=|| view! { <p>"Loading..."</p> }>
                {move || {
                    offer
                        .get()
                        .map(|offer| {
                            let id = offer.id.unwrap_or_default();
                            view! {
                                <div class="offer-detail">
                                    <h1>{offer.title.clone()}</h1>
                                    <p class="offer-detail__company">
                                        {format!("{} — {}", offer.company_name, offer.recruiter_name)}
                                    </p>
                                    <p class="offer-detail__meta">
                                        {format!(
                                            "{} · {} · {} {}-{} {}",
                                            offer.status.as_str(),
                                            offer.city,
                                            offer.country,
                                            offer.salary_min,
                                            offer.salary_max,
                                            offer.salary_currency,
                                        )}
                                    </p>
                                    <p class="offer-detail__description">{offer.description.clone()}</p>
                                    <p class="offer-detail__requirements">{offer.requirements.clone()}</p>
                                    <A href=format!("/offers-list-management/{id}/edit")>"Edit status"</A>
                                </div>
                            }
                        })
                }}
            </Show>
        </section>
    }
}

#[component]
pub fn OfferEditPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireRole(guard::OFFER_MANAGERS), session);

    let navigate = StoredValue::new_local(use_navigate());
    let offer = RwSignal::new(None::<JobOffer>);
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = offer_id_param() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_offer(session, id).await {
                    Ok(fetched) => {
                        status.set(fetched.status.as_str().to_owned());
                        offer.set(Some(fetched));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = offer.get().and_then(|offer| offer.id) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_offer_status(session, id, &status.get_untracked()).await {
                    Ok(_) => navigate(
                        &format!("/offers-list-management/{id}"),
                        leptos_router::NavigateOptions::default(),
                    ),
                    Err(err) => {
                        error.set(Some(err.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (navigate, id);
        }
    };

    view! {
        <section class="management-page">
            <h1>"Edit offer status"</h1>
            <Show when=move || error.get().is_some()>
                <p class="banner banner--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || offer.get().is_some() fallback=|| view! { <p>"Loading..."</p> }>
                <form class="offer-edit" on:submit=on_save>
                    <select
                        class="offer-edit__status"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {OfferStatus::ALL
                            .iter()
                            .map(|candidate| {
                                view! { <option value=candidate.as_str()>{candidate.as_str()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </form>
            </Show>
        </section>
    }
}

//! Top bar showing the signed-in identity and the logout action.

use leptos::prelude::*;

use crate::net::auth;
use crate::state::session::SessionStore;

#[component]
pub fn Topbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let user_name = move || {
        session
            .user_signal()
            .get()
            .map_or_else(|| "—".to_owned(), |user| user.full_name)
    };
    let user_role = move || {
        session
            .user_signal()
            .get()
            .map_or_else(String::new, |user| user.role.to_string())
    };

    let on_logout = move |_| auth::logout(session);

    view! {
        <header class="topbar">
            <span class="topbar__title">"Job Board — Back Office"</span>
            <div class="topbar__session">
                <span class="topbar__user-name">{user_name}</span>
                <span class="topbar__user-role">{user_role}</span>
                <button class="btn topbar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

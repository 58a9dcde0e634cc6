//! Catch-all screen for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::redirect;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="status-page">
            <h1>"Page not found"</h1>
            <p>"The page you requested does not exist."</p>
            <A href=redirect::LOGIN_PATH>"Go to sign in"</A>
        </section>
    }
}

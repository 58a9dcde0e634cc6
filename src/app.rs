//! Application shell: session provisioning, router, and layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is constructed exactly once here and provided via
//! context; everything below the router reads the same instance. Access
//! policies are installed by the route components themselves through
//! `util::guard`, so the table below stays a plain routing declaration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::menu::Menu;
use crate::components::topbar::Topbar;
use crate::pages::access_denied::AccessDeniedPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::offers::{OfferDetailPage, OfferEditPage, OffersListPage};
use crate::pages::register::RegisterPage;
use crate::pages::roles::RolesPage;
use crate::pages::skill_types::SkillTypesPage;
use crate::pages::users::UsersPage;
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};
use crate::util::redirect;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::new());

    view! {
        <Title text="Job Board — Back Office"/>
        <Router>
            <main class="backoffice-shell">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=|| view! { <Redirect path=redirect::LOGIN_PATH/> }/>
                    <Route path=path!("/auth/login") view=LoginPage/>
                    <Route path=path!("/auth/register") view=RegisterPage/>
                    <Route path=path!("/access-denied") view=AccessDeniedPage/>
                    <Route path=path!("/notfound") view=NotFoundPage/>
                    <ParentRoute path=path!("") view=AppLayout>
                        <Route path=path!("dashboard") view=DashboardPage/>
                        <Route path=path!("users-management") view=UsersPage/>
                        <Route path=path!("roles-management") view=RolesPage/>
                        <Route path=path!("skill-types-management") view=SkillTypesPage/>
                        <Route path=path!("offers-list-management") view=OffersListPage/>
                        <Route path=path!("offers-list-management/:id") view=OfferDetailPage/>
                        <Route path=path!("offers-list-management/:id/edit") view=OfferEditPage/>
                        <Route path=path!("notifications-management") view=NotificationsPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Authenticated chrome wrapping every management route.
#[component]
fn AppLayout() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    guard::install(RoutePolicy::RequireAuth, session);

    view! {
        <div class="layout">
            <Topbar/>
            <div class="layout__body">
                <Menu/>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

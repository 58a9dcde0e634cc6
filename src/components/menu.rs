//! Sidebar menu filtered by the current role.
//!
//! DESIGN
//! ======
//! Visibility reuses the redirect allowlists, so the menu can never link
//! into a section the route guard would bounce.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::redirect;

/// A navigable menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
}

const ALL_ENTRIES: [MenuEntry; 6] = [
    MenuEntry { label: "Dashboard", path: "/dashboard" },
    MenuEntry { label: "Users", path: "/users-management" },
    MenuEntry { label: "Roles", path: "/roles-management" },
    MenuEntry { label: "Skill types", path: "/skill-types-management" },
    MenuEntry { label: "Job offers", path: "/offers-list-management" },
    MenuEntry { label: "Notifications", path: "/notifications-management" },
];

/// Entries reachable by `role`; no role means no menu.
pub fn visible_entries(role: Option<Role>) -> Vec<MenuEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    ALL_ENTRIES
        .into_iter()
        .filter(|entry| redirect::is_path_allowed(role, entry.path))
        .collect()
}

#[component]
pub fn Menu() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let entries = move || visible_entries(session.user_signal().get().map(|user| user.role));

    view! {
        <nav class="menu">
            <ul class="menu__list">
                <For
                    each=entries
                    key=|entry| entry.path
                    children=|entry| {
                        view! {
                            <li class="menu__item">
                                <A href=entry.path>{entry.label}</A>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}

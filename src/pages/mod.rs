//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it installs its access
//! policy, fetches through `net::api`, and delegates chrome to
//! `components`. CRUD editing stays deliberately thin; the interesting
//! behavior lives in the guard/session/interceptor chain.

pub mod access_denied;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod offers;
pub mod register;
pub mod roles;
pub mod skill_types;
pub mod users;

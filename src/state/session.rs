//! Persisted authentication session: bearer token plus user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start and provided via context; route
//! guards, the topbar, and the HTTP layer all read it. User changes are
//! published through a signal, so late subscribers immediately observe the
//! most recent value.
//!
//! ERROR HANDLING
//! ==============
//! Corrupt persisted state (malformed token, unparseable user JSON,
//! missing required fields) is purged on read and treated as logged-out;
//! it is logged but never surfaced to the UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::{clock, storage};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user_data";

/// Handle to the current session. Cheap to copy; all copies share the same
/// published user signal and browser storage.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current_user: RwSignal<Option<User>>,
}

impl SessionStore {
    /// Load the persisted session, purging anything structurally invalid.
    pub fn new() -> Self {
        Self { current_user: RwSignal::new(load_stored_user()) }
    }

    /// The persisted bearer token, if present and structurally valid.
    ///
    /// A malformed stored credential is purged rather than silently
    /// reused, so one corrupt write cannot wedge the session.
    pub fn token(&self) -> Option<String> {
        let raw = storage::get_item(TOKEN_KEY)?;
        if token_format_is_valid(&raw) {
            Some(raw)
        } else {
            leptos::logging::warn!("stored bearer token is malformed, purging");
            storage::remove_item(TOKEN_KEY);
            None
        }
    }

    /// Persist a token unconditionally; format is validated lazily on read
    /// since it arrives from a trusted login response.
    pub fn set_token(&self, token: &str) {
        storage::set_item(TOKEN_KEY, token);
    }

    pub fn remove_token(&self) {
        storage::remove_item(TOKEN_KEY);
    }

    /// Validate, persist, and publish a user profile.
    ///
    /// Fails without touching storage when a required field is missing;
    /// optional bookkeeping fields are defaulted before persisting.
    pub fn set_user(&self, user: User) -> Result<User, ApiError> {
        let user = sanitize_user(user)?;
        let raw = serde_json::to_string(&user)
            .map_err(|err| ApiError::Validation(format!("user record not serializable: {err}")))?;
        storage::set_item(USER_KEY, &raw);
        self.current_user.set(Some(user.clone()));
        Ok(user)
    }

    pub fn remove_user(&self) {
        storage::remove_item(USER_KEY);
        self.current_user.set(None);
    }

    /// Last published user, read synchronously.
    pub fn current_user(&self) -> Option<User> {
        self.current_user.get_untracked()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_user.with_untracked(|user| user.as_ref().map(|u| u.role))
    }

    /// Reactive view of the published user; reading it inside an effect
    /// subscribes to login/logout transitions.
    pub fn user_signal(&self) -> RwSignal<Option<User>> {
        self.current_user
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Clear token and user. Token goes first so no subscriber triggered
    /// by the user-change notification can observe a half-cleared session
    /// that still authenticates.
    pub fn clear(&self) {
        self.remove_token();
        self.remove_user();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A bearer credential must parse into exactly three dot-separated
/// segments (compact token format).
pub(crate) fn token_format_is_valid(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.split('.').count() == 3
}

/// Enforce required fields and fill bookkeeping defaults.
pub(crate) fn sanitize_user(mut user: User) -> Result<User, ApiError> {
    let mut missing = Vec::new();
    if user.id <= 0 {
        missing.push("id");
    }
    if user.email.trim().is_empty() {
        missing.push("email");
    }
    if user.full_name.trim().is_empty() {
        missing.push("fullName");
    }
    if !missing.is_empty() {
        return Err(ApiError::Validation(format!("user record incomplete: {}", missing.join(", "))));
    }
    if user.created_at.trim().is_empty() {
        user.created_at = clock::now_iso();
    }
    if user.updated_at.trim().is_empty() {
        user.updated_at = clock::now_iso();
    }
    Ok(user)
}

fn load_stored_user() -> Option<User> {
    let raw = storage::get_item(USER_KEY)?;
    let parsed = match serde_json::from_str::<User>(&raw) {
        Ok(user) => user,
        Err(err) => {
            leptos::logging::warn!("stored user data is corrupt ({err}), purging");
            storage::remove_item(USER_KEY);
            return None;
        }
    };
    match sanitize_user(parsed) {
        Ok(user) => Some(user),
        Err(err) => {
            leptos::logging::warn!("stored user data is incomplete ({err}), purging");
            storage::remove_item(USER_KEY);
            None
        }
    }
}

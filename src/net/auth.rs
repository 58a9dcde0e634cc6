//! Login handshake and logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is the only call with an explicit timeout; its errors pass
//! through untouched (the login screen owns the messaging) because the
//! endpoint is exempt from the centralized reaction in `net::http`.
//!
//! ORDERING
//! ========
//! On success the token is persisted before the user: subscribers woken by
//! the user-change notification may immediately issue authenticated calls.
//! Logout clears both before navigating, so the destination's guard
//! re-evaluates against a cleared session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, User};
use crate::state::session::{self, SessionStore};
use crate::util::redirect;

/// Bound on the login round-trip; expiry maps to `ApiError::Network`.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);

pub const LOGIN_ENDPOINT: &str = "/api/v1/admin/auth/login";
const LOGOUT_ENDPOINT: &str = "/api/v1/admin/auth/logout";

/// Authenticate against the backend and populate the session.
///
/// # Errors
///
/// `Network` when the server is unreachable or the timeout expires,
/// `Protocol` when the response is missing a token or a usable user,
/// `Authentication`/`Status` for rejected credentials. Failures leave the
/// session untouched.
pub async fn login(session: SessionStore, credentials: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = async {
            let response = gloo_net::http::Request::post(&crate::config::api_url(LOGIN_ENDPOINT))
                .header("Accept", "application/json")
                .json(credentials)
                .map_err(|err| ApiError::Network(err.to_string()))?
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            if let Some(error) = ApiError::from_status(response.status()) {
                return Err(error);
            }
            response
                .json::<LoginResponse>()
                .await
                .map_err(|err| ApiError::Protocol(err.to_string()))
        };
        futures::pin_mut!(request);
        let timeout = gloo_timers::future::sleep(LOGIN_TIMEOUT);
        futures::pin_mut!(timeout);

        let response = match futures::future::select(request, timeout).await {
            futures::future::Either::Left((result, _)) => result?,
            futures::future::Either::Right(((), _)) => {
                return Err(ApiError::Network("login request timed out".to_owned()));
            }
        };
        finish_login(session, &response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, credentials);
        Err(ApiError::Network("login is only available in the browser".to_owned()))
    }
}

/// Validate the login payload and commit it to the session store.
pub(crate) fn finish_login(session: SessionStore, response: &LoginResponse) -> Result<User, ApiError> {
    let token = response.token.trim();
    if token.is_empty() {
        return Err(ApiError::Protocol("login response is missing a token".to_owned()));
    }
    // Validate before persisting anything, so a bad payload cannot leave a
    // token behind without a user.
    let user = session::sanitize_user(user_from_login(response)?)?;
    session.set_token(token);
    session.set_user(user)
}

/// Normalize the raw login payload into a session user.
///
/// Server-provided `active`/`verificationStatus`/timestamps win when
/// present; defaults apply only when the server omits them, so an
/// unverified or deactivated account is not masked at login time.
pub(crate) fn user_from_login(response: &LoginResponse) -> Result<User, ApiError> {
    let role = response
        .role
        .parse()
        .map_err(|_| ApiError::Protocol(format!("unknown role {:?} in login response", response.role)))?;
    Ok(User {
        id: response.id,
        email: response.email.clone(),
        full_name: response.full_name.clone(),
        role,
        is_first_login: response.is_first_login.unwrap_or(false),
        active: response.active.unwrap_or(true),
        verification_status: response.verification_status.unwrap_or_default(),
        created_at: response.created_at.clone().unwrap_or_default(),
        updated_at: response.updated_at.clone().unwrap_or_default(),
        phone_number: None,
        profile_picture_url: None,
        company: Default::default(),
        candidate: Default::default(),
    })
}

/// Clear the session and return to the login screen.
///
/// The server-side invalidation is best effort and non-blocking; a dead
/// backend must never prevent a local logout. Idempotent when already
/// logged out.
pub fn logout(session: SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.token() {
            leptos::task::spawn_local(async move {
                let _ = gloo_net::http::Request::post(&crate::config::api_url(LOGOUT_ENDPOINT))
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await;
            });
        }
    }
    session.clear();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(redirect::LOGIN_PATH);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = redirect::LOGIN_PATH;
    }
}

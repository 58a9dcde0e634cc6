//! Authorized request layer: token injection plus centralized reaction to
//! authentication/authorization failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST helper in `net::api` funnels through here so no screen needs
//! its own 401/403 handling. The reaction (session purge, redirect) is a
//! fire-and-forget side effect: the classified error still propagates to
//! the caller, which may render its own message.
//!
//! Requests targeting the auth flow itself are exempt from the reaction
//! so the login screen can present its own failure message instead of
//! being redirected by this layer.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::redirect;

/// Path suffix markers identifying requests that belong to the auth flow
/// itself. Deliberately narrower than an `/auth/` prefix match: the admin
/// user endpoints also live under `/admin/auth/` and must NOT be exempt.
pub(crate) const AUTH_FLOW_MARKERS: [&str; 3] = ["/auth/login", "/auth/register", "/auth/logout"];

/// Whether `path` targets the authentication flow (login, register,
/// logout), whose errors pass through without the centralized reaction.
pub(crate) fn is_auth_flow_path(path: &str) -> bool {
    AUTH_FLOW_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Centralized side effect owed after a classified failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FailureReaction {
    None,
    /// 401: purge the session; redirect replaces the current history entry
    /// and is skipped when already on the login screen.
    ExpireSession { redirect: Option<String> },
    /// 403: send the user to the access-denied screen.
    AccessDenied { redirect: String },
}

/// Decide the reaction for a failed request, as a pure function of the
/// error class, the request target, and the URL currently shown.
pub(crate) fn reaction_for(error: &ApiError, request_path: &str, current_url: &str) -> FailureReaction {
    if is_auth_flow_path(request_path) {
        return FailureReaction::None;
    }
    match error {
        ApiError::Authentication => {
            let redirect = if current_url.contains(redirect::LOGIN_PATH) {
                None
            } else {
                Some(redirect::session_expired_redirect(current_url))
            };
            FailureReaction::ExpireSession { redirect }
        }
        ApiError::Authorization => FailureReaction::AccessDenied {
            redirect: redirect::access_denied_redirect(current_url),
        },
        _ => FailureReaction::None,
    }
}

/// GET `path` and decode a JSON body.
pub async fn get_json<T>(session: SessionStore, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(Request::get(&crate::config::api_url(path)), session)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(session, path, response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(browser_only())
    }
}

/// POST a JSON body to `path` and decode a JSON response.
pub async fn post_json<B, T>(session: SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let response = send_with_body(session, Request::post(&crate::config::api_url(path)), body).await?;
        decode(session, path, response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(browser_only())
    }
}

/// POST a JSON body to `path`, expecting no response body.
pub async fn post_no_content<B>(session: SessionStore, path: &str, body: &B) -> Result<(), ApiError>
where
    B: serde::Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let response = send_with_body(session, Request::post(&crate::config::api_url(path)), body).await?;
        check_status(session, path, &response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(browser_only())
    }
}

/// PUT a JSON body to `path` and decode a JSON response.
pub async fn put_json<B, T>(session: SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let response = send_with_body(session, Request::put(&crate::config::api_url(path)), body).await?;
        decode(session, path, response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(browser_only())
    }
}

/// PATCH a JSON body to `path` and decode a JSON response.
pub async fn patch_json<B, T>(session: SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let response = send_with_body(session, Request::patch(&crate::config::api_url(path)), body).await?;
        decode(session, path, response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(browser_only())
    }
}

/// DELETE `path`, expecting no response body.
pub async fn delete(session: SessionStore, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(Request::delete(&crate::config::api_url(path)), session)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(session, path, &response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(browser_only())
    }
}

#[cfg(not(feature = "hydrate"))]
fn browser_only() -> ApiError {
    ApiError::Network("HTTP is only available in the browser".to_owned())
}

/// Attach content negotiation and, when a valid token exists, the bearer
/// credential.
#[cfg(feature = "hydrate")]
fn authorized(builder: RequestBuilder, session: SessionStore) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match session.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_body<B: Serialize>(
    session: SessionStore,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    authorized(builder, session)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(session: SessionStore, path: &str, response: Response) -> Result<T, ApiError> {
    check_status(session, path, &response)?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Protocol(err.to_string()))
}

/// Classify the response status and apply the centralized reaction before
/// the error is handed back to the caller.
#[cfg(feature = "hydrate")]
fn check_status(session: SessionStore, path: &str, response: &Response) -> Result<(), ApiError> {
    let Some(error) = ApiError::from_status(response.status()) else {
        return Ok(());
    };
    let reaction = reaction_for(&error, path, &current_browser_url());
    apply_reaction(session, &reaction);
    Err(error)
}

#[cfg(feature = "hydrate")]
fn apply_reaction(session: SessionStore, reaction: &FailureReaction) {
    match reaction {
        FailureReaction::None => {}
        FailureReaction::ExpireSession { redirect } => {
            leptos::logging::warn!("unauthorized response, clearing session");
            session.clear();
            if let Some(url) = redirect {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().replace(url);
                }
            }
        }
        FailureReaction::AccessDenied { redirect } => {
            leptos::logging::warn!("forbidden response, redirecting to access-denied");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(redirect);
            }
        }
    }
}

/// Path plus query of the URL currently shown in the address bar.
#[cfg(feature = "hydrate")]
pub(crate) fn current_browser_url() -> String {
    web_sys::window().map_or_else(
        || "/".to_owned(),
        |window| {
            let location = window.location();
            let path = location.pathname().unwrap_or_default();
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        },
    )
}

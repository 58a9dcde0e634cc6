//! Login page: credential form, session-expiry banner, and role-aware
//! post-login redirect.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, User, VerificationStatus};
use crate::state::session::SessionStore;
use crate::util::guard::{self, RoutePolicy};

/// Minimum accepted password length, mirrored from the backend policy.
const MIN_PASSWORD_LEN: usize = 6;

/// Validate and normalize the submitted credentials.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Map a login failure to the message shown under the form.
pub(crate) fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Authentication | ApiError::Authorization => "Incorrect email or password.".to_owned(),
        ApiError::Status(400 | 422) => "Invalid credentials. Please check your input.".to_owned(),
        other => other.user_message(),
    }
}

/// Non-blocking notice about the account state after a successful login.
pub(crate) fn account_notice(user: &User) -> Option<String> {
    if user.is_first_login {
        return Some("First sign-in detected. Please change your password before continuing.".to_owned());
    }
    if !user.active {
        return Some("Your account has been deactivated. Contact an administrator.".to_owned());
    }
    match user.verification_status {
        VerificationStatus::Pending => {
            Some("Your account is pending verification; some sections may be limited.".to_owned())
        }
        VerificationStatus::Rejected => {
            Some("Your account verification was rejected. Contact support for details.".to_owned())
        }
        VerificationStatus::Verified => None,
    }
}

/// Whether the account state blocks the post-login navigation.
pub(crate) fn blocks_navigation(user: &User) -> bool {
    user.is_first_login || !user.active
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    // Bounce already-authenticated visitors to their pending destination.
    guard::install(RoutePolicy::RequireAnonymous, session);

    let query = use_query_map();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let session_expired = move || query.get().get("sessionExpired").as_deref() == Some("true");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_credentials(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(session, &request).await {
                    Ok(user) => {
                        if let Some(message) = account_notice(&user) {
                            notice.set(Some(message));
                        }
                        if blocks_navigation(&user) {
                            busy.set(false);
                            return;
                        }
                        let return_url = query.get_untracked().get("returnUrl");
                        let destination =
                            crate::util::redirect::post_login_destination(return_url.as_deref(), user.role);
                        navigate(&destination, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(login_error_message(&err)));
                        // Drop the password on failure.
                        password.set(String::new());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Back Office"</h1>
                <p class="login-card__subtitle">"Sign in to manage the job board"</p>
                <Show when=session_expired>
                    <p class="login-banner login-banner--warn">
                        "Your session has expired. Please sign in again."
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="login-message">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    <a href="/auth/register">"Need an account? Register"</a>
                </p>
            </div>
        </div>
    }
}

//! Compile-time configuration for the REST backend location.
//!
//! The base URL is baked in at build time via `BACKOFFICE_API_URL`; when
//! unset, requests go to the serving origin with relative paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("BACKOFFICE_API_URL").unwrap_or("")
}

/// Join an absolute API path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the authorized request layer every call goes through (token
//! injection plus centralized 401/403 reaction), `auth` owns the login and
//! logout flows, `api` holds the per-resource REST helpers, `types` defines
//! the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod auth;
pub mod error;
pub mod http;
pub mod types;

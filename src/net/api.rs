//! REST helpers for the management screens, one section per backend area.
//!
//! Thin wrappers over `net::http`; everything here inherits token
//! injection and the centralized 401/403 reaction.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{
    JobOffer, MarkAsRead, NotificationItem, NotificationStats, Paginated, Permission, RegisterRequest,
    RoleDefinition, SkillType, User,
};
use crate::state::session::SessionStore;

const ADMIN_USERS: &str = "/api/v1/admin/auth/users";
const ADMIN_ROLES: &str = "/api/v1/admin/roles";
const ADMIN_SKILL_TYPES: &str = "/api/v1/admin/skill-types";
const OFFERS: &str = "/api/v1/mobile/offers";
const NOTIFICATIONS: &str = "/api/v1/mobile/notifications";
const REGISTER: &str = "/api/v1/admin/auth/register";

fn paged(path: &str, page: u32, size: u32) -> String {
    format!("{path}?page={page}&size={size}")
}

// --- Users (admin) ---

pub async fn fetch_users(session: SessionStore) -> Result<Vec<User>, ApiError> {
    http::get_json(session, ADMIN_USERS).await
}

pub async fn update_user(session: SessionStore, id: i64, user: &User) -> Result<User, ApiError> {
    http::put_json(session, &format!("{ADMIN_USERS}/{id}"), user).await
}

pub async fn delete_user(session: SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{ADMIN_USERS}/{id}")).await
}

pub async fn toggle_user_status(session: SessionStore, id: i64, active: bool) -> Result<User, ApiError> {
    http::patch_json(
        session,
        &format!("{ADMIN_USERS}/{id}/toggle-status"),
        &serde_json::json!({ "isActive": active }),
    )
    .await
}

// --- Roles (admin) ---

pub async fn fetch_roles(session: SessionStore, page: u32, size: u32) -> Result<Paginated<RoleDefinition>, ApiError> {
    http::get_json(session, &paged(ADMIN_ROLES, page, size)).await
}

pub async fn create_role(session: SessionStore, role: &RoleDefinition) -> Result<RoleDefinition, ApiError> {
    http::post_json(session, ADMIN_ROLES, role).await
}

pub async fn update_role(session: SessionStore, id: i64, role: &RoleDefinition) -> Result<RoleDefinition, ApiError> {
    http::put_json(session, &format!("{ADMIN_ROLES}/{id}"), role).await
}

pub async fn toggle_role_status(session: SessionStore, id: i64, active: bool) -> Result<RoleDefinition, ApiError> {
    http::put_json(session, &format!("{ADMIN_ROLES}/{id}/toggle-status?active={active}"), &()).await
}

pub async fn delete_role(session: SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{ADMIN_ROLES}/{id}")).await
}

pub async fn fetch_permissions(session: SessionStore) -> Result<Vec<Permission>, ApiError> {
    http::get_json(session, &format!("{ADMIN_ROLES}/permissions")).await
}

// --- Skill types (admin) ---

pub async fn fetch_skill_types(session: SessionStore, page: u32, size: u32) -> Result<Paginated<SkillType>, ApiError> {
    http::get_json(session, &paged(ADMIN_SKILL_TYPES, page, size)).await
}

pub async fn fetch_skill_type(session: SessionStore, id: i64) -> Result<SkillType, ApiError> {
    http::get_json(session, &format!("{ADMIN_SKILL_TYPES}/{id}")).await
}

pub async fn create_skill_type(session: SessionStore, skill_type: &SkillType) -> Result<SkillType, ApiError> {
    http::post_json(session, ADMIN_SKILL_TYPES, skill_type).await
}

pub async fn update_skill_type(session: SessionStore, id: i64, skill_type: &SkillType) -> Result<SkillType, ApiError> {
    http::put_json(session, &format!("{ADMIN_SKILL_TYPES}/{id}"), skill_type).await
}

pub async fn toggle_skill_type_status(session: SessionStore, id: i64) -> Result<SkillType, ApiError> {
    http::put_json(session, &format!("{ADMIN_SKILL_TYPES}/{id}/toggle-status"), &()).await
}

pub async fn delete_skill_type(session: SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{ADMIN_SKILL_TYPES}/{id}")).await
}

// --- Job offers ---

pub async fn fetch_offers(session: SessionStore, page: u32, size: u32) -> Result<Paginated<JobOffer>, ApiError> {
    http::get_json(session, &paged(OFFERS, page, size)).await
}

pub async fn fetch_offer(session: SessionStore, id: i64) -> Result<JobOffer, ApiError> {
    http::get_json(session, &format!("{OFFERS}/{id}")).await
}

pub async fn create_offer(session: SessionStore, offer: &JobOffer) -> Result<JobOffer, ApiError> {
    http::post_json(session, OFFERS, offer).await
}

pub async fn update_offer(session: SessionStore, id: i64, offer: &JobOffer) -> Result<JobOffer, ApiError> {
    http::put_json(session, &format!("{OFFERS}/{id}"), offer).await
}

pub async fn update_offer_status(session: SessionStore, id: i64, status: &str) -> Result<JobOffer, ApiError> {
    http::patch_json(session, &format!("{OFFERS}/{id}/status"), &serde_json::json!({ "status": status })).await
}

pub async fn delete_offer(session: SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{OFFERS}/{id}")).await
}

// --- Notifications ---

pub async fn fetch_notifications(session: SessionStore, page: u32, size: u32) -> Result<Vec<NotificationItem>, ApiError> {
    http::get_json(session, &paged(NOTIFICATIONS, page, size)).await
}

pub async fn fetch_notification_stats(session: SessionStore) -> Result<NotificationStats, ApiError> {
    http::get_json(session, &format!("{NOTIFICATIONS}/stats")).await
}

/// Mark the listed notifications read; an empty list marks everything.
pub async fn mark_notifications_read(session: SessionStore, ids: Vec<i64>) -> Result<(), ApiError> {
    http::post_no_content(session, &format!("{NOTIFICATIONS}/read"), &MarkAsRead { notification_ids: ids }).await
}

pub async fn delete_notification(session: SessionStore, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{NOTIFICATIONS}/{id}")).await
}

pub async fn clear_read_notifications(session: SessionStore) -> Result<(), ApiError> {
    http::delete(session, &format!("{NOTIFICATIONS}/read")).await
}

// --- Registration ---

pub async fn register(session: SessionStore, request: &RegisterRequest) -> Result<(), ApiError> {
    http::post_no_content(session, REGISTER, request).await
}

use super::*;
use crate::net::types::Role;

#[test]
fn admin_sees_every_section() {
    let labels: Vec<_> = visible_entries(Some(Role::Admin)).iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Dashboard", "Users", "Roles", "Skill types", "Job offers", "Notifications"]);
}

#[test]
fn recruiter_sees_offers_but_not_user_administration() {
    let paths: Vec<_> = visible_entries(Some(Role::Recruiter)).iter().map(|e| e.path).collect();
    assert_eq!(paths, ["/dashboard", "/offers-list-management", "/notifications-management"]);
}

#[test]
fn job_seeker_sees_only_dashboard_and_notifications() {
    let paths: Vec<_> = visible_entries(Some(Role::JobSeeker)).iter().map(|e| e.path).collect();
    assert_eq!(paths, ["/dashboard", "/notifications-management"]);
}

#[test]
fn no_session_means_no_menu() {
    assert!(visible_entries(None).is_empty());
}

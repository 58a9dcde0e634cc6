use super::*;

#[test]
fn paged_appends_page_and_size() {
    assert_eq!(paged(ADMIN_ROLES, 0, 10), "/api/v1/admin/roles?page=0&size=10");
    assert_eq!(paged(OFFERS, 3, 25), "/api/v1/mobile/offers?page=3&size=25");
}

#[test]
fn resource_endpoints_are_never_part_of_the_auth_flow() {
    use crate::net::http::is_auth_flow_path;

    for path in [ADMIN_USERS, ADMIN_ROLES, ADMIN_SKILL_TYPES, OFFERS, NOTIFICATIONS] {
        assert!(!is_auth_flow_path(path), "{path} must get the centralized 401/403 reaction");
    }
    assert!(is_auth_flow_path(REGISTER));
}

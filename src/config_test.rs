use super::*;

#[test]
fn api_url_joins_base_and_path() {
    // Default build: same-origin relative paths.
    assert_eq!(api_url("/api/v1/admin/roles"), format!("{}/api/v1/admin/roles", api_base()));
    assert!(api_url("/x").ends_with("/x"));
}

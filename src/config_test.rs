use super::*;

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn api_url_joins_origin_and_path() {
    let url = api_url("/auth/login");
    assert!(url.ends_with("/auth/login"));
    assert!(url.starts_with("http"));
}

#[test]
fn context_list_path_carries_pagination() {
    assert_eq!(context_list_path(2, 25), "/context?page=2&limit=25");
}

#[test]
fn context_item_path_embeds_id() {
    assert_eq!(context_item_path("ctx-9"), "/context/ctx-9");
}

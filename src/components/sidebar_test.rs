use super::*;

#[test]
fn nav_covers_the_protected_routes() {
    let hrefs: Vec<_> = nav_links().iter().map(|(_, href)| *href).collect();
    assert!(hrefs.contains(&"/dashboard"));
    assert!(hrefs.contains(&"/upload-context"));
}

#[test]
fn active_link_requires_an_exact_path_match() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(!is_active("/upload-context", "/dashboard"));
    assert!(!is_active("/dashboard/anything", "/dashboard"));
}

use super::*;

#[test]
fn admin_paths_hide_the_public_chrome() {
    assert!(is_admin_path("/admin"));
    assert!(is_admin_path("/admin/products"));
}

#[test]
fn public_paths_keep_the_public_chrome() {
    assert!(!is_admin_path("/"));
    assert!(!is_admin_path("/products"));
    assert!(!is_admin_path("/administrator"));
    assert!(!is_admin_path("/adminx"));
}

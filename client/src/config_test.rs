use super::*;

#[test]
fn defaults_match_published_routes() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.storage_key, "gcaUser");
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.dashboard_path, "/dashboard");
    assert_eq!(cfg.admin_dashboard_path, "/admin/dashboard");
}

#[test]
fn redirect_path_maps_targets() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.redirect_path(RedirectTarget::Login), "/login");
    assert_eq!(cfg.redirect_path(RedirectTarget::Dashboard), "/dashboard");
}

#[test]
fn landing_path_depends_on_role() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.landing_path(Role::Admin), "/admin/dashboard");
    assert_eq!(cfg.landing_path(Role::Student), "/dashboard");
}

#[test]
fn overrides_flow_through_lookups() {
    let cfg = AuthConfig { login_path: "/signin".to_owned(), ..AuthConfig::default() };
    assert_eq!(cfg.redirect_path(RedirectTarget::Login), "/signin");
}

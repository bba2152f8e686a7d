//! Client-side auth configuration: storage key and redirect targets.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Role;
use crate::util::auth::RedirectTarget;

pub const DEFAULT_STORAGE_KEY: &str = "gcaUser";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Storage key holding the persisted identity record.
    pub storage_key: String,
    pub login_path: String,
    /// Where authenticated non-admins land, and where admin-only routes send them.
    pub dashboard_path: String,
    pub admin_dashboard_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            admin_dashboard_path: DEFAULT_ADMIN_DASHBOARD_PATH.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Concrete path for a guard redirect.
    #[must_use]
    pub fn redirect_path(&self, target: RedirectTarget) -> &str {
        match target {
            RedirectTarget::Login => &self.login_path,
            RedirectTarget::Dashboard => &self.dashboard_path,
        }
    }

    /// Post-login destination for a role.
    #[must_use]
    pub fn landing_path(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_dashboard_path,
            Role::Student => &self.dashboard_path,
        }
    }
}

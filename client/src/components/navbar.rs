//! Top navigation bar with identity-dependent actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::types::User;
use crate::state::auth::use_auth;

/// Marketing links shown to every visitor.
pub(crate) const SITE_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/coaches", "Coaches"), ("/contact", "Contact Us")];

/// Dashboard link for the signed-in user, per role.
pub(crate) fn dashboard_href(config: &AuthConfig, user: &User) -> String {
    config.landing_path(user.role).to_owned()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AuthConfig>().unwrap_or_default();

    let identity = {
        let auth = auth.clone();
        move || auth.current_user()
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Genius Chess Academy"</a>
            <div class="navbar__links">
                {SITE_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a href=*href class="navbar__link">{*label}</a> })
                    .collect_view()}
                {move || match identity() {
                    Some(user) => {
                        let auth = auth.clone();
                        view! {
                            <a href=dashboard_href(&config, &user) class="navbar__link" title=user.display_name.clone()>
                                "Dashboard"
                            </a>
                            <button
                                class="navbar__logout"
                                on:click=move |_| {
                                    let auth = auth.clone();
                                    leptos::task::spawn_local(async move { auth.logout().await });
                                }
                            >
                                "Logout"
                            </button>
                        }
                            .into_any()
                    }
                    None => view! { <a href=config.login_path.clone() class="navbar__link">"Login"</a> }.into_any(),
                }}
            </div>
        </nav>
    }
}

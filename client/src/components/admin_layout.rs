//! Admin back-office chrome: sidebar plus an admin-only guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AuthConfig;
use crate::state::auth::{AuthController, use_auth};
use crate::util::auth::{Access, RouteGuard};

const ADMIN_LINKS: [(&str, &str); 2] = [("/admin/dashboard", "Home"), ("/admin/batches", "Batches")];

/// Clear the session, then go to the login page.
pub fn logout_and_redirect<F>(auth: AuthController, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        auth.logout().await;
        navigate(&login_path, NavigateOptions::default());
    });
}

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AuthConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let on_logout = move |_| logout_and_redirect(auth.clone(), config.login_path.clone(), navigate.clone());

    view! {
        <aside class="admin-sidebar">
            <a href="/admin/dashboard" class="admin-sidebar__brand">"Genius Chess Academy"</a>
            <nav>
                <ul>
                    {ADMIN_LINKS
                        .iter()
                        .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>
            </nav>
            <button class="admin-sidebar__logout" on:click=on_logout>"Logout"</button>
        </aside>
    }
}

/// Wraps an admin page; non-admins never see `children`.
#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    view! {
        <RouteGuard access=Access::AdminOnly>
            <div class="admin-layout">
                <AdminSidebar/>
                <main class="admin-layout__main">
                    <header class="admin-layout__header">
                        <h1>{title.clone()}</h1>
                    </header>
                    {children()}
                </main>
            </div>
        </RouteGuard>
    }
}

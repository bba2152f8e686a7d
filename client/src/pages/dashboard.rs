//! Student dashboard: the landing route for any signed-in non-admin.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::auth::use_auth;
use crate::util::auth::{Access, RouteGuard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.current_user()
            .map(|user| format!("Welcome back, {}", user.display_name))
            .unwrap_or_default()
    };

    view! {
        <RouteGuard access=Access::AuthenticatedOnly>
            <div class="page">
                <Navbar/>
                <section class="dashboard">
                    <h1>{greeting.clone()}</h1>
                    <p>"Your upcoming lessons will appear here."</p>
                </section>
            </div>
        </RouteGuard>
    }
}

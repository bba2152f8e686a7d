//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AuthConfig;
use crate::pages::{
    admin::{AdminBatchesPage, AdminDashboardPage},
    dashboard::DashboardPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Learn and play chess with the best coaches"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Installs the auth controller, starts session hydration once mounted in
/// the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth(AuthConfig::default());

    // Effects only run in the browser, so the server render stays `Uninitialized`
    // and guarded routes ship their placeholder.
    Effect::new(move || {
        let auth = auth.clone();
        leptos::task::spawn_local(async move { auth.hydrate().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gca.css"/>
        <Title text="Genius Chess Academy"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("batches")) view=AdminBatchesPage/>
            </Routes>
        </Router>
    }
}

//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <section class="not-found">
                <h1>"404"</h1>
                <p>"Page not found."</p>
                <a href="/">"Back to home"</a>
            </section>
        </div>
    }
}

//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <section class="hero">
                <h1>"Genius Chess Academy"</h1>
                <p>"Learn and play chess with the best coaches."</p>
                <a href="/login" class="hero__cta">"Start learning"</a>
            </section>
        </div>
    }
}

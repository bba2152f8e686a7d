//! Login page: username/password form backed by the auth controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Once the session is authenticated the visitor is sent to the dashboard
//! for their role, whether they just signed in or arrived signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AuthConfig;
use crate::state::auth::use_auth;

/// Trim the username; the password is taken verbatim.
pub(crate) fn normalize_login_input(username: &str, password: &str) -> (String, String) {
    (username.trim().to_owned(), password.to_owned())
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AuthConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Covers both a visitor who arrives signed in and a successful submit.
    {
        let auth = auth.clone();
        Effect::new(move || {
            if let Some(user) = auth.current_user() {
                navigate(config.landing_path(user.role), NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user_value, pass_value) = normalize_login_input(&username.get_untracked(), &password.get_untracked());
        error.set(String::new());
        busy.set(true);

        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = auth.login(&user_value, &pass_value).await {
                error.set(e.user_message().to_owned());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a href="/" class="login-card__brand">
                    <h1>"Genius Chess Academy"</h1>
                </a>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        required=true
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required=true
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}

//! Route guard: decides whether a route may render for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page wraps its content in [`RouteGuard`]. The decision is a
//! pure function of the session and the route's [`Access`]; navigation is a
//! separate effect that fires at most once per transition into a redirect.
//! Protected children render only under [`GuardDecision::Allow`], so no
//! protected markup reaches the page before a redirect lands.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::AuthConfig;
use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::state::session::Session;

/// Access requirement attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    Public,
    AuthenticatedOnly,
    AdminOnly,
}

/// Where a redirect decision sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Session unresolved; show the placeholder and re-evaluate later.
    Pending,
    Redirect(RedirectTarget),
}

impl GuardDecision {
    #[must_use]
    pub fn renders_content(self) -> bool {
        self == Self::Allow
    }
}

/// Decision table for `session` against `access`.
#[must_use]
pub fn decide(session: &Session, access: Access) -> GuardDecision {
    if access == Access::Public {
        return GuardDecision::Allow;
    }
    match session {
        Session::Uninitialized | Session::Hydrating => GuardDecision::Pending,
        Session::Anonymous => GuardDecision::Redirect(RedirectTarget::Login),
        Session::Authenticated(user) => match (access, user.role) {
            (Access::AdminOnly, Role::Student) => GuardDecision::Redirect(RedirectTarget::Dashboard),
            _ => GuardDecision::Allow,
        },
    }
}

/// Redirect to issue when moving from `prev` to `next`, if any.
///
/// Only a change into a redirect decision yields a target; re-evaluating the
/// same redirect does not navigate again.
#[must_use]
pub fn redirect_on_transition(prev: Option<GuardDecision>, next: GuardDecision) -> Option<RedirectTarget> {
    match next {
        GuardDecision::Redirect(target) if prev != Some(next) => Some(target),
        _ => None,
    }
}

/// Navigate whenever `decision` transitions into a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, config: AuthConfig, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |prev: Option<GuardDecision>| {
        let next = decision.get();
        if let Some(target) = redirect_on_transition(prev, next) {
            let path = config.redirect_path(target);
            log::info!("route guard redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        next
    });
}

/// Neutral placeholder shown while pending or redirecting.
#[component]
pub fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="guard-placeholder">
            <div class="guard-placeholder__spinner"></div>
        </div>
    }
}

/// Renders `children` only when the current session satisfies `access`.
#[component]
pub fn RouteGuard(#[prop(optional)] access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AuthConfig>().unwrap_or_default();
    let session = auth.session();
    let decision = Memo::new(move |_| session.with(|s| decide(s, access)));

    install_guard_redirect(decision, config, leptos_router::hooks::use_navigate());

    move || {
        if decision.get().renders_content() {
            children().into_any()
        } else {
            view! { <GuardPlaceholder/> }.into_any()
        }
    }
}

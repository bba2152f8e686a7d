use super::*;
use crate::net::types::User;

fn authenticated(role: Role) -> Session {
    Session::Authenticated(User {
        id: 9,
        username: "hou".to_owned(),
        display_name: "Hou Y.".to_owned(),
        role,
    })
}

const LOGIN: GuardDecision = GuardDecision::Redirect(RedirectTarget::Login);
const DASHBOARD: GuardDecision = GuardDecision::Redirect(RedirectTarget::Dashboard);

// =============================================================
// decide
// =============================================================

#[test]
fn public_routes_always_allow() {
    for session in [
        Session::Uninitialized,
        Session::Hydrating,
        Session::Anonymous,
        authenticated(Role::Student),
        authenticated(Role::Admin),
    ] {
        assert_eq!(decide(&session, Access::Public), GuardDecision::Allow, "{session:?}");
    }
}

#[test]
fn unresolved_sessions_are_pending_on_protected_routes() {
    for session in [Session::Uninitialized, Session::Hydrating] {
        assert_eq!(decide(&session, Access::AuthenticatedOnly), GuardDecision::Pending);
        assert_eq!(decide(&session, Access::AdminOnly), GuardDecision::Pending);
    }
}

#[test]
fn anonymous_is_sent_to_login() {
    assert_eq!(decide(&Session::Anonymous, Access::AuthenticatedOnly), LOGIN);
    assert_eq!(decide(&Session::Anonymous, Access::AdminOnly), LOGIN);
}

#[test]
fn student_is_allowed_authenticated_routes_but_not_admin_routes() {
    let student = authenticated(Role::Student);
    assert_eq!(decide(&student, Access::AuthenticatedOnly), GuardDecision::Allow);
    let decision = decide(&student, Access::AdminOnly);
    assert_eq!(decision, DASHBOARD);
    assert!(!decision.renders_content());
}

#[test]
fn admin_is_allowed_everywhere() {
    let admin = authenticated(Role::Admin);
    assert_eq!(decide(&admin, Access::AuthenticatedOnly), GuardDecision::Allow);
    assert_eq!(decide(&admin, Access::AdminOnly), GuardDecision::Allow);
}

#[test]
fn only_allow_renders_content() {
    assert!(GuardDecision::Allow.renders_content());
    assert!(!GuardDecision::Pending.renders_content());
    assert!(!LOGIN.renders_content());
}

#[test]
fn pending_resolves_to_login_once_hydration_is_anonymous() {
    let before = decide(&Session::Hydrating, Access::AuthenticatedOnly);
    let after = decide(&Session::Anonymous, Access::AuthenticatedOnly);
    assert_eq!(before, GuardDecision::Pending);
    assert_eq!(after, LOGIN);
    assert_eq!(redirect_on_transition(Some(before), after), Some(RedirectTarget::Login));
}

// =============================================================
// redirect_on_transition
// =============================================================

#[test]
fn first_evaluation_into_redirect_navigates() {
    assert_eq!(redirect_on_transition(None, DASHBOARD), Some(RedirectTarget::Dashboard));
}

#[test]
fn repeated_redirect_decision_does_not_navigate_again() {
    let mut navigations = 0;
    let mut prev = None;
    for next in [GuardDecision::Pending, LOGIN, LOGIN, LOGIN] {
        if redirect_on_transition(prev, next).is_some() {
            navigations += 1;
        }
        prev = Some(next);
    }
    assert_eq!(navigations, 1);
}

#[test]
fn changing_redirect_target_navigates_again() {
    assert_eq!(redirect_on_transition(Some(LOGIN), DASHBOARD), Some(RedirectTarget::Dashboard));
}

#[test]
fn re_entering_redirect_after_allow_navigates_again() {
    assert_eq!(redirect_on_transition(Some(GuardDecision::Allow), LOGIN), Some(RedirectTarget::Login));
}

#[test]
fn allow_and_pending_never_navigate() {
    for prev in [None, Some(LOGIN), Some(GuardDecision::Pending)] {
        assert_eq!(redirect_on_transition(prev, GuardDecision::Allow), None);
        assert_eq!(redirect_on_transition(prev, GuardDecision::Pending), None);
    }
}

#[test]
fn default_access_is_public() {
    assert_eq!(Access::default(), Access::Public);
}

// =============================================================
// install_guard_redirect (effect wiring, needs a reactive runtime)
// =============================================================

#[cfg(feature = "hydrate")]
mod guard_effect {
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;

    use super::*;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn navigates_once_per_redirect_transition() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let session = RwSignal::new(Session::Hydrating);
                let decision = Memo::new(move |_| session.with(|s| decide(s, Access::AdminOnly)));
                let visited = Rc::new(RefCell::new(Vec::<(String, bool)>::new()));
                let sink = visited.clone();
                install_guard_redirect(decision, AuthConfig::default(), move |path: &str, opts: NavigateOptions| {
                    sink.borrow_mut().push((path.to_owned(), opts.replace));
                });
                settle().await;

                for next in [
                    Session::Anonymous,
                    Session::Anonymous,
                    authenticated(Role::Student),
                    authenticated(Role::Student),
                    authenticated(Role::Admin),
                ] {
                    session.set(next);
                    settle().await;
                }

                let expected = [("/login".to_owned(), true), ("/dashboard".to_owned(), true)];
                assert_eq!(*visited.borrow(), expected);
            })
            .await;
    }
}

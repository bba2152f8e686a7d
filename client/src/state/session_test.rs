use super::*;

fn user(role: Role) -> User {
    User { id: 3, username: "judit".to_owned(), display_name: "Judit P.".to_owned(), role }
}

#[test]
fn default_is_uninitialized_and_loading() {
    let session = Session::default();
    assert_eq!(session, Session::Uninitialized);
    assert!(session.is_loading());
    assert!(session.user().is_none());
}

#[test]
fn hydrating_is_loading() {
    assert!(Session::Hydrating.is_loading());
    assert!(!Session::Hydrating.is_admin());
}

#[test]
fn anonymous_has_no_user_and_is_resolved() {
    assert!(!Session::Anonymous.is_loading());
    assert!(Session::Anonymous.user().is_none());
    assert_eq!(Session::Anonymous.role(), None);
}

#[test]
fn authenticated_exposes_user() {
    let session = Session::Authenticated(user(Role::Student));
    assert!(!session.is_loading());
    assert_eq!(session.user().map(|u| u.id), Some(3));
    assert_eq!(session.role(), Some(Role::Student));
    assert!(!session.is_admin());
}

#[test]
fn is_admin_only_for_admin_role() {
    assert!(Session::Authenticated(user(Role::Admin)).is_admin());
}

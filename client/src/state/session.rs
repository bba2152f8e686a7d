//! The session state machine value.
//!
//! DESIGN
//! ======
//! Exactly one variant holds at a time. `Uninitialized -> Hydrating` happens
//! once per application lifetime; everything after that moves only between
//! `Anonymous` and `Authenticated`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Authentication outcome for the active visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Hydration not yet attempted.
    #[default]
    Uninitialized,
    /// Persisted identity read in flight.
    Hydrating,
    Anonymous,
    Authenticated(User),
}

impl Session {
    /// The identity, present only when authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until hydration has resolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Hydrating)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

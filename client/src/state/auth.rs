//! Auth-session controller for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the [`Session`] signal read by route guards and identity-aware
//! components, and is the only writer of the persisted session record.
//! Provided through Leptos context; pages reach it with [`use_auth`].
//!
//! TRANSITIONS
//! ===========
//! - `hydrate`: `Uninitialized -> Hydrating -> Anonymous | Authenticated`, once.
//! - `login`: `* -> Authenticated` on success; failure leaves state untouched.
//! - `logout`: `* -> Anonymous`, always.
//!
//! Every transition is written after its awaits finish, from the awaited
//! result rather than from state read earlier. A released signal (unmounted
//! tree) silently drops the write.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::Session;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::credentials::{CredentialVerifier, FixedCredentials};
use crate::net::types::{PersistedRecord, User};
use crate::util::storage::SessionStore;

/// Session manager shared through context. Cheap to clone.
#[derive(Clone)]
pub struct AuthController {
    session: RwSignal<Session>,
    store: SessionStore,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthController {
    pub fn new(store: SessionStore, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { session: RwSignal::new(Session::Uninitialized), store, verifier }
    }

    /// Reactive read handle for guards and components.
    #[must_use]
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Current state without subscribing. A released signal reads as anonymous.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Session {
        self.session.try_get_untracked().unwrap_or(Session::Anonymous)
    }

    /// Tracked; `None` unless authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.try_with(|s| s.user().cloned()).flatten()
    }

    /// Tracked; true until hydration resolves.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.try_with(Session::is_loading).unwrap_or(false)
    }

    /// Tracked; true only for an authenticated admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.try_with(Session::is_admin).unwrap_or(false)
    }

    /// Recover the persisted identity. Only the first call does anything.
    pub async fn hydrate(&self) {
        let started = self
            .session
            .try_maybe_update(|s| {
                if *s == Session::Uninitialized {
                    *s = Session::Hydrating;
                    (true, true)
                } else {
                    (false, false)
                }
            })
            .unwrap_or(false);
        if !started {
            return;
        }

        let resolved = session_from_record(self.store.load().await);
        let outcome = match &resolved {
            Session::Authenticated(user) => format!("authenticated as {} ({})", user.username, user.role),
            _ => "anonymous".to_owned(),
        };

        // A login or logout that finished while the read was in flight wins.
        let applied = self
            .session
            .try_maybe_update(|s| {
                if *s == Session::Hydrating {
                    *s = resolved;
                    (true, true)
                } else {
                    (false, false)
                }
            })
            .unwrap_or(false);
        if applied {
            log::info!("session hydrated: {outcome}");
        } else {
            log::debug!("hydration result dropped; session already moved on");
        }
    }

    /// Verify credentials, persist the identity, then authenticate.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] for blank or unrecognised credentials.
    /// - [`AuthError::PersistenceUnavailable`] if the identity could not be stored.
    ///
    /// The session is unchanged on any error.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            log::info!("login rejected: blank credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let user = self.verifier.verify(username, password).await.inspect_err(|e| {
            log::info!("login rejected: {e}");
        })?;

        self.store
            .save(&PersistedRecord::from(&user))
            .await
            .inspect_err(|e| log::warn!("login for `{username}` not persisted: {e}"))?;

        if self.session.try_set(Session::Authenticated(user.clone())).is_some() {
            log::debug!("session signal released; login for `{username}` not applied");
        } else {
            log::info!("logged in as {} ({})", user.username, user.role);
        }
        Ok(user)
    }

    /// Clear the persisted record and drop to anonymous. Idempotent.
    pub async fn logout(&self) {
        self.store.clear().await;
        let changed = self
            .session
            .try_maybe_update(|s| {
                if *s == Session::Anonymous {
                    (false, false)
                } else {
                    *s = Session::Anonymous;
                    (true, true)
                }
            })
            .unwrap_or(false);
        if changed {
            log::info!("logged out");
        }
    }
}

/// Map a stored record (or its absence) to the post-hydration state.
pub(crate) fn session_from_record(record: Option<PersistedRecord>) -> Session {
    let Some(record) = record else {
        return Session::Anonymous;
    };
    match User::try_from(record) {
        Ok(user) => Session::Authenticated(user),
        Err(e) => {
            log::warn!("discarding stored session: {e}");
            Session::Anonymous
        }
    }
}

/// Build the browser controller and make it (and `config`) available to
/// every descendant component.
pub fn provide_auth(config: AuthConfig) -> AuthController {
    let controller = AuthController::new(SessionStore::local(&config), Arc::new(FixedCredentials));
    provide_context(controller.clone());
    provide_context(config);
    controller
}

/// The controller installed by [`provide_auth`].
pub fn use_auth() -> AuthController {
    expect_context::<AuthController>()
}

//! Error kinds produced by the session and authorization layer.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape to the UI as failures. Corrupt or unreachable storage
//! degrades to an anonymous session; login failures come back as a `Result`
//! the login page turns into one generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised inside the auth core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Username/password did not match a known identity.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A persisted record exists but fails structural validation.
    #[error("corrupt session record: {0}")]
    CorruptSession(String),

    /// The storage backend could not be read or written.
    #[error("session storage unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl AuthError {
    /// Text shown to the visitor. Deliberately identical for every kind.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Invalid credentials"
    }
}

//! Credential verification seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthController` only sees the [`CredentialVerifier`] trait. The shipped
//! implementation checks two fixed accounts in memory; a remote credential
//! service can replace it without touching the controller.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use async_trait::async_trait;

use super::types::{Role, User};
use crate::error::AuthError;

/// Checks a username/password pair and issues the matching identity.
#[async_trait(?Send)]
pub trait CredentialVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair is not recognised.
    async fn verify(&self, username: &str, password: &str) -> Result<User, AuthError>;
}

struct Account {
    username: &'static str,
    password: &'static str,
    id: i64,
    display_name: &'static str,
    role: Role,
}

const ACCOUNTS: [Account; 2] = [
    Account { username: "admin", password: "admin123", id: 1, display_name: "Admin User", role: Role::Admin },
    Account {
        username: "student",
        password: "student123",
        id: 2,
        display_name: "Student User",
        role: Role::Student,
    },
];

/// Hard-coded demo accounts: one admin, one student.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCredentials;

#[async_trait(?Send)]
impl CredentialVerifier for FixedCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<User, AuthError> {
        ACCOUNTS
            .iter()
            .find(|a| a.username == username && a.password == password)
            .map(|a| User {
                id: a.id,
                username: a.username.to_owned(),
                display_name: a.display_name.to_owned(),
                role: a.role,
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}

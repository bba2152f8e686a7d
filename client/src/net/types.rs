//! Identity types shared by the auth core and the pages.
//!
//! DESIGN
//! ======
//! `PersistedRecord` mirrors the JSON kept in browser storage field for field
//! and accepts any role string. `User` is the validated form; conversion
//! between the two is the only place a stored role is checked.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Access class of an authenticated identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Wire name as stored in the persisted record.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Self::Admin),
            "student" => Ok(Self::Student),
            other => Err(AuthError::CorruptSession(format!("unknown role `{other}`"))),
        }
    }
}

/// An identity issued by a successful login. Immutable; identity is by `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Serialized identity kept under the session storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
}

impl From<&User> for PersistedRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.display_name.clone(),
            role: user.role.as_str().to_owned(),
        }
    }
}

impl TryFrom<PersistedRecord> for User {
    type Error = AuthError;

    fn try_from(record: PersistedRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse::<Role>()?;
        Ok(Self {
            id: record.id,
            username: record.username,
            display_name: record.name,
            role,
        })
    }
}

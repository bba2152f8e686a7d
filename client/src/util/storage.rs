//! Durable storage for the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the only code that reads or writes the session key.
//! It sits on a [`StorageBackend`]: browser `localStorage` in the hydrate
//! build, an in-memory map in tests. Off-browser the local backend reports
//! itself unavailable, so a server render never sees a stored record.
//!
//! ERROR HANDLING
//! ==============
//! `load` and `clear` absorb every failure. A missing key, an unreachable
//! backend, or undecodable JSON all read as "no record" and are only logged.
//! `save` reports failures so a login can be refused instead of pretending
//! the identity was stored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::types::PersistedRecord;

/// Raw string key/value persistence. Each call touches exactly one key.
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError::PersistenceUnavailable`] if the backend cannot be read.
    async fn get_item(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Overwrite `key` with `value` in a single write.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PersistenceUnavailable`] if the write is refused.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PersistenceUnavailable`] if the backend cannot be reached.
    async fn remove_item(&self, key: &str) -> Result<(), AuthError>;
}

/// Browser `window.localStorage`. Unavailable outside the hydrate build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, AuthError> {
    web_sys::window()
        .ok_or_else(|| AuthError::PersistenceUnavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|_| AuthError::PersistenceUnavailable("localStorage access denied".to_owned()))?
        .ok_or_else(|| AuthError::PersistenceUnavailable("localStorage disabled".to_owned()))
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> AuthError {
    AuthError::PersistenceUnavailable("localStorage requires a browser".to_owned())
}

#[async_trait(?Send)]
impl StorageBackend for LocalStorageBackend {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| AuthError::PersistenceUnavailable(format!("read of `{key}` failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(not_in_browser())
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| AuthError::PersistenceUnavailable(format!("write of `{key}` failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(not_in_browser())
        }
    }

    async fn remove_item(&self, key: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| AuthError::PersistenceUnavailable(format!("removal of `{key}` failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(not_in_browser())
        }
    }
}

/// In-process map for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with one raw value.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let backend = Self::default();
        if let Ok(mut items) = backend.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
        backend
    }

    fn poisoned() -> AuthError {
        AuthError::PersistenceUnavailable("memory backend lock poisoned".to_owned())
    }
}

#[async_trait(?Send)]
impl StorageBackend for MemoryBackend {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AuthError> {
        let items = self.items.lock().map_err(|_| Self::poisoned())?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned())?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), AuthError> {
        let mut items = self.items.lock().map_err(|_| Self::poisoned())?;
        items.remove(key);
        Ok(())
    }
}

/// Save/load/clear of the single persisted session record.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Store backed by browser `localStorage` under the configured key.
    #[must_use]
    pub fn local(config: &AuthConfig) -> Self {
        Self::new(Arc::new(LocalStorageBackend), config.storage_key.clone())
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PersistenceUnavailable`] if the record could not be
    /// encoded or written.
    pub async fn save(&self, record: &PersistedRecord) -> Result<(), AuthError> {
        let raw = serde_json::to_string(record).map_err(|e| AuthError::PersistenceUnavailable(e.to_string()))?;
        self.backend.set_item(&self.key, &raw).await
    }

    /// Read the stored record. Missing, unreadable, or malformed data is `None`.
    pub async fn load(&self) -> Option<PersistedRecord> {
        let raw = match self.backend.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("session load skipped: {e}");
                return None;
            }
        };
        match serde_json::from_str::<PersistedRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{}", AuthError::CorruptSession(e.to_string()));
                None
            }
        }
    }

    /// Remove the stored record. Idempotent; failures are logged only.
    pub async fn clear(&self) {
        if let Err(e) = self.backend.remove_item(&self.key).await {
            log::warn!("session clear failed: {e}");
        }
    }
}

//! Session persistence — the two durable slots behind authentication.
//!
//! DESIGN
//! ======
//! The backend issues an opaque bearer token plus a user-info object on
//! login. Both live in durable local storage as two keyed slots so a
//! restarted process can rehydrate without a network call. All reads go
//! through [`crate::auth::AuthGate`]; nothing else touches storage.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Role;

/// File name of the token slot.
const TOKEN_FILE: &str = "access_token";
/// File name of the serialized user-info slot.
const USER_FILE: &str = "user_information.json";

/// User info stored alongside the token. Shape matches the backend's
/// login response `user` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

/// The persisted principal. Authenticated iff a non-empty token is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored user info is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable keyed storage for the session slots.
pub trait SessionStorage: Send + Sync {
    /// Load whatever is persisted. Absent slots yield an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot exists but cannot be read or parsed.
    fn load(&self) -> Result<Session, StorageError>;

    /// Persist both slots atomically enough for a single-user client.
    ///
    /// # Errors
    ///
    /// Returns an error if either slot cannot be written.
    fn persist(&self, token: &str, user: &UserInfo) -> Result<(), StorageError>;

    /// Remove both slots. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing slot cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// File-backed storage: one file per slot under a caller-chosen directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Session, StorageError> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        let user = match fs::read_to_string(self.user_path()) {
            Ok(raw) => Some(serde_json::from_str::<UserInfo>(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        Ok(Session { token, user })
    }

    fn persist(&self, token: &str, user: &UserInfo) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), token)?;
        fs::write(self.user_path(), serde_json::to_string(user)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        for path in [self.token_path(), self.user_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Session>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Session, StorageError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn persist(&self, token: &str, user: &UserInfo) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.token = Some(token.to_owned());
        inner.user = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *inner = Session::default();
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

//! Authentication gate — who is logged in and what can they see.
//!
//! DESIGN
//! ======
//! `AuthGate` is the single writer of session state: `login` persists the
//! token and user info, `logout` clears both. Screens only read through the
//! accessors, which keeps the "ambient session" ergonomics of the original
//! app without hidden storage coupling.
//!
//! There is no token-refresh state. An expired token surfaces as a 401 from
//! the API layer, at which point the caller decides to `logout`.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::session::{Session, SessionStorage, StorageError, UserInfo};

// =============================================================================
// ROLES
// =============================================================================

/// Authorization tag attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Recruiter,
    Interviewer,
    Candidate,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Recruiter => "RECRUITER",
            Self::Interviewer => "INTERVIEWER",
            Self::Candidate => "CANDIDATE",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "MANAGER" => Some(Self::Manager),
            "RECRUITER" => Some(Self::Recruiter),
            "INTERVIEWER" => Some(Self::Interviewer),
            "CANDIDATE" => Some(Self::Candidate),
            _ => None,
        }
    }

    /// Every role that can open a staff screen.
    pub const STAFF: [Self; 4] = [Self::Admin, Self::Manager, Self::Recruiter, Self::Interviewer];
}

/// Payload produced by a successful authentication call.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

// =============================================================================
// AUTH GATE
// =============================================================================

/// Process-wide authentication state derived from persisted session data.
#[derive(Clone)]
pub struct AuthGate {
    storage: Arc<dyn SessionStorage>,
    state: Arc<RwLock<Session>>,
}

impl AuthGate {
    /// Create a gate over the given storage. Call [`initialize`](Self::initialize)
    /// before first use to rehydrate a previous session.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, state: Arc::new(RwLock::new(Session::default())) }
    }

    /// Rehydrate in-memory state from storage. Idempotent, no network call.
    /// An unreadable store is treated as "not logged in".
    pub fn initialize(&self) {
        let session = match self.storage.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "session rehydration failed, starting unauthenticated");
                Session::default()
            }
        };
        if session.is_authenticated() {
            tracing::info!("session rehydrated from storage");
        }
        *self.write() = session;
    }

    /// Record a successful login: persist both slots, then update memory.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; in-memory state is left
    /// untouched so a retry sees a consistent picture.
    pub fn login(&self, data: &LoginData) -> Result<(), StorageError> {
        self.storage.persist(&data.token, &data.user)?;
        let mut state = self.write();
        state.token = Some(data.token.clone());
        state.user = Some(data.user.clone());
        tracing::info!(user = %data.user.email, "logged in");
        Ok(())
    }

    /// Clear in-memory state and persisted slots. Never fails: a storage
    /// error is logged and the in-memory session is cleared regardless.
    pub fn logout(&self) {
        *self.write() = Session::default();
        if let Err(err) = self.storage.clear() {
            tracing::warn!(error = %err, "clearing persisted session failed");
        }
        tracing::info!("logged out");
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserInfo> {
        self.read().user.clone()
    }

    /// Role set for the current session; empty when unauthenticated.
    #[must_use]
    pub fn current_roles(&self) -> Vec<Role> {
        let state = self.read();
        if !state.is_authenticated() {
            return Vec::new();
        }
        state.user.as_ref().map(|user| user.roles.clone()).unwrap_or_default()
    }

    /// An empty requirement is open; otherwise any overlapping role grants
    /// access. Callers render a "no permission" view on deny, never a
    /// silent redirect.
    #[must_use]
    pub fn has_access(&self, required: &[Role]) -> bool {
        if required.is_empty() {
            return true;
        }
        let roles = self.current_roles();
        required.iter().any(|role| roles.contains(role))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

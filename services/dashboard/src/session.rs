//! Session and permission store
//!
//! A `SessionStore` is owned by one client's dashboard shell. It mirrors the
//! in-memory session to a single persisted blob and moves between two
//! states only: unloaded and loaded.

use common::KvStore;
use navigation::Role;
use tracing::{info, warn};

use crate::{error::SessionError, models::Session};

/// Fixed name of the persisted session blob
pub const SESSION_KEY: &str = "healthdesk_session";

/// Where clients are sent after logout
pub const LOGIN_ENTRY_POINT: &str = "/login";

/// Storage key of the session blob for one client
pub fn session_key(prefix: &str, client_token: &str) -> String {
    format!("{}:{}", prefix, client_token)
}

/// Session store for one client
#[derive(Clone)]
pub struct SessionStore {
    store: KvStore,
    key: String,
    ttl_seconds: Option<u64>,
    current: Option<Session>,
}

impl SessionStore {
    /// Create an unloaded store persisting under `key`
    pub fn new(store: KvStore, key: String, ttl_seconds: Option<u64>) -> Self {
        Self {
            store,
            key,
            ttl_seconds,
            current: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Session held in memory, if loaded
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Read the persisted session
    ///
    /// Missing, unreadable or malformed blobs leave the store unloaded. When a
    /// TTL is set the blob is re-read on every call, so an expired blob
    /// unloads a store that was loaded.
    pub async fn load_session(&mut self) -> Option<&Session> {
        if self.current.is_none() || self.ttl_seconds.is_some() {
            self.current = self.read_persisted().await;
        }

        self.current.as_ref()
    }

    async fn read_persisted(&self) -> Option<Session> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read session {}: {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                info!(
                    "Loaded session for user {} ({})",
                    session.user.id, session.user.role
                );
                Some(session)
            }
            Err(e) => {
                warn!("Ignoring malformed session {}: {}", self.key, e);
                None
            }
        }
    }

    /// Persist `session` and make it current
    pub async fn login(&mut self, session: Session) -> Result<&Session, SessionError> {
        info!("Creating session for user: {}", session.user.id);

        let blob = serde_json::to_string(&session)?;
        self.store.set(&self.key, &blob, self.ttl_seconds).await?;

        Ok(self.current.insert(session))
    }

    /// Whether the current role is one of `allowed_roles`
    ///
    /// The role is compared as stored; no alias is applied here.
    pub fn has_permission(&self, allowed_roles: &[Role]) -> bool {
        self.current
            .as_ref()
            .is_some_and(|session| allowed_roles.contains(&session.role()))
    }

    /// Clear both copies of the session and return the login entry point
    ///
    /// If the persisted copy cannot be deleted nothing is cleared.
    pub async fn logout(&mut self) -> Result<&'static str, SessionError> {
        info!("Deleting session: {}", self.key);

        self.store.delete(&self.key).await?;
        self.current = None;

        Ok(LOGIN_ENTRY_POINT)
    }
}

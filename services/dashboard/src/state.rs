//! Application state shared across handlers

use common::KvStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    config::SessionSettings,
    login::MockDirectory,
    session::{SessionStore, session_key},
    shell::DashboardShell,
};

/// One shell per client token
///
/// Each shell sits behind its own lock, so a client's actions are applied
/// one at a time. Only shells holding a loaded session are registered.
#[derive(Clone, Default)]
pub struct ShellRegistry {
    shells: Arc<Mutex<HashMap<String, Arc<Mutex<DashboardShell>>>>>,
}

impl ShellRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, token: &str) -> Option<Arc<Mutex<DashboardShell>>> {
        self.shells.lock().await.get(token).cloned()
    }

    /// Register `shell` unless another request registered one first
    pub async fn get_or_insert(
        &self,
        token: &str,
        shell: DashboardShell,
    ) -> Arc<Mutex<DashboardShell>> {
        self.shells
            .lock()
            .await
            .entry(token.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(shell)))
            .clone()
    }

    pub async fn insert(&self, token: &str, shell: DashboardShell) {
        self.shells
            .lock()
            .await
            .insert(token.to_string(), Arc::new(Mutex::new(shell)));
    }

    pub async fn remove(&self, token: &str) {
        self.shells.lock().await.remove(token);
    }

    pub async fn len(&self) -> usize {
        self.shells.lock().await.len()
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: KvStore,
    pub directory: MockDirectory,
    pub shells: ShellRegistry,
    pub session_settings: SessionSettings,
}

impl AppState {
    pub fn new(
        store: KvStore,
        directory: MockDirectory,
        session_settings: SessionSettings,
    ) -> Self {
        Self {
            store,
            directory,
            shells: ShellRegistry::new(),
            session_settings,
        }
    }

    /// Fresh, unloaded session store for a client
    pub fn session_store(&self, token: &str) -> SessionStore {
        SessionStore::new(
            self.store.clone(),
            session_key(&self.session_settings.key_prefix, token),
            self.session_settings.ttl_seconds,
        )
    }

    /// Shell for a client, mounted
    ///
    /// A registered shell whose session is gone is evicted. An unknown token
    /// is registered only if its persisted session loads; otherwise the
    /// returned shell is transient.
    pub async fn mounted_shell(&self, token: &str) -> Arc<Mutex<DashboardShell>> {
        if let Some(shell) = self.shells.get(token).await {
            if !shell.lock().await.mount().await {
                debug!("Evicting shell without a session");
                self.shells.remove(token).await;
            }
            return shell;
        }

        let mut shell = DashboardShell::new(self.session_store(token));
        if shell.mount().await {
            self.shells.get_or_insert(token, shell).await
        } else {
            Arc::new(Mutex::new(shell))
        }
    }
}

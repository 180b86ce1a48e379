//! Dashboard shell
//!
//! Composes the header, the sidebar and the panel router for one client and
//! owns the currently selected navigation target.

use navigation::{
    CenterType, NavigationState, Panel, Role, navigation_state, panel_for_target,
    resolve_visible_entries,
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::{error::SessionError, session::SessionStore};

/// Target selected before any entry is activated
pub const DEFAULT_TARGET: &str = "dashboard";

/// Navigation actions the shell refuses
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// No session is loaded yet
    #[error("session not loaded")]
    NotLoaded,

    /// The target is not in the visible navigation set
    #[error("navigation target '{0}' is not available")]
    NotVisible(String),
}

/// Header strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub user_name: String,
    pub position: String,
    pub role: Role,
    pub center_name: String,
    pub center_type: CenterType,
    pub center_type_label: &'static str,
}

/// Panel currently hosted by the shell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub key: &'static str,
    pub title: &'static str,
}

impl From<Panel> for PanelView {
    fn from(panel: Panel) -> Self {
        Self {
            key: panel.key(),
            title: panel.title(),
        }
    }
}

/// Everything the shell renders once a session is loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyView {
    pub header: HeaderView,
    pub navigation: NavigationState,
    pub selected: String,
    pub panel: PanelView,
}

/// Shell output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShellView {
    /// Blocking loading state: no navigation, no panel
    Loading,
    Ready(ReadyView),
}

/// Dashboard shell for one client
#[derive(Clone)]
pub struct DashboardShell {
    session: SessionStore,
    selected_target: String,
}

impl DashboardShell {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            selected_target: DEFAULT_TARGET.to_string(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub fn selected_target(&self) -> &str {
        &self.selected_target
    }

    /// Load the session if needed; returns whether one is loaded
    ///
    /// The selection goes back to the default whenever no session is loaded.
    pub async fn mount(&mut self) -> bool {
        let loaded = self.session.load_session().await.is_some();
        if !loaded {
            self.selected_target = DEFAULT_TARGET.to_string();
        }
        loaded
    }

    pub fn view(&self) -> ShellView {
        let Some(session) = self.session.current() else {
            return ShellView::Loading;
        };

        let center_type = session.center_type();

        ShellView::Ready(ReadyView {
            header: HeaderView {
                user_name: session.user.full_name.clone(),
                position: session.user.position.clone(),
                role: session.role(),
                center_name: session.center.center_name.clone(),
                center_type,
                center_type_label: center_type.label(),
            },
            navigation: navigation_state(Some(session.role()), Some(center_type)),
            selected: self.selected_target.clone(),
            panel: panel_for_target(&self.selected_target).into(),
        })
    }

    /// Activate a sidebar entry and return the panel it opens
    ///
    /// The selection only changes when `target` is currently visible.
    pub fn activate(&mut self, target: &str) -> Result<Panel, ShellError> {
        let session = self.session.current().ok_or(ShellError::NotLoaded)?;

        let visible = resolve_visible_entries(Some(session.role()), Some(session.center_type()));
        if !visible.iter().any(|entry| entry.target == target) {
            return Err(ShellError::NotVisible(target.to_string()));
        }

        info!("Activating navigation target: {}", target);
        self.selected_target = target.to_string();

        Ok(panel_for_target(target))
    }

    /// Log out and reset the selection
    pub async fn logout(&mut self) -> Result<&'static str, SessionError> {
        let redirect = self.session.logout().await?;
        self.selected_target = DEFAULT_TARGET.to_string();
        Ok(redirect)
    }
}

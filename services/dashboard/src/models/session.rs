//! Session model and related functionality

use navigation::{CenterType, Role};
use serde::{Deserialize, Serialize};

use super::{center::CenterProfile, user::SessionUser};

/// Persisted session blob: the signed-in user and their facility
///
/// Written on login, read on load and deleted on logout, always as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub center: CenterProfile,
}

impl Session {
    /// Role exactly as reported at login
    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn center_type(&self) -> CenterType {
        self.center.center_type
    }
}

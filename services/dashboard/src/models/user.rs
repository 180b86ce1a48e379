//! User model and related functionality

use navigation::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in user as carried by the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub full_name: String,
    pub role: Role,
    pub position: String,
}

/// User login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

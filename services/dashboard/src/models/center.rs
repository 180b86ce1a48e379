//! Center profile model

use chrono::{DateTime, Utc};
use navigation::CenterType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Facility the signed-in user belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterProfile {
    pub id: Uuid,
    pub center_type: CenterType,
    pub center_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

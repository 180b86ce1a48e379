//! User roles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job function of a user within a facility
///
/// `CenterOwner` is what the login collaborator reports for facility owners.
/// The policy table only knows `CenterHead`; the resolver maps one onto the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Pharmacist,
    LabTechnician,
    CenterHead,
    CenterOwner,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 8] = [
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::Pharmacist,
        Role::LabTechnician,
        Role::CenterHead,
        Role::CenterOwner,
    ];

    /// Get the role name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Receptionist => "receptionist",
            Role::Pharmacist => "pharmacist",
            Role::LabTechnician => "lab_technician",
            Role::CenterHead => "center_head",
            Role::CenterOwner => "center_owner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

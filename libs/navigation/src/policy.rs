//! Navigation policy table
//!
//! The table is plain data: one record per sidebar entry, in display order.
//! An entry without a center-type list is shown at every kind of facility,
//! subject to its role list.

use serde::Serialize;
use std::collections::HashSet;

use crate::{
    center_type::CenterType::{self, *},
    error::PolicyError,
    panel::{Panel, panel_key_for_target},
    role::Role::{self, *},
};

/// One sidebar entry and who may see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub name: &'static str,
    pub target: &'static str,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
    pub allowed_center_types: Option<&'static [CenterType]>,
}

impl NavigationEntry {
    /// Whether this entry is shown to `role` at a facility of `center_type`
    ///
    /// `role` is matched as given; alias normalization happens in the resolver.
    pub fn is_visible_to(&self, role: Role, center_type: CenterType) -> bool {
        self.allowed_roles.contains(&role)
            && self
                .allowed_center_types
                .is_none_or(|types| types.contains(&center_type))
    }
}

const EVERYONE: &[Role] = &[
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Pharmacist,
    LabTechnician,
    CenterHead,
];

const PATIENT_FACING: &[CenterType] = &[
    Hospital,
    Clinic,
    DiagnosticLab,
    DentalClinic,
    OpticalCenter,
    PhysiotherapyCenter,
];

const TREATING: &[CenterType] = &[
    Hospital,
    Clinic,
    DentalClinic,
    OpticalCenter,
    PhysiotherapyCenter,
];

const LABORATORY: &[CenterType] = &[Hospital, Clinic, DiagnosticLab];

const RETAIL: &[CenterType] = &[Pharmacy, OpticalCenter];

const HOSPITAL_ONLY: &[CenterType] = &[Hospital];

const DENTAL_ONLY: &[CenterType] = &[DentalClinic];

const OPTICAL_ONLY: &[CenterType] = &[OpticalCenter];

/// Sidebar entries in display order
pub static NAVIGATION_TABLE: &[NavigationEntry] = &[
    NavigationEntry {
        name: "Dashboard",
        target: "dashboard",
        icon: "home",
        allowed_roles: EVERYONE,
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Analytics",
        target: "analytics",
        icon: "bar-chart",
        allowed_roles: &[Admin, CenterHead],
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Patients",
        target: "patients",
        icon: "users",
        allowed_roles: &[Admin, Doctor, Nurse, Receptionist, CenterHead],
        allowed_center_types: Some(PATIENT_FACING),
    },
    NavigationEntry {
        name: "Appointments",
        target: "appointments",
        icon: "calendar",
        allowed_roles: &[Admin, Doctor, Nurse, Receptionist],
        allowed_center_types: Some(PATIENT_FACING),
    },
    NavigationEntry {
        name: "Doctors",
        target: "doctors",
        icon: "stethoscope",
        allowed_roles: &[Admin, Receptionist, CenterHead],
        allowed_center_types: Some(TREATING),
    },
    NavigationEntry {
        name: "Medical Records",
        target: "medical-records",
        icon: "file-text",
        allowed_roles: &[Admin, Doctor, Nurse],
        allowed_center_types: Some(TREATING),
    },
    NavigationEntry {
        name: "Emergency",
        target: "emergency",
        icon: "alert-triangle",
        allowed_roles: &[Admin, Doctor, Nurse],
        allowed_center_types: Some(HOSPITAL_ONLY),
    },
    NavigationEntry {
        name: "Inventory",
        target: "inventory",
        icon: "package",
        allowed_roles: &[Admin, Pharmacist, CenterHead],
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Prescriptions",
        target: "prescriptions",
        icon: "pill",
        allowed_roles: &[Admin, Doctor, Pharmacist],
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Sales",
        target: "sales",
        icon: "shopping-cart",
        allowed_roles: &[Admin, Pharmacist, CenterHead],
        allowed_center_types: Some(RETAIL),
    },
    NavigationEntry {
        name: "Lab Tests",
        target: "lab-tests",
        icon: "flask",
        allowed_roles: &[Admin, Doctor, LabTechnician],
        allowed_center_types: Some(LABORATORY),
    },
    NavigationEntry {
        name: "Test Results",
        target: "test-results",
        icon: "clipboard-check",
        allowed_roles: &[Admin, LabTechnician],
        allowed_center_types: Some(LABORATORY),
    },
    NavigationEntry {
        name: "Equipment",
        target: "equipment",
        icon: "microscope",
        allowed_roles: &[Admin, LabTechnician, CenterHead],
        allowed_center_types: Some(LABORATORY),
    },
    NavigationEntry {
        name: "Dental Procedures",
        target: "dental-procedures",
        icon: "smile",
        allowed_roles: &[Admin, Doctor, CenterHead],
        allowed_center_types: Some(DENTAL_ONLY),
    },
    NavigationEntry {
        name: "Eye Examinations",
        target: "eye-examinations",
        icon: "eye",
        allowed_roles: &[Admin, Doctor, CenterHead],
        allowed_center_types: Some(OPTICAL_ONLY),
    },
    NavigationEntry {
        name: "Staff Management",
        target: "staff",
        icon: "user-cog",
        allowed_roles: &[Admin, CenterHead],
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Billing",
        target: "billing",
        icon: "credit-card",
        allowed_roles: &[Admin, Receptionist, CenterHead],
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Messages",
        target: "messages",
        icon: "message-square",
        allowed_roles: EVERYONE,
        allowed_center_types: None,
    },
    NavigationEntry {
        name: "Settings",
        target: "settings",
        icon: "settings",
        allowed_roles: EVERYONE,
        allowed_center_types: None,
    },
];

/// Check that every entry in `table` is reachable and routes to a real panel
pub fn validate_policy_table(table: &[NavigationEntry]) -> Result<(), PolicyError> {
    let mut seen = HashSet::new();

    for entry in table {
        if !seen.insert(entry.target) {
            return Err(PolicyError::DuplicateTarget(entry.target.to_string()));
        }

        if entry.allowed_roles.is_empty() {
            return Err(PolicyError::NoAllowedRoles(entry.name.to_string()));
        }

        if entry.allowed_center_types.is_some_and(|types| types.is_empty()) {
            return Err(PolicyError::EmptyCenterTypes(entry.name.to_string()));
        }

        let panel_key = panel_key_for_target(entry.target)
            .ok_or_else(|| PolicyError::MissingPanelKey(entry.target.to_string()))?;

        if Panel::from_key(panel_key).is_none() {
            return Err(PolicyError::UnknownPanel {
                target: entry.target.to_string(),
                panel_key: panel_key.to_string(),
            });
        }
    }

    Ok(())
}

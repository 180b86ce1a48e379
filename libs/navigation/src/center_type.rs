//! Facility kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of healthcare facility, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterType {
    Hospital,
    Clinic,
    DiagnosticLab,
    Pharmacy,
    DentalClinic,
    OpticalCenter,
    PhysiotherapyCenter,
}

impl CenterType {
    /// Every center type, in declaration order
    pub const ALL: [CenterType; 7] = [
        CenterType::Hospital,
        CenterType::Clinic,
        CenterType::DiagnosticLab,
        CenterType::Pharmacy,
        CenterType::DentalClinic,
        CenterType::OpticalCenter,
        CenterType::PhysiotherapyCenter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CenterType::Hospital => "hospital",
            CenterType::Clinic => "clinic",
            CenterType::DiagnosticLab => "diagnostic-lab",
            CenterType::Pharmacy => "pharmacy",
            CenterType::DentalClinic => "dental-clinic",
            CenterType::OpticalCenter => "optical-center",
            CenterType::PhysiotherapyCenter => "physiotherapy-center",
        }
    }

    /// Human readable label used in the dashboard header
    pub fn label(&self) -> &'static str {
        match self {
            CenterType::Hospital => "Hospital",
            CenterType::Clinic => "Clinic",
            CenterType::DiagnosticLab => "Diagnostic Lab",
            CenterType::Pharmacy => "Pharmacy",
            CenterType::DentalClinic => "Dental Clinic",
            CenterType::OpticalCenter => "Optical Center",
            CenterType::PhysiotherapyCenter => "Physiotherapy Center",
        }
    }
}

impl fmt::Display for CenterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

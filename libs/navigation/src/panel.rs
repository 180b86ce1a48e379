//! Panel routing
//!
//! Navigation targets are first paired with a panel key, then the key is
//! resolved to a `Panel`. Resolution never fails: anything unknown lands on
//! the dashboard.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Content panel hosted by the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Panel {
    #[default]
    Dashboard,
    Analytics,
    Patients,
    Appointments,
    Doctors,
    MedicalRecords,
    Emergency,
    Inventory,
    Prescriptions,
    LabTests,
    Staff,
    Billing,
    Messages,
    Settings,
}

impl Panel {
    /// Every panel, in declaration order
    pub const ALL: [Panel; 14] = [
        Panel::Dashboard,
        Panel::Analytics,
        Panel::Patients,
        Panel::Appointments,
        Panel::Doctors,
        Panel::MedicalRecords,
        Panel::Emergency,
        Panel::Inventory,
        Panel::Prescriptions,
        Panel::LabTests,
        Panel::Staff,
        Panel::Billing,
        Panel::Messages,
        Panel::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Panel::Dashboard => "dashboard",
            Panel::Analytics => "analytics",
            Panel::Patients => "patients",
            Panel::Appointments => "appointments",
            Panel::Doctors => "doctors",
            Panel::MedicalRecords => "medical-records",
            Panel::Emergency => "emergency",
            Panel::Inventory => "inventory",
            Panel::Prescriptions => "prescriptions",
            Panel::LabTests => "lab-tests",
            Panel::Staff => "staff",
            Panel::Billing => "billing",
            Panel::Messages => "messages",
            Panel::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard Overview",
            Panel::Analytics => "Analytics",
            Panel::Patients => "Patient Management",
            Panel::Appointments => "Appointments",
            Panel::Doctors => "Doctors",
            Panel::MedicalRecords => "Medical Records",
            Panel::Emergency => "Emergency Department",
            Panel::Inventory => "Inventory Management",
            Panel::Prescriptions => "Prescriptions",
            Panel::LabTests => "Laboratory Tests",
            Panel::Staff => "Staff Management",
            Panel::Billing => "Billing & Payments",
            Panel::Messages => "Messages",
            Panel::Settings => "Settings",
        }
    }

    /// Look up a panel by its exact key
    pub fn from_key(key: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| panel.key() == key)
    }
}

/// Navigation target to panel key
///
/// Targets without a dedicated panel borrow the closest one.
const PANEL_KEYS: &[(&str, &str)] = &[
    ("dashboard", "dashboard"),
    ("analytics", "analytics"),
    ("patients", "patients"),
    ("appointments", "appointments"),
    ("doctors", "doctors"),
    ("medical-records", "medical-records"),
    ("emergency", "emergency"),
    ("inventory", "inventory"),
    ("prescriptions", "prescriptions"),
    ("sales", "inventory"),
    ("lab-tests", "lab-tests"),
    ("test-results", "lab-tests"),
    ("equipment", "inventory"),
    ("dental-procedures", "medical-records"),
    ("eye-examinations", "medical-records"),
    ("staff", "staff"),
    ("billing", "billing"),
    ("messages", "messages"),
    ("settings", "settings"),
];

/// Panel key paired with a navigation target, if any
pub fn panel_key_for_target(target: &str) -> Option<&'static str> {
    PANEL_KEYS
        .iter()
        .find(|(candidate, _)| *candidate == target)
        .map(|(_, panel_key)| *panel_key)
}

/// Resolve a panel key, falling back to the dashboard
pub fn resolve_panel(key: &str) -> Panel {
    Panel::from_key(key).unwrap_or_else(|| {
        debug!("Unknown panel key '{}', falling back to dashboard", key);
        Panel::default()
    })
}

/// Resolve the panel shown when a navigation target is activated
pub fn panel_for_target(target: &str) -> Panel {
    resolve_panel(panel_key_for_target(target).unwrap_or(target))
}

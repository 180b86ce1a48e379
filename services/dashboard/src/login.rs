//! Mock login collaborator
//!
//! Accounts are seeded in memory, one per role. Credentials are compared in
//! plain text; this directory stands in for the real registration backend.

use chrono::{TimeZone, Utc};
use navigation::{CenterType, Role};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    models::{CenterProfile, LoginCredentials, Session, SessionUser},
    validation::{validate_email, validate_password},
};

/// Password shared by all seeded demo accounts
pub const DEMO_PASSWORD: &str = "password123";

/// Reasons a login attempt is refused
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Malformed credentials
    #[error("{0}")]
    Validation(String),

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Successful login payload
///
/// `user.role` is reported verbatim, so facility owners arrive as
/// `center_owner`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionUser,
    pub center: CenterProfile,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session {
            user: response.user,
            center: response.center,
        }
    }
}

#[derive(Debug, Clone)]
struct DemoAccount {
    email: String,
    password: String,
    user: SessionUser,
    center: CenterProfile,
}

/// In-memory account directory
#[derive(Debug, Clone)]
pub struct MockDirectory {
    accounts: Arc<Vec<DemoAccount>>,
}

impl MockDirectory {
    /// Directory seeded with one account per role
    pub fn with_demo_accounts() -> Self {
        let city_general = center(
            10,
            CenterType::Hospital,
            "City General Hospital",
            "citygeneral.health",
        );
        let bright_smile = center(
            11,
            CenterType::DentalClinic,
            "Bright Smile Dental",
            "brightsmile.health",
        );
        let green_cross = center(
            12,
            CenterType::Pharmacy,
            "Green Cross Pharmacy",
            "greencross.health",
        );
        let precision_labs = center(
            13,
            CenterType::DiagnosticLab,
            "Precision Diagnostics",
            "precisionlabs.health",
        );
        let family_care = center(
            14,
            CenterType::Clinic,
            "Family Care Clinic",
            "familycare.health",
        );

        let accounts = vec![
            account(
                1,
                "admin@citygeneral.health",
                "Grace Okafor",
                Role::Admin,
                "System Administrator",
                &city_general,
            ),
            account(
                2,
                "doctor@citygeneral.health",
                "Dr. Samuel Mensah",
                Role::Doctor,
                "Senior Physician",
                &city_general,
            ),
            account(
                3,
                "nurse@citygeneral.health",
                "Fatima Diallo",
                Role::Nurse,
                "Head Nurse",
                &city_general,
            ),
            account(
                4,
                "lab@citygeneral.health",
                "Kwame Asante",
                Role::LabTechnician,
                "Lab Technician",
                &city_general,
            ),
            account(
                5,
                "owner@brightsmile.health",
                "Amina Bello",
                Role::CenterOwner,
                "Owner",
                &bright_smile,
            ),
            account(
                6,
                "pharmacist@greencross.health",
                "Joseph Nkem",
                Role::Pharmacist,
                "Chief Pharmacist",
                &green_cross,
            ),
            account(
                7,
                "head@precisionlabs.health",
                "Esther Achieng",
                Role::CenterHead,
                "Laboratory Director",
                &precision_labs,
            ),
            account(
                8,
                "reception@familycare.health",
                "Lucy Wanjiru",
                Role::Receptionist,
                "Front Desk",
                &family_care,
            ),
        ];

        Self {
            accounts: Arc::new(accounts),
        }
    }

    /// Check credentials and return the session payload
    pub fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<LoginResponse, LoginError> {
        let email = credentials.email.trim().to_lowercase();
        validate_email(&email).map_err(LoginError::Validation)?;
        validate_password(&credentials.password).map_err(LoginError::Validation)?;

        let account = self
            .accounts
            .iter()
            .find(|account| account.email == email && account.password == credentials.password)
            .ok_or_else(|| {
                warn!("Rejected login attempt for: {}", email);
                LoginError::InvalidCredentials
            })?;

        info!("Login succeeded for {} as {}", email, account.user.role);

        Ok(LoginResponse {
            success: true,
            user: account.user.clone(),
            center: account.center.clone(),
        })
    }

    /// Emails of every seeded account
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.email.as_str())
    }
}

fn center(seed: u128, center_type: CenterType, name: &str, domain: &str) -> CenterProfile {
    CenterProfile {
        id: Uuid::from_u128(0x0c00 + seed),
        center_type,
        center_name: name.to_string(),
        email: format!("contact@{}", domain),
        phone: format!("+234 800 000 {:04}", seed),
        address: format!("{} Health Avenue", seed),
        city: "Lagos".to_string(),
        registration_number: format!("HC-{:06}", seed),
        registered_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single(),
    }
}

fn account(
    seed: u128,
    email: &str,
    full_name: &str,
    role: Role,
    position: &str,
    center: &CenterProfile,
) -> DemoAccount {
    DemoAccount {
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        user: SessionUser {
            id: Uuid::from_u128(0x0a00 + seed),
            full_name: full_name.to_string(),
            role,
            position: position.to_string(),
        },
        center: center.clone(),
    }
}

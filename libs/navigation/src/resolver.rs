//! Navigation resolver
//!
//! Filters the policy table for a (role, center type) pair. Pure: no state is
//! read or written beyond the static table.

use serde::Serialize;

use crate::{center_type::CenterType, policy::NAVIGATION_TABLE, policy::NavigationEntry, role::Role};

/// Sidebar content for the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NavigationState {
    /// Role or center type not known yet
    Loading,
    /// Session is loaded but no entry is permitted
    Empty,
    /// Visible entries in display order
    Entries { entries: Vec<&'static NavigationEntry> },
}

/// Map the login role onto the name used by the policy table
pub fn normalize_role(role: Role) -> Role {
    match role {
        Role::CenterOwner => Role::CenterHead,
        Role::Admin
        | Role::Doctor
        | Role::Nurse
        | Role::Receptionist
        | Role::Pharmacist
        | Role::LabTechnician
        | Role::CenterHead => role,
    }
}

/// Entries of `table` visible to `role` at a `center_type` facility
pub fn resolve_in<'a>(
    table: &'a [NavigationEntry],
    role: Option<Role>,
    center_type: Option<CenterType>,
) -> Vec<&'a NavigationEntry> {
    let (Some(role), Some(center_type)) = (role, center_type) else {
        return Vec::new();
    };

    let role = normalize_role(role);

    table
        .iter()
        .filter(|entry| entry.is_visible_to(role, center_type))
        .collect()
}

/// Entries of the built-in table visible to `role` at a `center_type` facility
///
/// Returns an empty list while either input is absent.
pub fn resolve_visible_entries(
    role: Option<Role>,
    center_type: Option<CenterType>,
) -> Vec<&'static NavigationEntry> {
    resolve_in(NAVIGATION_TABLE, role, center_type)
}

/// Sidebar state for `table`, keeping "not loaded" apart from "nothing permitted"
pub fn navigation_state_in(
    table: &'static [NavigationEntry],
    role: Option<Role>,
    center_type: Option<CenterType>,
) -> NavigationState {
    if role.is_none() || center_type.is_none() {
        return NavigationState::Loading;
    }

    let entries = resolve_in(table, role, center_type);
    if entries.is_empty() {
        NavigationState::Empty
    } else {
        NavigationState::Entries { entries }
    }
}

/// Like [`resolve_visible_entries`], but keeps "not loaded" apart from "nothing permitted"
pub fn navigation_state(role: Option<Role>, center_type: Option<CenterType>) -> NavigationState {
    navigation_state_in(NAVIGATION_TABLE, role, center_type)
}

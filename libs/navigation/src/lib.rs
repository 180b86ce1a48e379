//! Navigation policy for the HealthDesk dashboard
//!
//! This crate holds the declarative table that decides which sidebar entries
//! a user sees for a given role and center type, the resolver that filters
//! it, and the router that turns a selected entry into a content panel.

pub mod center_type;
pub mod error;
pub mod panel;
pub mod policy;
pub mod resolver;
pub mod role;

pub use center_type::CenterType;
pub use error::PolicyError;
pub use panel::{Panel, panel_for_target, panel_key_for_target, resolve_panel};
pub use policy::{NAVIGATION_TABLE, NavigationEntry, validate_policy_table};
pub use resolver::{
    NavigationState, navigation_state, navigation_state_in, normalize_role, resolve_in,
    resolve_visible_entries,
};
pub use role::Role;

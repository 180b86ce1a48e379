//! Policy table errors

use thiserror::Error;

/// Problems found while validating the navigation policy table
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// A navigation target has no panel key lookup
    #[error("navigation target '{0}' has no panel key")]
    MissingPanelKey(String),

    /// A panel key lookup names a panel that does not exist
    #[error("navigation target '{target}' maps to unknown panel '{panel_key}'")]
    UnknownPanel { target: String, panel_key: String },

    /// Two entries share the same target
    #[error("navigation target '{0}' is declared more than once")]
    DuplicateTarget(String),

    /// An entry can never be shown because it allows no role
    #[error("navigation entry '{0}' allows no roles")]
    NoAllowedRoles(String),

    /// An entry restricts center types to the empty set
    #[error("navigation entry '{0}' restricts center types to an empty set")]
    EmptyCenterTypes(String),
}

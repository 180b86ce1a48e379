//! Dashboard service models

pub mod center;
pub mod session;
pub mod user;

// Re-export for convenience
pub use center::CenterProfile;
pub use session::Session;
pub use user::{LoginCredentials, SessionUser};

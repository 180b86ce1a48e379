//! HealthDesk dashboard service
//!
//! Hosts the per-client dashboard shell: session persistence, the mock login
//! collaborator and the HTTP routes that drive navigation.

pub mod config;
pub mod error;
pub mod login;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod shell;
pub mod state;
pub mod validation;

pub use state::AppState;

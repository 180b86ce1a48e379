//! Custom error types for the dashboard service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{login::LoginError, shell::ShellError};

/// Errors raised while persisting or clearing a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing store failed
    #[error("Session store error: {0}")]
    Store(#[from] common::StoreError),

    /// The session could not be encoded
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Custom error type for the dashboard service
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Missing or unknown client token
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,

    /// Login collaborator rejected the attempt
    #[error("Login error: {0}")]
    Login(#[from] LoginError),

    /// Shell rejected a navigation action
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    /// Session persistence failed
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Unauthorized => StatusCode::UNAUTHORIZED,
            DashboardError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DashboardError::InternalServerError | DashboardError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DashboardError::Login(LoginError::Validation(_)) => StatusCode::BAD_REQUEST,
            DashboardError::Login(LoginError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            DashboardError::Shell(ShellError::NotLoaded) => StatusCode::UNAUTHORIZED,
            DashboardError::Shell(ShellError::NotVisible(_)) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            DashboardError::InternalServerError | DashboardError::Session(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for dashboard results
pub type DashboardResult<T> = Result<T, DashboardError>;

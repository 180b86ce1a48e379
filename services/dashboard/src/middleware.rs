//! Middleware extracting the client token from the Authorization header

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::warn;
use uuid::Uuid;

use crate::error::DashboardError;

/// Opaque client token issued at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientToken(pub String);

impl ClientToken {
    /// Parse a bearer token, accepting only the UUIDs handed out at login
    pub fn parse(raw: &str) -> Result<Self, DashboardError> {
        let token = Uuid::parse_str(raw).map_err(|_| {
            warn!("Rejected malformed client token");
            DashboardError::Unauthorized
        })?;

        Ok(ClientToken(token.to_string()))
    }

    /// Issue a new token
    pub fn generate() -> Self {
        ClientToken(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Require a bearer client token and expose it to handlers
pub async fn client_token_middleware(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, DashboardError> {
    let TypedHeader(authorization) = bearer.ok_or(DashboardError::Unauthorized)?;
    let token = ClientToken::parse(authorization.token())?;

    req.extensions_mut().insert(token);

    Ok(next.run(req).await)
}

//! Dashboard service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
};
use navigation::{CenterType, NavigationState, Role, navigation_state, resolve_panel};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::{
    error::{DashboardError, DashboardResult},
    middleware::{ClientToken, client_token_middleware},
    models::{LoginCredentials, Session},
    shell::{DashboardShell, PanelView, ShellView},
    state::AppState,
    validation::validate_target,
};

/// Where clients go after a successful login
pub const DASHBOARD_ENTRY_POINT: &str = "/dashboard";

/// Response for user login
#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub token_type: String,
    pub redirect: String,
    pub session: Session,
}

/// Response for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
    pub redirect: String,
}

/// Request for activating a navigation entry
#[derive(Debug, Deserialize)]
pub struct SelectPanelRequest {
    pub target: String,
}

/// Request for a role check
#[derive(Debug, Deserialize)]
pub struct PermissionRequest {
    pub roles: Vec<Role>,
}

/// Response for a role check
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub allowed: bool,
}

/// Query parameters for navigation resolution
#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
    pub role: Option<Role>,
    pub center_type: Option<CenterType>,
}

/// Create the router for the dashboard service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/select", post(select_panel))
        .route("/session/permissions", post(check_permission))
        .route_layer(middleware::from_fn(client_token_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/navigation", get(resolve_navigation))
        .route("/panels/:key", get(panel))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store_healthy = state.store.health_check().await.unwrap_or_else(|e| {
        error!("Session store health check failed: {}", e);
        false
    });

    let status = if store_healthy { "ok" } else { "degraded" };
    let active_shells = state.shells.len().await;

    Json(json!({
        "status": status,
        "service": "dashboard-service",
        "session_backend": state.store.backend_name(),
        "active_shells": active_shells,
    }))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginCredentials>,
) -> DashboardResult<Json<LoginResult>> {
    info!("Login attempt for user: {}", payload.email);

    let response = state.directory.authenticate(&payload)?;

    let token = ClientToken::generate();
    let mut shell = DashboardShell::new(state.session_store(token.as_str()));
    let session = shell
        .session_mut()
        .login(Session::from(response))
        .await
        .map_err(|e| {
            error!("Failed to persist session: {}", e);
            DashboardError::from(e)
        })?
        .clone();

    state.shells.insert(token.as_str(), shell).await;

    Ok(Json(LoginResult {
        token: token.0,
        token_type: "Bearer".to_string(),
        redirect: DASHBOARD_ENTRY_POINT.to_string(),
        session,
    }))
}

/// Logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<ClientToken>,
) -> DashboardResult<Json<LogoutResponse>> {
    info!("Logout request");

    let shell = state.mounted_shell(token.as_str()).await;
    let redirect = shell.lock().await.logout().await.map_err(|e| {
        error!("Failed to clear session: {}", e);
        DashboardError::from(e)
    })?;

    state.shells.remove(token.as_str()).await;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
        redirect: redirect.to_string(),
    }))
}

/// Current shell view, loading the session if needed
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(token): Extension<ClientToken>,
) -> DashboardResult<Json<ShellView>> {
    let shell = state.mounted_shell(token.as_str()).await;
    let shell = shell.lock().await;

    Ok(Json(shell.view()))
}

/// Activate a navigation entry
pub async fn select_panel(
    State(state): State<AppState>,
    Extension(token): Extension<ClientToken>,
    Json(payload): Json<SelectPanelRequest>,
) -> DashboardResult<Json<ShellView>> {
    validate_target(&payload.target).map_err(DashboardError::BadRequest)?;

    let shell = state.mounted_shell(token.as_str()).await;
    let mut shell = shell.lock().await;
    shell.activate(&payload.target)?;

    Ok(Json(shell.view()))
}

/// Check the current role against a set of roles
pub async fn check_permission(
    State(state): State<AppState>,
    Extension(token): Extension<ClientToken>,
    Json(payload): Json<PermissionRequest>,
) -> DashboardResult<Json<PermissionResponse>> {
    let shell = state.mounted_shell(token.as_str()).await;
    let shell = shell.lock().await;

    Ok(Json(PermissionResponse {
        allowed: shell.session().has_permission(&payload.roles),
    }))
}

/// Resolve the sidebar for an arbitrary role and center type
pub async fn resolve_navigation(Query(query): Query<NavigationQuery>) -> Json<NavigationState> {
    Json(navigation_state(query.role, query.center_type))
}

/// Resolve a panel key
pub async fn panel(Path(key): Path<String>) -> Json<PanelView> {
    Json(resolve_panel(&key).into())
}

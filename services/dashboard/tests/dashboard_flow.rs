//! End-to-end flows through the dashboard handlers
//!
//! Most handlers are called directly with an in-memory session store; the
//! router tests send requests through `create_router` with `oneshot`. None
//! of them need Redis or a listening socket.

use axum::{
    Extension, Json, Router,
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode, header},
};
use common::KvStore;
use dashboard::{
    AppState,
    config::{SessionBackend, SessionSettings},
    error::DashboardError,
    login::{DEMO_PASSWORD, LoginError, MockDirectory},
    middleware::ClientToken,
    models::LoginCredentials,
    routes::{
        self, NavigationQuery, PermissionRequest, SelectPanelRequest, check_permission,
        dashboard as dashboard_view, login, logout, panel, resolve_navigation, select_panel,
    },
    session::SESSION_KEY,
    shell::{ReadyView, ShellError, ShellView},
};
use navigation::{CenterType, NavigationState, Role};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

fn app_state_with_ttl(store: KvStore, ttl_seconds: Option<u64>) -> AppState {
    AppState::new(
        store,
        MockDirectory::with_demo_accounts(),
        SessionSettings {
            backend: SessionBackend::Memory,
            key_prefix: SESSION_KEY.to_string(),
            ttl_seconds,
        },
    )
}

fn app_state_with(store: KvStore) -> AppState {
    app_state_with_ttl(store, None)
}

fn app_state() -> AppState {
    app_state_with(KvStore::memory())
}

async fn login_as(state: &AppState, email: &str) -> ClientToken {
    let Json(result) = login(
        State(state.clone()),
        Json(LoginCredentials {
            email: email.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }),
    )
    .await
    .expect("demo login should succeed");

    assert_eq!(result.token_type, "Bearer");
    assert_eq!(result.redirect, "/dashboard");
    ClientToken::parse(&result.token).expect("issued token should parse")
}

async fn view(state: &AppState, token: &ClientToken) -> ShellView {
    let Json(view) = dashboard_view(State(state.clone()), Extension(token.clone()))
        .await
        .expect("dashboard view should render");
    view
}

fn ready(view: ShellView) -> ReadyView {
    match view {
        ShellView::Ready(ready) => ready,
        ShellView::Loading => panic!("expected a loaded shell"),
    }
}

fn entry_names(navigation: &NavigationState) -> Vec<&'static str> {
    match navigation {
        NavigationState::Entries { entries } => entries.iter().map(|entry| entry.name).collect(),
        other => panic!("expected entries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_owner_login_renders_head_navigation() {
    let state = app_state();
    let token = login_as(&state, "owner@brightsmile.health").await;

    let view = ready(view(&state, &token).await);
    assert_eq!(view.header.role, Role::CenterOwner);
    assert_eq!(view.header.center_type, CenterType::DentalClinic);
    assert_eq!(view.selected, "dashboard");
    assert_eq!(view.panel.key, "dashboard");

    let names = entry_names(&view.navigation);
    for expected in ["Staff Management", "Analytics", "Billing", "Dental Procedures"] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn test_selecting_entries_swaps_panel() {
    let state = app_state();
    let token = login_as(&state, "pharmacist@greencross.health").await;

    let Json(selected) = select_panel(
        State(state.clone()),
        Extension(token.clone()),
        Json(SelectPanelRequest {
            target: "prescriptions".to_string(),
        }),
    )
    .await
    .expect("prescriptions is visible to pharmacists");

    let selected = ready(selected);
    assert_eq!(selected.selected, "prescriptions");
    assert_eq!(selected.panel.key, "prescriptions");

    let error = select_panel(
        State(state.clone()),
        Extension(token.clone()),
        Json(SelectPanelRequest {
            target: "patients".to_string(),
        }),
    )
    .await
    .expect_err("patients is hidden from pharmacists");

    assert!(matches!(
        error,
        DashboardError::Shell(ShellError::NotVisible(ref target)) if target == "patients"
    ));
    assert_eq!(error.status_code(), StatusCode::FORBIDDEN);

    // Rejected activation leaves the previous selection in place
    assert_eq!(ready(view(&state, &token).await).selected, "prescriptions");
}

#[tokio::test]
async fn test_malformed_target_is_a_bad_request() {
    let state = app_state();
    let token = login_as(&state, "doctor@citygeneral.health").await;

    let error = select_panel(
        State(state.clone()),
        Extension(token),
        Json(SelectPanelRequest {
            target: "Medical Records".to_string(),
        }),
    )
    .await
    .expect_err("spaces are not allowed in targets");

    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_token_renders_loading() {
    let state = app_state();
    let token = ClientToken::generate();

    assert_eq!(view(&state, &token).await, ShellView::Loading);
    assert_eq!(state.shells.len().await, 0);

    let error = select_panel(
        State(state.clone()),
        Extension(token),
        Json(SelectPanelRequest {
            target: "dashboard".to_string(),
        }),
    )
    .await
    .expect_err("nothing can be selected before a session exists");
    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_survives_shell_registry_loss() {
    let store = KvStore::memory();
    let first = app_state_with(store.clone());
    let token = login_as(&first, "lab@citygeneral.health").await;

    // A second state shares the store but starts with no shells in memory
    let second = app_state_with(store);
    let view = ready(view(&second, &token).await);
    assert_eq!(second.shells.len().await, 1);

    assert_eq!(view.header.role, Role::LabTechnician);
    let names = entry_names(&view.navigation);
    assert!(names.contains(&"Test Results"));
    assert!(!names.contains(&"Sales"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let state = app_state();
    let token = login_as(&state, "nurse@citygeneral.health").await;
    assert_eq!(state.shells.len().await, 1);

    let Json(response) = logout(State(state.clone()), Extension(token.clone()))
        .await
        .expect("logout should succeed");
    assert_eq!(response.redirect, "/login");
    assert_eq!(state.shells.len().await, 0);

    let mut store = state.session_store(token.as_str());
    assert!(store.load_session().await.is_none());
    assert_eq!(view(&state, &token).await, ShellView::Loading);
}

#[tokio::test]
async fn test_permission_check_uses_login_role() {
    let state = app_state();
    let token = login_as(&state, "owner@brightsmile.health").await;

    let Json(owner) = check_permission(
        State(state.clone()),
        Extension(token.clone()),
        Json(PermissionRequest {
            roles: vec![Role::CenterOwner],
        }),
    )
    .await
    .unwrap();
    assert!(owner.allowed);

    let Json(head) = check_permission(
        State(state.clone()),
        Extension(token),
        Json(PermissionRequest {
            roles: vec![Role::CenterHead, Role::Admin],
        }),
    )
    .await
    .unwrap();
    assert!(!head.allowed);
}

#[tokio::test]
async fn test_permission_denied_without_session() {
    let state = app_state();

    let Json(response) = check_permission(
        State(state),
        Extension(ClientToken::generate()),
        Json(PermissionRequest {
            roles: Role::ALL.to_vec(),
        }),
    )
    .await
    .unwrap();
    assert!(!response.allowed);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let state = app_state();

    let error = login(
        State(state),
        Json(LoginCredentials {
            email: "doctor@citygeneral.health".to_string(),
            password: "not-the-password".to_string(),
        }),
    )
    .await
    .expect_err("wrong password must fail");

    assert!(matches!(
        error,
        DashboardError::Login(LoginError::InvalidCredentials)
    ));
    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_navigation_endpoint_reports_loading_without_inputs() {
    let Json(state) = resolve_navigation(Query(NavigationQuery::default())).await;
    assert_eq!(state, NavigationState::Loading);

    let Json(state) = resolve_navigation(Query(NavigationQuery {
        role: Some(Role::Pharmacist),
        center_type: Some(CenterType::Pharmacy),
    }))
    .await;
    assert!(entry_names(&state).contains(&"Sales"));
}

#[tokio::test]
async fn test_panel_endpoint_falls_back_to_dashboard() {
    let Json(view) = panel(Path("unknown-key".to_string())).await;
    assert_eq!(view.key, "dashboard");

    let Json(view) = panel(Path("lab-tests".to_string())).await;
    assert_eq!(view.title, "Laboratory Tests");
}

#[tokio::test]
async fn test_anonymous_requests_leave_no_shells() {
    let state = app_state();

    for _ in 0..200 {
        let token = ClientToken::generate();
        assert_eq!(view(&state, &token).await, ShellView::Loading);

        let Json(response) = check_permission(
            State(state.clone()),
            Extension(token),
            Json(PermissionRequest {
                roles: vec![Role::Admin],
            }),
        )
        .await
        .unwrap();
        assert!(!response.allowed);
    }

    assert_eq!(state.shells.len().await, 0);
}

#[tokio::test]
async fn test_expired_session_renders_loading_and_drops_shell() {
    let state = app_state_with_ttl(KvStore::memory(), Some(1));
    let token = login_as(&state, "doctor@citygeneral.health").await;
    ready(view(&state, &token).await);
    assert_eq!(state.shells.len().await, 1);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(view(&state, &token).await, ShellView::Loading);
    assert_eq!(state.shells.len().await, 0);

    let Json(response) = check_permission(
        State(state.clone()),
        Extension(token),
        Json(PermissionRequest {
            roles: vec![Role::Doctor],
        }),
    )
    .await
    .unwrap();
    assert!(!response.allowed);
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_router_rejects_missing_bearer() {
    let router = routes::create_router(app_state());

    let (status, body) = send(&router, get("/dashboard", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_router_rejects_malformed_bearer() {
    let router = routes::create_router(app_state());

    let (status, _) = send(&router, get("/dashboard", Some("not-a-token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_router_serves_dashboard_for_issued_token() {
    let router = routes::create_router(app_state());

    let login = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "email": "owner@brightsmile.health",
                "password": DEMO_PASSWORD,
            })
            .to_string(),
        ))
        .unwrap();
    let (status, body) = send(&router, login).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["user"]["role"], "center_owner");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&router, get("/dashboard", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["navigation"]["state"], "entries");

    let unknown = ClientToken::generate();
    let (status, body) = send(&router, get("/dashboard", Some(unknown.as_str()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "loading");
}

#[tokio::test]
async fn test_router_public_routes_need_no_bearer() {
    let router = routes::create_router(app_state());

    let (status, body) = send(&router, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&router, get("/panels/unknown-key", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "dashboard");
}

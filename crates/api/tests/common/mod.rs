#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use garage_api::auth::jwt::{generate_access_token, JwtConfig};
use garage_api::config::ServerConfig;
use garage_api::routes;
use garage_api::state::AppState;
use garage_core::diagnostics::{DiagnosisSynthesizer, FaultCodeCatalog};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a fixed JWT secret shared with [`auth_token`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        dtc_catalog_path: None,
        enforce_project_vehicle_match: false,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// A valid Bearer token for the test config.
pub fn auth_token() -> String {
    generate_access_token(1, "user", &test_config().jwt).unwrap()
}

/// Build the full application router with the built-in catalog.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(), FaultCodeCatalog::builtin())
}

/// Build the full application router with all middleware layers.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack production uses.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig, catalog: FaultCodeCatalog) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
        synthesizer: Arc::new(DiagnosisSynthesizer::new(Arc::new(catalog))),
    };

    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:5173"))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Authenticated GET.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", auth_token()))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET without an Authorization header.
pub async fn get_anonymous(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Authenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", auth_token()))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with a JSON body and an explicit Authorization header value.
pub async fn post_json_with_auth(
    app: Router,
    uri: &str,
    authorization: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Authenticated POST without a body.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", auth_token()))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a client and return its id.
pub async fn seed_client(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/clients", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a client plus a vehicle with the given VIN and return the vehicle id.
pub async fn seed_vehicle(pool: &PgPool, vin: &str) -> i64 {
    let client_id = seed_client(pool, "Jan Kowalski").await;
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/vehicles",
        serde_json::json!({
            "client_id": client_id,
            "vin": vin,
            "brand": "BMW",
            "model": "M340i",
            "year": 2021,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Open a project on a vehicle and return its id.
pub async fn seed_project(pool: &PgPool, vehicle_id: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "vehicle_id": vehicle_id,
            "title": "Stage 1 + diagnostics",
            "service_type": "diagnostics",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Analyze a code on a vehicle and return the created diagnosis JSON.
pub async fn analyze(pool: &PgPool, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/diagnoses/analyze", body).await;
    let status = response.status();
    (status, body_json(response).await)
}

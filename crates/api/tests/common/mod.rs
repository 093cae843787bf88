//! Shared helpers for API integration tests.
//!
//! Builds the application router through [`build_app_router`] so tests
//! exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use paestro_api::auth::jwt::{generate_access_token, JwtConfig};
use paestro_api::config::ServerConfig;
use paestro_api::google::people::PeopleClient;
use paestro_api::router::build_app_router;
use paestro_api::state::AppState;
use paestro_core::oauth::{GoogleOauthConfig, DEFAULT_SCOPES, GOOGLE_AUTH_URL};
use paestro_core::roles::{ROLE_COACH, ROLE_SERVICE};

/// JWT secret shared by all test tokens.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// The People API base points at a closed local port so any test that
/// unexpectedly reaches Google fails fast instead of leaving the process.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        google: GoogleOauthConfig {
            client_id: "test-client-id".to_string(),
            redirect_uri: "http://localhost:8080/oauth-callback".to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            auth_url: GOOGLE_AUTH_URL.to_string(),
        },
        people_api_base: "http://127.0.0.1:1".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let people = PeopleClient::new(config.people_api_base.clone());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        people,
    };

    build_app_router(state, &config)
}

/// Mint a `service`-role token for the orchestrator.
pub fn service_token() -> String {
    generate_access_token("orchestrator", ROLE_SERVICE, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Mint a `coach`-role token whose subject is the given coach id.
pub fn coach_token(coach_id: &str) -> String {
    generate_access_token(coach_id, ROLE_COACH, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a Bearer token and an empty body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a Bearer token and a JSON body.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

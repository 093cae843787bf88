//! Integration tests for the `/google/tokens/{coach_id}` endpoints:
//! upsert semantics and the write-is-service-only capability rule.

mod common;

use axum::http::StatusCode;
use common::{body_json, coach_token, get_auth, put_json_auth, service_token};
use sqlx::PgPool;

fn parse_timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value.as_str().expect("timestamp should be a string"))
        .expect("timestamp should be RFC 3339")
}

fn credentials(access_token: &str) -> serde_json::Value {
    serde_json::json!({
        "coach_email": "coach@example.com",
        "access_token": access_token,
        "refresh_token": "1//refresh",
        "expires_in": 3600,
        "scope": "https://www.googleapis.com/auth/calendar https://www.googleapis.com/auth/contacts.readonly",
    })
}

// ---------------------------------------------------------------------------
// Test: the service principal can store and fetch credentials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_can_upsert_and_fetch(pool: PgPool) {
    let token = service_token();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/google/tokens/coach-1",
        &token,
        &credentials("ya29.first"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["coach_id"], "coach-1");
    assert_eq!(json["access_token"], "ya29.first");
    assert!(json["expires_at"].is_string());

    let response = get_auth(
        common::build_test_app(pool),
        "/google/tokens/coach-1",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["access_token"], "ya29.first");
    assert_eq!(json["refresh_token"], "1//refresh");
}

// ---------------------------------------------------------------------------
// Test: upserting twice keeps one row, second write wins, updated_at advances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_upsert_replaces_first(pool: PgPool) {
    let token = service_token();

    let first = body_json(
        put_json_auth(
            common::build_test_app(pool.clone()),
            "/google/tokens/coach-1",
            &token,
            &credentials("ya29.first"),
        )
        .await,
    )
    .await;

    let second = body_json(
        put_json_auth(
            common::build_test_app(pool.clone()),
            "/google/tokens/coach-1",
            &token,
            &credentials("ya29.second"),
        )
        .await,
    )
    .await;

    assert_eq!(second["id"], first["id"], "must update the existing row");
    assert_eq!(second["access_token"], "ya29.second");

    let first_updated = parse_timestamp(&first["updated_at"]);
    let second_updated = parse_timestamp(&second["updated_at"]);
    assert!(
        second_updated > first_updated,
        "updated_at must advance on replace"
    );

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM google_oauth_tokens")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

// ---------------------------------------------------------------------------
// Test: writes require the service role
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn coach_cannot_write_tokens(pool: PgPool) {
    let response = put_json_auth(
        common::build_test_app(pool),
        "/google/tokens/coach-1",
        &coach_token("coach-1"),
        &credentials("ya29.selfissued"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_cannot_write_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/google/tokens/coach-1")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(credentials("ya29.anon").to_string()))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: raw credential reads are service-only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn coach_cannot_read_raw_tokens(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/google/tokens/coach-1",
        &coach_token("coach-1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Test: placeholder coach ids cannot be written
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_rejects_placeholder_coach_id(pool: PgPool) {
    let response = put_json_auth(
        common::build_test_app(pool),
        "/google/tokens/default",
        &service_token(),
        &credentials("ya29.placeholder"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: empty access_token is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_rejects_empty_access_token(pool: PgPool) {
    let response = put_json_auth(
        common::build_test_app(pool),
        "/google/tokens/coach-1",
        &service_token(),
        &credentials(""),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: fetching a coach with no stored row returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_unknown_coach_returns_404(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/google/tokens/coach-unknown",
        &service_token(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

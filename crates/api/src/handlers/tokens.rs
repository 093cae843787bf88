//! Handlers for the `/google/tokens` resource.
//!
//! These are the orchestrator's write and read paths into the token
//! store: after exchanging an authorization code with Google it persists
//! the credential set here, keyed by the coach id it recovered from the
//! OAuth `state` parameter, and later fetches the row back to call
//! Google APIs on the coach's behalf.

use axum::extract::{Path, State};
use axum::Json;
use paestro_core::coach::is_valid_coach_id;
use paestro_core::error::CoreError;
use paestro_db::models::oauth_token::{GoogleOauthToken, UpsertGoogleOauthToken};
use paestro_db::repositories::OauthTokenRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireService;
use crate::state::AppState;

/// PUT /google/tokens/{coach_id}
///
/// Insert or replace the coach's credential set. Service principal only.
pub async fn upsert(
    State(state): State<AppState>,
    RequireService(_): RequireService,
    Path(coach_id): Path<String>,
    Json(input): Json<UpsertGoogleOauthToken>,
) -> AppResult<Json<GoogleOauthToken>> {
    if !is_valid_coach_id(&coach_id) {
        return Err(AppError::Core(CoreError::Validation(
            "coach_id must be a real coach identifier".into(),
        )));
    }
    if input.access_token.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "access_token must not be empty".into(),
        )));
    }

    let row = OauthTokenRepo::upsert(&state.pool, &coach_id, &input).await?;
    tracing::info!(coach_id = %row.coach_id, "Stored Google OAuth credentials");
    Ok(Json(row))
}

/// GET /google/tokens/{coach_id}
///
/// Fetch the stored credential row, including the access and refresh
/// tokens. Service principal only; the row is returned even when expired
/// so the orchestrator can use the refresh token.
pub async fn get_by_coach(
    State(state): State<AppState>,
    RequireService(_): RequireService,
    Path(coach_id): Path<String>,
) -> AppResult<Json<GoogleOauthToken>> {
    let row = OauthTokenRepo::find_by_coach_id(&state.pool, &coach_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GoogleOauthToken",
            id: coach_id,
        }))?;
    Ok(Json(row))
}

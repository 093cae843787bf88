//! Handlers for the OAuth authorization flow: URL issuing and the
//! Google redirect callback.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use paestro_core::coach::is_valid_coach_id;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /google/oauth-url`.
#[derive(Debug, Deserialize)]
pub struct OauthUrlParams {
    pub coach_id: Option<String>,
}

/// Success body for `GET /google/oauth-url`.
#[derive(Debug, Serialize)]
pub struct OauthUrlResponse {
    pub oauth_url: String,
    pub coach_id: String,
    pub status: &'static str,
}

/// GET /google/oauth-url?coach_id=<id>
///
/// Validate the coach id and return the Google authorization URL with the
/// coach id round-tripped in the `state` parameter. A missing, empty, or
/// placeholder (`default`) id is rejected before any URL is built.
pub async fn oauth_url(
    State(state): State<AppState>,
    Query(params): Query<OauthUrlParams>,
) -> AppResult<Response> {
    let coach_id = match params.coach_id.as_deref() {
        Some(id) if is_valid_coach_id(id) => id.trim(),
        _ => {
            tracing::warn!(
                coach_id = params.coach_id.as_deref().unwrap_or("<missing>"),
                "Rejected OAuth URL request without a usable coach_id"
            );
            return Ok(missing_coach_id_response());
        }
    };

    let oauth_url = state.config.google.authorization_url(coach_id)?;

    Ok(Json(OauthUrlResponse {
        oauth_url,
        coach_id: coach_id.to_string(),
        status: "success",
    })
    .into_response())
}

/// The 400 body for a missing/placeholder `coach_id`.
///
/// The shape is a published contract with the platform frontend, so it
/// bypasses the standard `{error, code}` envelope.
fn missing_coach_id_response() -> Response {
    let body = json!({
        "error": "Missing coach_id parameter",
        "message": "Please include coach_id as a query parameter: /google/oauth-url?coach_id=YOUR_COACH_ID",
        "status": "error",
        "example": "/google/oauth-url?coach_id=YOUR_COACH_ID",
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Query parameters for `GET /oauth2callback`.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Acknowledgement body for `GET /oauth2callback`.
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// Truncated echo of the authorization code, for operator debugging.
    pub code: String,
    /// Coach id recovered from the OAuth `state` parameter.
    pub coach_id: Option<String>,
}

/// GET /oauth2callback?code=<code>&state=<coach_id>
///
/// Acknowledge Google's redirect. The orchestrator performs the actual
/// code exchange out of band and persists the result via
/// `PUT /google/tokens/{coach_id}`; this endpoint only confirms receipt
/// and surfaces the coach id carried in `state`.
pub async fn oauth_callback(
    Query(params): Query<CallbackParams>,
) -> AppResult<(StatusCode, Json<CallbackResponse>)> {
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("No authorization code provided".into()))?;

    let truncated = if code.len() > 10 {
        let prefix: String = code.chars().take(10).collect();
        format!("{prefix}...")
    } else {
        code
    };

    tracing::info!(
        coach_id = params.state.as_deref().unwrap_or("<missing>"),
        "OAuth callback received"
    );

    Ok((
        StatusCode::OK,
        Json(CallbackResponse {
            status: "success",
            message: "OAuth callback received",
            code: truncated,
            coach_id: params.state,
        }),
    ))
}

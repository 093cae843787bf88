//! Handlers for the `/coach/{coach_id}` resource: connection status,
//! disconnect, and Google Contacts.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use paestro_core::contacts::Contact;
use paestro_core::error::CoreError;
use paestro_core::types::Timestamp;
use paestro_db::repositories::OauthTokenRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::google::people::PeopleApiError;
use crate::middleware::auth::{AuthPrincipal, RequireService};
use crate::state::AppState;

/// Connection status body returned to the platform frontend.
#[derive(Debug, Serialize)]
pub struct OauthStatusResponse {
    pub connected: bool,
    pub needs_auth: bool,
    pub coach_id: String,
    pub email: Option<String>,
    pub scopes: Vec<String>,
    /// Timestamp of the last credential write.
    pub last_sync: Option<Timestamp>,
    pub message: &'static str,
}

/// GET /coach/{coach_id}/google-oauth-status
///
/// Report whether the coach has a live Google connection. An expired
/// access token counts as not connected (the orchestrator refreshes
/// tokens out of band; a row left expired means the refresh lapsed).
pub async fn oauth_status(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Path(coach_id): Path<String>,
) -> AppResult<Json<OauthStatusResponse>> {
    principal.authorize_coach(&coach_id)?;

    let row = OauthTokenRepo::find_by_coach_id(&state.pool, &coach_id).await?;

    let response = match row.filter(|t| !t.is_expired(Utc::now())) {
        Some(token) => OauthStatusResponse {
            connected: true,
            needs_auth: false,
            coach_id,
            email: token.coach_email.clone(),
            scopes: token.scopes(),
            last_sync: Some(token.updated_at),
            message: "Google OAuth connected successfully",
        },
        None => OauthStatusResponse {
            connected: false,
            needs_auth: true,
            coach_id,
            email: None,
            scopes: Vec::new(),
            last_sync: None,
            message: "No OAuth token found - please connect Google Workspace",
        },
    };

    Ok(Json(response))
}

/// Body returned by a successful disconnect.
#[derive(Debug, Serialize)]
pub struct DisconnectResponse {
    pub disconnected: bool,
    pub coach_id: String,
}

/// POST /coach/{coach_id}/google-oauth-disconnect
///
/// Delete the coach's stored credentials. Service principal only: coaches
/// disconnect through the platform, which revokes the grant with Google
/// before calling here.
pub async fn oauth_disconnect(
    State(state): State<AppState>,
    RequireService(_): RequireService,
    Path(coach_id): Path<String>,
) -> AppResult<Json<DisconnectResponse>> {
    let deleted = OauthTokenRepo::delete_by_coach_id(&state.pool, &coach_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GoogleOauthToken",
            id: coach_id,
        }));
    }

    tracing::info!(coach_id = %coach_id, "Deleted Google OAuth credentials");
    Ok(Json(DisconnectResponse {
        disconnected: true,
        coach_id,
    }))
}

/// Contacts body returned to the platform frontend.
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
    pub total: usize,
    pub coach_id: String,
}

/// GET /coach/{coach_id}/google-contacts
///
/// Fetch the coach's Google Contacts with the stored access token. When
/// Google rejects the token, the stored row is deleted so the next status
/// check reports needs_auth instead of a connection that can never work.
pub async fn google_contacts(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Path(coach_id): Path<String>,
) -> AppResult<Json<ContactsResponse>> {
    principal.authorize_coach(&coach_id)?;

    let token = OauthTokenRepo::find_by_coach_id(&state.pool, &coach_id)
        .await?
        .filter(|t| !t.is_expired(Utc::now()))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Google OAuth not connected for this coach".into(),
            ))
        })?;

    match state.people.list_contacts(&token.access_token).await {
        Ok(contacts) => {
            tracing::info!(
                coach_id = %coach_id,
                count = contacts.len(),
                "Fetched Google contacts"
            );
            Ok(Json(ContactsResponse {
                total: contacts.len(),
                contacts,
                coach_id,
            }))
        }
        Err(PeopleApiError::Unauthorized) => {
            // The token is dead upstream; drop the row so the stored state
            // matches reality.
            OauthTokenRepo::delete_by_coach_id(&state.pool, &coach_id).await?;
            tracing::warn!(coach_id = %coach_id, "Google rejected stored token; row deleted");
            Err(PeopleApiError::Unauthorized.into())
        }
        Err(err) => Err(err.into()),
    }
}

//! Route definitions for the `/coach/{coach_id}` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::coach;
use crate::state::AppState;

/// Routes mounted at `/coach/{coach_id}`.
///
/// ```text
/// GET  /coach/{coach_id}/google-oauth-status     -> oauth_status
/// POST /coach/{coach_id}/google-oauth-disconnect -> oauth_disconnect (service only)
/// GET  /coach/{coach_id}/google-contacts         -> google_contacts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/coach/{coach_id}/google-oauth-status",
            get(coach::oauth_status),
        )
        .route(
            "/coach/{coach_id}/google-oauth-disconnect",
            post(coach::oauth_disconnect),
        )
        .route(
            "/coach/{coach_id}/google-contacts",
            get(coach::google_contacts),
        )
}

pub mod coach;
pub mod health;
pub mod oauth;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Routes are mounted at the root (not under a versioned prefix): the
/// paths are a published contract with the platform frontend and
/// orchestrator.
///
/// ```text
/// GET  /health                                   service + database health
///
/// GET  /google/oauth-url?coach_id=               authorization URL (validated)
/// GET  /oauth2callback                           Google redirect acknowledgement
/// PUT  /google/tokens/{coach_id}                 upsert credentials (service)
/// GET  /google/tokens/{coach_id}                 fetch credentials (service)
///
/// GET  /coach/{coach_id}/google-oauth-status     connection status (owner or service)
/// POST /coach/{coach_id}/google-oauth-disconnect delete credentials (service)
/// GET  /coach/{coach_id}/google-contacts         Google Contacts (owner or service)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(oauth::router())
        .merge(coach::router())
}

//! Route definitions for the OAuth flow and the token store.

use axum::routing::get;
use axum::Router;

use crate::handlers::{oauth, tokens};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /google/oauth-url          -> oauth_url
/// GET /oauth2callback            -> oauth_callback
/// PUT /google/tokens/{coach_id}  -> upsert (service only)
/// GET /google/tokens/{coach_id}  -> get_by_coach (service only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google/oauth-url", get(oauth::oauth_url))
        .route("/oauth2callback", get(oauth::oauth_callback))
        .route(
            "/google/tokens/{coach_id}",
            get(tokens::get_by_coach).put(tokens::upsert),
        )
}

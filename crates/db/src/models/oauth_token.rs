//! Google OAuth token model and DTOs.

use paestro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A credential row from the `google_oauth_tokens` table.
///
/// `expires_at` and `updated_at` are derived columns maintained by a
/// database trigger; the application never writes them directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GoogleOauthToken {
    pub id: DbId,
    pub coach_id: String,
    pub coach_email: Option<String>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Seconds-to-live reported by Google at issue time.
    pub expires_in: i32,
    pub expires_at: Option<Timestamp>,
    /// Space-delimited permission scopes.
    pub scope: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GoogleOauthToken {
    /// Whether the access token has passed its absolute expiry.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }

    /// The scope string split into individual scopes.
    pub fn scopes(&self) -> Vec<String> {
        self.scope
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(|s| s.to_string())
            .collect()
    }
}

/// DTO for persisting a credential set for a coach.
///
/// The coach id comes from the request path; `expires_in` defaults to
/// 3600 seconds when omitted, matching Google's usual access-token TTL.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertGoogleOauthToken {
    pub coach_email: Option<String>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i32>,
    pub scope: Option<String>,
}

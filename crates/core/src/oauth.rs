//! Google OAuth authorization-URL construction.
//!
//! The coach id travels in the `state` parameter so the OAuth callback can
//! recover which coach initiated the flow. `access_type=offline` plus
//! `prompt=consent` make Google return a refresh token on every grant.

use url::Url;

use crate::error::CoreError;

/// Google's OAuth 2.0 authorization endpoint.
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Workspace scopes requested for every coach connection.
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/calendar",
    "https://www.googleapis.com/auth/contacts.readonly",
];

/// OAuth client settings for the Google Workspace integration.
#[derive(Debug, Clone)]
pub struct GoogleOauthConfig {
    /// OAuth client id registered with Google.
    pub client_id: String,
    /// Redirect URI the frontend callback listens on.
    pub redirect_uri: String,
    /// Requested scopes, joined with spaces in the URL.
    pub scopes: Vec<String>,
    /// Authorization endpoint. Overridable for tests; defaults to
    /// [`GOOGLE_AUTH_URL`].
    pub auth_url: String,
}

impl GoogleOauthConfig {
    /// Build the authorization URL for a coach, carrying the coach id in
    /// the `state` parameter.
    pub fn authorization_url(&self, state: &str) -> Result<String, CoreError> {
        let mut url = Url::parse(&self.auth_url)
            .map_err(|e| CoreError::Internal(format!("Invalid auth URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scopes.join(" "))
            .append_pair("response_type", "code")
            .append_pair("state", state)
            .append_pair("prompt", "consent")
            .append_pair("access_type", "offline");

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleOauthConfig {
        GoogleOauthConfig {
            client_id: "test-client-id".to_string(),
            redirect_uri: "http://localhost:8080/oauth-callback".to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            auth_url: GOOGLE_AUTH_URL.to_string(),
        }
    }

    #[test]
    fn test_authorization_url_carries_state() {
        let url = test_config()
            .authorization_url("bralin-jackson-coach-123")
            .unwrap();

        let parsed = Url::parse(&url).unwrap();
        let state = parsed
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.into_owned());
        assert_eq!(state.as_deref(), Some("bralin-jackson-coach-123"));
    }

    #[test]
    fn test_authorization_url_parameters() {
        let url = test_config().authorization_url("coach-1").unwrap();

        assert!(url.starts_with(GOOGLE_AUTH_URL));
        assert!(url.contains("client_id=test-client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("prompt=consent"));
        assert!(url.contains("access_type=offline"));
        // Scopes are space-joined, then percent-encoded.
        assert!(url.contains("calendar"));
        assert!(url.contains("contacts.readonly"));
    }

    #[test]
    fn test_invalid_auth_url_is_internal_error() {
        let mut config = test_config();
        config.auth_url = "not a url".to_string();

        let err = config.authorization_url("coach-1").unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));
    }
}

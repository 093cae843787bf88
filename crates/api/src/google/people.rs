//! Google People API client.
//!
//! Fetches the coach's contacts with a stored bearer token. A `401` from
//! Google is surfaced as [`PeopleApiError::Unauthorized`] so callers can
//! invalidate the stored credential row before responding.

use paestro_core::contacts::{simplify_connections, ConnectionsResponse, Contact};
use reqwest::StatusCode;

/// Fields requested per person; anything else is dropped server-side.
const PERSON_FIELDS: &str = "names,emailAddresses,phoneNumbers";

/// Maximum connections fetched per request.
const PAGE_SIZE: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum PeopleApiError {
    /// Google rejected the access token (expired or revoked).
    #[error("Google rejected the access token")]
    Unauthorized,

    /// Google answered with an unexpected status.
    #[error("People API returned status {0}")]
    Upstream(StatusCode),

    /// Transport-level failure (connect, timeout, body decode).
    #[error("People API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Thin client over the `people/me/connections` endpoint.
#[derive(Debug, Clone)]
pub struct PeopleClient {
    http: reqwest::Client,
    base_url: String,
}

impl PeopleClient {
    /// Create a client against `base_url` (no trailing slash), e.g.
    /// `https://people.googleapis.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch and simplify the caller's Google contacts.
    pub async fn list_contacts(&self, access_token: &str) -> Result<Vec<Contact>, PeopleApiError> {
        let url = format!(
            "{}/v1/people/me/connections?pageSize={PAGE_SIZE}&personFields={PERSON_FIELDS}",
            self.base_url
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(PeopleApiError::Unauthorized),
            status if !status.is_success() => Err(PeopleApiError::Upstream(status)),
            _ => {
                let connections: ConnectionsResponse = response.json().await?;
                Ok(simplify_connections(connections))
            }
        }
    }
}

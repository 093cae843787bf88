use paestro_core::oauth::{GoogleOauthConfig, DEFAULT_SCOPES, GOOGLE_AUTH_URL};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
    /// Google OAuth client settings used to build authorization URLs.
    pub google: GoogleOauthConfig,
    /// Base URL of the Google People API (overridable for tests).
    pub people_api_base: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Required | Default                                 |
    /// |-----------------------------|----------|-----------------------------------------|
    /// | `HOST`                      | no       | `0.0.0.0`                               |
    /// | `PORT`                      | no       | `8000`                                  |
    /// | `CORS_ORIGINS`              | no       | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS`      | no       | `30`                                    |
    /// | `JWT_SECRET`                | **yes**  | --                                      |
    /// | `GOOGLE_OAUTH_CLIENT_ID`    | **yes**  | --                                      |
    /// | `GOOGLE_OAUTH_REDIRECT_URI` | no       | `http://localhost:8080/oauth-callback`  |
    /// | `GOOGLE_OAUTH_SCOPES`       | no       | calendar + contacts.readonly            |
    /// | `GOOGLE_PEOPLE_API_BASE`    | no       | `https://people.googleapis.com`         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let client_id = std::env::var("GOOGLE_OAUTH_CLIENT_ID")
            .expect("GOOGLE_OAUTH_CLIENT_ID must be set in the environment");

        let redirect_uri = std::env::var("GOOGLE_OAUTH_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/oauth-callback".into());

        let scopes: Vec<String> = std::env::var("GOOGLE_OAUTH_SCOPES")
            .map(|v| v.split_whitespace().map(|s| s.to_string()).collect())
            .unwrap_or_else(|_| DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect());

        let people_api_base = std::env::var("GOOGLE_PEOPLE_API_BASE")
            .unwrap_or_else(|_| "https://people.googleapis.com".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            google: GoogleOauthConfig {
                client_id,
                redirect_uri,
                scopes,
                auth_url: GOOGLE_AUTH_URL.to_string(),
            },
            people_api_base,
        }
    }
}

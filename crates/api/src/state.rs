use std::sync::Arc;

use crate::config::ServerConfig;
use crate::google::people::PeopleClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: paestro_db::DbPool,
    /// Server configuration (JWT secret, Google OAuth client settings).
    pub config: Arc<ServerConfig>,
    /// Google People API client (shared reqwest connection pool).
    pub people: PeopleClient,
}

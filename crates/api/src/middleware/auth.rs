//! JWT-based authentication extractors for Axum handlers.
//!
//! [`AuthPrincipal`] authenticates any caller; [`RequireService`] narrows
//! to the orchestrator. The token-store capability matrix is enforced
//! here: the service principal may touch any coach's row, a coach may
//! only read their own, and nothing is reachable anonymously.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use paestro_core::error::CoreError;
use paestro_core::roles::ROLE_SERVICE;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// ```ignore
/// async fn my_handler(principal: AuthPrincipal) -> AppResult<Json<()>> {
///     tracing::info!(subject = %principal.subject, role = %principal.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthPrincipal {
    /// The JWT subject: a coach id, or the service name for service tokens.
    pub subject: String,
    /// The caller's role name (`"service"` or `"coach"`).
    pub role: String,
}

impl AuthPrincipal {
    /// Whether the caller is the privileged service principal.
    pub fn is_service(&self) -> bool {
        self.role == ROLE_SERVICE
    }

    /// Enforce the read-own-row rule: the service principal may act on any
    /// coach, any other caller only on the coach id matching their subject.
    pub fn authorize_coach(&self, coach_id: &str) -> Result<(), AppError> {
        if self.is_service() || self.subject == coach_id {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "Access restricted to the owning coach".into(),
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthPrincipal {
            subject: claims.sub,
            role: claims.role,
        })
    }
}

/// Requires the `service` role. Rejects with 403 Forbidden otherwise.
///
/// Token writes (upsert, disconnect) and raw credential reads go through
/// this extractor; coaches cannot self-issue or modify tokens.
///
/// ```ignore
/// async fn service_only(RequireService(principal): RequireService) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireService(pub AuthPrincipal);

impl FromRequestParts<AppState> for RequireService {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = AuthPrincipal::from_request_parts(parts, state).await?;
        if !principal.is_service() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Service role required".into(),
            )));
        }
        Ok(RequireService(principal))
    }
}

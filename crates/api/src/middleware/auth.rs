//! JWT-based authentication extractor for admin routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use cinex_core::error::CoreError;
use cinex_core::types::EntityId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that mutates the
/// catalog or manages admins:
///
/// ```ignore
/// async fn create_movie(admin: AuthAdmin, ...) -> AppResult<Json<Movie>> {
///     tracing::info!(admin_id = %admin.admin_id, "creating movie");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin's id (from `claims.sub`).
    pub admin_id: EntityId,
    /// The admin's display name.
    pub name: String,
    /// The admin's email.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
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

        Ok(AuthAdmin {
            admin_id: claims.sub,
            name: claims.name,
            email: claims.email,
        })
    }
}

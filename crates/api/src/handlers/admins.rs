//! Handlers for the `/admin/admins` resource (admin account
//! management). All handlers require authentication via [`AuthAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::types::EntityId;
use cinex_db::models::admin::{AdminResponse, CreateAdmin};
use cinex_db::repositories::AdminRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/admins`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// POST /api/v1/admin/admins
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateAdminRequest>,
) -> AppResult<(StatusCode, Json<AdminResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Admin already exists".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateAdmin {
        name: input.name,
        email: input.email,
        password_hash: hashed,
    };

    let admin = AdminRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(AdminResponse::from(&admin))))
}

/// GET /api/v1/admin/admins
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<AdminResponse>>> {
    let admins = AdminRepo::list(&state.pool).await?;
    Ok(Json(admins.iter().map(AdminResponse::from).collect()))
}

/// DELETE /api/v1/admin/admins/{id}
///
/// An admin cannot delete their own account.
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if id == admin.admin_id {
        return Err(AppError::BadRequest("You cannot delete yourself".into()));
    }

    let deleted = AdminRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id,
        }))
    }
}

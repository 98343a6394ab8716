//! Handlers for the `/ticket-types` resource. Admin-managed pricing
//! categories referenced by purchases.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::pricing;
use cinex_core::types::EntityId;
use cinex_db::models::ticket_type::{CreateTicketType, TicketType, UpdateTicketType};
use cinex_db::repositories::TicketTypeRepo;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Request body for `POST /ticket-types`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketTypeRequest {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(length(min = 10))]
    pub description: String,
    pub discount_percentage: Decimal,
    pub requires_proof: bool,
}

/// POST /api/v1/ticket-types
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateTicketTypeRequest>,
) -> AppResult<(StatusCode, Json<TicketType>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    pricing::validate_discount(input.discount_percentage)?;

    let create_dto = CreateTicketType {
        name: input.name,
        description: input.description,
        discount_percentage: input.discount_percentage,
        requires_proof: input.requires_proof,
    };

    let ticket_type = TicketTypeRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(ticket_type)))
}

/// GET /api/v1/ticket-types
pub async fn list(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<Vec<TicketType>>> {
    let ticket_types = TicketTypeRepo::list(&state.pool).await?;
    Ok(Json(ticket_types))
}

/// PUT /api/v1/ticket-types/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateTicketType>,
) -> AppResult<Json<TicketType>> {
    if let Some(discount) = input.discount_percentage {
        pricing::validate_discount(discount)?;
    }

    let ticket_type = TicketTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket type",
            id,
        }))?;
    Ok(Json(ticket_type))
}

/// DELETE /api/v1/ticket-types/{id}
///
/// Restricted when purchases reference the ticket type (surfaces as
/// 409).
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = TicketTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Ticket type",
            id,
        }))
    }
}

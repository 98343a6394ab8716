//! Handlers for the `/purchases` resource: the purchase authorization
//! path and the purchase detail read.
//!
//! Quantity bounds and email shape are rejected here with 400 before
//! the authorization core is reached; the capacity decision itself
//! lives in `PurchaseRepo::authorize`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::types::{EntityId, Timestamp};
use cinex_db::models::purchase::CreatePurchase;
use cinex_db::repositories::PurchaseRepo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /purchases`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseRequest {
    pub session_id: EntityId,
    #[validate(email)]
    pub user_email: String,
    pub user_cpf: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub quantity: i32,
    pub ticket_type_id: Option<EntityId>,
}

/// Ticket-type fields denormalized into the purchase response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTicketType {
    pub name: String,
    pub discount_percentage: Decimal,
}

/// Response body for a successful purchase (201).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub id: EntityId,
    pub session_id: EntityId,
    pub user_email: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<PurchaseTicketType>,
    pub total_price: Decimal,
    pub purchase_date: Timestamp,
}

/// POST /api/v1/purchases
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseRequest>,
) -> AppResult<(StatusCode, Json<PurchaseResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let create_dto = CreatePurchase {
        session_id: input.session_id,
        user_email: input.user_email,
        user_cpf: input.user_cpf,
        quantity: input.quantity,
        ticket_type_id: input.ticket_type_id,
    };

    let (purchase, ticket_type) = PurchaseRepo::authorize(&state.pool, &create_dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(PurchaseResponse {
            id: purchase.id,
            session_id: purchase.session_id,
            user_email: purchase.user_email,
            quantity: purchase.quantity,
            ticket_type: ticket_type.map(|t| PurchaseTicketType {
                name: t.name,
                discount_percentage: t.discount_percentage,
            }),
            total_price: purchase.total_price,
            purchase_date: purchase.created_at,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Detail read
// ---------------------------------------------------------------------------

/// Movie fields in the purchase detail.
#[derive(Debug, Serialize)]
pub struct PurchaseDetailMovie {
    pub id: EntityId,
    pub title: String,
    pub duration: i32,
}

/// Cinema fields in the purchase detail.
#[derive(Debug, Serialize)]
pub struct PurchaseDetailCinema {
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

/// Session fields in the purchase detail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetailSession {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub movie: PurchaseDetailMovie,
    pub cinema: PurchaseDetailCinema,
}

/// Response body for `GET /purchases/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetailResponse {
    pub id: EntityId,
    pub session: PurchaseDetailSession,
    pub user_email: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<PurchaseTicketType>,
    pub total_price: Decimal,
    pub purchase_date: Timestamp,
}

/// GET /api/v1/purchases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<PurchaseDetailResponse>> {
    let detail = PurchaseRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Purchase",
            id,
        }))?;

    let ticket_type = match (detail.ticket_type_name, detail.ticket_type_discount) {
        (Some(name), Some(discount_percentage)) => Some(PurchaseTicketType {
            name,
            discount_percentage,
        }),
        _ => None,
    };

    Ok(Json(PurchaseDetailResponse {
        id: detail.id,
        session: PurchaseDetailSession {
            id: detail.session_id,
            date_time: detail.session_date_time,
            room_type: detail.session_room_type,
            price: detail.session_price,
            movie: PurchaseDetailMovie {
                id: detail.movie_id,
                title: detail.movie_title,
                duration: detail.movie_duration,
            },
            cinema: PurchaseDetailCinema {
                id: detail.cinema_id,
                name: detail.cinema_name,
                address: detail.cinema_address,
            },
        },
        user_email: detail.user_email,
        quantity: detail.quantity,
        ticket_type,
        total_price: detail.total_price,
        purchase_date: detail.created_at,
    }))
}

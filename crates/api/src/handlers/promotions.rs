//! Handlers for the `/promotions` resource. The public listing only
//! shows promotions that are active and inside their date window.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::pricing;
use cinex_core::types::{EntityId, Timestamp};
use cinex_db::models::promotion::{CreatePromotion, Promotion, PromotionListing, UpdatePromotion};
use cinex_db::repositories::PromotionRepo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Query parameters for the public promotion listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionListQuery {
    pub cinema_id: Option<EntityId>,
    pub movie_id: Option<EntityId>,
}

/// Cinema scope in a promotion response.
#[derive(Debug, Serialize)]
pub struct PromotionCinema {
    pub id: EntityId,
    pub name: String,
}

/// Movie scope in a promotion response.
#[derive(Debug, Serialize)]
pub struct PromotionMovie {
    pub id: EntityId,
    pub title: String,
}

/// Public promotion listing entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResponse {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub cinema: Option<PromotionCinema>,
    pub movie: Option<PromotionMovie>,
}

impl From<PromotionListing> for PromotionResponse {
    fn from(row: PromotionListing) -> Self {
        let cinema = match (row.cinema_id, row.cinema_name) {
            (Some(id), Some(name)) => Some(PromotionCinema { id, name }),
            _ => None,
        };
        let movie = match (row.movie_id, row.movie_title) {
            (Some(id), Some(title)) => Some(PromotionMovie { id, title }),
            _ => None,
        };
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            discount_percentage: row.discount_percentage,
            start_date: row.start_date,
            end_date: row.end_date,
            cinema,
            movie,
        }
    }
}

/// GET /api/v1/promotions
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PromotionListQuery>,
) -> AppResult<Json<Vec<PromotionResponse>>> {
    let promotions =
        PromotionRepo::list_active(&state.pool, query.cinema_id, query.movie_id).await?;
    Ok(Json(promotions.into_iter().map(Into::into).collect()))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/promotions
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreatePromotion>,
) -> AppResult<(StatusCode, Json<Promotion>)> {
    pricing::validate_discount(input.discount_percentage)?;
    if input.end_date < input.start_date {
        return Err(AppError::BadRequest(
            "endDate must not be before startDate".into(),
        ));
    }

    let promotion = PromotionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(promotion)))
}

/// PUT /api/v1/promotions/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdatePromotion>,
) -> AppResult<Json<Promotion>> {
    if let Some(discount) = input.discount_percentage {
        pricing::validate_discount(discount)?;
    }

    let promotion = PromotionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Promotion",
            id,
        }))?;
    Ok(Json(promotion))
}

/// DELETE /api/v1/promotions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = PromotionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Promotion",
            id,
        }))
    }
}

//! Promotion entity model and DTOs.

use cinex_core::types::{EntityId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A promotion row from the `promotions` table. A promotion may be
/// scoped to a cinema, a movie, both, or neither (platform-wide).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub is_active: bool,
    pub cinema_id: Option<EntityId>,
    pub movie_id: Option<EntityId>,
    pub created_at: Timestamp,
}

/// A promotion joined with the names of its scoping cinema/movie, for
/// the public listing.
#[derive(Debug, Clone, FromRow)]
pub struct PromotionListing {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub cinema_id: Option<EntityId>,
    pub cinema_name: Option<String>,
    pub movie_id: Option<EntityId>,
    pub movie_title: Option<String>,
}

/// DTO for creating a new promotion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromotion {
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub cinema_id: Option<EntityId>,
    pub movie_id: Option<EntityId>,
}

fn default_is_active() -> bool {
    true
}

/// DTO for updating an existing promotion. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromotion {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_active: Option<bool>,
}

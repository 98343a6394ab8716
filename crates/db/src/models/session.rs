//! Session entity model, DTOs, and joined listing rows.

use cinex_core::types::{EntityId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// Capacity is not a column: every session seats exactly
/// [`cinex_core::ledger::SESSION_CAPACITY`] people.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: EntityId,
    pub cinema_id: EntityId,
    pub movie_id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSession {
    pub cinema_id: EntityId,
    pub movie_id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
}

/// DTO for updating an existing session. Capacity is immutable and the
/// cinema/movie references never move; only schedule, room, and price
/// change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSession {
    pub date_time: Option<Timestamp>,
    pub room_type: Option<String>,
    pub price: Option<Decimal>,
}

/// Filters accepted by the public session listing. `date` narrows to
/// that calendar day; when absent only upcoming sessions are returned.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFilter {
    pub cinema_id: Option<EntityId>,
    pub movie_id: Option<EntityId>,
    pub date: Option<Timestamp>,
    pub room_type: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// A session joined with its cinema and movie, flattened for the
/// listing queries. Handlers reshape this into nested JSON.
#[derive(Debug, Clone, FromRow)]
pub struct SessionListing {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub cinema_id: EntityId,
    pub cinema_name: String,
    pub cinema_address: String,
    pub cinema_city: String,
    pub movie_id: EntityId,
    pub movie_title: String,
    pub movie_genre: String,
    pub movie_duration: i32,
    pub movie_rating: String,
    pub movie_image_url: Option<String>,
}

//! Purchase entity model and DTOs.
//!
//! Purchases are immutable once created: there is no update or cancel
//! path, so the only DTOs are the creation input and the joined detail
//! row.

use cinex_core::types::{EntityId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A purchase row from the `purchases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: EntityId,
    pub session_id: EntityId,
    pub user_email: String,
    pub user_cpf: Option<String>,
    pub quantity: i32,
    pub ticket_type_id: Option<EntityId>,
    pub total_price: Decimal,
    pub created_at: Timestamp,
}

/// Input to the purchase authorization path. Quantity bounds and email
/// shape are validated upstream by the HTTP layer.
#[derive(Debug, Clone)]
pub struct CreatePurchase {
    pub session_id: EntityId,
    pub user_email: String,
    pub user_cpf: Option<String>,
    pub quantity: i32,
    pub ticket_type_id: Option<EntityId>,
}

/// A purchase joined with its session, movie, cinema, and optional
/// ticket type, flattened for the detail query.
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseDetail {
    pub id: EntityId,
    pub user_email: String,
    pub user_cpf: Option<String>,
    pub quantity: i32,
    pub total_price: Decimal,
    pub created_at: Timestamp,
    pub session_id: EntityId,
    pub session_date_time: Timestamp,
    pub session_room_type: String,
    pub session_price: Decimal,
    pub movie_id: EntityId,
    pub movie_title: String,
    pub movie_duration: i32,
    pub cinema_id: EntityId,
    pub cinema_name: String,
    pub cinema_address: String,
    pub ticket_type_name: Option<String>,
    pub ticket_type_discount: Option<Decimal>,
}

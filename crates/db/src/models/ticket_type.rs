//! Ticket type entity model and DTOs.

use cinex_core::types::{EntityId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A ticket type row from the `ticket_types` table.
///
/// `requires_proof` marks categories (student, senior) whose discount
/// must be backed by documentation at the box office.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub requires_proof: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new ticket type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketType {
    pub name: String,
    pub description: String,
    pub discount_percentage: Decimal,
    pub requires_proof: bool,
}

/// DTO for updating an existing ticket type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub requires_proof: Option<bool>,
}

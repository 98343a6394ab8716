//! Cinema entity model and DTOs.

use cinex_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cinema row from the `cinemas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cinema {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
}

/// A cinema row extended with the great-circle distance (km) from a
/// query point, produced by the proximity search.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CinemaWithDistance {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance: f64,
}

/// DTO for creating a new cinema.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCinema {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// DTO for updating an existing cinema. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCinema {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

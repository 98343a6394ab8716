//! Movie entity model and DTOs.

use cinex_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table. `duration` is in minutes.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Filters accepted by the public movie listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

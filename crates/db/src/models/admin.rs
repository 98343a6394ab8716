//! Admin entity model and DTOs.

use cinex_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An admin row from the `admins` table. Never serialized directly;
/// handlers return [`AdminResponse`] so the password hash stays
/// server-side.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe projection of an admin for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            created_at: admin.created_at,
        }
    }
}

/// DTO for creating a new admin. The password arrives pre-hashed; the
/// api crate owns hashing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

//! Repository for the `ticket_types` table.

use cinex_core::types::EntityId;
use sqlx::PgPool;

use crate::models::ticket_type::{CreateTicketType, TicketType, UpdateTicketType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, discount_percentage, requires_proof, created_at";

/// Provides CRUD operations for ticket types.
pub struct TicketTypeRepo;

impl TicketTypeRepo {
    /// Insert a new ticket type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTicketType,
    ) -> Result<TicketType, sqlx::Error> {
        let query = format!(
            "INSERT INTO ticket_types (name, description, discount_percentage, requires_proof)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.discount_percentage)
            .bind(input.requires_proof)
            .fetch_one(pool)
            .await
    }

    /// Find a ticket type by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<TicketType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_types WHERE id = $1");
        sqlx::query_as::<_, TicketType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all ticket types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_types ORDER BY name ASC");
        sqlx::query_as::<_, TicketType>(&query).fetch_all(pool).await
    }

    /// Update a ticket type. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateTicketType,
    ) -> Result<Option<TicketType>, sqlx::Error> {
        let query = format!(
            "UPDATE ticket_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                discount_percentage = COALESCE($4, discount_percentage),
                requires_proof = COALESCE($5, requires_proof)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.discount_percentage)
            .bind(input.requires_proof)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ticket type. Returns `true` if a row was removed.
    /// Fails with a foreign-key violation when purchases reference it.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ticket_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `promotions` table.

use cinex_core::types::EntityId;
use sqlx::PgPool;

use crate::models::promotion::{CreatePromotion, Promotion, PromotionListing, UpdatePromotion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, discount_percentage, start_date, end_date, \
                       is_active, cinema_id, movie_id, created_at";

/// Provides CRUD and the active-window listing for promotions.
pub struct PromotionRepo;

impl PromotionRepo {
    /// Insert a new promotion, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePromotion) -> Result<Promotion, sqlx::Error> {
        let query = format!(
            "INSERT INTO promotions
                (name, description, discount_percentage, start_date, end_date,
                 is_active, cinema_id, movie_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.discount_percentage)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .bind(input.cinema_id)
            .bind(input.movie_id)
            .fetch_one(pool)
            .await
    }

    /// List promotions that are active and inside their date window
    /// right now, optionally scoped to a cinema and/or movie, joined
    /// with the scoping names for display.
    pub async fn list_active(
        pool: &PgPool,
        cinema_id: Option<EntityId>,
        movie_id: Option<EntityId>,
    ) -> Result<Vec<PromotionListing>, sqlx::Error> {
        let query = "SELECT p.id, p.name, p.description, p.discount_percentage,
                            p.start_date, p.end_date,
                            p.cinema_id, c.name AS cinema_name,
                            p.movie_id, m.title AS movie_title
                     FROM promotions p
                     LEFT JOIN cinemas c ON c.id = p.cinema_id
                     LEFT JOIN movies m ON m.id = p.movie_id
                     WHERE p.is_active
                       AND p.start_date <= NOW()
                       AND p.end_date >= NOW()
                       AND ($1::uuid IS NULL OR p.cinema_id = $1)
                       AND ($2::uuid IS NULL OR p.movie_id = $2)
                     ORDER BY p.start_date ASC";
        sqlx::query_as::<_, PromotionListing>(query)
            .bind(cinema_id)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a promotion. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdatePromotion,
    ) -> Result<Option<Promotion>, sqlx::Error> {
        let query = format!(
            "UPDATE promotions SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                discount_percentage = COALESCE($4, discount_percentage),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Promotion>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.discount_percentage)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a promotion. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

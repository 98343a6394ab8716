//! Repository for the `cinemas` table.

use cinex_core::types::EntityId;
use sqlx::PgPool;

use crate::models::cinema::{Cinema, CinemaWithDistance, CreateCinema, UpdateCinema};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, city, state, latitude, longitude, created_at";

/// Haversine great-circle distance in km between the bind-parameter
/// point ($1 latitude, $2 longitude) and a cinema row. `LEAST(1, ..)`
/// clamps rounding noise before `acos`.
const DISTANCE_EXPR: &str = "(6371 * acos(LEAST(1.0, \
    cos(radians($1)) * cos(radians(latitude)) * \
    cos(radians(longitude) - radians($2)) + \
    sin(radians($1)) * sin(radians(latitude)))))";

/// Provides CRUD and proximity search for cinemas.
pub struct CinemaRepo;

impl CinemaRepo {
    /// Insert a new cinema, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCinema) -> Result<Cinema, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinemas (name, address, city, state, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(pool)
            .await
    }

    /// Find a cinema by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Cinema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinemas WHERE id = $1");
        sqlx::query_as::<_, Cinema>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cinemas, optionally narrowed by city (substring,
    /// case-insensitive) and state (exact, case-insensitive).
    pub async fn list(
        pool: &PgPool,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Vec<Cinema>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cinemas
             WHERE ($1::text IS NULL OR city ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR state ILIKE $2)
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(city)
            .bind(state)
            .fetch_all(pool)
            .await
    }

    /// List cinemas within `radius_km` of a point, nearest first, each
    /// row carrying its computed distance. Cinemas without coordinates
    /// are excluded.
    pub async fn list_nearby(
        pool: &PgPool,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<CinemaWithDistance>, sqlx::Error> {
        let query = format!(
            "SELECT id, name, address, city, state, latitude, longitude,
                    {DISTANCE_EXPR} AS distance
             FROM cinemas
             WHERE latitude IS NOT NULL AND longitude IS NOT NULL
               AND {DISTANCE_EXPR} <= $3
             ORDER BY distance ASC"
        );
        sqlx::query_as::<_, CinemaWithDistance>(&query)
            .bind(latitude)
            .bind(longitude)
            .bind(radius_km)
            .fetch_all(pool)
            .await
    }

    /// Update a cinema. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateCinema,
    ) -> Result<Option<Cinema>, sqlx::Error> {
        let query = format!(
            "UPDATE cinemas SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cinema. Returns `true` if a row was removed. Fails with
    /// a foreign-key violation when any of its sessions has purchases.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cinemas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

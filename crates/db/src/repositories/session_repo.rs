//! Repository for the `sessions` table.

use cinex_core::types::EntityId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session, SessionFilter, SessionListing, UpdateSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cinema_id, movie_id, date_time, room_type, price, created_at";

/// Joined column list for listing queries (session + cinema + movie).
const LISTING_COLUMNS: &str = "s.id, s.date_time, s.room_type, s.price, \
    c.id AS cinema_id, c.name AS cinema_name, c.address AS cinema_address, c.city AS cinema_city, \
    m.id AS movie_id, m.title AS movie_title, m.genre AS movie_genre, \
    m.duration AS movie_duration, m.rating AS movie_rating, m.image_url AS movie_image_url";

/// Provides CRUD and filtered listing for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (cinema_id, movie_id, date_time, room_type, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.cinema_id)
            .bind(input.movie_id)
            .bind(input.date_time)
            .bind(&input.room_type)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a session by id.
    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions matching the filter, joined with cinema and
    /// movie, ordered by start time.
    ///
    /// When `date` is given the window is that calendar day; otherwise
    /// only upcoming sessions are returned.
    pub async fn list(
        pool: &PgPool,
        filter: &SessionFilter,
    ) -> Result<Vec<SessionListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM sessions s
             JOIN cinemas c ON c.id = s.cinema_id
             JOIN movies m ON m.id = s.movie_id
             WHERE ($1::uuid IS NULL OR s.cinema_id = $1)
               AND ($2::uuid IS NULL OR s.movie_id = $2)
               AND (CASE WHEN $3::timestamptz IS NULL
                    THEN s.date_time >= NOW()
                    ELSE s.date_time >= date_trunc('day', $3)
                         AND s.date_time < date_trunc('day', $3) + INTERVAL '1 day'
                    END)
               AND ($4::text IS NULL OR s.room_type ILIKE $4)
               AND ($5::numeric IS NULL OR s.price >= $5)
               AND ($6::numeric IS NULL OR s.price <= $6)
             ORDER BY s.date_time ASC"
        );
        sqlx::query_as::<_, SessionListing>(&query)
            .bind(filter.cinema_id)
            .bind(filter.movie_id)
            .bind(filter.date)
            .bind(&filter.room_type)
            .bind(filter.min_price)
            .bind(filter.max_price)
            .fetch_all(pool)
            .await
    }

    /// Upcoming sessions of one cinema, joined with their movie,
    /// soonest first. Feeds the cinema detail endpoint.
    pub async fn list_upcoming_by_cinema(
        pool: &PgPool,
        cinema_id: EntityId,
    ) -> Result<Vec<SessionListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM sessions s
             JOIN cinemas c ON c.id = s.cinema_id
             JOIN movies m ON m.id = s.movie_id
             WHERE s.cinema_id = $1 AND s.date_time >= NOW()
             ORDER BY s.date_time ASC"
        );
        sqlx::query_as::<_, SessionListing>(&query)
            .bind(cinema_id)
            .fetch_all(pool)
            .await
    }

    /// Upcoming sessions of one movie, joined with their cinema,
    /// soonest first. Feeds the movie detail endpoint.
    pub async fn list_upcoming_by_movie(
        pool: &PgPool,
        movie_id: EntityId,
    ) -> Result<Vec<SessionListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM sessions s
             JOIN cinemas c ON c.id = s.cinema_id
             JOIN movies m ON m.id = s.movie_id
             WHERE s.movie_id = $1 AND s.date_time >= NOW()
             ORDER BY s.date_time ASC"
        );
        sqlx::query_as::<_, SessionListing>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a session's schedule, room, or price. Only non-`None`
    /// fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateSession,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                date_time = COALESCE($2, date_time),
                room_type = COALESCE($3, room_type),
                price = COALESCE($4, price)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(input.date_time)
            .bind(&input.room_type)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session. Returns `true` if a row was removed. Fails
    /// with a foreign-key violation when it has purchases.
    pub async fn delete(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `purchases` table and the purchase
//! authorization path.
//!
//! Authorization is the one write path with a hard invariant: the sum
//! of purchased quantities for a session must never exceed the fixed
//! capacity. The check-then-insert runs inside a single transaction
//! that locks the session row with `SELECT ... FOR UPDATE`, so
//! concurrent authorizations against the same session serialize and
//! cannot jointly oversell. Sessions for different rows proceed in
//! parallel as usual.

use cinex_core::error::CoreError;
use cinex_core::types::EntityId;
use cinex_core::{ledger, pricing};
use sqlx::PgPool;

use crate::models::purchase::{CreatePurchase, Purchase, PurchaseDetail};
use crate::models::session::Session;
use crate::models::ticket_type::TicketType;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, session_id, user_email, user_cpf, quantity, ticket_type_id, total_price, created_at";

/// Outcome of a failed authorization: either a terminal domain
/// rejection or an infrastructure error.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizeError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides the authorization write path and purchase reads.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Authorize and persist a purchase.
    ///
    /// Resolves the session (locking its row for the duration of the
    /// transaction) and the optional ticket type, recomputes the seat
    /// ledger, checks capacity, prices the purchase, and inserts the
    /// record. Any failure aborts the transaction; nothing is
    /// persisted on rejection.
    pub async fn authorize(
        pool: &PgPool,
        input: &CreatePurchase,
    ) -> Result<(Purchase, Option<TicketType>), AuthorizeError> {
        let mut tx = pool.begin().await?;

        // Lock the session row: all capacity checks for this session
        // queue behind this statement until commit/rollback.
        let session_query = "SELECT id, cinema_id, movie_id, date_time, room_type, price, \
                             created_at FROM sessions WHERE id = $1 FOR UPDATE";
        let session = sqlx::query_as::<_, Session>(session_query)
            .bind(input.session_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Session",
                id: input.session_id,
            })?;

        let ticket_type = match input.ticket_type_id {
            Some(ticket_type_id) => {
                let query = "SELECT id, name, description, discount_percentage, requires_proof, \
                             created_at FROM ticket_types WHERE id = $1";
                let ticket_type = sqlx::query_as::<_, TicketType>(query)
                    .bind(ticket_type_id)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or(CoreError::NotFound {
                        entity: "Ticket type",
                        id: ticket_type_id,
                    })?;
                Some(ticket_type)
            }
            None => None,
        };

        // On-demand aggregation; no running counter is maintained.
        let purchased: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0) FROM purchases WHERE session_id = $1",
        )
        .bind(input.session_id)
        .fetch_one(&mut *tx)
        .await?;

        ledger::check_capacity(purchased, i64::from(input.quantity))?;

        let unit_price = pricing::effective_unit_price(
            session.price,
            ticket_type.as_ref().map(|t| t.discount_percentage),
        );
        let total_price = pricing::total_price(unit_price, i64::from(input.quantity));

        let insert_query = format!(
            "INSERT INTO purchases
                (session_id, user_email, user_cpf, quantity, ticket_type_id, total_price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let purchase = sqlx::query_as::<_, Purchase>(&insert_query)
            .bind(input.session_id)
            .bind(&input.user_email)
            .bind(&input.user_cpf)
            .bind(input.quantity)
            .bind(input.ticket_type_id)
            .bind(total_price)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            purchase_id = %purchase.id,
            session_id = %purchase.session_id,
            quantity = purchase.quantity,
            total_price = %purchase.total_price,
            "purchase authorized"
        );

        Ok((purchase, ticket_type))
    }

    /// Total seats already purchased for a session.
    pub async fn seats_purchased(pool: &PgPool, session_id: EntityId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(SUM(quantity), 0) FROM purchases WHERE session_id = $1")
            .bind(session_id)
            .fetch_one(pool)
            .await
    }

    /// Find a purchase by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<Purchase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM purchases WHERE id = $1");
        sqlx::query_as::<_, Purchase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a purchase joined with its session, movie, cinema, and
    /// optional ticket type. Feeds the purchase detail endpoint.
    pub async fn find_detail(
        pool: &PgPool,
        id: EntityId,
    ) -> Result<Option<PurchaseDetail>, sqlx::Error> {
        let query = "SELECT p.id, p.user_email, p.user_cpf, p.quantity, p.total_price,
                            p.created_at,
                            s.id AS session_id, s.date_time AS session_date_time,
                            s.room_type AS session_room_type, s.price AS session_price,
                            m.id AS movie_id, m.title AS movie_title,
                            m.duration AS movie_duration,
                            c.id AS cinema_id, c.name AS cinema_name,
                            c.address AS cinema_address,
                            t.name AS ticket_type_name,
                            t.discount_percentage AS ticket_type_discount
                     FROM purchases p
                     JOIN sessions s ON s.id = p.session_id
                     JOIN movies m ON m.id = s.movie_id
                     JOIN cinemas c ON c.id = s.cinema_id
                     LEFT JOIN ticket_types t ON t.id = p.ticket_type_id
                     WHERE p.id = $1";
        sqlx::query_as::<_, PurchaseDetail>(query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

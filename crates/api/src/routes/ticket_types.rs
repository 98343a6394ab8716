//! Route definitions for the `/ticket-types` resource (admin only).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::ticket_types;
use crate::state::AppState;

/// Routes mounted at `/ticket-types`.
///
/// ```text
/// GET    /      list
/// POST   /      create
/// PUT    /{id}  update
/// DELETE /{id}  delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticket_types::list).post(ticket_types::create))
        .route(
            "/{id}",
            put(ticket_types::update).delete(ticket_types::delete),
        )
}

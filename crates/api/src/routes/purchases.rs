//! Route definitions for the `/purchases` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::purchases;
use crate::state::AppState;

/// Routes mounted at `/purchases`.
///
/// ```text
/// POST /      authorize a purchase (public)
/// GET  /{id}  purchase detail (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(purchases::create))
        .route("/{id}", get(purchases::get_by_id))
}

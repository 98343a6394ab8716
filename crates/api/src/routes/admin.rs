//! Route definitions for admin account management.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::admins;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /admins       list
/// POST   /admins       create
/// DELETE /admins/{id}  delete (self-delete rejected)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admins", get(admins::list).post(admins::create))
        .route("/admins/{id}", delete(admins::delete))
}

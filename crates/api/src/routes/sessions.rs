//! Route definitions for the `/sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /      list (public, supports cinema/movie/date filters)
/// POST   /      create (admin)
/// GET    /{id}  get with seat availability (public)
/// PUT    /{id}  update (admin)
/// DELETE /{id}  delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sessions::list).post(sessions::create))
        .route(
            "/{id}",
            get(sessions::get_by_id)
                .put(sessions::update)
                .delete(sessions::delete),
        )
}

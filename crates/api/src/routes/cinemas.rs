//! Route definitions for the `/cinemas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cinemas;
use crate::state::AppState;

/// Routes mounted at `/cinemas`.
///
/// ```text
/// GET    /      list (public, supports city/state and proximity search)
/// POST   /      create (admin)
/// GET    /{id}  get with upcoming sessions (public)
/// PUT    /{id}  update (admin)
/// DELETE /{id}  delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cinemas::list).post(cinemas::create))
        .route(
            "/{id}",
            get(cinemas::get_by_id)
                .put(cinemas::update)
                .delete(cinemas::delete),
        )
}

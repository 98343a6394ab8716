//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /      list (public, supports genre/title filters)
/// POST   /      create (admin)
/// GET    /{id}  get with upcoming sessions (public)
/// PUT    /{id}  update (admin)
/// DELETE /{id}  delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}

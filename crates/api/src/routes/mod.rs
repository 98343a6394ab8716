pub mod admin;
pub mod auth;
pub mod cinemas;
pub mod health;
pub mod movies;
pub mod promotions;
pub mod purchases;
pub mod sessions;
pub mod ticket_types;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/me                         current admin (requires auth)
///
/// /cinemas                         list (public), create (admin)
/// /cinemas/{id}                    get (public), update, delete (admin)
///
/// /movies                          list (public), create (admin)
/// /movies/{id}                     get (public), update, delete (admin)
///
/// /sessions                        list (public), create (admin)
/// /sessions/{id}                   get (public), update, delete (admin)
///
/// /ticket-types                    list, create (admin only)
/// /ticket-types/{id}               update, delete (admin only)
///
/// /promotions                      list active (public), create (admin)
/// /promotions/{id}                 update, delete (admin)
///
/// /purchases                       create (public)
/// /purchases/{id}                  get (public)
///
/// /admin/admins                    list, create (admin only)
/// /admin/admins/{id}               delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, current admin).
        .nest("/auth", auth::router())
        // Admin account management.
        .nest("/admin", admin::router())
        // Cinema catalog.
        .nest("/cinemas", cinemas::router())
        // Movie catalog.
        .nest("/movies", movies::router())
        // Session scheduling and availability.
        .nest("/sessions", sessions::router())
        // Ticket-type pricing categories.
        .nest("/ticket-types", ticket_types::router())
        // Promotional discounts.
        .nest("/promotions", promotions::router())
        // Seat purchases.
        .nest("/purchases", purchases::router())
}

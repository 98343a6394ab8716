//! Shared helpers for HTTP-level integration tests.
//!
//! Each test binary only uses a subset of these helpers, so dead-code
//! warnings are silenced for the module as a whole.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use cinex_api::auth::jwt::{generate_token, JwtConfig};
use cinex_api::auth::password::hash_password;
use cinex_api::config::ServerConfig;
use cinex_api::router::build_app_router;
use cinex_api::state::AppState;
use cinex_db::models::admin::{Admin, CreateAdmin};
use cinex_db::models::cinema::{Cinema, CreateCinema};
use cinex_db::models::movie::{CreateMovie, Movie};
use cinex_db::models::session::{CreateSession, Session};
use cinex_db::models::ticket_type::{CreateTicketType, TicketType};
use cinex_db::repositories::{AdminRepo, CinemaRepo, MovieRepo, SessionRepo, TicketTypeRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT
/// secret so tokens minted by helpers validate against the app.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            token_expiry_hours: 168,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Uses the same [`build_app_router`] as `main.rs` so tests exercise
/// the production middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Assert a response status and return the parsed JSON body.
pub async fn assert_status_json(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create an admin directly in the database and return the row plus the
/// plaintext password used.
pub async fn create_test_admin(pool: &PgPool, email: &str) -> (Admin, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateAdmin {
        name: "Test Admin".to_string(),
        email: email.to_string(),
        password_hash: hashed,
    };
    let admin = AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed");
    (admin, password.to_string())
}

/// Create an admin and mint a token for it, bypassing the login
/// endpoint. Signed with the same secret as [`test_config`].
pub async fn auth_token(pool: &PgPool) -> String {
    let (admin, _password) = create_test_admin(pool, "fixture-admin@cinema.com").await;
    generate_token(admin.id, &admin.name, &admin.email, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Insert a cinema fixture.
pub async fn seed_cinema(pool: &PgPool, name: &str) -> Cinema {
    let input = CreateCinema {
        name: name.to_string(),
        address: "100 Main Street".to_string(),
        city: "Springfield".to_string(),
        state: "SP".to_string(),
        latitude: Some(-23.5505),
        longitude: Some(-46.6333),
    };
    CinemaRepo::create(pool, &input)
        .await
        .expect("cinema creation should succeed")
}

/// Insert a movie fixture.
pub async fn seed_movie(pool: &PgPool, title: &str) -> Movie {
    let input = CreateMovie {
        title: title.to_string(),
        genre: "Drama".to_string(),
        duration: 120,
        rating: "PG-13".to_string(),
        description: Some("A movie used by the integration tests.".to_string()),
        image_url: None,
    };
    MovieRepo::create(pool, &input)
        .await
        .expect("movie creation should succeed")
}

/// Insert a session fixture one day in the future, priced at `price`.
pub async fn seed_session(
    pool: &PgPool,
    cinema: &Cinema,
    movie: &Movie,
    price: Decimal,
) -> Session {
    let input = CreateSession {
        cinema_id: cinema.id,
        movie_id: movie.id,
        date_time: chrono::Utc::now() + chrono::Duration::days(1),
        room_type: "standard".to_string(),
        price,
    };
    SessionRepo::create(pool, &input)
        .await
        .expect("session creation should succeed")
}

/// Insert a ticket-type fixture with the given discount percentage.
pub async fn seed_ticket_type(pool: &PgPool, name: &str, discount: Decimal) -> TicketType {
    let input = CreateTicketType {
        name: name.to_string(),
        description: "A discounted category used by the integration tests.".to_string(),
        discount_percentage: discount,
        requires_proof: false,
    };
    TicketTypeRepo::create(pool, &input)
        .await
        .expect("ticket type creation should succeed")
}

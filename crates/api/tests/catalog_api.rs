//! HTTP-level integration tests for the cinema and movie catalog:
//! CRUD, filters, proximity search, and delete restrictions.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status_json, auth_token, delete_auth, get, post_json, post_json_auth, put_json_auth,
    seed_cinema, seed_movie, seed_session,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Cinemas
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_cinema_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Grand Palace",
        "address": "200 Ocean Avenue",
        "city": "Santos",
        "state": "SP"
    });
    let response = post_json(app, "/api/v1/cinemas", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_cinema_returns_201(pool: PgPool) {
    let token = auth_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Grand Palace",
        "address": "200 Ocean Avenue",
        "city": "Santos",
        "state": "SP",
        "latitude": -23.9608,
        "longitude": -46.3336
    });
    let response = post_json_auth(app, "/api/v1/cinemas", body, &token).await;

    let json = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(json["name"], "Grand Palace");
    assert_eq!(json["city"], "Santos");
    assert!(json["id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_cinema_rejects_bad_state_code(pool: PgPool) {
    let token = auth_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Grand Palace",
        "address": "200 Ocean Avenue",
        "city": "Santos",
        "state": "SPX"
    });
    let response = post_json_auth(app, "/api/v1/cinemas", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_cinemas_filters_by_city(pool: PgPool) {
    seed_cinema(&pool, "Downtown").await; // city Springfield
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/cinemas?city=spring").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/cinemas?city=atlantis").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn nearby_search_orders_by_distance_and_respects_radius(pool: PgPool) {
    let token = auth_token(&pool).await;
    let app = common::build_test_app(pool);

    // Two cinemas a few km apart, one across the country.
    for (name, lat, lng) in [
        ("Near", -23.5510, -46.6340),
        ("Nearish", -23.5800, -46.6800),
        ("Far", -3.7319, -38.5267),
    ] {
        let body = serde_json::json!({
            "name": name,
            "address": "1 Test Square",
            "city": "Testville",
            "state": "SP",
            "latitude": lat,
            "longitude": lng
        });
        let response = post_json_auth(app.clone(), "/api/v1/cinemas", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        app,
        "/api/v1/cinemas?latitude=-23.5505&longitude=-46.6333&radius=20",
    )
    .await;
    let json = assert_status_json(response, StatusCode::OK).await;
    let results = json.as_array().unwrap();

    assert_eq!(results.len(), 2, "the distant cinema is outside the radius");
    assert_eq!(results[0]["name"], "Near");
    assert_eq!(results[1]["name"], "Nearish");
    let d0 = results[0]["distance"].as_f64().unwrap();
    let d1 = results[1]["distance"].as_f64().unwrap();
    assert!(d0 < d1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cinema_detail_includes_upcoming_sessions(pool: PgPool) {
    let cinema = seed_cinema(&pool, "Downtown").await;
    let movie = seed_movie(&pool, "The Long Night").await;
    seed_session(&pool, &cinema, &movie, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/cinemas/{}", cinema.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;

    assert_eq!(json["name"], "Downtown");
    let sessions = json["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["movie"]["title"], "The Long Night");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_cinema_applies_partial_changes(pool: PgPool) {
    let token = auth_token(&pool).await;
    let cinema = seed_cinema(&pool, "Downtown").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Downtown Deluxe" });
    let response = put_json_auth(app, &format!("/api/v1/cinemas/{}", cinema.id), body, &token).await;

    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["name"], "Downtown Deluxe");
    // Untouched fields survive.
    assert_eq!(json["city"], "Springfield");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_cinema_without_purchases_cascades_sessions(pool: PgPool) {
    let token = auth_token(&pool).await;
    let cinema = seed_cinema(&pool, "Downtown").await;
    let movie = seed_movie(&pool, "The Long Night").await;
    let session = seed_session(&pool, &cinema, &movie, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let response = delete_auth(app.clone(), &format!("/api/v1/cinemas/{}", cinema.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/sessions/{}", session.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_cinema_with_purchases_returns_409(pool: PgPool) {
    let token = auth_token(&pool).await;
    let cinema = seed_cinema(&pool, "Downtown").await;
    let movie = seed_movie(&pool, "The Long Night").await;
    let session = seed_session(&pool, &cinema, &movie, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "sessionId": session.id,
        "userEmail": "buyer@example.com",
        "quantity": 2
    });
    let response = post_json(app.clone(), "/api/v1/purchases", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(app, &format!("/api/v1/cinemas/{}", cinema.id), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_returns_201(pool: PgPool) {
    let token = auth_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "title": "Blue Horizon",
        "genre": "Sci-Fi",
        "duration": 142,
        "rating": "PG-13"
    });
    let response = post_json_auth(app, "/api/v1/movies", body, &token).await;

    let json = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(json["title"], "Blue Horizon");
    assert_eq!(json["duration"], 142);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_movie_rejects_zero_duration(pool: PgPool) {
    let token = auth_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "title": "Blue Horizon",
        "genre": "Sci-Fi",
        "duration": 0,
        "rating": "PG-13"
    });
    let response = post_json_auth(app, "/api/v1/movies", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_movies_filters_by_genre(pool: PgPool) {
    seed_movie(&pool, "The Long Night").await; // genre Drama
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/movies?genre=drama").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/movies?genre=western").await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn movie_detail_includes_upcoming_sessions_with_cinema(pool: PgPool) {
    let cinema = seed_cinema(&pool, "Downtown").await;
    let movie = seed_movie(&pool, "The Long Night").await;
    seed_session(&pool, &cinema, &movie, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/movies/{}", movie.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;

    assert_eq!(json["title"], "The Long Night");
    let sessions = json["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["cinema"]["name"], "Downtown");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/movies/{}", Uuid::new_v4())).await;
    let json = assert_status_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["message"], "Movie not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_movie_with_purchases_returns_409(pool: PgPool) {
    let token = auth_token(&pool).await;
    let cinema = seed_cinema(&pool, "Downtown").await;
    let movie = seed_movie(&pool, "The Long Night").await;
    let session = seed_session(&pool, &cinema, &movie, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "sessionId": session.id,
        "userEmail": "buyer@example.com",
        "quantity": 1
    });
    let response = post_json(app.clone(), "/api/v1/purchases", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = delete_auth(app, &format!("/api/v1/movies/{}", movie.id), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

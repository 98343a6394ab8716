//! HTTP-level integration tests for the purchase authorization path.
//!
//! The key properties exercised here: the 50-seat cap holds under
//! concurrent traffic, rejected purchases persist nothing, and totals
//! come out exact with and without ticket-type discounts.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status_json, get, post_json, seed_cinema, seed_movie, seed_session, seed_ticket_type,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use cinex_db::models::session::Session;
use cinex_db::repositories::PurchaseRepo;

/// Seed a cinema, a movie, and a session priced at `price`.
async fn seed_session_fixture(pool: &PgPool, price: Decimal) -> Session {
    let cinema = seed_cinema(pool, "Downtown").await;
    let movie = seed_movie(pool, "The Long Night").await;
    seed_session(pool, &cinema, &movie, price).await
}

fn purchase_body(session_id: Uuid, quantity: i32) -> serde_json::Value {
    serde_json::json!({
        "sessionId": session_id,
        "userEmail": "buyer@example.com",
        "quantity": quantity
    })
}

/// Parse a JSON money field (serialized as a decimal string).
fn money(value: &serde_json::Value) -> Decimal {
    value
        .as_str()
        .expect("money fields are decimal strings")
        .parse()
        .expect("money fields parse as Decimal")
}

// ---------------------------------------------------------------------------
// Happy path and pricing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_without_ticket_type_totals_price_times_quantity(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(3000, 2)).await; // 30.00
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/purchases", purchase_body(session.id, 3)).await;
    let json = assert_status_json(response, StatusCode::CREATED).await;

    assert_eq!(json["sessionId"], session.id.to_string());
    assert_eq!(json["userEmail"], "buyer@example.com");
    assert_eq!(json["quantity"], 3);
    assert_eq!(money(&json["totalPrice"]), Decimal::new(9000, 2)); // 90.00
    assert!(json.get("ticketType").is_none());
    assert!(json["purchaseDate"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn half_price_ticket_type_halves_the_total_exactly(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2490, 2)).await; // 24.90
    let ticket_type = seed_ticket_type(&pool, "Student", Decimal::new(50, 0)).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "sessionId": session.id,
        "userEmail": "student@example.com",
        "quantity": 2,
        "ticketTypeId": ticket_type.id
    });
    let response = post_json(app, "/api/v1/purchases", body).await;
    let json = assert_status_json(response, StatusCode::CREATED).await;

    // 24.90 * 50% * 2 = 24.90, no float drift.
    assert_eq!(money(&json["totalPrice"]), Decimal::new(2490, 2));
    assert_eq!(json["ticketType"]["name"], "Student");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_detail_nests_session_movie_and_cinema(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(1800, 2)).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/purchases",
        purchase_body(session.id, 1),
    )
    .await;
    let created = assert_status_json(response, StatusCode::CREATED).await;
    let purchase_id = created["id"].as_str().unwrap();

    let response = get(app, &format!("/api/v1/purchases/{purchase_id}")).await;
    let json = assert_status_json(response, StatusCode::OK).await;

    assert_eq!(json["id"], *purchase_id);
    assert_eq!(json["session"]["id"], session.id.to_string());
    assert_eq!(json["session"]["movie"]["title"], "The Long Night");
    assert_eq!(json["session"]["cinema"]["name"], "Downtown");
    assert_eq!(money(&json["totalPrice"]), Decimal::new(1800, 2));
}

// ---------------------------------------------------------------------------
// Rejections persist nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_session_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/purchases", purchase_body(Uuid::new_v4(), 2)).await;
    let json = assert_status_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["message"], "Session not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_ticket_type_returns_404_and_persists_nothing(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "sessionId": session.id,
        "userEmail": "buyer@example.com",
        "quantity": 2,
        "ticketTypeId": Uuid::new_v4()
    });
    let response = post_json(app, "/api/v1/purchases", body).await;
    let json = assert_status_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["message"], "Ticket type not found");

    let purchased = PurchaseRepo::seats_purchased(&pool, session.id).await.unwrap();
    assert_eq!(purchased, 0, "a rejected purchase must not reserve seats");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quantity_out_of_bounds_returns_400(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/purchases",
        purchase_body(session.id, 0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/api/v1/purchases", purchase_body(session.id, 11)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Capacity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn over_capacity_reports_exact_remaining_seats(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    // Fill 48 of the 50 seats.
    for _ in 0..6 {
        let response = post_json(
            app.clone(),
            "/api/v1/purchases",
            purchase_body(session.id, 8),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = post_json(app, "/api/v1/purchases", purchase_body(session.id, 5)).await;
    let json = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(
        json["message"],
        "Not enough available seats. Only 2 left."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sold_out_session_reports_zero_left(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/purchases",
            purchase_body(session.id, 10),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = post_json(
        app.clone(),
        "/api/v1/purchases",
        purchase_body(session.id, 1),
    )
    .await;
    let json = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(
        json["message"],
        "Not enough available seats. Only 0 left."
    );

    // The session detail agrees.
    let response = get(app, &format!("/api/v1/sessions/{}", session.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["availableSeats"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn available_seats_tracks_purchases(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), &format!("/api/v1/sessions/{}", session.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["availableSeats"], 50);

    let response = post_json(
        app.clone(),
        "/api/v1/purchases",
        purchase_body(session.id, 7),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app.clone(), &format!("/api/v1/sessions/{}", session.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["availableSeats"], 43);

    // Reads have no side effects: a second read is identical.
    let response = get(app, &format!("/api/v1/sessions/{}", session.id)).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["availableSeats"], 43);
}

/// Concurrent purchases against one session must serialize on the
/// session row: 12 buyers racing for 5 seats each (60 > 50) can never
/// jointly oversell.
#[sqlx::test(migrations = "../db/migrations")]
async fn concurrent_purchases_never_oversell(pool: PgPool) {
    let session = seed_session_fixture(&pool, Decimal::new(2000, 2)).await;
    let app = common::build_test_app(pool.clone());

    let mut handles = Vec::new();
    for i in 0..12 {
        let app = app.clone();
        let session_id = session.id;
        handles.push(tokio::spawn(async move {
            let body = serde_json::json!({
                "sessionId": session_id,
                "userEmail": format!("buyer{i}@example.com"),
                "quantity": 5
            });
            post_json(app, "/api/v1/purchases", body).await.status()
        }));
    }

    let mut created = 0i64;
    let mut rejected = 0i64;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status under contention: {other}"),
        }
    }

    assert_eq!(created, 10, "exactly 50 / 5 purchases can succeed");
    assert_eq!(rejected, 2);

    let purchased = PurchaseRepo::seats_purchased(&pool, session.id).await.unwrap();
    assert_eq!(purchased, 50);
}

//! Handlers for the `/sessions` resource.
//!
//! Public read paths (filtered listing, detail with `availableSeats`)
//! and admin-gated mutations. The response shapes defined here are
//! also reused by the cinema and movie detail endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::ledger;
use cinex_core::types::{EntityId, Timestamp};
use cinex_db::models::session::{CreateSession, SessionFilter, SessionListing, UpdateSession};
use cinex_db::repositories::{CinemaRepo, MovieRepo, PurchaseRepo, SessionRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Cinema fields embedded in session responses.
#[derive(Debug, Serialize)]
pub struct CinemaSummary {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub city: String,
}

/// Movie fields embedded in session responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: EntityId,
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: String,
    pub image_url: Option<String>,
}

/// A session with both its cinema and its movie (public listing).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub cinema: CinemaSummary,
    pub movie: MovieSummary,
}

/// A session with its movie only (embedded in cinema detail).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWithMovie {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub movie: MovieSummary,
}

/// A session with its cinema only (embedded in movie detail).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWithCinema {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub cinema: CinemaSummary,
}

/// Full session detail including live seat availability.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailResponse {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub room_type: String,
    pub price: Decimal,
    pub cinema: CinemaSummary,
    pub movie: MovieSummary,
    pub available_seats: i64,
}

impl From<SessionListing> for SessionResponse {
    fn from(row: SessionListing) -> Self {
        Self {
            id: row.id,
            date_time: row.date_time,
            room_type: row.room_type,
            price: row.price,
            cinema: CinemaSummary {
                id: row.cinema_id,
                name: row.cinema_name,
                address: row.cinema_address,
                city: row.cinema_city,
            },
            movie: MovieSummary {
                id: row.movie_id,
                title: row.movie_title,
                genre: row.movie_genre,
                duration: row.movie_duration,
                rating: row.movie_rating,
                image_url: row.movie_image_url,
            },
        }
    }
}

impl From<SessionListing> for SessionWithMovie {
    fn from(row: SessionListing) -> Self {
        let full = SessionResponse::from(row);
        Self {
            id: full.id,
            date_time: full.date_time,
            room_type: full.room_type,
            price: full.price,
            movie: full.movie,
        }
    }
}

impl From<SessionListing> for SessionWithCinema {
    fn from(row: SessionListing) -> Self {
        let full = SessionResponse::from(row);
        Self {
            id: full.id,
            date_time: full.date_time,
            room_type: full.room_type,
            price: full.price,
            cinema: full.cinema,
        }
    }
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/sessions
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<SessionFilter>,
) -> AppResult<Json<Vec<SessionResponse>>> {
    let sessions = SessionRepo::list(&state.pool, &filter).await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/sessions/{id}
///
/// `availableSeats` is recomputed from the purchase ledger on every
/// call; there is no cache between this read and the purchase path.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<SessionDetailResponse>> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;

    let cinema = CinemaRepo::find_by_id(&state.pool, session.cinema_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id: session.cinema_id,
        }))?;

    let movie = MovieRepo::find_by_id(&state.pool, session.movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: session.movie_id,
        }))?;

    let purchased = PurchaseRepo::seats_purchased(&state.pool, id).await?;

    Ok(Json(SessionDetailResponse {
        id: session.id,
        date_time: session.date_time,
        room_type: session.room_type,
        price: session.price,
        cinema: CinemaSummary {
            id: cinema.id,
            name: cinema.name,
            address: cinema.address,
            city: cinema.city,
        },
        movie: MovieSummary {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            duration: movie.duration,
            rating: movie.rating,
            image_url: movie.image_url,
        },
        available_seats: ledger::available_seats(purchased),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions
///
/// Resolves the cinema and movie up front so a dangling reference is a
/// 404 rather than a constraint violation.
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateSession>,
) -> AppResult<(StatusCode, Json<cinex_db::models::session::Session>)> {
    if input.price <= Decimal::ZERO {
        return Err(AppError::BadRequest("price must be positive".into()));
    }

    if CinemaRepo::find_by_id(&state.pool, input.cinema_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id: input.cinema_id,
        }));
    }

    if MovieRepo::find_by_id(&state.pool, input.movie_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }));
    }

    let session = SessionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// PUT /api/v1/sessions/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateSession>,
) -> AppResult<Json<cinex_db::models::session::Session>> {
    if let Some(price) = input.price {
        if price <= Decimal::ZERO {
            return Err(AppError::BadRequest("price must be positive".into()));
        }
    }

    let session = SessionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/{id}
///
/// Restricted when the session has purchases (surfaces as 409).
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = SessionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))
    }
}

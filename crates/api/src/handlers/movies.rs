//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::types::EntityId;
use cinex_db::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};
use cinex_db::repositories::{MovieRepo, SessionRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::sessions::SessionWithCinema;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// A movie with its upcoming sessions, for the detail endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailResponse {
    #[serde(flatten)]
    pub movie: Movie,
    pub sessions: Vec<SessionWithCinema>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool, &filter).await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<MovieDetailResponse>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    let sessions = SessionRepo::list_upcoming_by_movie(&state.pool, id).await?;

    Ok(Json(MovieDetailResponse {
        movie,
        sessions: sessions.into_iter().map(Into::into).collect(),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// Request body for `POST /movies`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub genre: String,
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(length(min = 1))]
    pub rating: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let create_dto = CreateMovie {
        title: input.title,
        genre: input.genre,
        duration: input.duration,
        rating: input.rating,
        description: input.description,
        image_url: input.image_url,
    };

    let movie = MovieRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    if let Some(duration) = input.duration {
        if duration < 1 {
            return Err(AppError::BadRequest("duration must be positive".into()));
        }
    }

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
///
/// Sessions cascade, but a session with purchases blocks the whole
/// delete (surfaces as 409).
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}

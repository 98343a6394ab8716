//! Handlers for the `/cinemas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinex_core::error::CoreError;
use cinex_core::types::EntityId;
use cinex_db::models::cinema::{Cinema, CreateCinema, UpdateCinema};
use cinex_db::repositories::{CinemaRepo, SessionRepo};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::sessions::SessionWithMovie;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Query parameters for the public cinema listing. Supplying both
/// coordinates switches to proximity search.
#[derive(Debug, Deserialize)]
pub struct CinemaListQuery {
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Search radius in km for proximity search (default: 10).
    pub radius: Option<f64>,
}

/// Default proximity-search radius in km.
const DEFAULT_RADIUS_KM: f64 = 10.0;

/// A cinema with its upcoming sessions, for the detail endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CinemaDetailResponse {
    #[serde(flatten)]
    pub cinema: Cinema,
    pub sessions: Vec<SessionWithMovie>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/cinemas
///
/// With `latitude` and `longitude`: haversine proximity search within
/// `radius` km, nearest first, each row carrying `distance`. Otherwise
/// an optionally city/state-filtered listing.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CinemaListQuery>,
) -> AppResult<Json<Value>> {
    if let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) {
        let radius = query.radius.unwrap_or(DEFAULT_RADIUS_KM);
        let cinemas = CinemaRepo::list_nearby(&state.pool, latitude, longitude, radius).await?;
        return Ok(Json(json!(cinemas)));
    }

    let cinemas =
        CinemaRepo::list(&state.pool, query.city.as_deref(), query.state.as_deref()).await?;
    Ok(Json(json!(cinemas)))
}

/// GET /api/v1/cinemas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<CinemaDetailResponse>> {
    let cinema = CinemaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id,
        }))?;

    let sessions = SessionRepo::list_upcoming_by_cinema(&state.pool, id).await?;

    Ok(Json(CinemaDetailResponse {
        cinema,
        sessions: sessions.into_iter().map(Into::into).collect(),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// Request body for `POST /cinemas`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCinemaRequest {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(length(min = 5))]
    pub address: String,
    #[validate(length(min = 3))]
    pub city: String,
    #[validate(length(equal = 2))]
    pub state: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// POST /api/v1/cinemas
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateCinemaRequest>,
) -> AppResult<(StatusCode, Json<Cinema>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let create_dto = CreateCinema {
        name: input.name,
        address: input.address,
        city: input.city,
        state: input.state,
        latitude: input.latitude,
        longitude: input.longitude,
    };

    let cinema = CinemaRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(cinema)))
}

/// PUT /api/v1/cinemas/{id}
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateCinema>,
) -> AppResult<Json<Cinema>> {
    if let Some(state_code) = &input.state {
        if state_code.len() != 2 {
            return Err(AppError::BadRequest(
                "state must be a 2-letter code".into(),
            ));
        }
    }

    let cinema = CinemaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id,
        }))?;
    Ok(Json(cinema))
}

/// DELETE /api/v1/cinemas/{id}
///
/// Sessions cascade, but a session with purchases blocks the whole
/// delete (surfaces as 409).
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = CinemaRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Cinema",
            id,
        }))
    }
}

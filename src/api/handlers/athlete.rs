//! Athlete endpoint handlers: list, lookups, filters, create.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{AthleteDto, MedalQuery, NameQuery, NationalityQuery};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /athletes` — List all athletes.
///
/// # Errors
///
/// Returns [`ApiError::Store`] on storage failure.
#[utoipa::path(
    get,
    path = "/athletes",
    tag = "Athletes",
    summary = "List all athletes",
    description = "Returns every stored athlete record. The array is empty when no records exist.",
    responses(
        (status = 200, description = "All athlete records", body = Vec<AthleteDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_athletes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let athletes = state.athlete_service.get_athletes().await?;
    let dtos: Vec<AthleteDto> = athletes.into_iter().map(AthleteDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /athletes/{id}` — Get one athlete by id.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no record has the given id.
#[utoipa::path(
    get,
    path = "/athletes/{id}",
    tag = "Athletes",
    summary = "Get an athlete by id",
    description = "Returns the record with the given id, or 404 with an empty body when absent.",
    params(
        ("id" = String, Path, description = "Athlete record id"),
    ),
    responses(
        (status = 200, description = "Matching record", body = AthleteDto),
        (status = 404, description = "No record with this id"),
    )
)]
pub async fn get_athlete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let athlete = state
        .athlete_service
        .get_athlete_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(AthleteDto::from(athlete)))
}

/// `GET /athletes/name?name=X` — Get one athlete by exact name.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if no record has the given name.
#[utoipa::path(
    get,
    path = "/athletes/name",
    tag = "Athletes",
    summary = "Get an athlete by exact name",
    description = "Returns the record whose name equals the query exactly, or 404 with an empty body.",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching record", body = AthleteDto),
        (status = 404, description = "No record with this name"),
    )
)]
pub async fn get_athlete_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let athlete = state
        .athlete_service
        .get_athlete_by_name(&query.name)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(AthleteDto::from(athlete)))
}

/// `POST /athletes` — Create or overwrite an athlete.
///
/// # Errors
///
/// Returns [`ApiError::Store`] on storage failure.
#[utoipa::path(
    post,
    path = "/athletes",
    tag = "Athletes",
    summary = "Create or overwrite an athlete",
    description = "Upserts the record keyed by its caller-supplied id. A second POST with the \
                   same id overwrites the first. No field validation is applied.",
    request_body = AthleteDto,
    responses(
        (status = 200, description = "Plain text confirmation", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    Json(dto): Json<AthleteDto>,
) -> Result<impl IntoResponse, ApiError> {
    state.athlete_service.save_athlete(&dto.into()).await?;
    Ok("Athlete added")
}

/// `GET /athletes/nationality?nationality=X` — Filter by nationality.
///
/// # Errors
///
/// Returns [`ApiError::Store`] on storage failure.
#[utoipa::path(
    get,
    path = "/athletes/nationality",
    tag = "Athletes",
    summary = "Filter athletes by nationality",
    description = "Returns every record whose nationality equals the query, compared \
                   case-insensitively after trimming whitespace on both sides.",
    params(NationalityQuery),
    responses(
        (status = 200, description = "Matching records, possibly empty", body = Vec<AthleteDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_athletes_by_nationality(
    State(state): State<AppState>,
    Query(query): Query<NationalityQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let athletes = state
        .athlete_service
        .get_athletes_from_nationality(&query.nationality)
        .await?;
    let dtos: Vec<AthleteDto> = athletes.into_iter().map(AthleteDto::from).collect();
    Ok(Json(dtos))
}

/// `GET /athletes/medal?medal=X` — Filter by medal substring.
///
/// # Errors
///
/// Returns [`ApiError::Store`] on storage failure.
#[utoipa::path(
    get,
    path = "/athletes/medal",
    tag = "Athletes",
    summary = "Filter athletes by medal",
    description = "Returns every record whose medal field contains the query as a substring. \
                   Records without a medal are skipped.",
    params(MedalQuery),
    responses(
        (status = 200, description = "Matching records, possibly empty", body = Vec<AthleteDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_athletes_by_medal(
    State(state): State<AppState>,
    Query(query): Query<MedalQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let athletes = state
        .athlete_service
        .get_athletes_by_medal(&query.medal)
        .await?;
    let dtos: Vec<AthleteDto> = athletes.into_iter().map(AthleteDto::from).collect();
    Ok(Json(dtos))
}

/// Athlete routes. Static segments are registered alongside `{id}`;
/// axum gives them priority, so `/athletes/name` never binds as an id.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/athletes", get(list_athletes).post(create_athlete))
        .route("/athletes/name", get(get_athlete_by_name))
        .route("/athletes/nationality", get(get_athletes_by_nationality))
        .route("/athletes/medal", get(get_athletes_by_medal))
        .route("/athletes/{id}", get(get_athlete_by_id))
}

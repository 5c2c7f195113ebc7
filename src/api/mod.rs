//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root path, matching the original
//! public surface (`/athletes`, `/health`).

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every exposed endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::athlete::list_athletes,
        handlers::athlete::get_athlete_by_id,
        handlers::athlete::get_athlete_by_name,
        handlers::athlete::create_athlete,
        handlers::athlete::get_athletes_by_nationality,
        handlers::athlete::get_athletes_by_medal,
        handlers::system::health_handler,
    ),
    components(schemas(dto::AthleteDto, crate::error::ErrorResponse, crate::error::ErrorBody)),
    tags(
        (name = "Athletes", description = "Athlete record CRUD and filters"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

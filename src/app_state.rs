//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AthleteService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Athlete service for all read/write operations.
    pub athlete_service: Arc<AthleteService>,
}

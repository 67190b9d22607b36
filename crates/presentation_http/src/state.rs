//! Application state shared across handlers

use std::sync::Arc;

use application::ClimateService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Climate query service backing every endpoint
    pub climate_service: Arc<ClimateService>,
}

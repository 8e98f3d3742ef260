use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::preferences::handlers;
use crate::features::preferences::services::PreferenceService;

/// Public preference routes
pub fn routes(preference_service: Arc<PreferenceService>) -> Router {
    Router::new()
        .route(
            "/api/preferences/language",
            get(handlers::get_language).put(handlers::update_language),
        )
        .with_state(preference_service)
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::preferences::PreferenceService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::{ReportHistoryService, ReportSubmissionService};

/// Driver routes (require auth middleware to be applied by caller)
pub fn routes(
    submission_service: Arc<ReportSubmissionService>,
    history_service: Arc<ReportHistoryService>,
) -> Router {
    let state = ReportState {
        submission_service,
        history_service,
    };

    Router::new()
        .route(
            "/api/reports",
            post(handlers::submit_report).get(handlers::list_reports),
        )
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(state)
}

/// Public report routes
pub fn public_routes(preference_service: Arc<PreferenceService>) -> Router {
    Router::new()
        .route("/api/report-types", get(handlers::list_report_types))
        .with_state(preference_service)
}

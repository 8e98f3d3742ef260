use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes (all require admin access)
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/export", get(handlers::export_reports))
        .route("/reports/{id}", get(handlers::get_report))
        .route("/stats", get(handlers::get_stats))
        .with_state(admin_service)
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};

/// Create routes for the reports feature
pub fn routes(state: ReportState) -> Router {
    Router::new()
        .route(
            "/api/reports",
            post(handlers::submit_report).get(handlers::list_reports),
        )
        .route("/api/reports/images", post(handlers::upload_image))
        .route("/api/reports/stats", get(handlers::report_stats))
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(state)
}

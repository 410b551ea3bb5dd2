use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes, nested under `/api/admin`
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/users", get(handlers::list_users))
        .route("/users/{national_id}/verify", post(handlers::verify_user))
        .route("/reports", get(handlers::list_reports))
        .route("/reports/{id}/status", patch(handlers::update_report_status))
        .with_state(admin_service)
}

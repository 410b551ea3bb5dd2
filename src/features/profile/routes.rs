use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profile::handlers;
use crate::features::profile::services::ProfileService;

/// Create routes for the profile feature
pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/profile/{national_id}", get(handlers::get_profile))
        .with_state(service)
}

use axum::{routing::get, Router};

use crate::features::map::handlers::{self, MapState};

/// Create routes for the map feature
pub fn routes(state: MapState) -> Router {
    Router::new()
        .route("/api/map/home", get(handlers::home_map))
        .route("/api/map/admin", get(handlers::admin_map))
        .with_state(state)
}

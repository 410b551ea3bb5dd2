use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::signup::handlers;
use crate::modules::sink::RegistrationSink;

/// Create routes for the signup feature
pub fn routes(sink: Arc<dyn RegistrationSink>) -> Router {
    Router::new()
        .route("/api/signup", post(handlers::submit_signup))
        .with_state(sink)
}

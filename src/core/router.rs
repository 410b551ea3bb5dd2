use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::admin::{self, AdminService};
use crate::features::categories;
use crate::features::map::{self, MapService, MapState};
use crate::features::profile::{self, ProfileService};
use crate::features::reports::{self, ReportCollectionModel, ReportState};
use crate::features::signup;
use crate::features::users::UserCollectionModel;
use crate::modules::sink::{
    DirectoryRegistrationSink, LoggingRegistrationSink, RegistrationSink, StoreReportSink,
};
use crate::modules::store::InMemoryStore;

/// Wire every feature onto one store and build the application router
pub fn build_router(config: &Config, store: Arc<InMemoryStore>) -> Router {
    let report_collection = ReportCollectionModel::new(store.clone());
    let user_collection = UserCollectionModel::new(store.clone());

    let report_state = ReportState {
        collection: report_collection.clone(),
        sink: Arc::new(StoreReportSink::new(store.clone())),
        max_image_bytes: config.upload.max_image_bytes,
    };

    let map_service = MapService::new(report_collection.clone(), config.map.clone());
    let map_state = MapState {
        service: map_service.clone(),
        reports: report_state.clone(),
    };

    let registration_sink: Arc<dyn RegistrationSink> = if config.signup.register_users {
        tracing::info!("Resident signups are added to the user directory");
        Arc::new(DirectoryRegistrationSink::new(user_collection.clone()))
    } else {
        tracing::info!("Signups are logged only");
        Arc::new(LoggingRegistrationSink)
    };

    let profile_service = Arc::new(ProfileService::new(
        user_collection.clone(),
        report_collection.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(
        user_collection,
        report_collection,
        map_service,
    ));

    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);
    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(swagger)
        .merge(health_route)
        .merge(categories::routes::routes())
        .merge(reports::routes::routes(report_state))
        .merge(map::routes::routes(map_state))
        .merge(signup::routes::routes(registration_sink))
        .merge(profile::routes::routes(profile_service))
        .nest("/api/admin", admin::routes::routes(admin_service))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

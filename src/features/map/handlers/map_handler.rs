use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::map::dtos::{DraftMarkerQuery, MapViewDto};
use crate::features::map::services::MapService;
use crate::features::reports::models::ReportField;
use crate::features::reports::ReportState;
use crate::shared::types::ApiResponse;

/// State for map handlers
#[derive(Clone)]
pub struct MapState {
    pub service: MapService,
    /// Used to build the draft pin the same way the report form does
    pub reports: ReportState,
}

/// Map for the reporting page
///
/// Pass the draft's `lat`/`lng` (and optionally `title`, `category`) to
/// get a pin for the location being picked.
#[utoipa::path(
    get,
    path = "/api/map/home",
    params(DraftMarkerQuery),
    responses(
        (status = 200, description = "Map view with report markers", body = ApiResponse<MapViewDto>)
    ),
    tag = "map"
)]
pub async fn home_map(
    State(state): State<MapState>,
    Query(query): Query<DraftMarkerQuery>,
) -> Result<Json<ApiResponse<MapViewDto>>> {
    let mut form = state.reports.new_form();
    if let Some(lat) = &query.lat {
        form.set_latitude(lat);
    }
    if let Some(lng) = &query.lng {
        form.set_longitude(lng);
    }
    if let Some(title) = &query.title {
        form.update_field(ReportField::Title, title);
    }
    if let Some(category) = &query.category {
        form.update_field(ReportField::Category, category);
    }

    let view = state.service.home_view(form.draft_marker()).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Map for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/map/admin",
    responses(
        (status = 200, description = "Map view with report markers", body = ApiResponse<MapViewDto>)
    ),
    tag = "map"
)]
pub async fn admin_map(State(state): State<MapState>) -> Result<Json<ApiResponse<MapViewDto>>> {
    let view = state.service.admin_view().await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

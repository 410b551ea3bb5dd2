use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::profile::dtos::ProfileResponseDto;
use crate::features::profile::services::ProfileService;
use crate::shared::types::ApiResponse;

/// Get a user's profile with their reports
#[utoipa::path(
    get,
    path = "/api/profile/{national_id}",
    params(
        ("national_id" = String, Path, description = "14-digit national ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<ProfileResponseDto>),
        (status = 404, description = "User not found")
    ),
    tag = "profile"
)]
pub async fn get_profile(
    State(service): State<Arc<ProfileService>>,
    Path(national_id): Path<String>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.profile(&national_id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

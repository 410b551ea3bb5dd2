use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::shared::types::ApiResponse;

/// List all report categories in picker order
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryResponseDto>>> {
    let categories = Category::ALL
        .into_iter()
        .zip(0..)
        .map(|(category, order)| CategoryResponseDto::new(category, order))
        .collect();
    Json(ApiResponse::success(Some(categories), None, None))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(Path(slug): Path<String>) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = slug
        .parse::<Category>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    let order = Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default() as i32;
    Ok(Json(ApiResponse::success(
        Some(CategoryResponseDto::new(category, order)),
        None,
        None,
    )))
}

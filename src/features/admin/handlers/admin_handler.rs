use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::*;
use crate::features::admin::services::AdminService;
use crate::features::reports::models::ReportId;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Tables, charts and map for the admin page
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = ApiResponse<AdminDashboardDto>)
    ),
    tag = "admin"
)]
pub async fn get_dashboard(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminDashboardDto>>> {
    let dashboard = service.dashboard().await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None, None)))
}

/// List users (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<AdminUserRowDto>>),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "admin"
)]
pub async fn list_users(
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminUserRowDto>>>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (items, total) = service.users(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List reports (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<AdminReportRowDto>>),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "admin"
)]
pub async fn list_reports(
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminReportRowDto>>>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (items, total) = service.reports(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Change a report's status
///
/// Any status may be set from any other. An unknown id is not an error;
/// the response carries `updated: false`.
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/status",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status applied if the report exists", body = ApiResponse<UpdatedDto>),
        (status = 400, description = "Unknown status value")
    ),
    tag = "admin"
)]
pub async fn update_report_status(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<ReportId>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<UpdatedDto>>> {
    let updated = service.update_report_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(UpdatedDto { updated }),
        None,
        None,
    )))
}

/// Mark a user verified
#[utoipa::path(
    post,
    path = "/api/admin/users/{national_id}/verify",
    params(
        ("national_id" = String, Path, description = "14-digit national ID")
    ),
    responses(
        (status = 200, description = "User verified if they exist", body = ApiResponse<UpdatedDto>)
    ),
    tag = "admin"
)]
pub async fn verify_user(
    State(service): State<Arc<AdminService>>,
    Path(national_id): Path<String>,
) -> Result<Json<ApiResponse<UpdatedDto>>> {
    let updated = service.verify_user(&national_id).await?;
    Ok(Json(ApiResponse::success(
        Some(UpdatedDto { updated }),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::seeded_server;

    #[tokio::test]
    async fn test_dashboard() {
        let server = seeded_server();
        let body: Value = server.get("/api/admin/dashboard").await.json();

        assert_eq!(body["data"]["users"][0]["showVerify"], true);
        assert_eq!(body["data"]["reports"][0]["category"], "road damage");
        assert_eq!(body["data"]["categorySeries"][0]["color"], "#0088FE");
        assert_eq!(body["data"]["statusSeries"][0]["label"], "Pending");
    }

    #[tokio::test]
    async fn test_list_users_paginated() {
        let server = seeded_server();
        let body: Value = server
            .get("/api/admin/users")
            .add_query_param("page_size", 3)
            .await
            .json();
        assert_eq!(body["meta"]["total"], 10);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
        assert!(body["data"][0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_list_users_huge_page() {
        let server = seeded_server();
        let body: Value = server
            .get("/api/admin/users")
            .add_query_param("page", i64::MAX)
            .add_query_param("page_size", 100)
            .await
            .json();
        assert_eq!(body["meta"]["total"], 10);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_update_status() {
        let server = seeded_server();

        let body: Value = server
            .patch("/api/admin/reports/1/status")
            .json(&json!({ "status": "in_progress" }))
            .await
            .json();
        assert_eq!(body["data"]["updated"], true);

        let report: Value = server.get("/api/reports/1").await.json();
        assert_eq!(report["data"]["status"], "in_progress");

        let body: Value = server
            .patch("/api/admin/reports/999/status")
            .json(&json!({ "status": "resolved" }))
            .await
            .json();
        assert_eq!(body["data"]["updated"], false);
    }

    #[tokio::test]
    async fn test_update_status_rejects_unknown_value() {
        let server = seeded_server();
        server
            .patch("/api/admin/reports/1/status")
            .json(&json!({ "status": "closed" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_verify_user() {
        let server = seeded_server();

        let body: Value = server
            .post("/api/admin/users/30003199006543/verify")
            .await
            .json();
        assert_eq!(body["data"]["updated"], true);

        let body: Value = server
            .post("/api/admin/users/00000000000000/verify")
            .await
            .json();
        assert_eq!(body["data"]["updated"], false);
    }
}

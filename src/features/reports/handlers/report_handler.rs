use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    ImageResponseDto, ReportResponseDto, ReportStatsDto, SubmitReportDto, UploadImageDto,
};
use crate::features::reports::models::{ImageUpload, ReportField, ReportId, ReportStatus};
use crate::features::reports::services::{chart_series, ReportCollectionModel, ReportFormModel};
use crate::features::categories::models::Category;
use crate::modules::sink::ReportSink;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};
use crate::shared::validation::{FormErrors, SubmitError};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub collection: ReportCollectionModel,
    pub sink: Arc<dyn ReportSink>,
    pub max_image_bytes: usize,
}

impl ReportState {
    pub fn new_form(&self) -> ReportFormModel {
        ReportFormModel::new(Arc::clone(&self.sink), self.max_image_bytes)
    }
}

/// Submit a new report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Form has invalid fields"),
        (status = 502, description = "Report could not be stored")
    ),
    tag = "reports"
)]
pub async fn submit_report(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    let mut form = state.new_form();
    form.set_reporter(dto.reporter.filter(|r| !r.is_empty()));
    form.update_field(ReportField::Title, &dto.title);
    form.update_field(ReportField::Category, &dto.category);
    form.update_field(ReportField::Description, &dto.description);
    if let (Some(lat), Some(lng)) = (dto.lat, dto.lng) {
        form.set_location(lat, lng);
    }
    if let Some(image) = dto.image.filter(|i| !i.is_empty()) {
        // A rejection is kept in the form errors and reported below
        let _ = form.attach_encoded_image(&image, dto.image_name);
    }

    // Input-specific messages (unknown category, bad image) win over "required"
    let input_errors: FormErrors<ReportField> = form.errors().clone();
    let report = form.submit().await.map_err(|e| match e {
        SubmitError::Invalid(mut errors) => {
            errors.merge(input_errors);
            AppError::from(errors)
        }
        other => other.into(),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Report submitted successfully!".to_string()),
            None,
        )),
    ))
}

/// Encode a photo for a report
///
/// Accepts multipart/form-data with a single `file` field. The response
/// carries the data URI to send back as `image` when submitting.
#[utoipa::path(
    post,
    path = "/api/reports/images",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Photo to attach to a report",
    ),
    responses(
        (status = 200, description = "Image encoded", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Not an image, too large, or unreadable")
    ),
    tag = "reports"
)]
pub async fn upload_image(
    State(state): State<ReportState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImageResponseDto>>> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read image bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        let mut form = state.new_form();
        if form
            .attach_image(ImageUpload::from_bytes(file_name, content_type, &data))
            .await
            .is_err()
        {
            return Err(form.errors().clone().into());
        }

        let image = form
            .draft()
            .image
            .clone()
            .ok_or_else(|| AppError::Internal("Attached image missing from draft".to_string()))?;
        return Ok(Json(ApiResponse::success(Some(image.into()), None, None)));
    }

    let mut errors = FormErrors::new();
    errors.insert(ReportField::Images, "Image is required");
    Err(errors.into())
}

/// List submitted reports (paginated)
#[utoipa::path(
    get,
    path = "/api/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (reports, total) = state.collection.page(&params).await?;
    let dtos = reports.into_iter().map(ReportResponseDto::from).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(Meta { total }))))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = u64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    Path(id): Path<ReportId>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state
        .collection
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Report counts by category and status as chart series
#[utoipa::path(
    get,
    path = "/api/reports/stats",
    responses(
        (status = 200, description = "Chart series", body = ApiResponse<ReportStatsDto>)
    ),
    tag = "reports"
)]
pub async fn report_stats(
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<ReportStatsDto>>> {
    let by_category = state.collection.count_by_category().await?;
    let by_status = state.collection.count_by_status().await?;

    let stats = ReportStatsDto {
        total: by_status.total(),
        by_category: chart_series(&by_category, Category::slug),
        by_status: chart_series(&by_status, ReportStatus::as_str),
    };
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{empty_server, seeded_server};

    fn valid_body() -> Value {
        json!({
            "title": "Pothole",
            "category": "road_damage",
            "description": "Deep hole near the market",
            "lat": 30.0444,
            "lng": 31.2357,
            "image": "data:image/png;base64,aGVsbG8=",
            "reporter": "28504199501234"
        })
    }

    #[tokio::test]
    async fn test_submit_report_created() {
        let server = empty_server();

        let response = server.post("/api/reports").json(&valid_body()).await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["categoryColor"], "#ff4444");

        let list: Value = server.get("/api/reports").await.json();
        assert_eq!(list["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_submit_report_field_errors() {
        let server = empty_server();

        let response = server
            .post("/api/reports")
            .json(&json!({ "title": "Pothole", "category": "pothole" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        let fields = &body["field_errors"];
        assert_eq!(fields["category"], "Unknown category");
        assert_eq!(fields["description"], "Description is required");
        assert_eq!(fields["location"], "Location is required");
        assert_eq!(fields["images"], "Image is required");
        assert!(fields.get("title").is_none());
    }

    #[tokio::test]
    async fn test_submit_report_rejects_text_image() {
        let server = empty_server();
        let mut body = valid_body();
        body["image"] = json!("data:text/plain;base64,aGVsbG8=");

        let response = server.post("/api/reports").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["field_errors"]["images"], "Please select an image file");
    }

    #[tokio::test]
    async fn test_submit_report_bad_json() {
        let server = empty_server();
        let response = server
            .post("/api/reports")
            .content_type("application/json")
            .text("{ not json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_image_encodes() {
        let server = empty_server();
        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"hello".to_vec())
                .file_name("photo.png")
                .mime_type("image/png"),
        );

        let response = server.post("/api/reports/images").multipart(form).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["dataUri"], "data:image/png;base64,aGVsbG8=");
        assert_eq!(body["data"]["sizeBytes"], 5);
    }

    #[tokio::test]
    async fn test_upload_non_image_rejected() {
        let server = empty_server();
        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"hello".to_vec())
                .file_name("notes.txt")
                .mime_type("text/plain"),
        );

        let response = server.post("/api/reports/images").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["field_errors"]["images"], "Please select an image file");
    }

    #[tokio::test]
    async fn test_list_reports_paginated() {
        let server = seeded_server();

        let body: Value = server
            .get("/api/reports")
            .add_query_param("page", 2)
            .add_query_param("page_size", 15)
            .await
            .json();
        assert_eq!(body["meta"]["total"], 20);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(5));

        server
            .get("/api/reports")
            .add_query_param("page", 0)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_reports_huge_page() {
        let server = seeded_server();

        let response = server
            .get("/api/reports")
            .add_query_param("page", i64::MAX)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 20);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_get_report() {
        let server = seeded_server();
        let body: Value = server.get("/api/reports/2").await.json();
        assert_eq!(body["data"]["title"], "Burst Water Pipe");

        server
            .get("/api/reports/999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_report_stats() {
        let server = seeded_server();
        let body: Value = server.get("/api/reports/stats").await.json();

        assert_eq!(body["data"]["total"], 20);
        let by_status = body["data"]["byStatus"].as_array().unwrap();
        assert_eq!(by_status[0]["name"], "pending");
        assert_eq!(by_status[0]["value"], 14);
        assert_eq!(by_status[0]["percent"], 70.0);
        assert_eq!(by_status[1]["label"], "In Progress");
        assert_eq!(body["data"]["byCategory"][0]["name"], "road_damage");
    }
}

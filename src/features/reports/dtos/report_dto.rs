use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::reports::models::{Location, Report, ReportId, ReportImage, ReportStatus};

/// Request DTO for submitting a report from the form
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitReportDto {
    pub title: String,
    /// Category slug; empty when none was picked
    pub category: String,
    pub description: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Photo as `data:<mime>;base64,<payload>`, usually from the image upload endpoint
    pub image: Option<String>,
    pub image_name: Option<String>,
    /// National ID of the reporter, when signed in
    pub reporter: Option<String>,
}

/// Response DTO for a stored report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub category_label: String,
    pub category_color: String,
    pub location: Option<Location>,
    pub image: Option<String>,
    pub status: ReportStatus,
    pub reporter: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            category_label: r.category.label().to_string(),
            category_color: r.category.color().to_string(),
            category: r.category,
            location: r.location,
            image: r.image,
            status: r.status,
            reporter: r.reporter,
            submitted_at: r.submitted_at,
        }
    }
}

/// Response DTO for an encoded photo, ready to send back with the report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponseDto {
    pub file_name: Option<String>,
    pub content_type: String,
    pub size_bytes: usize,
    pub data_uri: String,
}

impl From<ReportImage> for ImageResponseDto {
    fn from(image: ReportImage) -> Self {
        Self {
            file_name: image.file_name,
            content_type: image.content_type,
            size_bytes: image.size_bytes,
            data_uri: image.data_uri,
        }
    }
}

/// Multipart form for image upload (OpenAPI only)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The photo to attach
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// One slice or bar of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    /// Category or status slug
    pub name: String,
    pub value: usize,
    pub color: String,
    pub label: String,
    /// Share of the total, one decimal place
    pub percent: f64,
}

/// Aggregate counts for the dashboard charts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsDto {
    pub total: usize,
    pub by_category: Vec<ChartPoint>,
    pub by_status: Vec<ChartPoint>,
}

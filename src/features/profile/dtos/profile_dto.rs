use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::reports::models::{Report, ReportId, ReportStatus};
use crate::shared::formatting::format_coordinates;

/// One card in the "My Reports" grid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportCardDto {
    pub id: ReportId,
    pub title: String,
    pub category: Category,
    pub category_label: String,
    pub category_color: String,
    pub description: String,
    pub image: Option<String>,
    /// `lat, lng` to four decimals; absent when the report has no location
    pub location_text: Option<String>,
    pub status: ReportStatus,
}

impl From<Report> for ReportCardDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            category_label: r.category.label().to_string(),
            category_color: r.category.color().to_string(),
            category: r.category,
            description: r.description,
            image: r.image,
            location_text: r.location.map(|l| format_coordinates(l.lat, l.lng)),
            status: r.status,
        }
    }
}

/// Profile page view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub points: u32,
    pub verified: bool,
    pub reports: Vec<ReportCardDto>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::map::dtos::MarkerDto;
use crate::features::reports::dtos::ChartPoint;
use crate::features::reports::models::{Report, ReportId, ReportStatus};
use crate::features::users::models::{NationalId, User};
use crate::shared::formatting::table_slug;

// =============================================================================
// TABLE ROWS
// =============================================================================

/// Row of the users table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRowDto {
    pub national_id: NationalId,
    pub name: String,
    pub email: String,
    pub verified: bool,
    /// Whether the Verify action is offered
    pub show_verify: bool,
}

impl From<User> for AdminUserRowDto {
    fn from(user: User) -> Self {
        Self {
            name: user.full_name(),
            show_verify: !user.verified,
            national_id: user.national_id,
            email: user.email,
            verified: user.verified,
        }
    }
}

/// Row of the reports table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminReportRowDto {
    pub id: ReportId,
    pub title: String,
    /// Category slug with its first underscore shown as a space
    pub category: String,
    pub status: ReportStatus,
}

impl From<Report> for AdminReportRowDto {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            category: table_slug(report.category.slug()),
            title: report.title,
            status: report.status,
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Everything the admin page shows at once
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardDto {
    pub users: Vec<AdminUserRowDto>,
    pub reports: Vec<AdminReportRowDto>,
    /// Pie chart: reports per category
    pub category_series: Vec<ChartPoint>,
    /// Bar chart: reports per status
    pub status_series: Vec<ChartPoint>,
    pub markers: Vec<MarkerDto>,
}

// =============================================================================
// UPDATES
// =============================================================================

/// Request to change a report's status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Result of a status change or verification
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedDto {
    /// `false` when no record matched; nothing was changed
    pub updated: bool,
}

use crate::features::categories::models::{color_of, label_of, Category};
use crate::features::reports::models::{Location, Report, ReportId, ReportStatus};

/// Title shown on the draft marker until the reporter types one
pub const DRAFT_MARKER_TITLE: &str = "New Report";

/// A pin on the map before its icon and popup are rendered
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// `None` for the unsaved draft pin
    pub report_id: Option<ReportId>,
    pub position: Location,
    pub title: String,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub status: Option<ReportStatus>,
}

impl MapMarker {
    /// Marker for a stored report; `None` when the report has no location
    pub fn for_report(report: &Report) -> Option<Self> {
        let position = report.location?;
        Some(Self {
            report_id: Some(report.id),
            position,
            title: report.title.clone(),
            category: Some(report.category),
            description: Some(report.description.clone()).filter(|d| !d.is_empty()),
            status: Some(report.status),
        })
    }

    pub fn color(&self) -> &'static str {
        color_of(self.category)
    }

    pub fn category_label(&self) -> &'static str {
        label_of(self.category)
    }
}

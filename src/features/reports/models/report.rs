use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::users::models::NationalId;

pub type ReportId = u64;

/// Workflow state of a report. Admin-controlled; any state can follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed point on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A single citizen-submitted civic issue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Option<Location>,
    /// Data URI of an uploaded photo, or a URL for sample data
    pub image: Option<String>,
    pub status: ReportStatus,
    pub reporter: Option<NationalId>,
    pub submitted_at: DateTime<Utc>,
}

/// Immutable snapshot of a valid draft, handed to a report sink
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    pub image: String,
    pub reporter: Option<NationalId>,
}

impl NewReport {
    /// Materialize the snapshot once the store has assigned an id
    pub fn into_report(self, id: ReportId, submitted_at: DateTime<Utc>) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            location: Some(self.location),
            image: Some(self.image),
            status: ReportStatus::Pending,
            reporter: self.reporter,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rejects_unknown_json() {
        assert!(serde_json::from_str::<ReportStatus>("\"archived\"").is_err());
        assert_eq!(
            serde_json::from_str::<ReportStatus>("\"pending\"").unwrap(),
            ReportStatus::Pending
        );
    }

    #[test]
    fn test_new_report_starts_pending() {
        let snapshot = NewReport {
            title: "Pothole".to_string(),
            description: "Deep".to_string(),
            category: Category::RoadDamage,
            location: Location {
                lat: 30.0,
                lng: 31.0,
            },
            image: "data:image/png;base64,AAAA".to_string(),
            reporter: None,
        };
        let report = snapshot.into_report(7, Utc::now());
        assert_eq!(report.id, 7);
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.location, Some(Location { lat: 30.0, lng: 31.0 }));
    }
}

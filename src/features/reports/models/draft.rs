use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::reports::models::{Location, NewReport};
use crate::features::users::models::NationalId;
use crate::shared::validation::FormField;

/// An encoded photo attached to a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportImage {
    pub file_name: Option<String>,
    pub content_type: String,
    pub size_bytes: usize,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
}

/// Coordinate pair where either axis may still be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct DraftLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl DraftLocation {
    pub fn complete(&self) -> Option<Location> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        }
    }
}

/// In-progress, not yet submitted report
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub title: String,
    pub category: Option<Category>,
    pub description: String,
    pub location: DraftLocation,
    pub image: Option<ReportImage>,
    pub reporter: Option<NationalId>,
}

impl ReportDraft {
    /// Snapshot for the sink; `None` while any required field is missing
    pub fn snapshot(&self) -> Option<NewReport> {
        let image = self.image.as_ref()?;
        Some(NewReport {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category?,
            location: self.location.complete()?,
            image: image.data_uri.clone(),
            reporter: self.reporter.clone(),
        })
    }
}

/// Fields of the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportField {
    Title,
    Category,
    Description,
    Location,
    Images,
}

type DraftCheck = fn(&ReportDraft) -> Option<&'static str>;

impl ReportField {
    pub const ALL: [ReportField; 5] = [
        ReportField::Title,
        ReportField::Category,
        ReportField::Description,
        ReportField::Location,
        ReportField::Images,
    ];

    /// The rule for this field; returns the error message when the draft breaks it
    pub fn validator(self) -> DraftCheck {
        match self {
            ReportField::Title => |d: &ReportDraft| d.title.is_empty().then_some("Title is required"),
            ReportField::Category => {
                |d: &ReportDraft| d.category.is_none().then_some("Category is required")
            }
            ReportField::Description => {
                |d: &ReportDraft| d.description.is_empty().then_some("Description is required")
            }
            ReportField::Location => |d: &ReportDraft| {
                d.location.complete().is_none().then_some("Location is required")
            },
            ReportField::Images => |d: &ReportDraft| d.image.is_none().then_some("Image is required"),
        }
    }
}

impl FormField for ReportField {
    fn name(self) -> &'static str {
        match self {
            ReportField::Title => "title",
            ReportField::Category => "category",
            ReportField::Description => "description",
            ReportField::Location => "location",
            ReportField::Images => "images",
        }
    }
}

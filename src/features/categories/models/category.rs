use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Color used for markers and badges when a report has no category yet
pub const UNCATEGORIZED_COLOR: &str = "#94a3b8";

/// Label used when a report has no category yet
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Fixed classification tag for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RoadDamage,
    WaterIssue,
    ElectricityIssue,
    WasteManagement,
    PublicPropertyDamage,
    StreetLighting,
    SewageProblem,
    PublicTransportation,
    EnvironmentalIssue,
    Other,
}

impl Category {
    /// Form option order
    pub const ALL: [Category; 10] = [
        Category::RoadDamage,
        Category::WaterIssue,
        Category::ElectricityIssue,
        Category::WasteManagement,
        Category::PublicPropertyDamage,
        Category::StreetLighting,
        Category::SewageProblem,
        Category::PublicTransportation,
        Category::EnvironmentalIssue,
        Category::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::RoadDamage => "road_damage",
            Category::WaterIssue => "water_issue",
            Category::ElectricityIssue => "electricity_issue",
            Category::WasteManagement => "waste_management",
            Category::PublicPropertyDamage => "public_property_damage",
            Category::StreetLighting => "street_lighting",
            Category::SewageProblem => "sewage_problem",
            Category::PublicTransportation => "public_transportation",
            Category::EnvironmentalIssue => "environmental_issue",
            Category::Other => "other",
        }
    }

    /// Marker and badge color
    pub fn color(self) -> &'static str {
        match self {
            Category::RoadDamage => "#ff4444",
            Category::WaterIssue => "#3b82f6",
            Category::ElectricityIssue => "#f59e0b",
            Category::WasteManagement => "#10b981",
            Category::PublicPropertyDamage => "#8b5cf6",
            Category::StreetLighting => "#fcd34d",
            Category::SewageProblem => "#6b7280",
            Category::PublicTransportation => "#ef4444",
            Category::EnvironmentalIssue => "#84cc16",
            Category::Other => UNCATEGORIZED_COLOR,
        }
    }

    /// Short label for badges and popups
    pub fn label(self) -> &'static str {
        match self {
            Category::RoadDamage => "Road Damage",
            Category::WaterIssue => "Water Issue",
            Category::ElectricityIssue => "Electricity Issue",
            Category::WasteManagement => "Waste Management",
            Category::PublicPropertyDamage => "Property Damage",
            Category::StreetLighting => "Street Lighting",
            Category::SewageProblem => "Sewage Problem",
            Category::PublicTransportation => "Transportation",
            Category::EnvironmentalIssue => "Environmental",
            Category::Other => "Other",
        }
    }

    /// Label shown in the category picker
    pub fn option_label(self) -> &'static str {
        match self {
            Category::PublicPropertyDamage => "Public Property Damage",
            Category::PublicTransportation => "Public Transportation",
            Category::EnvironmentalIssue => "Environmental Issue",
            other => other.label(),
        }
    }
}

/// Color for an optional category, falling back to the uncategorized grey
pub fn color_of(category: Option<Category>) -> &'static str {
    category.map_or(UNCATEGORIZED_COLOR, Category::color)
}

/// Label for an optional category, falling back to "Uncategorized"
pub fn label_of(category: Option<Category>) -> &'static str {
    category.map_or(UNCATEGORIZED_LABEL, Category::label)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

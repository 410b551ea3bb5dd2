use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::models::Category;
use crate::features::reports::models::{Location, ReportId, ReportStatus};

/// A rendered pin, ready for the map widget
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDto {
    /// Absent for the unsaved draft pin
    pub report_id: Option<ReportId>,
    pub position: Location,
    pub title: String,
    pub category: Option<Category>,
    pub category_label: String,
    pub color: String,
    pub description: Option<String>,
    pub status: Option<ReportStatus>,
    pub icon_svg: String,
    pub popup_html: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

/// Tile layer settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TileLayerDto {
    pub url: String,
    pub attribution: String,
}

/// Everything the map widget needs for one page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapViewDto {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_layer: TileLayerDto,
    pub markers: Vec<MarkerDto>,
    /// Pin for the location currently being picked on the report form
    pub draft_marker: Option<MarkerDto>,
}

/// Draft form state for previewing the picked location
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct DraftMarkerQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub title: Option<String>,
    /// Category slug
    pub category: Option<String>,
}

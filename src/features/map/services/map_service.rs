use minijinja::context;

use crate::core::config::MapConfig;
use crate::core::error::Result;
use crate::features::map::dtos::{MapViewDto, MarkerDto, TileLayerDto};
use crate::features::map::models::MapMarker;
use crate::features::reports::services::ReportCollectionModel;
use crate::shared::constants::{
    ADMIN_MAP_CENTER, HOME_MAP_CENTER, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_POPUP_ANCHOR,
};
use crate::shared::formatting::table_slug;
use crate::shared::templates::{
    render_template, TemplateError, MARKER_ICON_TEMPLATE, MARKER_POPUP_TEMPLATE,
};

/// Popup layout per page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStyle {
    /// Colored category badge and description (reporting page)
    Badge,
    /// Plain category slug text (admin dashboard)
    Plain,
}

/// Builds map views with rendered markers
#[derive(Clone)]
pub struct MapService {
    reports: ReportCollectionModel,
    config: MapConfig,
}

impl MapService {
    pub fn new(reports: ReportCollectionModel, config: MapConfig) -> Self {
        Self { reports, config }
    }

    /// Reporting page: every report plus the optional draft pin
    pub async fn home_view(&self, draft: Option<MapMarker>) -> Result<MapViewDto> {
        let markers = self.report_markers(PopupStyle::Badge).await?;
        let draft_marker = draft
            .map(|marker| render_marker(&marker, PopupStyle::Badge))
            .transpose()?;
        Ok(self.view(HOME_MAP_CENTER, markers, draft_marker))
    }

    pub async fn admin_view(&self) -> Result<MapViewDto> {
        let markers = self.report_markers(PopupStyle::Plain).await?;
        Ok(self.view(ADMIN_MAP_CENTER, markers, None))
    }

    /// Rendered markers for every located report
    pub async fn report_markers(&self, style: PopupStyle) -> Result<Vec<MarkerDto>> {
        let reports = self.reports.list().await?;
        let markers = reports
            .iter()
            .filter_map(MapMarker::for_report)
            .map(|marker| render_marker(&marker, style))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(markers = markers.len(), ?style, "Rendered report markers");
        Ok(markers)
    }

    fn view(
        &self,
        (lat, lng): (f64, f64),
        markers: Vec<MarkerDto>,
        draft_marker: Option<MarkerDto>,
    ) -> MapViewDto {
        MapViewDto {
            center: [lat, lng],
            zoom: self.config.default_zoom,
            tile_layer: TileLayerDto {
                url: self.config.tile_url.clone(),
                attribution: self.config.tile_attribution.clone(),
            },
            markers,
            draft_marker,
        }
    }
}

/// Render icon and popup markup for one pin
pub fn render_marker(
    marker: &MapMarker,
    style: PopupStyle,
) -> std::result::Result<MarkerDto, TemplateError> {
    let color = marker.color();
    let category_label = match (style, marker.category) {
        (PopupStyle::Plain, Some(category)) => table_slug(category.slug()),
        _ => marker.category_label().to_string(),
    };
    let description = match style {
        PopupStyle::Badge => marker.description.clone(),
        PopupStyle::Plain => None,
    };

    let icon_svg = render_template(MARKER_ICON_TEMPLATE, context! { color => color })?;
    let popup_html = render_template(
        MARKER_POPUP_TEMPLATE,
        context! {
            title => &marker.title,
            badge => style == PopupStyle::Badge,
            color => color,
            category_label => &category_label,
            description => &description,
        },
    )?;

    Ok(MarkerDto {
        report_id: marker.report_id,
        position: marker.position,
        title: marker.title.clone(),
        category: marker.category,
        category_label,
        color: color.to_string(),
        description: marker.description.clone(),
        status: marker.status,
        icon_svg,
        popup_html,
        icon_size: MARKER_ICON_SIZE,
        icon_anchor: MARKER_ICON_ANCHOR,
        popup_anchor: MARKER_POPUP_ANCHOR,
    })
}

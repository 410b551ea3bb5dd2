use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::categories::{
    dtos as categories_dtos, handlers as categories_handlers, models as categories_models,
};
use crate::features::map::{dtos as map_dtos, handlers as map_handlers};
use crate::features::profile::{dtos as profile_dtos, handlers as profile_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::signup::{handlers as signup_handlers, models as signup_models};
use crate::modules::sink::RegistrationReceipt;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Reports
        reports_handlers::submit_report,
        reports_handlers::upload_image,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::report_stats,
        // Map
        map_handlers::home_map,
        map_handlers::admin_map,
        // Signup
        signup_handlers::submit_signup,
        // Profile
        profile_handlers::get_profile,
        // Admin
        admin_handlers::get_dashboard,
        admin_handlers::list_users,
        admin_handlers::list_reports,
        admin_handlers::update_report_status,
        admin_handlers::verify_user,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_models::Category,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Reports
            reports_models::ReportStatus,
            reports_models::Location,
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ImageResponseDto,
            reports_dtos::UploadImageDto,
            reports_dtos::ChartPoint,
            reports_dtos::ReportStatsDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ImageResponseDto>,
            ApiResponse<reports_dtos::ReportStatsDto>,
            // Map
            map_dtos::MarkerDto,
            map_dtos::TileLayerDto,
            map_dtos::MapViewDto,
            ApiResponse<map_dtos::MapViewDto>,
            // Signup
            signup_models::SignupDraft,
            signup_models::ResidentSignup,
            signup_models::QuickSignup,
            RegistrationReceipt,
            ApiResponse<RegistrationReceipt>,
            // Profile
            profile_dtos::ReportCardDto,
            profile_dtos::ProfileResponseDto,
            ApiResponse<profile_dtos::ProfileResponseDto>,
            // Admin
            admin_dtos::AdminUserRowDto,
            admin_dtos::AdminReportRowDto,
            admin_dtos::AdminDashboardDto,
            admin_dtos::UpdateReportStatusDto,
            admin_dtos::UpdatedDto,
            ApiResponse<admin_dtos::AdminDashboardDto>,
            ApiResponse<Vec<admin_dtos::AdminUserRowDto>>,
            ApiResponse<Vec<admin_dtos::AdminReportRowDto>>,
            ApiResponse<admin_dtos::UpdatedDto>,
        )
    ),
    tags(
        (name = "categories", description = "Report categories"),
        (name = "reports", description = "Report submission, listing and statistics"),
        (name = "map", description = "Map views with rendered markers"),
        (name = "signup", description = "Resident and quick registration"),
        (name = "profile", description = "User profile with submitted reports"),
        (name = "admin", description = "Admin dashboard, status changes and user verification"),
    ),
    info(
        title = "FixEgypt API",
        version = "0.1.0",
        description = "Civic issue reporting API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

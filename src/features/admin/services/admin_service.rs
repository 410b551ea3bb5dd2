use crate::core::error::Result;
use crate::features::admin::dtos::{AdminDashboardDto, AdminReportRowDto, AdminUserRowDto};
use crate::features::categories::models::Category;
use crate::features::map::services::{MapService, PopupStyle};
use crate::features::reports::models::{ReportId, ReportStatus};
use crate::features::reports::services::{chart_series, ReportCollectionModel};
use crate::features::users::models::NationalId;
use crate::features::users::UserCollectionModel;
use crate::shared::types::PaginationQuery;

/// Service for the admin dashboard
pub struct AdminService {
    users: UserCollectionModel,
    reports: ReportCollectionModel,
    map: MapService,
}

impl AdminService {
    pub fn new(users: UserCollectionModel, reports: ReportCollectionModel, map: MapService) -> Self {
        Self {
            users,
            reports,
            map,
        }
    }

    /// Tables, charts and map for the admin page
    pub async fn dashboard(&self) -> Result<AdminDashboardDto> {
        let users = self.users.list().await?;
        let reports = self.reports.list().await?;
        let by_category = self.reports.count_by_category().await?;
        let by_status = self.reports.count_by_status().await?;
        let markers = self.map.report_markers(PopupStyle::Plain).await?;

        Ok(AdminDashboardDto {
            users: users.into_iter().map(AdminUserRowDto::from).collect(),
            reports: reports.into_iter().map(AdminReportRowDto::from).collect(),
            category_series: chart_series(&by_category, Category::slug),
            status_series: chart_series(&by_status, ReportStatus::as_str),
            markers,
        })
    }

    pub async fn users(&self, query: &PaginationQuery) -> Result<(Vec<AdminUserRowDto>, i64)> {
        let (users, total) = self.users.page(query).await?;
        Ok((users.into_iter().map(AdminUserRowDto::from).collect(), total))
    }

    pub async fn reports(&self, query: &PaginationQuery) -> Result<(Vec<AdminReportRowDto>, i64)> {
        let (reports, total) = self.reports.page(query).await?;
        Ok((
            reports.into_iter().map(AdminReportRowDto::from).collect(),
            total,
        ))
    }

    /// `false` when the report does not exist
    pub async fn update_report_status(&self, id: ReportId, status: ReportStatus) -> Result<bool> {
        Ok(self.reports.update_status(id, status).await?)
    }

    /// `false` when the user does not exist
    pub async fn verify_user(&self, national_id: &NationalId) -> Result<bool> {
        Ok(self.users.verify(national_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::config::Config;
    use crate::modules::store::InMemoryStore;

    fn service() -> AdminService {
        let store = Arc::new(InMemoryStore::seeded());
        let reports = ReportCollectionModel::new(store.clone());
        AdminService::new(
            UserCollectionModel::new(store),
            reports.clone(),
            MapService::new(reports, Config::for_tests().map),
        )
    }

    #[tokio::test]
    async fn test_dashboard() {
        let dashboard = service().dashboard().await.unwrap();

        assert_eq!(dashboard.users.len(), 10);
        assert!(dashboard.users.iter().all(|u| u.show_verify));
        assert_eq!(dashboard.users[0].name, "Ahmed Saleh");

        assert_eq!(dashboard.reports.len(), 20);
        assert_eq!(dashboard.reports[4].category, "public transportation");
        assert_eq!(dashboard.reports[5].category, "public property_damage");

        let total: usize = dashboard.category_series.iter().map(|p| p.value).sum();
        assert_eq!(total, 20);
        assert_eq!(dashboard.status_series.len(), 3);
        assert_eq!(dashboard.markers.len(), 20);
    }

    #[tokio::test]
    async fn test_verify_hides_action() {
        let admin = service();
        let id = "29708200104567".to_string();

        assert!(admin.verify_user(&id).await.unwrap());
        let dashboard = admin.dashboard().await.unwrap();
        let row = dashboard
            .users
            .iter()
            .find(|u| u.national_id == id)
            .unwrap();
        assert!(row.verified);
        assert!(!row.show_verify);

        assert!(!admin.verify_user(&"0".repeat(14)).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_report_status() {
        let admin = service();
        assert!(admin
            .update_report_status(1, ReportStatus::Resolved)
            .await
            .unwrap());
        assert!(!admin
            .update_report_status(999, ReportStatus::Resolved)
            .await
            .unwrap());

        let (rows, total) = admin
            .reports(&PaginationQuery {
                page: 1,
                page_size: 1,
            })
            .await
            .unwrap();
        assert_eq!(total, 20);
        assert_eq!(rows[0].status, ReportStatus::Resolved);
    }
}

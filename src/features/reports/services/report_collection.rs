use std::sync::Arc;

use crate::features::categories::models::Category;
use crate::features::reports::models::{Report, ReportId, ReportStatus, Tally};
use crate::modules::store::{ReportStore, StoreError};
use crate::shared::types::PaginationQuery;

/// Read and admin-update access to submitted reports
#[derive(Clone)]
pub struct ReportCollectionModel {
    store: Arc<dyn ReportStore>,
}

impl ReportCollectionModel {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Replace one report's status. Any status may follow any other.
    ///
    /// Returns `false` and changes nothing when the id is unknown.
    pub async fn update_status(
        &self,
        id: ReportId,
        status: ReportStatus,
    ) -> Result<bool, StoreError> {
        let updated = self.store.set_report_status(id, status).await?;
        if updated {
            tracing::info!(report_id = id, status = %status, "Report status updated");
        } else {
            tracing::debug!(report_id = id, "Status update for unknown report ignored");
        }
        Ok(updated)
    }

    pub async fn count_by_category(&self) -> Result<Tally<Category>, StoreError> {
        let reports = self.store.reports().await?;
        Ok(reports.iter().map(|r| r.category).collect())
    }

    pub async fn count_by_status(&self) -> Result<Tally<ReportStatus>, StoreError> {
        let reports = self.store.reports().await?;
        Ok(reports.iter().map(|r| r.status).collect())
    }

    pub async fn list(&self) -> Result<Vec<Report>, StoreError> {
        self.store.reports().await
    }

    /// One page of reports with the total count
    pub async fn page(&self, query: &PaginationQuery) -> Result<(Vec<Report>, i64), StoreError> {
        Ok(query.paginate(self.store.reports().await?))
    }

    pub async fn get(&self, id: ReportId) -> Result<Option<Report>, StoreError> {
        self.store.report(id).await
    }

    /// Reports filed by one user, oldest first
    pub async fn reports_by(&self, reporter: &str) -> Result<Vec<Report>, StoreError> {
        let reports = self.store.reports().await?;
        Ok(reports
            .into_iter()
            .filter(|r| r.reporter.as_deref() == Some(reporter))
            .collect())
    }
}

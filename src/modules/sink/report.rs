use std::sync::Arc;

use async_trait::async_trait;

use super::SinkError;
use crate::features::reports::models::{NewReport, Report};
use crate::modules::store::ReportStore;

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn submit_report(&self, report: NewReport) -> Result<Report, SinkError>;
}

/// Appends submitted reports to the report collection
pub struct StoreReportSink {
    store: Arc<dyn ReportStore>,
}

impl StoreReportSink {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportSink for StoreReportSink {
    async fn submit_report(&self, report: NewReport) -> Result<Report, SinkError> {
        let report = self.store.insert_report(report).await?;
        tracing::info!(
            report_id = report.id,
            title = %report.title,
            category = %report.category,
            "Report submitted"
        );
        Ok(report)
    }
}

//! Injectable record store for reports and users
//!
//! Page models receive a store at construction instead of reaching into
//! global sample arrays, so a real backend can replace the in-memory one.

mod memory;
pub mod seed;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::reports::models::{NewReport, Report, ReportId, ReportStatus};
use crate::features::users::models::{NationalId, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record already exists: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Assign an id to the snapshot and append it
    async fn insert_report(&self, report: NewReport) -> Result<Report, StoreError>;

    /// All reports in insertion order
    async fn reports(&self) -> Result<Vec<Report>, StoreError>;

    async fn report(&self, id: ReportId) -> Result<Option<Report>, StoreError>;

    /// Returns `false` when no report has this id
    async fn set_report_status(
        &self,
        id: ReportId,
        status: ReportStatus,
    ) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::Conflict`] when the national id is taken
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;

    /// All users in insertion order
    async fn users(&self) -> Result<Vec<User>, StoreError>;

    async fn user(&self, national_id: &str) -> Result<Option<User>, StoreError>;

    /// Returns `false` when no user has this national id
    async fn mark_verified(&self, national_id: &NationalId) -> Result<bool, StoreError>;
}

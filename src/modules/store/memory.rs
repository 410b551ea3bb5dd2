use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ReportStore, StoreError, UserStore};
use crate::features::reports::models::{NewReport, Report, ReportId, ReportStatus};
use crate::features::users::models::{NationalId, User};

/// Process-lifetime store. Each operation holds the lock for one mutation.
pub struct InMemoryStore {
    reports: RwLock<Vec<Report>>,
    users: RwLock<Vec<User>>,
    next_report_id: AtomicU64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// Start from existing records; new ids continue after the highest one present
    pub fn with_records(reports: Vec<Report>, users: Vec<User>) -> Self {
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            reports: RwLock::new(reports),
            users: RwLock::new(users),
            next_report_id: AtomicU64::new(next_id),
        }
    }
}

#[async_trait]
impl ReportStore for InMemoryStore {
    async fn insert_report(&self, report: NewReport) -> Result<Report, StoreError> {
        // Id is taken under the write guard so storage order matches id order
        let mut reports = self.reports.write().await;
        let id = self.next_report_id.fetch_add(1, Ordering::Relaxed);
        let report = report.into_report(id, Utc::now());
        reports.push(report.clone());
        drop(reports);
        tracing::info!(report_id = id, category = %report.category, "Report stored");
        Ok(report)
    }

    async fn reports(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self.reports.read().await.clone())
    }

    async fn report(&self, id: ReportId) -> Result<Option<Report>, StoreError> {
        Ok(self.reports.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn set_report_status(
        &self,
        id: ReportId,
        status: ReportStatus,
    ) -> Result<bool, StoreError> {
        let mut reports = self.reports.write().await;
        match reports.iter_mut().find(|r| r.id == id) {
            Some(report) => {
                report.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.national_id == user.national_id) {
            return Err(StoreError::Conflict(format!(
                "User with national ID {} already exists",
                user.national_id
            )));
        }
        users.push(user);
        Ok(())
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn user(&self, national_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.national_id == national_id)
            .cloned())
    }

    async fn mark_verified(&self, national_id: &NationalId) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| &u.national_id == national_id) {
            Some(user) => {
                user.verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{fake_user, sample_new_report};

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let store = InMemoryStore::new();
        let first = store.insert_report(sample_new_report()).await.unwrap();
        let second = store.insert_report(sample_new_report()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.reports().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_continue_after_existing_records() {
        let existing = sample_new_report().into_report(41, Utc::now());
        let store = InMemoryStore::with_records(vec![existing], Vec::new());
        let report = store.insert_report(sample_new_report()).await.unwrap();
        assert_eq!(report.id, 42);
    }

    #[tokio::test]
    async fn test_set_status_of_missing_report_is_noop() {
        let store = InMemoryStore::new();
        store.insert_report(sample_new_report()).await.unwrap();
        let before = store.reports().await.unwrap();

        assert!(!store.set_report_status(99, ReportStatus::Resolved).await.unwrap());
        assert_eq!(store.reports().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_duplicate_user_conflicts() {
        let store = InMemoryStore::new();
        store.insert_user(fake_user("28504199501234")).await.unwrap();
        let result = store.insert_user(fake_user("28504199501234")).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_report(sample_new_report()).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_stored_in_id_order() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..64)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_report(sample_new_report()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let ids: Vec<_> = store.reports().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }
}

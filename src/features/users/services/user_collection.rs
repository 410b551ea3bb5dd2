use std::sync::Arc;

use crate::features::users::models::{NationalId, User};
use crate::modules::store::{StoreError, UserStore};
use crate::shared::types::PaginationQuery;

/// Read access to the user directory plus the admin verify toggle
#[derive(Clone)]
pub struct UserCollectionModel {
    store: Arc<dyn UserStore>,
}

impl UserCollectionModel {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Mark a user verified. Idempotent; returns `false` for an unknown id.
    pub async fn verify(&self, national_id: &NationalId) -> Result<bool, StoreError> {
        let found = self.store.mark_verified(national_id).await?;
        if found {
            tracing::info!(national_id = %national_id, "User verified");
        } else {
            tracing::debug!(national_id = %national_id, "Verify for unknown user ignored");
        }
        Ok(found)
    }

    pub async fn get(&self, national_id: &str) -> Result<Option<User>, StoreError> {
        self.store.user(national_id).await
    }

    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.store.users().await
    }

    pub async fn page(&self, query: &PaginationQuery) -> Result<(Vec<User>, i64), StoreError> {
        Ok(query.paginate(self.store.users().await?))
    }

    /// Add a user; a taken national id is a [`StoreError::Conflict`]
    pub async fn register(&self, user: User) -> Result<(), StoreError> {
        let national_id = user.national_id.clone();
        self.store.insert_user(user).await?;
        tracing::info!(national_id = %national_id, "User added to directory");
        Ok(())
    }
}

use crate::core::error::{AppError, Result};
use crate::features::profile::dtos::{ProfileResponseDto, ReportCardDto};
use crate::features::reports::services::ReportCollectionModel;
use crate::features::users::UserCollectionModel;

/// Builds the profile page from the user directory and the user's own reports
#[derive(Clone)]
pub struct ProfileService {
    users: UserCollectionModel,
    reports: ReportCollectionModel,
}

impl ProfileService {
    pub fn new(users: UserCollectionModel, reports: ReportCollectionModel) -> Self {
        Self { users, reports }
    }

    pub async fn profile(&self, national_id: &str) -> Result<ProfileResponseDto> {
        let user = self
            .users
            .get(national_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", national_id)))?;

        let reports: Vec<ReportCardDto> = self
            .reports
            .reports_by(national_id)
            .await?
            .into_iter()
            .map(ReportCardDto::from)
            .collect();
        tracing::debug!(national_id, reports = reports.len(), "Profile built");

        Ok(ProfileResponseDto {
            name: user.full_name(),
            national_id: user.national_id,
            email: user.email,
            points: user.points,
            verified: user.verified,
            reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::modules::store::InMemoryStore;

    fn service(store: Arc<InMemoryStore>) -> ProfileService {
        ProfileService::new(
            UserCollectionModel::new(store.clone()),
            ReportCollectionModel::new(store),
        )
    }

    #[tokio::test]
    async fn test_sample_profile() {
        let profile = service(Arc::new(InMemoryStore::seeded()))
            .profile("28504199501234")
            .await
            .unwrap();

        assert_eq!(profile.name, "Ahmed Saleh");
        assert_eq!(profile.points, 1250);
        assert_eq!(profile.reports.len(), 10);

        let first = &profile.reports[0];
        assert_eq!(first.title, "Broken Streetlight");
        assert_eq!(first.category_label, "Street Lighting");
        assert_eq!(first.category_color, "#fcd34d");
        assert_eq!(first.location_text.as_deref(), Some("30.0450, 31.2380"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let result = service(Arc::new(InMemoryStore::new()))
            .profile("00000000000000")
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

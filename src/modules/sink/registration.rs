use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use super::SinkError;
use crate::features::signup::models::SignupDraft;
use crate::features::users::models::NationalId;
use crate::features::users::UserCollectionModel;

/// What happened to an accepted signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub national_id: NationalId,
    pub email: String,
    /// Whether the signup was added to the user directory
    pub stored: bool,
}

impl RegistrationReceipt {
    fn logged(draft: &SignupDraft) -> Self {
        Self {
            national_id: draft.national_id().to_string(),
            email: draft.email().to_string(),
            stored: false,
        }
    }
}

#[async_trait]
pub trait RegistrationSink: Send + Sync {
    async fn register(&self, draft: SignupDraft) -> Result<RegistrationReceipt, SinkError>;
}

/// Records the signup in the log and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingRegistrationSink;

#[async_trait]
impl RegistrationSink for LoggingRegistrationSink {
    async fn register(&self, draft: SignupDraft) -> Result<RegistrationReceipt, SinkError> {
        tracing::info!(
            variant = draft.variant(),
            national_id = draft.national_id(),
            email = draft.email(),
            "Signup submitted"
        );
        Ok(RegistrationReceipt::logged(&draft))
    }
}

/// Adds resident signups to the user directory as unverified users.
/// Quick signups lack an address and are only logged.
pub struct DirectoryRegistrationSink {
    users: UserCollectionModel,
}

impl DirectoryRegistrationSink {
    pub fn new(users: UserCollectionModel) -> Self {
        Self { users }
    }
}

#[async_trait]
impl RegistrationSink for DirectoryRegistrationSink {
    async fn register(&self, draft: SignupDraft) -> Result<RegistrationReceipt, SinkError> {
        match draft {
            SignupDraft::Resident(resident) => {
                let user = resident.into_user();
                let receipt = RegistrationReceipt {
                    national_id: user.national_id.clone(),
                    email: user.email.clone(),
                    stored: true,
                };
                self.users.register(user).await?;
                Ok(receipt)
            }
            quick @ SignupDraft::Quick(_) => LoggingRegistrationSink.register(quick).await,
        }
    }
}

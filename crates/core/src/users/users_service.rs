use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info};

use super::users_model::{AccountDeletion, NewUserProfile, UserIdentity, UserProfile};
use super::users_traits::{IdentityProviderTrait, UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for user profiles and account deletion
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    identity_provider: Arc<dyn IdentityProviderTrait>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        identity_provider: Arc<dyn IdentityProviderTrait>,
    ) -> Self {
        Self {
            user_repository,
            identity_provider,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn ensure_profile(&self, identity: &UserIdentity) -> Result<UserProfile> {
        match self.user_repository.get_profile(&identity.id) {
            Ok(profile) => return Ok(profile),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        debug!("Creating profile for user {}", identity.id);
        let new_profile = NewUserProfile::from_identity(identity, Utc::now());
        match self.user_repository.insert_profile(new_profile).await {
            Ok(profile) => Ok(profile),
            // Another session created it first.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                self.user_repository.get_profile(&identity.id)
            }
            Err(e) => Err(e),
        }
    }

    async fn delete_account(&self, identity: &UserIdentity) -> Result<AccountDeletion> {
        let deletion = self.user_repository.delete_user_data(&identity.id).await?;
        info!(
            "Deleted data of user {}: {} goals, {} savings plans, {} missions",
            identity.id,
            deletion.goals_deleted,
            deletion.savings_plans_deleted,
            deletion.missions_deleted
        );

        if let Err(e) = self.identity_provider.delete_identity(&identity.id).await {
            error!(
                "User data of {} was deleted but the identity could not be: {}",
                identity.id, e
            );
            return Err(e);
        }
        Ok(deletion)
    }
}

//! User repository, identity provider, and user service traits.

use async_trait::async_trait;

use super::users_model::{AccountDeletion, NewUserProfile, UserIdentity, UserProfile};
use crate::errors::Result;

/// Trait defining the contract for user profile persistence.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn insert_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile>;

    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;

    /// Deletes every goal, savings plan, mission and the profile of a user
    /// as one batch. Either everything is removed or nothing is.
    async fn delete_user_data(&self, user_id: &str) -> Result<AccountDeletion>;
}

/// The external identity provider.
///
/// Sign-in, sign-up and sign-out are owned by the provider; the application
/// only needs to remove an identity when the account is deleted.
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    async fn delete_identity(&self, user_id: &str) -> Result<()>;
}

/// Trait defining the contract for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Returns the stored profile, creating it on the first session.
    async fn ensure_profile(&self, identity: &UserIdentity) -> Result<UserProfile>;

    /// Removes all data of the user, then the identity itself.
    async fn delete_account(&self, identity: &UserIdentity) -> Result<AccountDeletion>;
}

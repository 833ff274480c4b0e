//! Users module - identity port, user profiles, and account teardown.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{AccountDeletion, NewUserProfile, UserIdentity, UserProfile};
pub use users_service::UserService;
pub use users_traits::{IdentityProviderTrait, UserRepositoryTrait, UserServiceTrait};

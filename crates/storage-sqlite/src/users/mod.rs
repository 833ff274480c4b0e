//! SQLite storage implementation for user profiles and account data.

mod model;
mod repository;

pub use model::{NewUserProfileDB, UserProfileDB};
pub use repository::UserRepository;

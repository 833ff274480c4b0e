use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use savemission_core::users::{
    AccountDeletion, NewUserProfile, UserProfile, UserRepositoryTrait,
};
use savemission_core::Result;

use super::model::{NewUserProfileDB, UserProfileDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{goals, savings_plans, users, weekly_missions};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn insert_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let profile_db: NewUserProfileDB = new_profile.into();
                let result_db = diesel::insert_into(users::table)
                    .values(&profile_db)
                    .returning(UserProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(result_db))
            })
            .await
    }

    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = users::table
            .find(user_id)
            .select(UserProfileDB::as_select())
            .first::<UserProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(UserProfile::from(profile_db))
    }

    /// Removes every row owned by `user_id` in one transaction, children first.
    async fn delete_user_data(&self, user_id: &str) -> Result<AccountDeletion> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<AccountDeletion> {
                let missions_deleted = diesel::delete(
                    weekly_missions::table.filter(weekly_missions::user_id.eq(owner.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                let savings_plans_deleted = diesel::delete(
                    savings_plans::table.filter(savings_plans::user_id.eq(owner.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                let goals_deleted = diesel::delete(goals::table.filter(goals::user_id.eq(owner.as_str())))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let profile_deleted = diesel::delete(users::table.find(owner.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?
                    > 0;

                debug!(
                    "Deleted data for user {}: {} goals, {} savings plans, {} missions",
                    owner, goals_deleted, savings_plans_deleted, missions_deleted
                );

                Ok(AccountDeletion {
                    goals_deleted,
                    savings_plans_deleted,
                    missions_deleted,
                    profile_deleted,
                })
            })
            .await
    }
}

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use savemission_core::plans::{NewSavingsPlan, SavingsPlan, SavingsPlanRepositoryTrait};
use savemission_core::Result;

use super::model::{NewSavingsPlanDB, SavingsPlanDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::savings_plans;

pub struct SavingsPlanRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SavingsPlanRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SavingsPlanRepositoryTrait for SavingsPlanRepository {
    async fn insert_savings_plan(&self, new_plan: NewSavingsPlan) -> Result<SavingsPlan> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsPlan> {
                let plan_db = NewSavingsPlanDB::from_domain(Uuid::new_v4().to_string(), new_plan);
                let result_db = diesel::insert_into(savings_plans::table)
                    .values(&plan_db)
                    .returning(SavingsPlanDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingsPlan::from(result_db))
            })
            .await
    }

    fn get_savings_plan_for_goal(&self, goal_id: &str) -> Result<SavingsPlan> {
        let mut conn = get_connection(&self.pool)?;
        let plan_db = savings_plans::table
            .filter(savings_plans::goal_id.eq(goal_id))
            .order(savings_plans::created_at.desc())
            .select(SavingsPlanDB::as_select())
            .first::<SavingsPlanDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(SavingsPlan::from(plan_db))
    }

    async fn delete_savings_plans_for_goal(&self, goal_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(savings_plans::table.filter(savings_plans::goal_id.eq(goal_id)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use savemission_core::missions::{MissionRepositoryTrait, NewWeeklyMission, WeeklyMission};
use savemission_core::Result;

use super::model::{NewWeeklyMissionDB, WeeklyMissionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::weekly_missions;

pub struct MissionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MissionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MissionRepositoryTrait for MissionRepository {
    async fn insert_mission(&self, new_mission: NewWeeklyMission) -> Result<WeeklyMission> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WeeklyMission> {
                let mission_db =
                    NewWeeklyMissionDB::from_domain(Uuid::new_v4().to_string(), new_mission);
                let result_db = diesel::insert_into(weekly_missions::table)
                    .values(&mission_db)
                    .returning(WeeklyMissionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(WeeklyMission::from(result_db))
            })
            .await
    }

    fn get_mission(&self, mission_id: &str) -> Result<WeeklyMission> {
        let mut conn = get_connection(&self.pool)?;
        let mission_db = weekly_missions::table
            .find(mission_id)
            .select(WeeklyMissionDB::as_select())
            .first::<WeeklyMissionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(WeeklyMission::from(mission_db))
    }

    fn list_missions_for_goal(&self, goal_id: &str) -> Result<Vec<WeeklyMission>> {
        let mut conn = get_connection(&self.pool)?;
        let missions_db = weekly_missions::table
            .filter(weekly_missions::goal_id.eq(goal_id))
            .order(weekly_missions::week_number.asc())
            .select(WeeklyMissionDB::as_select())
            .load::<WeeklyMissionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(missions_db.into_iter().map(WeeklyMission::from).collect())
    }

    async fn set_mission_completion(
        &self,
        mission_id: &str,
        is_completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<WeeklyMission> {
        let mission_id = mission_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WeeklyMission> {
                let result_db = diesel::update(weekly_missions::table.find(mission_id))
                    .set((
                        weekly_missions::is_completed.eq(is_completed),
                        weekly_missions::completed_at.eq(completed_at.map(|t| t.naive_utc())),
                        weekly_missions::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(WeeklyMissionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(WeeklyMission::from(result_db))
            })
            .await
    }

    async fn delete_missions_for_goal(&self, goal_id: &str) -> Result<usize> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    weekly_missions::table.filter(weekly_missions::goal_id.eq(goal_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}

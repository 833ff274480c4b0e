//! Database models for weekly missions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use savemission_core::missions::{NewWeeklyMission, WeeklyMission};

use crate::goals::GoalDB;

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::weekly_missions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeeklyMissionDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub week_number: i32,
    pub mission_text: String,
    pub target_amount: f64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::weekly_missions)]
pub struct NewWeeklyMissionDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub week_number: i32,
    pub mission_text: String,
    pub target_amount: f64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<WeeklyMissionDB> for WeeklyMission {
    fn from(db: WeeklyMissionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            user_id: db.user_id,
            week_number: u32::try_from(db.week_number).unwrap_or(0),
            mission_text: db.mission_text,
            target_amount: db.target_amount,
            is_completed: db.is_completed,
            completed_at: db.completed_at.map(|t| t.and_utc()),
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        }
    }
}

impl NewWeeklyMissionDB {
    pub fn from_domain(id: String, domain: NewWeeklyMission) -> Self {
        let created_at = domain.created_at.naive_utc();
        Self {
            id,
            goal_id: domain.goal_id,
            user_id: domain.user_id,
            week_number: i32::try_from(domain.week_number).unwrap_or(i32::MAX),
            mission_text: domain.mission_text,
            target_amount: domain.target_amount,
            // A mission created already completed is stamped with its creation time.
            completed_at: domain.is_completed.then_some(created_at),
            is_completed: domain.is_completed,
            created_at,
            updated_at: created_at,
        }
    }
}

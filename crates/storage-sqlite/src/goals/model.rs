//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for goals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_name: String,
    pub goal_amount: f64,
    pub goal_period: i32,
    pub current_amount: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub goal_name: String,
    pub goal_amount: f64,
    pub goal_period: i32,
    pub current_amount: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<GoalDB> for savemission_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            goal_name: db.goal_name,
            goal_amount: db.goal_amount,
            // The CHECK constraint keeps stored periods positive.
            goal_period: u32::try_from(db.goal_period).unwrap_or(0),
            current_amount: db.current_amount,
            is_active: db.is_active,
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        }
    }
}

impl NewGoalDB {
    pub fn from_domain(id: String, domain: savemission_core::goals::NewGoal) -> Self {
        let created_at = domain.created_at.naive_utc();
        Self {
            id,
            user_id: domain.user_id,
            goal_name: domain.goal_name,
            goal_amount: domain.goal_amount,
            goal_period: i32::try_from(domain.goal_period).unwrap_or(i32::MAX),
            current_amount: domain.current_amount,
            is_active: domain.is_active,
            created_at,
            updated_at: created_at,
        }
    }
}

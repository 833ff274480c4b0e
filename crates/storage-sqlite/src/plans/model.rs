//! Database models for savings plans.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use savemission_core::plans::{NewSavingsPlan, SavingsPlan};

use crate::goals::GoalDB;

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::savings_plans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavingsPlanDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub monthly_amount: f64,
    pub weekly_amount: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::savings_plans)]
pub struct NewSavingsPlanDB {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub monthly_amount: f64,
    pub weekly_amount: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<SavingsPlanDB> for SavingsPlan {
    fn from(db: SavingsPlanDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            user_id: db.user_id,
            monthly_amount: db.monthly_amount,
            weekly_amount: db.weekly_amount,
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        }
    }
}

impl NewSavingsPlanDB {
    pub fn from_domain(id: String, domain: NewSavingsPlan) -> Self {
        let created_at = domain.created_at.naive_utc();
        Self {
            id,
            goal_id: domain.goal_id,
            user_id: domain.user_id,
            monthly_amount: domain.monthly_amount,
            weekly_amount: domain.weekly_amount,
            created_at,
            updated_at: created_at,
        }
    }
}

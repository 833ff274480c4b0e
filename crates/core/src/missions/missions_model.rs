//! Weekly mission domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing one week's savings mission of a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMission {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    /// 1-based, unique within a goal.
    pub week_number: u32,
    pub mission_text: String,
    pub target_amount: f64,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyMission {
    /// Returns the mission with its completion flag set to `is_completed`.
    ///
    /// Completing stamps `completed_at` with `now`; reopening clears it.
    pub fn with_completion(mut self, is_completed: bool, now: DateTime<Utc>) -> Self {
        self.is_completed = is_completed;
        self.completed_at = if is_completed { Some(now) } else { None };
        self.updated_at = now;
        self
    }
}

/// A generated mission before it is tied to a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionSpec {
    pub week_number: u32,
    pub mission_text: String,
    pub target_amount: f64,
    pub is_completed: bool,
}

/// Input model for persisting a new mission
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWeeklyMission {
    pub goal_id: String,
    pub user_id: String,
    pub week_number: u32,
    pub mission_text: String,
    pub target_amount: f64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl NewWeeklyMission {
    pub fn from_spec(
        spec: MissionSpec,
        goal_id: &str,
        user_id: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            goal_id: goal_id.to_string(),
            user_id: user_id.to_string(),
            week_number: spec.week_number,
            mission_text: spec.mission_text,
            target_amount: spec.target_amount,
            is_completed: spec.is_completed,
            created_at,
        }
    }
}

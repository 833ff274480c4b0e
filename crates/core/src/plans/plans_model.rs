//! Plan domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_GOAL_PERIOD_MONTHS;
use crate::errors::{Error, Result, ValidationError};

/// Read-time view of a goal with its missions and derived figures.
///
/// Never stored; rebuilt from the goal and its missions on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Id of the goal the plan was derived from.
    pub id: String,
    pub goal_name: String,
    pub goal_amount: f64,
    pub goal_period: u32,
    pub monthly_savings: f64,
    pub weekly_savings: f64,
    /// Days left until the target date, 0 once it has passed.
    pub d_day: i64,
    pub current_savings: f64,
    /// Not clamped; exceeds 100 when the goal is overshot.
    pub progress_percentage: f64,
    pub weekly_missions: Vec<PlanMission>,
    pub created_at: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
}

/// Mission as shown in a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanMission {
    pub id: String,
    pub description: String,
    /// Always the plan's weekly savings, whatever was stored.
    pub target_amount: f64,
    pub week_number: u32,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Request for creating a goal and its plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    /// Absent names deserialize as blank so `validate` reports them.
    #[serde(default)]
    pub goal_name: String,
    pub goal_amount: f64,
    /// Period in months.
    pub goal_period: u32,
}

impl CreatePlanRequest {
    /// Validates the request before anything is written.
    pub fn validate(&self) -> Result<()> {
        if self.goal_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "goalName".to_string(),
            )));
        }
        if !self.goal_amount.is_finite() || self.goal_amount <= 0.0 {
            return Err(Error::invalid_input("Goal amount must be greater than 0"));
        }
        if self.goal_period == 0 {
            return Err(Error::invalid_input("Goal period must be greater than 0"));
        }
        if self.goal_period > MAX_GOAL_PERIOD_MONTHS {
            return Err(Error::invalid_input(format!(
                "Goal period cannot exceed {} months",
                MAX_GOAL_PERIOD_MONTHS
            )));
        }
        Ok(())
    }
}

/// Savings targets recorded when a goal is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub id: String,
    pub goal_id: String,
    pub user_id: String,
    pub monthly_amount: f64,
    pub weekly_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a savings plan record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsPlan {
    pub goal_id: String,
    pub user_id: String,
    pub monthly_amount: f64,
    pub weekly_amount: f64,
    pub created_at: DateTime<Utc>,
}

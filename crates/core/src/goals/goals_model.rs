//! Goals domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub goal_name: String,
    pub goal_amount: f64,
    /// Period in months.
    pub goal_period: u32,
    pub current_amount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Checks the invariants every stored goal must satisfy before plan
    /// figures can be derived from it.
    pub fn validate(&self) -> Result<()> {
        if !self.goal_amount.is_finite() || self.goal_amount <= 0.0 {
            return Err(Error::invalid_input(format!(
                "Goal '{}' has a non-positive target amount",
                self.id
            )));
        }
        if self.goal_period == 0 {
            return Err(Error::invalid_input(format!(
                "Goal '{}' has a zero-month period",
                self.id
            )));
        }
        if !self.current_amount.is_finite() || self.current_amount < 0.0 {
            return Err(Error::invalid_input(format!(
                "Goal '{}' has a negative current amount",
                self.id
            )));
        }
        Ok(())
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub user_id: String,
    pub goal_name: String,
    pub goal_amount: f64,
    pub goal_period: u32,
    pub current_amount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

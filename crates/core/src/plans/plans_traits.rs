//! Savings plan repository and plan service traits.

use async_trait::async_trait;

use super::plans_model::{CreatePlanRequest, NewSavingsPlan, Plan, SavingsPlan};
use crate::errors::Result;
use crate::goals::Goal;
use crate::missions::WeeklyMission;
use crate::users::UserIdentity;

/// Trait defining the contract for savings plan persistence.
#[async_trait]
pub trait SavingsPlanRepositoryTrait: Send + Sync {
    async fn insert_savings_plan(&self, new_plan: NewSavingsPlan) -> Result<SavingsPlan>;

    fn get_savings_plan_for_goal(&self, goal_id: &str) -> Result<SavingsPlan>;

    /// Returns the number of deleted records.
    async fn delete_savings_plans_for_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait defining the contract for plan operations on behalf of a user.
///
/// Every operation is scoped to `user`: records owned by someone else are
/// reported as not found.
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    /// Plans of the user's active goals, newest goal first.
    fn get_plans(&self, user: &UserIdentity) -> Result<Vec<Plan>>;

    fn get_plan(&self, user: &UserIdentity, goal_id: &str) -> Result<Plan>;

    /// Validates the request, then creates the goal, its savings plan
    /// record and its full mission schedule.
    async fn create_plan(&self, user: &UserIdentity, request: CreatePlanRequest) -> Result<Plan>;

    async fn update_mission_status(
        &self,
        user: &UserIdentity,
        mission_id: &str,
        is_completed: bool,
    ) -> Result<WeeklyMission>;

    async fn update_savings_amount(
        &self,
        user: &UserIdentity,
        goal_id: &str,
        amount: f64,
    ) -> Result<Goal>;

    /// Soft-deletes a goal by clearing its active flag.
    async fn deactivate_goal(&self, user: &UserIdentity, goal_id: &str) -> Result<Goal>;
}

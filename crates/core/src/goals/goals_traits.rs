use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Inserts a goal and returns it with its generated id.
    async fn insert_goal(&self, new_goal: NewGoal) -> Result<Goal>;

    fn get_goal(&self, goal_id: &str) -> Result<Goal>;

    /// Active goals of a user, newest first.
    fn list_active_goals(&self, user_id: &str) -> Result<Vec<Goal>>;

    async fn update_current_amount(&self, goal_id: &str, amount: f64) -> Result<Goal>;

    /// Flips the active flag. Inactive goals are hidden from listings.
    async fn set_goal_active(&self, goal_id: &str, is_active: bool) -> Result<Goal>;

    /// Hard-deletes one goal. Returns the number of deleted records.
    async fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}
